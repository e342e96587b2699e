// Hash engine module
// Wraps the digest implementations behind a single Hasher trait and computes
// file digests

use std::path::PathBuf;

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use super::algorithm::HashAlgorithm;
use crate::error::Result;
use crate::file::FileHandle;

/// Trait for hash algorithm implementations
pub trait Hasher: Send {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash and return the result
    fn finalize(self: Box<Self>) -> Vec<u8>;

    /// Get the output size in bytes
    fn output_size(&self) -> usize;
}

/// Output width within the SHA-2 family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha2Width {
    W224,
    W256,
    W384,
    W512,
    W512_224,
    W512_256,
}

/// Output width within the SHA-3 family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha3Width {
    W224,
    W256,
    W384,
    W512,
}

/// Algorithm identifiers as understood by the hash engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineAlgorithm {
    Crc32,
    Md5,
    Sha1,
    Sha2(Sha2Width),
    Sha3(Sha3Width),
}

impl EngineAlgorithm {
    /// Digest length in bytes
    pub fn output_size(self) -> usize {
        match self {
            EngineAlgorithm::Crc32 => 4,
            EngineAlgorithm::Md5 => 16,
            EngineAlgorithm::Sha1 => 20,
            EngineAlgorithm::Sha2(Sha2Width::W224 | Sha2Width::W512_224) => 28,
            EngineAlgorithm::Sha2(Sha2Width::W256 | Sha2Width::W512_256) => 32,
            EngineAlgorithm::Sha2(Sha2Width::W384) => 48,
            EngineAlgorithm::Sha2(Sha2Width::W512) => 64,
            EngineAlgorithm::Sha3(Sha3Width::W224) => 28,
            EngineAlgorithm::Sha3(Sha3Width::W256) => 32,
            EngineAlgorithm::Sha3(Sha3Width::W384) => 48,
            EngineAlgorithm::Sha3(Sha3Width::W512) => 64,
        }
    }
}

// Any RustCrypto digest (md-5, sha1, sha2, sha3 share the digest 0.10 trait)
pub struct DigestWrapper<D>(D);

impl<D: Digest + Send> Hasher for DigestWrapper<D> {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.0, data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        Digest::finalize(self.0).to_vec()
    }

    fn output_size(&self) -> usize {
        <D as Digest>::output_size()
    }
}

// CRC32 (IEEE) wrapper, emitted big-endian
pub struct Crc32Wrapper(crc32fast::Hasher);

impl Hasher for Crc32Wrapper {
    fn update(&mut self, data: &[u8]) {
        self.0.update(data);
    }

    fn finalize(self: Box<Self>) -> Vec<u8> {
        self.0.finalize().to_be_bytes().to_vec()
    }

    fn output_size(&self) -> usize {
        4 // 32 bits
    }
}

fn boxed<D: Digest + Send + 'static>() -> Box<dyn Hasher> {
    Box::new(DigestWrapper(D::new()))
}

/// Stateless entry point into the digest implementations
pub struct HashEngine;

impl HashEngine {
    /// Get a hasher instance for the specified engine algorithm
    pub fn hasher(algorithm: EngineAlgorithm) -> Box<dyn Hasher> {
        match algorithm {
            EngineAlgorithm::Crc32 => Box::new(Crc32Wrapper(crc32fast::Hasher::new())),
            EngineAlgorithm::Md5 => boxed::<Md5>(),
            EngineAlgorithm::Sha1 => boxed::<Sha1>(),
            EngineAlgorithm::Sha2(Sha2Width::W224) => boxed::<Sha224>(),
            EngineAlgorithm::Sha2(Sha2Width::W256) => boxed::<Sha256>(),
            EngineAlgorithm::Sha2(Sha2Width::W384) => boxed::<Sha384>(),
            EngineAlgorithm::Sha2(Sha2Width::W512) => boxed::<Sha512>(),
            EngineAlgorithm::Sha2(Sha2Width::W512_224) => boxed::<Sha512_224>(),
            EngineAlgorithm::Sha2(Sha2Width::W512_256) => boxed::<Sha512_256>(),
            EngineAlgorithm::Sha3(Sha3Width::W224) => boxed::<Sha3_224>(),
            EngineAlgorithm::Sha3(Sha3Width::W256) => boxed::<Sha3_256>(),
            EngineAlgorithm::Sha3(Sha3Width::W384) => boxed::<Sha3_384>(),
            EngineAlgorithm::Sha3(Sha3Width::W512) => boxed::<Sha3_512>(),
        }
    }

    /// Digest a complete buffer
    pub fn digest(algorithm: EngineAlgorithm, data: &[u8]) -> Vec<u8> {
        let mut hasher = Self::hasher(algorithm);
        hasher.update(data);
        hasher.finalize()
    }
}

/// Digest of one file under one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl FileDigest {
    pub fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex, two digits per byte, no separators
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    pub fn to_hex_upper(&self) -> String {
        hex::encode_upper(&self.bytes)
    }

    /// Digests are only comparable under the same algorithm
    pub fn matches(&self, other: &FileDigest) -> bool {
        self.algorithm == other.algorithm && self.bytes == other.bytes
    }
}

/// Result of a hash computation, as reported by the CLI
#[derive(Debug, Clone, serde::Serialize)]
pub struct HashResult {
    pub algorithm: String,
    pub hash: String, // hex-encoded
    pub file_path: PathBuf,
    pub computed_at: String,
}

impl HashResult {
    pub fn new(digest: &FileDigest, file_path: PathBuf, uppercase: bool) -> Self {
        Self {
            algorithm: digest.algorithm().canonical_name().to_string(),
            hash: if uppercase { digest.to_hex_upper() } else { digest.to_hex() },
            file_path,
            computed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Reads a file in full and digests it
#[derive(Debug, Default, Clone, Copy)]
pub struct HashComputer;

impl HashComputer {
    pub fn new() -> Self {
        HashComputer
    }

    /// Compute the digest of a file's full content
    pub fn digest<H: FileHandle>(&self, handle: &H, algorithm: HashAlgorithm) -> Result<FileDigest> {
        let data = handle.read_all_bytes()?;
        tracing::trace!(
            path = %handle.path().display(),
            algorithm = %algorithm,
            bytes = data.len(),
            "computing digest"
        );
        Ok(Self::digest_bytes(&data, algorithm))
    }

    /// Compute the digest of an in-memory buffer
    pub fn digest_bytes(data: &[u8], algorithm: HashAlgorithm) -> FileDigest {
        FileDigest::new(algorithm, HashEngine::digest(algorithm.to_engine_id(), data))
    }
}
