// Algorithm selection module
// Maps user-facing algorithm names onto HashAlgorithm, and HashAlgorithm onto
// the identifiers the hash engine understands

use std::fmt;
use std::str::FromStr;

use crate::error::ExtFileError;
use super::hash::{EngineAlgorithm, Sha2Width, Sha3Width};

/// Hash algorithms supported for file identity checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Crc32,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

/// Information about a hash algorithm
#[derive(Debug, Clone, serde::Serialize)]
pub struct AlgorithmInfo {
    pub name: String,
    pub aliases: Vec<String>,
    pub output_bits: usize,
    pub cryptographic: bool,
}

impl HashAlgorithm {
    pub const ALL: [HashAlgorithm; 13] = [
        HashAlgorithm::Crc32,
        HashAlgorithm::Md5,
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha512_224,
        HashAlgorithm::Sha512_256,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
    ];

    /// Resolve a user-supplied algorithm name
    ///
    /// Matching is case-insensitive and accepts both hyphenated and compact
    /// spellings ("SHA-256", "sha256"). Unknown names are rejected; there is
    /// no fallback algorithm.
    pub fn select(name: &str) -> Result<Self, ExtFileError> {
        let normalized = name.to_ascii_lowercase();

        HashAlgorithm::ALL
            .into_iter()
            .find(|alg| alg.aliases().contains(&normalized.as_str()))
            .ok_or_else(|| ExtFileError::UnsupportedAlgorithm {
                algorithm: name.to_string(),
            })
    }

    /// Lowercase spellings accepted by `select`
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            HashAlgorithm::Crc32 => &["crc32", "crc-32"],
            HashAlgorithm::Md5 => &["md5", "md-5"],
            HashAlgorithm::Sha1 => &["sha1", "sha-1"],
            HashAlgorithm::Sha224 => &["sha224", "sha-224"],
            HashAlgorithm::Sha256 => &["sha256", "sha-256"],
            HashAlgorithm::Sha384 => &["sha384", "sha-384"],
            HashAlgorithm::Sha512 => &["sha512", "sha-512"],
            HashAlgorithm::Sha512_224 => &["sha512224", "sha-512224", "sha-512/224", "sha512/224"],
            HashAlgorithm::Sha512_256 => &["sha512256", "sha-512256", "sha-512/256", "sha512/256"],
            HashAlgorithm::Sha3_224 => &["sha3224", "sha3-224"],
            HashAlgorithm::Sha3_256 => &["sha3256", "sha3-256"],
            HashAlgorithm::Sha3_384 => &["sha3384", "sha3-384"],
            HashAlgorithm::Sha3_512 => &["sha3512", "sha3-512"],
        }
    }

    /// Engine-facing identifier for this algorithm
    pub fn to_engine_id(self) -> EngineAlgorithm {
        match self {
            HashAlgorithm::Crc32 => EngineAlgorithm::Crc32,
            HashAlgorithm::Md5 => EngineAlgorithm::Md5,
            HashAlgorithm::Sha1 => EngineAlgorithm::Sha1,
            HashAlgorithm::Sha224 => EngineAlgorithm::Sha2(Sha2Width::W224),
            HashAlgorithm::Sha256 => EngineAlgorithm::Sha2(Sha2Width::W256),
            HashAlgorithm::Sha384 => EngineAlgorithm::Sha2(Sha2Width::W384),
            HashAlgorithm::Sha512 => EngineAlgorithm::Sha2(Sha2Width::W512),
            HashAlgorithm::Sha512_224 => EngineAlgorithm::Sha2(Sha2Width::W512_224),
            HashAlgorithm::Sha512_256 => EngineAlgorithm::Sha2(Sha2Width::W512_256),
            HashAlgorithm::Sha3_224 => EngineAlgorithm::Sha3(Sha3Width::W224),
            HashAlgorithm::Sha3_256 => EngineAlgorithm::Sha3(Sha3Width::W256),
            HashAlgorithm::Sha3_384 => EngineAlgorithm::Sha3(Sha3Width::W384),
            HashAlgorithm::Sha3_512 => EngineAlgorithm::Sha3(Sha3Width::W512),
        }
    }

    pub fn canonical_name(self) -> &'static str {
        match self {
            HashAlgorithm::Crc32 => "CRC32",
            HashAlgorithm::Md5 => "MD5",
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
            HashAlgorithm::Sha512_224 => "SHA-512/224",
            HashAlgorithm::Sha512_256 => "SHA-512/256",
            HashAlgorithm::Sha3_224 => "SHA3-224",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_384 => "SHA3-384",
            HashAlgorithm::Sha3_512 => "SHA3-512",
        }
    }

    pub fn output_bits(self) -> usize {
        self.to_engine_id().output_size() * 8
    }

    /// CRC32 is a checksum, collisions are trivial to produce
    pub fn is_cryptographic(self) -> bool {
        self != HashAlgorithm::Crc32
    }

    /// List all available hash algorithms
    pub fn list_algorithms() -> Vec<AlgorithmInfo> {
        HashAlgorithm::ALL
            .into_iter()
            .map(|alg| AlgorithmInfo {
                name: alg.canonical_name().to_string(),
                aliases: alg.aliases().iter().map(|a| a.to_string()).collect(),
                output_bits: alg.output_bits(),
                cryptographic: alg.is_cryptographic(),
            })
            .collect()
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        HashAlgorithm::Sha256
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = ExtFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::select(s)
    }
}
