// Tests for the hash engine and file digests

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use extfile::hash::{HashComputer, HashEngine, HashResult};
use extfile::{ExtFileError, ExtendedFile, HashAlgorithm, LocalFile};

use crate::common::write_file;

#[test]
fn test_known_digests_of_hello_world() {
    let data = b"hello world";
    let hex = |alg: HashAlgorithm| HashComputer::digest_bytes(data, alg).to_hex();

    assert_eq!(hex(HashAlgorithm::Crc32), "0d4a1185");
    assert_eq!(hex(HashAlgorithm::Md5), "5eb63bbbe01eeed093cb22bb8f5acdc3");
    assert_eq!(hex(HashAlgorithm::Sha1), "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    assert_eq!(
        hex(HashAlgorithm::Sha256),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}

#[test]
fn test_known_digests_of_abc() {
    let data = b"abc";
    let hex = |alg: HashAlgorithm| HashComputer::digest_bytes(data, alg).to_hex();

    assert_eq!(
        hex(HashAlgorithm::Sha512_256),
        "53048e2681941ef99b2e29b76b4c7dabe4c2d0c634fc6d46e0e2f13107e7af23"
    );
    assert_eq!(
        hex(HashAlgorithm::Sha3_256),
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"
    );
}

#[test]
fn test_digest_length_matches_algorithm() {
    for alg in HashAlgorithm::ALL {
        let digest = HashComputer::digest_bytes(b"payload", alg);
        assert_eq!(digest.as_bytes().len() * 8, alg.output_bits(), "{}", alg);
        assert_eq!(digest.to_hex().len(), alg.output_bits() / 4, "{}", alg);

        let mut hasher = HashEngine::hasher(alg.to_engine_id());
        assert_eq!(hasher.output_size() * 8, alg.output_bits());
        hasher.update(b"payload");
        assert_eq!(hasher.finalize(), digest.as_bytes());
    }
}

#[test]
fn test_hex_case() {
    let digest = HashComputer::digest_bytes(b"hello world", HashAlgorithm::Md5);
    assert_eq!(digest.to_hex_upper(), "5EB63BBBE01EEED093CB22BB8F5ACDC3");
    assert_eq!(digest.to_hex(), digest.to_hex_upper().to_lowercase());
}

#[test]
fn test_file_hash_defaults_to_sha256() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "hello.txt", b"hello world");

    let file = ExtendedFile::new(&path);
    assert_eq!(
        file.hash().unwrap(),
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
    assert_eq!(file.hash_named("SHA-256").unwrap(), file.hash().unwrap());
    assert_eq!(file.hash_with(HashAlgorithm::Sha512).unwrap().len(), 128);
}

#[test]
fn test_hash_named_rejects_unknown_algorithm() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "a.txt", b"x");

    match ExtendedFile::new(&path).hash_named("whirlpool") {
        Err(ExtFileError::UnsupportedAlgorithm { .. }) => {}
        other => panic!("Expected UnsupportedAlgorithm, got {:?}", other),
    }
}

#[test]
fn test_hash_missing_file_is_read_failure() {
    let dir = tempdir().unwrap();
    let result = ExtendedFile::new(dir.path().join("absent")).hash();

    match result {
        Err(ExtFileError::ReadFailure { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected ReadFailure, got {:?}", other),
    }
}

#[test]
fn test_digest_is_deterministic() {
    let dir = tempdir().unwrap();
    let path = write_file(dir.path(), "data.bin", &[7u8; 4096]);
    let handle = LocalFile::new(&path);

    let computer = HashComputer::new();
    let first = computer.digest(&handle, HashAlgorithm::Sha3_224).unwrap();
    let second = computer.digest(&handle, HashAlgorithm::Sha3_224).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_digests_under_different_algorithms_do_not_match() {
    let a = HashComputer::digest_bytes(b"same", HashAlgorithm::Sha256);
    let b = HashComputer::digest_bytes(b"same", HashAlgorithm::Sha3_256);
    assert!(!a.matches(&b));
    assert!(a.matches(&a.clone()));
}

#[test]
fn test_hash_result_json() {
    let digest = HashComputer::digest_bytes(b"hello world", HashAlgorithm::Sha1);
    let result = HashResult::new(&digest, "hello.txt".into(), false);

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["algorithm"], "SHA-1");
    assert_eq!(json["hash"], "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    assert_eq!(json["file_path"], "hello.txt");
    assert!(json["computed_at"].as_str().unwrap().contains('T'));
}
