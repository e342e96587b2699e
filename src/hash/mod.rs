// Hashing and comparison
// Algorithm selection, the digest engine, and the identity comparator

pub mod algorithm;
pub mod compare;
pub mod hash;

// Re-export commonly used types for convenience
pub use algorithm::{AlgorithmInfo, HashAlgorithm};
pub use compare::{CompareEngine, DEFAULT_BUFFER_SIZE};
pub use hash::{
    EngineAlgorithm, FileDigest, HashComputer, HashEngine, HashResult, Hasher, Sha2Width,
    Sha3Width,
};
