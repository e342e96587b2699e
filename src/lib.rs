// Library module for extfile
// Re-exports modules for use in integration tests and the CLI

pub mod config;
pub mod error;
pub mod file;
pub mod hash;
pub mod logging;

pub use error::{ExtFileError, Result};
pub use file::{format_size, Deleter, ExtendedFile, FileHandle, LocalFile};
pub use hash::{CompareEngine, FileDigest, HashAlgorithm};
