// Compare engine module
// Decides whether two files hold the same content, either by digest or by a
// byte-for-byte walk

use std::io::BufRead;

use super::algorithm::HashAlgorithm;
use super::hash::HashComputer;
use crate::error::{ExtFileError, Result};
use crate::file::FileHandle;

/// Default read buffer for deep comparison (64KB)
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Engine for comparing the content of two files
#[derive(Debug, Clone)]
pub struct CompareEngine {
    buffer_size: usize,
}

impl CompareEngine {
    /// Create a new CompareEngine with the default buffer size
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Create a new CompareEngine with custom buffer size
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        Self {
            buffer_size: buffer_size.max(1),
        }
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer_size
    }

    /// Compare two files by digest
    ///
    /// Both files are read in full and hashed with `algorithm`. A match is
    /// probabilistic: collisions are infeasible for the cryptographic
    /// algorithms but easy to construct for CRC32.
    ///
    /// # Errors
    /// Returns `ReadFailure` naming the side that could not be read
    pub fn matches<A: FileHandle, B: FileHandle>(
        &self,
        left: &A,
        right: &B,
        algorithm: HashAlgorithm,
    ) -> Result<bool> {
        let computer = HashComputer::new();

        let left_digest = computer
            .digest(left, algorithm)
            .map_err(|e| with_side(e, "left"))?;
        let right_digest = computer
            .digest(right, algorithm)
            .map_err(|e| with_side(e, "right"))?;

        let equal = left_digest.matches(&right_digest);
        tracing::debug!(
            left = %left.path().display(),
            right = %right.path().display(),
            algorithm = %algorithm,
            equal,
            "digest comparison"
        );
        Ok(equal)
    }

    /// Compare two files byte by byte
    ///
    /// Returns `false` without reading any content when either file is
    /// missing or the lengths differ. Otherwise both files are streamed in
    /// lock-step through bounded buffers and the walk stops at the first
    /// differing byte.
    ///
    /// # Errors
    /// Returns `ReadFailure` on I/O errors other than absence, and
    /// `SecurityDenied` if the lengths cannot be queried
    pub fn matches_deep<A: FileHandle, B: FileHandle>(&self, left: &A, right: &B) -> Result<bool> {
        if !left.exists() || !right.exists() {
            return Ok(false);
        }

        if left.length()? != right.length()? {
            return Ok(false);
        }

        // Both readers are dropped on every return path below
        let mut left_reader = left.open_buffered_reader(self.buffer_size)?;
        let mut right_reader = right.open_buffered_reader(self.buffer_size)?;

        loop {
            let left_chunk = left_reader
                .fill_buf()
                .map_err(|e| ExtFileError::from_io_error(e, "reading left file", left.path()))?;
            let right_chunk = right_reader
                .fill_buf()
                .map_err(|e| ExtFileError::from_io_error(e, "reading right file", right.path()))?;

            if left_chunk.is_empty() || right_chunk.is_empty() {
                // Equal only if both reached end of input together
                return Ok(left_chunk.is_empty() && right_chunk.is_empty());
            }

            let n = left_chunk.len().min(right_chunk.len());
            if left_chunk[..n] != right_chunk[..n] {
                return Ok(false);
            }

            left_reader.consume(n);
            right_reader.consume(n);
        }
    }
}

impl Default for CompareEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn with_side(err: ExtFileError, side: &str) -> ExtFileError {
    match err {
        ExtFileError::ReadFailure { path, operation, source } => ExtFileError::ReadFailure {
            path,
            operation: format!("{} {} file", operation, side),
            source,
        },
        other => other,
    }
}
