use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::{ExtFileError, Result};

/// Primitive operations a storage binding must provide
///
/// Every higher-level operation in this crate (hashing, comparison, sniffing,
/// deletion) is written against this trait only.
pub trait FileHandle: Sized {
    fn path(&self) -> &Path;

    fn exists(&self) -> bool;

    /// Size in bytes
    ///
    /// Fails with `SecurityDenied` when access to the metadata is blocked.
    fn length(&self) -> Result<u64>;

    fn is_directory(&self) -> bool;

    fn is_file(&self) -> bool;

    /// Whether the node itself is a symbolic link (the link is not followed)
    fn is_symlink(&self) -> bool {
        false
    }

    /// Immediate children, or `None` if this is not a readable directory
    fn list_children(&self) -> Option<Vec<Self>>;

    fn read_all_bytes(&self) -> Result<Vec<u8>>;

    /// Open a buffered reader; the reader releases the file when dropped
    fn open_buffered_reader(&self, capacity: usize) -> Result<Box<dyn BufRead + '_>>;

    /// Remove this single node (a file, a link or an empty directory)
    fn delete_node(&self) -> io::Result<()>;
}

/// FileHandle backed by the local filesystem
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

impl FileHandle for LocalFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        // A dangling link still exists as a node that can be removed
        self.path.exists() || self.is_symlink()
    }

    fn length(&self) -> Result<u64> {
        match fs::metadata(&self.path) {
            Ok(metadata) => Ok(metadata.len()),
            // Absent files report zero, like a native file handle
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
            Err(e) => Err(ExtFileError::from_metadata_error(e, "reading length of", &self.path)),
        }
    }

    fn is_directory(&self) -> bool {
        self.path.is_dir()
    }

    fn is_file(&self) -> bool {
        self.path.is_file()
    }

    fn is_symlink(&self) -> bool {
        self.path.is_symlink()
    }

    fn list_children(&self) -> Option<Vec<Self>> {
        let read_dir = fs::read_dir(&self.path).ok()?;

        let children = read_dir
            .filter_map(|entry| entry.ok())
            .map(|entry| LocalFile::new(entry.path()))
            .collect();

        Some(children)
    }

    fn read_all_bytes(&self) -> Result<Vec<u8>> {
        let mut file = File::open(&self.path)
            .map_err(|e| ExtFileError::from_io_error(e, "opening", &self.path))?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| ExtFileError::from_io_error(e, "reading", &self.path))?;

        Ok(data)
    }

    fn open_buffered_reader(&self, capacity: usize) -> Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path)
            .map_err(|e| ExtFileError::from_io_error(e, "opening", &self.path))?;

        Ok(Box::new(BufReader::with_capacity(capacity, file)))
    }

    fn delete_node(&self) -> io::Result<()> {
        let metadata = fs::symlink_metadata(&self.path)?;
        if metadata.is_dir() {
            fs::remove_dir(&self.path)
        } else {
            fs::remove_file(&self.path)
        }
    }
}
