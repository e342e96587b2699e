// Extended file module
// Composes a FileHandle with naming, sniffing, hashing, comparison and deletion

use std::path::{Component, Path, PathBuf};

use url::Url;

use super::delete::Deleter;
use super::handle::{FileHandle, LocalFile};
use super::{mime, size};
use crate::error::{ExtFileError, Result};
use crate::hash::{CompareEngine, FileDigest, HashAlgorithm, HashComputer};

/// A file handle extended with hashing, comparison, sniffing and deletion
///
/// `ExtendedFile` wraps any [`FileHandle`]; the local filesystem binding
/// [`LocalFile`] is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedFile<H = LocalFile> {
    handle: H,
}

impl ExtendedFile<LocalFile> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::from_handle(LocalFile::new(path))
    }

    /// `child` resolved against the `parent` directory path
    ///
    /// An absolute `child` is still placed under `parent`.
    pub fn from_parent(parent: impl AsRef<Path>, child: &str) -> Self {
        Self::new(join_child(parent.as_ref(), child))
    }

    /// `child` resolved against the directory behind another `ExtendedFile`
    pub fn from_parent_file<P: FileHandle>(parent: &ExtendedFile<P>, child: &str) -> Self {
        Self::from_parent(parent.path(), child)
    }

    /// Build from a `file://` URI
    pub fn from_uri(uri: &str) -> Result<Self> {
        let invalid = |reason: &str| ExtFileError::InvalidUri {
            uri: uri.to_string(),
            reason: reason.to_string(),
        };

        let parsed = Url::parse(uri).map_err(|e| invalid(&e.to_string()))?;
        if parsed.scheme() != "file" {
            return Err(invalid("URI scheme is not \"file\""));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("URI has a query or fragment component"));
        }

        let path = parsed
            .to_file_path()
            .map_err(|_| invalid("URI does not name a local path"))?;
        Ok(Self::new(path))
    }
}

// An empty child refers to the parent itself. Root and prefix components of
// the child are dropped so it always resolves under the parent.
fn join_child(parent: &Path, child: &str) -> PathBuf {
    let relative: PathBuf = Path::new(child)
        .components()
        .filter(|c| matches!(c, Component::Normal(_) | Component::CurDir | Component::ParentDir))
        .collect();

    if relative.as_os_str().is_empty() {
        parent.to_path_buf()
    } else {
        parent.join(relative)
    }
}

impl<H: FileHandle> ExtendedFile<H> {
    pub fn from_handle(handle: H) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &H {
        &self.handle
    }

    pub fn into_handle(self) -> H {
        self.handle
    }

    pub fn path(&self) -> &Path {
        self.handle.path()
    }

    pub fn exists(&self) -> bool {
        self.handle.exists()
    }

    pub fn is_directory(&self) -> bool {
        self.handle.is_directory()
    }

    pub fn is_file(&self) -> bool {
        self.handle.is_file()
    }

    // ---- names and extensions ----

    /// Final path component, or an empty string for paths like `/`
    pub fn name(&self) -> String {
        self.path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Text after the last period of the name (`gz` for `archive.tar.gz`)
    ///
    /// Empty for directories and for names without a usable extension.
    pub fn extension(&self) -> String {
        self.extension_of(false)
    }

    /// Text after the first period of the name (`tar.gz` for `archive.tar.gz`)
    pub fn compound_extension(&self) -> String {
        self.extension_of(true)
    }

    /// Name with the simple or compound extension stripped
    ///
    /// Directories keep their full name.
    pub fn name_without_extension(&self, compound: bool) -> String {
        let name = self.name();
        let extension = self.extension_of(compound);
        if extension.is_empty() {
            return name;
        }

        let suffix_len = extension.len() + 1;
        name[..name.len() - suffix_len].to_string()
    }

    fn extension_of(&self, compound: bool) -> String {
        if self.is_directory() {
            return String::new();
        }
        split_extension(&self.name(), compound).to_string()
    }

    // ---- content type ----

    pub fn mime_type(&self) -> Result<String> {
        mime::detect(&self.handle)
    }

    pub fn is_image(&self) -> Result<bool> {
        Ok(self.mime_type()?.starts_with("image/"))
    }

    pub fn is_text(&self) -> Result<bool> {
        Ok(self.mime_type()?.starts_with("text/"))
    }

    pub fn is_audio(&self) -> Result<bool> {
        Ok(self.mime_type()?.starts_with("audio/"))
    }

    pub fn is_video(&self) -> Result<bool> {
        Ok(self.mime_type()?.starts_with("video/"))
    }

    pub fn matches_mime_type(&self, mime_type: &str) -> Result<bool> {
        Ok(self.mime_type()? == mime_type)
    }

    // ---- hashing ----

    /// SHA-256 of the content as lowercase hex
    pub fn hash(&self) -> Result<String> {
        self.hash_with(HashAlgorithm::Sha256)
    }

    pub fn hash_with(&self, algorithm: HashAlgorithm) -> Result<String> {
        Ok(self.digest(algorithm)?.to_hex())
    }

    pub fn hash_named(&self, algorithm: &str) -> Result<String> {
        self.hash_with(HashAlgorithm::select(algorithm)?)
    }

    pub fn digest(&self, algorithm: HashAlgorithm) -> Result<FileDigest> {
        HashComputer::new().digest(&self.handle, algorithm)
    }

    // ---- comparison ----

    /// Same content by SHA-256 digest
    pub fn matches<O: FileHandle>(&self, other: &ExtendedFile<O>) -> Result<bool> {
        self.matches_with(other, HashAlgorithm::Sha256)
    }

    pub fn matches_with<O: FileHandle>(
        &self,
        other: &ExtendedFile<O>,
        algorithm: HashAlgorithm,
    ) -> Result<bool> {
        CompareEngine::new().matches(&self.handle, &other.handle, algorithm)
    }

    pub fn matches_named<O: FileHandle>(&self, other: &ExtendedFile<O>, algorithm: &str) -> Result<bool> {
        self.matches_with(other, HashAlgorithm::select(algorithm)?)
    }

    /// Same content, checked byte by byte
    pub fn matches_deep<O: FileHandle>(&self, other: &ExtendedFile<O>) -> Result<bool> {
        CompareEngine::new().matches_deep(&self.handle, &other.handle)
    }

    // ---- size ----

    pub fn length(&self) -> Result<u64> {
        self.handle.length()
    }

    /// Human-readable size, e.g. `"1.23 MB"`
    pub fn size(&self) -> Result<String> {
        self.size_with(true)
    }

    pub fn size_with(&self, human_readable: bool) -> Result<String> {
        Ok(size::format_size(self.length()?, human_readable))
    }

    // ---- deletion ----

    /// Delete the file or directory; see [`Deleter::delete`]
    pub fn rm(&self, recursive: bool) -> bool {
        Deleter::new().delete(&self.handle, recursive)
    }
}

/// Split the extension off a file name
///
/// Returns an empty string when the name has no period or ends with one.
pub fn split_extension(name: &str, compound: bool) -> &str {
    let first = match name.find('.') {
        Some(i) if i + 1 < name.len() => i,
        _ => return "",
    };

    if compound {
        &name[first + 1..]
    } else {
        // rfind cannot miss once find succeeded
        let last = name.rfind('.').unwrap_or(first);
        &name[last + 1..]
    }
}
