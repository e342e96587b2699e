// Shared fixtures for the integration tests

use std::cell::{Cell, RefCell};
use std::fs;
use std::io::{self, BufRead, Cursor};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use extfile::{ExtFileError, FileHandle};

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// In-memory handle that counts every content read
pub struct CountingHandle {
    path: PathBuf,
    content: Option<Vec<u8>>,
    fail_reads: bool,
    pub reads: Rc<Cell<usize>>,
}

impl CountingHandle {
    pub fn new(name: &str, content: &[u8]) -> Self {
        Self {
            path: PathBuf::from(name),
            content: Some(content.to_vec()),
            fail_reads: false,
            reads: Rc::new(Cell::new(0)),
        }
    }

    pub fn missing(name: &str) -> Self {
        Self {
            content: None,
            ..Self::new(name, b"")
        }
    }

    /// Exists and reports a length, but every read fails
    pub fn unreadable(name: &str, length: usize) -> Self {
        Self {
            fail_reads: true,
            ..Self::new(name, &vec![0u8; length])
        }
    }

    fn read_error(&self) -> ExtFileError {
        ExtFileError::from_io_error(
            io::Error::new(io::ErrorKind::Other, "device unavailable"),
            "reading",
            &self.path,
        )
    }
}

impl FileHandle for CountingHandle {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        self.content.is_some()
    }

    fn length(&self) -> extfile::Result<u64> {
        Ok(self.content.as_ref().map_or(0, |c| c.len() as u64))
    }

    fn is_directory(&self) -> bool {
        false
    }

    fn is_file(&self) -> bool {
        self.exists()
    }

    fn list_children(&self) -> Option<Vec<Self>> {
        None
    }

    fn read_all_bytes(&self) -> extfile::Result<Vec<u8>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads {
            return Err(self.read_error());
        }
        match &self.content {
            Some(content) => Ok(content.clone()),
            None => Err(ExtFileError::from_io_error(
                io::Error::from(io::ErrorKind::NotFound),
                "opening",
                &self.path,
            )),
        }
    }

    fn open_buffered_reader(&self, _capacity: usize) -> extfile::Result<Box<dyn BufRead + '_>> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads {
            return Err(self.read_error());
        }
        let content = self.content.as_deref().unwrap_or(&[]);
        Ok(Box::new(Cursor::new(content)))
    }

    fn delete_node(&self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "in-memory handle"))
    }
}

/// In-memory directory tree that records every delete attempt
///
/// Children are listed in the order they were given, and nodes built with
/// `failing` refuse to be deleted.
#[derive(Clone)]
pub struct TreeNode {
    path: PathBuf,
    children: Option<Vec<TreeNode>>,
    fails: bool,
    attempts: Rc<RefCell<Vec<PathBuf>>>,
}

impl TreeNode {
    pub fn file(name: &str) -> Self {
        Self {
            path: PathBuf::from(name),
            children: None,
            fails: false,
            attempts: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            fails: true,
            ..Self::file(name)
        }
    }

    pub fn dir(name: &str, mut children: Vec<TreeNode>) -> Self {
        let node = Self::file(name);
        for child in &mut children {
            child.adopt(&node.path, &node.attempts);
        }
        Self {
            children: Some(children),
            ..node
        }
    }

    fn adopt(&mut self, prefix: &Path, attempts: &Rc<RefCell<Vec<PathBuf>>>) {
        self.path = prefix.join(&self.path);
        self.attempts = Rc::clone(attempts);
        if let Some(children) = &mut self.children {
            for child in children {
                child.adopt(prefix, attempts);
            }
        }
    }

    /// Paths passed to `delete_node`, in call order
    pub fn attempts(&self) -> Vec<PathBuf> {
        self.attempts.borrow().clone()
    }
}

impl FileHandle for TreeNode {
    fn path(&self) -> &Path {
        &self.path
    }

    fn exists(&self) -> bool {
        true
    }

    fn length(&self) -> extfile::Result<u64> {
        Ok(0)
    }

    fn is_directory(&self) -> bool {
        self.children.is_some()
    }

    fn is_file(&self) -> bool {
        self.children.is_none()
    }

    fn list_children(&self) -> Option<Vec<Self>> {
        self.children.clone()
    }

    fn read_all_bytes(&self) -> extfile::Result<Vec<u8>> {
        Ok(Vec::new())
    }

    fn open_buffered_reader(&self, _capacity: usize) -> extfile::Result<Box<dyn BufRead + '_>> {
        Ok(Box::new(Cursor::new(Vec::<u8>::new())))
    }

    fn delete_node(&self) -> io::Result<()> {
        self.attempts.borrow_mut().push(self.path.clone());
        if self.fails {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        } else {
            Ok(())
        }
    }
}
