// Deletion of files and directory trees
//
// Failures are reported as `false`, never as errors. The reason for a failed
// node (missing, permission denied, directory not empty) is only visible in
// the debug log.

use super::handle::FileHandle;

/// Removes files and directory trees
#[derive(Debug, Default, Clone, Copy)]
pub struct Deleter;

impl Deleter {
    pub fn new() -> Self {
        Deleter
    }

    /// Delete `target`, descending into directories when `recursive` is set
    ///
    /// Without `recursive` a directory is only removed if it is empty. With
    /// it, children are removed first (in no particular order) and the walk
    /// stops at the first child that cannot be removed. Children deleted
    /// before that point stay deleted. A missing target is a failure.
    pub fn delete<H: FileHandle>(&self, target: &H, recursive: bool) -> bool {
        if !target.exists() {
            tracing::debug!(path = %target.path().display(), "delete target does not exist");
            return false;
        }

        if !recursive || !is_walkable_dir(target) {
            return remove_node(target);
        }

        remove_tree(target)
    }
}

// Symlinks are removed as leaves, never followed
fn is_walkable_dir<H: FileHandle>(node: &H) -> bool {
    node.is_directory() && !node.is_symlink()
}

fn remove_tree<H: FileHandle>(dir: &H) -> bool {
    if let Some(children) = dir.list_children() {
        for child in &children {
            let removed = if is_walkable_dir(child) {
                remove_tree(child)
            } else {
                remove_node(child)
            };

            if !removed {
                tracing::debug!(
                    dir = %dir.path().display(),
                    child = %child.path().display(),
                    "aborting recursive delete"
                );
                return false;
            }
        }
    }

    remove_node(dir)
}

fn remove_node<H: FileHandle>(node: &H) -> bool {
    match node.delete_node() {
        Ok(()) => {
            tracing::trace!(path = %node.path().display(), "deleted");
            true
        }
        Err(e) => {
            tracing::debug!(path = %node.path().display(), error = %e, "delete failed");
            false
        }
    }
}
