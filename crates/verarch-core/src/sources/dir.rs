//! Directory-tree entry source.

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;

use crate::Result;

use super::traits::EntrySource;
use super::traits::SourceEntry;

/// Entry source backed by a directory tree.
///
/// Traverses the tree with an explicit work-list instead of recursion, so
/// arbitrarily deep trees cannot overflow the call stack. Directories popped
/// off the list have their children pushed back on; non-directory children
/// are yielded with their path relative to the traversal root.
///
/// The resulting order is depth-first in reverse-discovery order. It is
/// stable for an unchanged tree but *not* lexically sorted; callers must not
/// assume any particular ordering.
pub struct DirSource {
    root: PathBuf,
    pending: Vec<PathBuf>,
}

impl DirSource {
    /// Creates a source rooted at the given directory.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        let pending = vec![root.clone()];
        Self { root, pending }
    }

    /// Returns the traversal root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl EntrySource for DirSource {
    fn next_entry(&mut self) -> Result<Option<SourceEntry<'_>>> {
        while let Some(path) = self.pending.pop() {
            let metadata = std::fs::symlink_metadata(&path)?;

            if metadata.is_dir() {
                for child in std::fs::read_dir(&path)? {
                    self.pending.push(child?.path());
                }
                continue;
            }
            if !metadata.is_file() {
                // Symlinks and special files have no byte content to verify.
                continue;
            }

            let name = path
                .strip_prefix(&self.root)
                .unwrap_or(&path)
                .to_string_lossy()
                .into_owned();
            let file = File::open(&path)?;
            return Ok(Some(SourceEntry::new(name, Box::new(file))));
        }

        Ok(None)
    }
}
