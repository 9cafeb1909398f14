//! Thread-shareable directory handle.
//!
//! [`Directory`] itself is single-owner. `SharedDirectory` puts it behind a
//! read-write lock: searches share the read side, adds take the write side,
//! so a reader never sees the trie mid-insert.

use std::sync::Arc;

use parking_lot::RwLock;

use super::{Directory, DirectoryResult};

/// A cloneable, lock-guarded handle to one [`Directory`].
#[derive(Debug, Clone, Default)]
pub struct SharedDirectory {
    inner: Arc<RwLock<Directory>>,
}

impl SharedDirectory {
    /// Wraps a directory for shared use.
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: Arc::new(RwLock::new(directory)),
        }
    }

    /// Adds a record under the write lock.
    pub fn add(&self, record: &str) -> DirectoryResult<()> {
        self.inner.write().add(record)
    }

    /// Searches under the read lock.
    pub fn search(&self, query: &str) -> Vec<String> {
        self.inner.read().search(query)
    }

    /// Number of records added.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Whether no record has been added.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl From<Directory> for SharedDirectory {
    fn from(directory: Directory) -> Self {
        Self::new(directory)
    }
}
