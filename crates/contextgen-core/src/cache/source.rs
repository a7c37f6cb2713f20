//! Content sources backing the cache

use std::fmt::Debug;
use std::io;
use std::path::Path;

/// Read-only access to file content
pub trait ContentSource: Debug {
    /// Check whether `path` currently exists
    fn exists(&self, path: &Path) -> bool;

    /// Read the full text of `path`.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unreadable, or not valid UTF-8.
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// The local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl ContentSource for FileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}
