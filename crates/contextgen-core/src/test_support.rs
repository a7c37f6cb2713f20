//! Shared fixtures for unit tests

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::cache::ContentSource;

/// In-memory content source that counts reads per path
#[derive(Debug, Default)]
pub(crate) struct MemorySource {
    files: RefCell<HashMap<PathBuf, String>>,
    reads: RefCell<HashMap<PathBuf, usize>>,
}

impl MemorySource {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_file(self, path: impl Into<PathBuf>, text: &str) -> Self {
        self.insert(path, text);
        self
    }

    pub(crate) fn insert(&self, path: impl Into<PathBuf>, text: &str) {
        self.files.borrow_mut().insert(path.into(), text.to_string());
    }

    pub(crate) fn remove(&self, path: &Path) {
        self.files.borrow_mut().remove(path);
    }

    pub(crate) fn reads(&self, path: &Path) -> usize {
        self.reads.borrow().get(path).copied().unwrap_or(0)
    }
}

impl ContentSource for MemorySource {
    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        *self.reads.borrow_mut().entry(path.to_path_buf()).or_insert(0) += 1;
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
    }
}
