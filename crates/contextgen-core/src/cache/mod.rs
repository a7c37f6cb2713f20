//! Cache module: Read-once file content store
//!
//! Every path is read from storage at most once per cache. Later lookups,
//! including across repeated context generations, return the stored text.

mod source;

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::debug;

pub use source::{ContentSource, FileSystem};

/// Errors raised while reading file content
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Failed to read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Text of a file along with its SHA-256 digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedContent {
    pub text: String,
    /// Lowercase hex SHA-256 of `text`
    pub hash: String,
}

impl CachedContent {
    #[must_use]
    pub fn new(text: String) -> Self {
        let hash = format!("{:x}", Sha256::digest(text.as_bytes()));
        Self { text, hash }
    }
}

/// Memoizing reader keyed by path
#[derive(Debug, Default)]
pub struct ContentCache<S = FileSystem> {
    source: S,
    entries: HashMap<PathBuf, CachedContent>,
}

impl ContentCache<FileSystem> {
    /// Create a cache backed by the local filesystem
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(FileSystem)
    }
}

impl<S: ContentSource> ContentCache<S> {
    /// Create a cache backed by a custom content source
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            entries: HashMap::new(),
        }
    }

    /// Return the content of `path`, reading it from the source on first use.
    ///
    /// # Errors
    /// Returns [`CacheError::FileAccess`] if the first read fails. Nothing is
    /// cached in that case.
    pub fn read(&mut self, path: &Path) -> Result<&CachedContent, CacheError> {
        match self.entries.entry(path.to_path_buf()) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let text = self
                    .source
                    .read(path)
                    .map_err(|source| CacheError::FileAccess {
                        path: path.to_path_buf(),
                        source,
                    })?;
                debug!("Read {} ({} bytes)", path.display(), text.len());
                Ok(&*entry.insert(CachedContent::new(text)))
            }
        }
    }

    /// Check whether `path` has already been read
    #[must_use]
    pub fn is_cached(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    /// Check whether `path` exists in the backing source
    #[must_use]
    pub fn exists(&self, path: &Path) -> bool {
        self.source.exists(path)
    }

    /// Number of cached files
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The backing content source
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests;
