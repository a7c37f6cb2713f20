//! Context map types

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Facts extracted for one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFacts {
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    pub is_conversation_file: bool,
    /// Lowercase hex SHA-256 of the file content
    pub content_hash: String,
}

/// Mapping from file path to its extracted facts, ordered by path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextMap {
    files: BTreeMap<PathBuf, FileFacts>,
}

impl ContextMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: PathBuf, facts: FileFacts) {
        self.files.insert(path, facts);
    }

    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&FileFacts> {
        self.files.get(path)
    }

    #[must_use]
    pub fn contains(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &FileFacts)> {
        self.files.iter().map(|(path, facts)| (path.as_path(), facts))
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Entries flagged as conversation files
    pub fn conversation_files(&self) -> impl Iterator<Item = (&Path, &FileFacts)> {
        self.iter().filter(|(_, facts)| facts.is_conversation_file)
    }

    /// Render the map as pretty-printed JSON keyed by path
    ///
    /// # Errors
    /// Returns an error if a path is not valid UTF-8.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
