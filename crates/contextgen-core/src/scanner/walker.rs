//! File walker: Discovers files in a directory tree

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;
use walkdir::WalkDir;

use super::{FileKind, ScanError};

/// A file discovered during scanning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub kind: FileKind,
}

impl DiscoveredFile {
    /// Pair `path` with its kind; `None` for unrecognized extensions
    #[must_use]
    pub fn from_path(path: PathBuf) -> Option<Self> {
        FileKind::from_path(&path).map(|kind| Self { path, kind })
    }
}

/// Scanner for discovering project files under a root directory
#[derive(Debug, Clone)]
pub struct Scanner {
    root: PathBuf,
    respect_gitignore: bool,
    kinds: Vec<FileKind>,
}

impl Scanner {
    /// Create a new scanner for the given root directory.
    ///
    /// The default walk visits every file, hidden or ignored.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            respect_gitignore: false,
            kinds: FileKind::DEFAULT.to_vec(),
        }
    }

    /// Only keep files of the given kinds
    #[must_use]
    pub fn with_kinds(mut self, kinds: Vec<FileKind>) -> Self {
        self.kinds = kinds;
        self
    }

    /// Skip files excluded by `.gitignore`, the global gitignore and
    /// `.git/info/exclude`
    #[must_use]
    pub fn with_gitignore(mut self, respect_gitignore: bool) -> Self {
        self.respect_gitignore = respect_gitignore;
        self
    }

    /// Walk the root and return every file of a selected kind, sorted by
    /// path.
    ///
    /// Symlinks to files are listed under the link's path. Symlinked
    /// directories are not descended into.
    ///
    /// # Errors
    /// Returns an error if the root is missing, is not a directory, or an
    /// entry cannot be traversed.
    pub fn discover(&self) -> Result<Vec<DiscoveredFile>, ScanError> {
        self.check_root()?;

        let mut files = if self.respect_gitignore {
            self.walk_respecting_gitignore()?
        } else {
            self.walk_all()?
        };
        files.sort_by(|a, b| a.path.cmp(&b.path));

        debug!(
            "Discovered {} files under {}",
            files.len(),
            self.root.display()
        );
        Ok(files)
    }

    /// Get the root directory being scanned
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn check_root(&self) -> Result<(), ScanError> {
        if !self.root.exists() {
            return Err(ScanError::RootNotFound(self.root.clone()));
        }
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory(self.root.clone()));
        }
        Ok(())
    }

    fn walk_all(&self) -> Result<Vec<DiscoveredFile>, ScanError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| self.walk_error(&e))?;
            let is_file = entry.file_type().is_file();
            if !is_file_entry(is_file, entry.path_is_symlink(), entry.path()) {
                continue;
            }
            if let Some(file) = self.select(entry.into_path()) {
                files.push(file);
            }
        }
        Ok(files)
    }

    fn walk_respecting_gitignore(&self) -> Result<Vec<DiscoveredFile>, ScanError> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            // Honor .gitignore files even when the root is not a git checkout
            .require_git(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| self.walk_error(&e))?;
            let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
            if !is_file_entry(is_file, entry.path_is_symlink(), entry.path()) {
                continue;
            }
            if let Some(file) = self.select(entry.into_path()) {
                files.push(file);
            }
        }
        Ok(files)
    }

    fn select(&self, path: PathBuf) -> Option<DiscoveredFile> {
        DiscoveredFile::from_path(path).filter(|file| self.kinds.contains(&file.kind))
    }

    fn walk_error(&self, err: &dyn std::fmt::Display) -> ScanError {
        ScanError::Walk {
            root: self.root.clone(),
            message: err.to_string(),
        }
    }
}

/// Regular files, plus symlinks whose target is a regular file.
/// Dangling links are skipped.
fn is_file_entry(is_file: bool, is_symlink: bool, path: &Path) -> bool {
    is_file || (is_symlink && path.metadata().is_ok_and(|meta| meta.is_file()))
}
