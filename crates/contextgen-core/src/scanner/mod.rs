//! Scanner module: File discovery and file kind detection
//!
//! Responsible for walking the project tree and keeping only files
//! whose extension is on the recognized allow-list.

mod file_kind;
mod walker;

use std::path::PathBuf;

use thiserror::Error;

pub use file_kind::FileKind;
pub use walker::{DiscoveredFile, Scanner};

/// Errors raised while discovering project files
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Project root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Project root is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to walk {root}: {message}")]
    Walk { root: PathBuf, message: String },
}

#[cfg(test)]
mod tests;
