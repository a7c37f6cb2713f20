//! Recognized file kinds

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Kinds of text files picked up during discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Python,
    JavaScript,
    Html,
    Css,
    Json,
    Java,
}

impl FileKind {
    /// Every recognized kind
    pub const ALL: [Self; 6] = [
        Self::Python,
        Self::JavaScript,
        Self::Html,
        Self::Css,
        Self::Json,
        Self::Java,
    ];

    /// Kinds discovered unless a scan asks for others.
    ///
    /// Java sources are only picked up when the Java convention can use them.
    pub const DEFAULT: [Self; 5] = [
        Self::Python,
        Self::JavaScript,
        Self::Html,
        Self::Css,
        Self::Json,
    ];

    /// Detect the kind from a bare extension (without the dot).
    ///
    /// Matching is literal: `PY` is not `py`.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.extension() == ext)
    }

    /// Detect the kind from a file path
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// The file extension for this kind
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::JavaScript => "js",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Java => "java",
        }
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "python"),
            Self::JavaScript => write!(f, "javascript"),
            Self::Html => write!(f, "html"),
            Self::Css => write!(f, "css"),
            Self::Json => write!(f, "json"),
            Self::Java => write!(f, "java"),
        }
    }
}
