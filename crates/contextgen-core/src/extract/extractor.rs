//! Per-file matcher selection

use std::collections::HashMap;
use std::path::Path;

use super::{Convention, DeclarationMatcher, ExtractError, Symbols};
use crate::scanner::FileKind;

/// How matchers are assigned to files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Apply one convention to every file, whatever its extension
    Uniform(Convention),
    /// Python for `.py`, JavaScript for `.js`, Java for `.java`, nothing
    /// for markup, stylesheets and data files
    ByFileKind,
}

impl ExtractionMode {
    /// File kinds worth discovering under this mode.
    ///
    /// `.java` sources join the default kinds only when a Java matcher
    /// will run over them.
    #[must_use]
    pub fn file_kinds(&self) -> Vec<FileKind> {
        let mut kinds = FileKind::DEFAULT.to_vec();
        if matches!(self, Self::Uniform(Convention::Java) | Self::ByFileKind) {
            kinds.push(FileKind::Java);
        }
        kinds
    }
}

impl Default for ExtractionMode {
    fn default() -> Self {
        Self::Uniform(Convention::Python)
    }
}

/// Extracts symbols from file content using the matcher chosen for its path
pub struct SymbolExtractor {
    fallback: Option<Box<dyn DeclarationMatcher>>,
    by_kind: HashMap<FileKind, Box<dyn DeclarationMatcher>>,
}

impl SymbolExtractor {
    /// Use `matcher` for every file
    #[must_use]
    pub fn uniform(matcher: impl DeclarationMatcher + 'static) -> Self {
        Self {
            fallback: Some(Box::new(matcher)),
            by_kind: HashMap::new(),
        }
    }

    /// Start with no matchers at all; every file yields empty symbols
    #[must_use]
    pub fn empty() -> Self {
        Self {
            fallback: None,
            by_kind: HashMap::new(),
        }
    }

    /// Build the extractor for an [`ExtractionMode`]
    ///
    /// # Errors
    /// Returns an error if a built-in pattern fails to compile.
    pub fn from_mode(mode: ExtractionMode) -> Result<Self, ExtractError> {
        match mode {
            ExtractionMode::Uniform(convention) => Ok(Self::uniform(convention.matcher()?)),
            ExtractionMode::ByFileKind => Ok(Self::empty()
                .with_matcher(FileKind::Python, Convention::Python.matcher()?)
                .with_matcher(FileKind::JavaScript, Convention::JavaScript.matcher()?)
                .with_matcher(FileKind::Java, Convention::Java.matcher()?)),
        }
    }

    /// Use `matcher` for files of `kind`, overriding the fallback
    #[must_use]
    pub fn with_matcher(mut self, kind: FileKind, matcher: impl DeclarationMatcher + 'static) -> Self {
        self.by_kind.insert(kind, Box::new(matcher));
        self
    }

    /// The matcher that applies to `path`, if any
    #[must_use]
    pub fn matcher_for(&self, path: &Path) -> Option<&dyn DeclarationMatcher> {
        self.matcher_for_kind(FileKind::from_path(path))
    }

    /// The matcher for a file of `kind`; `None` stands for an unrecognized
    /// extension, which only the fallback covers
    #[must_use]
    pub fn matcher_for_kind(&self, kind: Option<FileKind>) -> Option<&dyn DeclarationMatcher> {
        kind.and_then(|kind| self.by_kind.get(&kind))
            .or(self.fallback.as_ref())
            .map(|matcher| &**matcher)
    }

    /// Extract symbols from `content`, read from `path`
    #[must_use]
    pub fn extract(&self, path: &Path, content: &str) -> Symbols {
        self.extract_kind(FileKind::from_path(path), content)
    }

    /// Extract symbols from `content` of an already classified file
    #[must_use]
    pub fn extract_kind(&self, kind: Option<FileKind>, content: &str) -> Symbols {
        self.matcher_for_kind(kind)
            .map(|matcher| matcher.extract(content))
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for SymbolExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut by_kind: Vec<(FileKind, &str)> = self
            .by_kind
            .iter()
            .map(|(kind, matcher)| (*kind, matcher.name()))
            .collect();
        by_kind.sort();
        f.debug_struct("SymbolExtractor")
            .field("fallback", &self.fallback.as_ref().map(|m| m.name()))
            .field("by_kind", &by_kind)
            .finish()
    }
}
