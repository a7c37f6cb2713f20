//! Extract module: Pattern-based declaration matching
//!
//! Function and class names are recognized from raw text with regular
//! expressions, not by parsing. Anything that does not follow the exact
//! textual shape of a declaration is silently skipped.

mod extractor;
mod matcher;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use extractor::{ExtractionMode, SymbolExtractor};
pub use matcher::{Convention, DeclarationMatcher, PatternMatcher};

/// Function and class names found in one file, in order of appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    pub functions: Vec<String>,
    pub classes: Vec<String>,
}

impl Symbols {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty() && self.classes.is_empty()
    }
}

/// Errors raised while building declaration matchers
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid {kind} pattern for {matcher}: {source}")]
    InvalidPattern {
        matcher: String,
        kind: &'static str,
        #[source]
        source: regex::Error,
    },
}
