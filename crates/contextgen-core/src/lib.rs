//! contextgen-core: Core library for project context extraction
//!
//! Walks a project tree, pulls function and class names out of source files
//! with textual declaration patterns, and summarizes the result. Files can be
//! flagged as relevant to a conversation so the summary calls them out.
//!
//! # Pipeline
//!
//! - **scanner** - discovers files by extension
//! - **cache** - reads each file at most once per session
//! - **extract** - pattern-based declaration matching
//! - **context** - aggregates per-file facts into a context map
//! - **report** - renders summary statistics and conversation files

pub mod cache;
pub mod context;
pub mod extract;
pub mod report;
pub mod scanner;

// Re-export commonly used types
pub use cache::{CacheError, CachedContent, ContentCache, ContentSource, FileSystem};
pub use context::{
    ContextError, ContextGenerator, ContextMap, FileFacts, GeneratorConfig, RegistrationPolicy,
};
pub use extract::{
    Convention, DeclarationMatcher, ExtractError, ExtractionMode, PatternMatcher,
    SymbolExtractor, Symbols,
};
pub use report::{ConversationFile, Insights};
pub use scanner::{DiscoveredFile, FileKind, ScanError, Scanner};

#[cfg(test)]
mod test_support;
