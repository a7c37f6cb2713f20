//! Context module: Per-file facts for a project session
//!
//! A [`ContextGenerator`] owns one analysis session: the discovered files,
//! the files registered as conversation-relevant, and the content cache.
//! State only ever grows; nothing is unregistered or invalidated.

mod config;
mod generator;
mod map;

use std::path::PathBuf;

use thiserror::Error;

use crate::cache::CacheError;
use crate::extract::ExtractError;
use crate::scanner::ScanError;

pub use config::{GeneratorConfig, RegistrationPolicy};
pub use generator::ContextGenerator;
pub use map::{ContextMap, FileFacts};

/// Errors raised by a context session
#[derive(Debug, Error)]
pub enum ContextError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("Conversation file does not exist: {0}")]
    MissingConversationFile(PathBuf),
}
