//! Session configuration

use crate::extract::ExtractionMode;

/// What to do when a conversation file does not exist at registration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrationPolicy {
    /// Log a warning and skip the file
    #[default]
    Warn,
    /// Fail the registration with an error
    Reject,
}

/// Configuration for a [`ContextGenerator`](super::ContextGenerator)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub respect_gitignore: bool,
    pub registration_policy: RegistrationPolicy,
    pub extraction_mode: ExtractionMode,
}

impl GeneratorConfig {
    /// Defaults: walk everything, warn on missing conversation files,
    /// Python declarations for every file
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip files excluded by gitignore rules during discovery
    #[must_use]
    pub fn with_gitignore(mut self, respect_gitignore: bool) -> Self {
        self.respect_gitignore = respect_gitignore;
        self
    }

    /// Set the policy for missing conversation files
    #[must_use]
    pub fn with_registration_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.registration_policy = policy;
        self
    }

    /// Set how declaration matchers are chosen per file
    #[must_use]
    pub fn with_extraction_mode(mut self, mode: ExtractionMode) -> Self {
        self.extraction_mode = mode;
        self
    }
}
