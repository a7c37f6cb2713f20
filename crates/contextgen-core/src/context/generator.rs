//! Context generator session

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{ContextError, ContextMap, FileFacts, GeneratorConfig, RegistrationPolicy};
use crate::cache::{ContentCache, ContentSource, FileSystem};
use crate::extract::SymbolExtractor;
use crate::report::Insights;
use crate::scanner::{DiscoveredFile, FileKind, Scanner};

/// One analysis session over a project tree
#[derive(Debug)]
pub struct ContextGenerator<S = FileSystem> {
    root: PathBuf,
    project_files: Vec<DiscoveredFile>,
    conversation_files: BTreeSet<PathBuf>,
    cache: ContentCache<S>,
    extractor: SymbolExtractor,
    registration_policy: RegistrationPolicy,
}

impl ContextGenerator<FileSystem> {
    /// Discover the files under `root` with the default configuration
    ///
    /// # Errors
    /// Returns an error if the root cannot be walked.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ContextError> {
        Self::with_config(root, GeneratorConfig::default())
    }

    /// Discover the files under `root` with a custom configuration
    ///
    /// # Errors
    /// Returns an error if the root cannot be walked or a built-in pattern
    /// fails to compile.
    pub fn with_config(
        root: impl Into<PathBuf>,
        config: GeneratorConfig,
    ) -> Result<Self, ContextError> {
        Self::with_source(root, config, FileSystem)
    }
}

impl<S: ContentSource> ContextGenerator<S> {
    /// Discover the files under `root`, reading content through `source`
    ///
    /// # Errors
    /// Returns an error if the root cannot be walked or a built-in pattern
    /// fails to compile.
    pub fn with_source(
        root: impl Into<PathBuf>,
        config: GeneratorConfig,
        source: S,
    ) -> Result<Self, ContextError> {
        let root = root.into();
        let project_files = Scanner::new(&root)
            .with_gitignore(config.respect_gitignore)
            .with_kinds(config.extraction_mode.file_kinds())
            .discover()?;
        let extractor = SymbolExtractor::from_mode(config.extraction_mode)?;

        Ok(Self::from_parts(root, project_files, extractor, source)
            .with_registration_policy(config.registration_policy))
    }

    /// Assemble a session from an already discovered file list
    #[must_use]
    pub fn from_parts(
        root: impl Into<PathBuf>,
        project_files: Vec<DiscoveredFile>,
        extractor: SymbolExtractor,
        source: S,
    ) -> Self {
        Self {
            root: root.into(),
            project_files,
            conversation_files: BTreeSet::new(),
            cache: ContentCache::with_source(source),
            extractor,
            registration_policy: RegistrationPolicy::default(),
        }
    }

    /// Set the policy for missing conversation files
    #[must_use]
    pub fn with_registration_policy(mut self, policy: RegistrationPolicy) -> Self {
        self.registration_policy = policy;
        self
    }

    /// Mark `path` as relevant to the conversation.
    ///
    /// Returns `Ok(true)` when the path is registered. A path that does not
    /// exist is either skipped with a warning (`Ok(false)`) or rejected,
    /// depending on the registration policy; the registered set is left
    /// unchanged in both cases.
    ///
    /// # Errors
    /// Returns [`ContextError::MissingConversationFile`] under
    /// [`RegistrationPolicy::Reject`] when the path does not exist.
    pub fn add_conversation_file(&mut self, path: impl Into<PathBuf>) -> Result<bool, ContextError> {
        let path = path.into();
        if !self.cache.exists(&path) {
            return match self.registration_policy {
                RegistrationPolicy::Warn => {
                    warn!("File {} does not exist in the project", path.display());
                    Ok(false)
                }
                RegistrationPolicy::Reject => Err(ContextError::MissingConversationFile(path)),
            };
        }

        debug!("Registered conversation file {}", path.display());
        self.conversation_files.insert(path);
        Ok(true)
    }

    /// Build the context map for every discovered and registered file.
    ///
    /// Content comes through the cache, so repeated calls never re-read a
    /// file.
    ///
    /// # Errors
    /// Returns an error if any file cannot be read; no partial map is
    /// returned.
    pub fn generate_context(&mut self) -> Result<ContextMap, ContextError> {
        // Discovery already classified project files; registered ones are
        // classified from their extension
        let mut all_files: BTreeMap<&PathBuf, Option<FileKind>> = self
            .conversation_files
            .iter()
            .map(|path| (path, FileKind::from_path(path)))
            .collect();
        all_files.extend(
            self.project_files
                .iter()
                .map(|file| (&file.path, Some(file.kind))),
        );

        let mut context = ContextMap::new();
        for (path, kind) in all_files {
            let content = self.cache.read(path)?;
            let symbols = self.extractor.extract_kind(kind, &content.text);
            context.insert(
                path.clone(),
                FileFacts {
                    functions: symbols.functions,
                    classes: symbols.classes,
                    is_conversation_file: self.conversation_files.contains(path),
                    content_hash: content.hash.clone(),
                },
            );
        }

        debug!("Generated context for {} files", context.len());
        Ok(context)
    }

    /// Generate the context and summarize it
    ///
    /// # Errors
    /// Returns an error if any file cannot be read.
    pub fn insights(&mut self) -> Result<Insights, ContextError> {
        Ok(Insights::from_context(&self.generate_context()?))
    }

    /// Generate the context and render the text report
    ///
    /// # Errors
    /// Returns an error if any file cannot be read.
    pub fn provide_insights(&mut self) -> Result<String, ContextError> {
        Ok(self.insights()?.to_string())
    }

    /// The project root this session was created for
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files found by discovery, sorted by path
    #[must_use]
    pub fn project_files(&self) -> &[DiscoveredFile] {
        &self.project_files
    }

    /// Files registered as conversation-relevant
    #[must_use]
    pub fn conversation_files(&self) -> &BTreeSet<PathBuf> {
        &self.conversation_files
    }

    /// The session's content cache
    #[must_use]
    pub fn cache(&self) -> &ContentCache<S> {
        &self.cache
    }
}
