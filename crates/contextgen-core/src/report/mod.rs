//! Report module: Summary statistics and the text report

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::context::ContextMap;

/// Symbols of a file flagged as conversation-relevant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationFile {
    pub path: PathBuf,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
}

/// Summary of a context map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    pub total_files: usize,
    pub total_functions: usize,
    pub total_classes: usize,
    pub conversation_files: Vec<ConversationFile>,
}

impl Insights {
    /// Reduce a context map to counts plus the flagged files
    #[must_use]
    pub fn from_context(context: &ContextMap) -> Self {
        let conversation_files = context
            .conversation_files()
            .map(|(path, facts)| ConversationFile {
                path: path.to_path_buf(),
                functions: facts.functions.clone(),
                classes: facts.classes.clone(),
            })
            .collect();

        Self {
            total_files: context.len(),
            total_functions: context.iter().map(|(_, f)| f.functions.len()).sum(),
            total_classes: context.iter().map(|(_, f)| f.classes.len()).sum(),
            conversation_files,
        }
    }
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project Overview:")?;
        writeln!(f, "- Total files analyzed: {}", self.total_files)?;
        writeln!(f, "- Total functions found: {}", self.total_functions)?;
        write!(f, "- Total classes found: {}", self.total_classes)?;

        if self.conversation_files.is_empty() {
            return Ok(());
        }

        write!(f, "\n\nFiles mentioned in conversation:")?;
        for file in &self.conversation_files {
            write!(f, "\n- {}", file.path.display())?;
            write!(f, "\n  Functions: {}", file.functions.join(", "))?;
            write!(f, "\n  Classes: {}", file.classes.join(", "))?;
        }
        Ok(())
    }
}
