//! CLI commands

pub mod context;
pub mod report;
pub mod types;

use anyhow::{Context as _, Result};
use contextgen_core::ContextGenerator;
use tracing::info;

use types::SessionArgs;

/// Scan the project and register the conversation files
///
/// # Errors
/// Returns an error if the project cannot be scanned or, in strict mode,
/// a conversation file does not exist.
pub fn open_session(args: &SessionArgs) -> Result<ContextGenerator> {
    info!("Scanning project: {}", args.path.display());

    let mut generator = ContextGenerator::with_config(&args.path, args.config())
        .with_context(|| format!("Failed to scan {}", args.path.display()))?;
    info!("Found {} project files", generator.project_files().len());

    let mut registered = 0;
    for path in &args.conversation_files {
        if generator.add_conversation_file(path)? {
            registered += 1;
        }
    }
    if !args.conversation_files.is_empty() {
        info!(
            "Registered {} of {} conversation files",
            registered,
            args.conversation_files.len()
        );
    }

    Ok(generator)
}

#[cfg(test)]
mod tests;
