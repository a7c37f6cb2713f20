//! Context command: Print the per-file context map

use anyhow::Result;
use tracing::info;

use super::open_session;
use super::types::SessionArgs;

/// Build the context map for a session as pretty JSON
///
/// # Errors
/// Returns an error if the project cannot be scanned, a file cannot be read,
/// or a path is not valid UTF-8.
pub fn render(session: &SessionArgs) -> Result<String> {
    let mut generator = open_session(session)?;
    let context = generator.generate_context()?;
    info!("Collected context for {} files", context.len());
    Ok(context.to_json_pretty()?)
}

/// Run the context command
///
/// # Errors
/// Returns an error if the context cannot be built.
pub fn run(session: &SessionArgs) -> Result<()> {
    println!("{}", render(session)?);
    Ok(())
}
