//! Report command: Print project insights

use anyhow::Result;

use super::open_session;
use super::types::{OutputFormat, SessionArgs};

/// Build the report for a session in the requested format
///
/// # Errors
/// Returns an error if the project cannot be scanned or a file cannot be read.
pub fn render(session: &SessionArgs, format: OutputFormat) -> Result<String> {
    let mut generator = open_session(session)?;
    match format {
        OutputFormat::Text => Ok(generator.provide_insights()?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&generator.insights()?)?),
    }
}

/// Run the report command
///
/// # Errors
/// Returns an error if the project cannot be scanned or a file cannot be read.
pub fn run(session: &SessionArgs, format: OutputFormat) -> Result<()> {
    println!("{}", render(session, format)?);
    Ok(())
}
