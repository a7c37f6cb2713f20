//! Logging setup

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter directive for the requested verbosity
#[must_use]
pub fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install the global subscriber. Logs go to stderr so stdout carries
/// only command output.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(filter_directive(verbose)))
        .init();
}
