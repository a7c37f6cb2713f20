//! contextgen: Project context summaries for coding conversations

use clap::Parser;
use contextgen_cli::commands::{context, report};
use contextgen_cli::logging::setup_logging;
use contextgen_cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Report { session, format } => report::run(&session, format)?,
        Commands::Context { session } => context::run(&session)?,
    }

    Ok(())
}
