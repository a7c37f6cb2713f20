//! Command types shared between main and library

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use contextgen_core::{Convention, ExtractionMode, GeneratorConfig, RegistrationPolicy};

#[derive(Debug, Parser)]
#[command(name = "contextgen")]
#[command(author, version, about = "Project context summaries for coding conversations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize a project and the files mentioned in a conversation
    Report {
        #[command(flatten)]
        session: SessionArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the per-file context map as JSON
    Context {
        #[command(flatten)]
        session: SessionArgs,
    },
}

/// Arguments that set up an analysis session
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Project root to scan
    pub path: PathBuf,

    /// File relevant to the conversation (repeatable)
    #[arg(short = 'c', long = "conversation-file")]
    pub conversation_files: Vec<PathBuf>,

    /// Fail when a conversation file does not exist instead of warning
    #[arg(long)]
    pub strict: bool,

    /// Skip files excluded by .gitignore rules
    #[arg(long)]
    pub gitignore: bool,

    /// Declaration syntax to match
    #[arg(long, value_enum, default_value_t = ConventionArg::Python)]
    pub convention: ConventionArg,
}

impl SessionArgs {
    /// Session configuration for these arguments
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let policy = if self.strict {
            RegistrationPolicy::Reject
        } else {
            RegistrationPolicy::Warn
        };
        GeneratorConfig::new()
            .with_gitignore(self.gitignore)
            .with_registration_policy(policy)
            .with_extraction_mode(self.convention.into())
    }
}

/// Declaration syntax selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConventionArg {
    Python,
    Javascript,
    /// Java patterns; also picks up `.java` sources
    Java,
    /// Choose by file extension, `.java` included
    Auto,
}

impl From<ConventionArg> for ExtractionMode {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::Python => Self::Uniform(Convention::Python),
            ConventionArg::Javascript => Self::Uniform(Convention::JavaScript),
            ConventionArg::Java => Self::Uniform(Convention::Java),
            ConventionArg::Auto => Self::ByFileKind,
        }
    }
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
