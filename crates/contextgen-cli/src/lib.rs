//! contextgen-cli library
//!
//! This module exposes the internal functionality of contextgen-cli for testing purposes.

pub mod commands;
pub mod logging;

pub use commands::types::{Cli, Commands, ConventionArg, OutputFormat, SessionArgs};
