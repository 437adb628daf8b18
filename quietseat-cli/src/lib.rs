//! Command-line front end for the quietseat decision engine.
//!
//! The `decide` subcommand reads a JSON decision request from a file or
//! standard input, runs the selected strategy and prints the response as
//! JSON. Every option can also come from the environment or a configuration
//! file through `ortho_config`.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod decide;
mod error;

pub use decide::RequestSource;
pub use error::CliError;

use decide::{DecideArgs, run_decide};

pub(crate) const ARG_REQUEST: &str = "request";
pub(crate) const ARG_STRATEGY: &str = "strategy";
pub(crate) const ARG_NOW: &str = "now";
pub(crate) const ENV_REQUEST: &str = "QUIETSEAT_CMDS_DECIDE_REQUEST";

/// Path value that selects standard input as the request source.
pub(crate) const STDIN_MARKER: &str = "-";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or the request are
/// invalid, or when the response cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Decide(args) => run_decide(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "quietseat",
    about = "Recommend quiet places to sit near a requester",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Decide which locations in a request are worth offering.
    Decide(DecideArgs),
}

#[cfg(test)]
mod tests;
