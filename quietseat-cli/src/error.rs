//! Error types emitted by the quietseat CLI.
//!
//! Keep this error type reasonably small, as the CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use quietseat_core::{ConfigError, RequestValidationError, TimestampError};
use quietseat_decider::StrategyParseError;
use thiserror::Error;

use crate::decide::RequestSource;

/// Errors emitted by the quietseat CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (pass it as an argument or set {env})")]
    MissingArgument {
        /// Name of the missing argument.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// The strategy name matched no known strategy.
    #[error(transparent)]
    InvalidStrategy(#[from] StrategyParseError),
    /// The `--now` override was not a recognised timestamp.
    #[error("invalid --{field} value: {source}")]
    InvalidNow {
        /// Name of the offending argument.
        field: &'static str,
        /// Underlying parse failure.
        #[source]
        source: TimestampError,
    },
    /// The merged decision configuration is out of range.
    #[error("invalid decision configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// Opening the request file failed.
    #[error("failed to open decision request at {path:?}: {source}")]
    OpenRequest {
        /// Path that could not be opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Request JSON could not be decoded.
    #[error("failed to parse decision request JSON from {origin}: {source}")]
    ParseRequest {
        /// Where the request was read from.
        origin: RequestSource,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The request payload failed validation.
    #[error("decision request from {origin} failed validation: {source}")]
    InvalidRequest {
        /// Where the request was read from.
        origin: RequestSource,
        /// Validation failure.
        #[source]
        source: RequestValidationError,
    },
    /// Serialising the decision response failed.
    #[error("failed to serialise decision response: {0}")]
    SerialiseResponse(#[source] serde_json::Error),
    /// Writing the decision output failed.
    #[error("failed to write decision output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
