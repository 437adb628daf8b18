//! Decide command implementation for the quietseat CLI.

use std::fmt;
use std::io::{BufReader, Read, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use chrono::{DateTime, Utc};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use quietseat_core::{
    Clock, DecisionConfig, DecisionRequest, DecisionResponse, FixedClock, ScoreWeights,
    SystemClock, parse_timestamp,
};
use quietseat_decider::{DecisionEngine, Strategy};
use serde::{Deserialize, Serialize};

use crate::{ARG_NOW, ARG_REQUEST, ARG_STRATEGY, CliError, ENV_REQUEST, STDIN_MARKER};

/// CLI arguments for the `decide` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Decide which locations in a JSON decision request are worth \
                 offering. The request is read from a file, or from standard \
                 input when the path is '-'. Thresholds and weights can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Recommend quiet locations from a decision request"
)]
#[ortho_config(prefix = "QUIETSEAT")]
pub(crate) struct DecideArgs {
    /// Path to a JSON decision request, or '-' for standard input.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request: Option<Utf8PathBuf>,
    /// Decision strategy: "relaxed" or "scored".
    #[arg(long = ARG_STRATEGY, value_name = "name")]
    #[serde(default)]
    pub(crate) strategy: Option<String>,
    /// Locations further away than this many kilometres are ignored.
    #[arg(long, value_name = "km")]
    #[serde(default)]
    pub(crate) max_radius_km: Option<f64>,
    /// Minutes without activity after which a location counts as quiet.
    #[arg(long, value_name = "minutes")]
    #[serde(default)]
    pub(crate) recency_threshold_minutes: Option<f64>,
    /// Minimum composite score accepted by the scored strategy.
    #[arg(long, value_name = "score")]
    #[serde(default)]
    pub(crate) score_threshold: Option<f64>,
    /// Weight of proximity in the composite score.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) distance_weight: Option<f64>,
    /// Weight of free capacity in the composite score.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) occupancy_weight: Option<f64>,
    /// Weight of the venue rating in the composite score.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) rating_weight: Option<f64>,
    /// Weight of time since the last activity in the composite score.
    #[arg(long, value_name = "weight")]
    #[serde(default)]
    pub(crate) recency_weight: Option<f64>,
    /// Evaluate as of this instant (RFC 3339) instead of the system clock.
    #[arg(long = ARG_NOW, value_name = "timestamp")]
    #[serde(default)]
    pub(crate) now: Option<String>,
}

impl DecideArgs {
    pub(crate) fn into_config(self) -> Result<DecideConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        DecideConfig::try_from(merged)
    }
}

/// Where a decision request is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestSource {
    /// Standard input.
    Stdin,
    /// A file on disk.
    File(Utf8PathBuf),
}

impl From<Utf8PathBuf> for RequestSource {
    fn from(path: Utf8PathBuf) -> Self {
        if path.as_str() == STDIN_MARKER {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }
}

impl fmt::Display for RequestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("standard input"),
            Self::File(path) => write!(f, "{path:?}"),
        }
    }
}

/// Resolved `decide` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DecideConfig {
    /// Where to read the request from.
    pub(crate) request: RequestSource,
    /// Strategy to run.
    pub(crate) strategy: Strategy,
    /// Thresholds and weights handed to the engine.
    pub(crate) decision: DecisionConfig,
    /// Pinned evaluation instant, if any.
    pub(crate) now: Option<DateTime<Utc>>,
}

impl TryFrom<DecideArgs> for DecideConfig {
    type Error = CliError;

    fn try_from(args: DecideArgs) -> Result<Self, Self::Error> {
        let request = args.request.ok_or(CliError::MissingArgument {
            field: ARG_REQUEST,
            env: ENV_REQUEST,
        })?;
        let strategy = match args.strategy.as_deref() {
            Some(name) => name.parse::<Strategy>()?,
            None => Strategy::default(),
        };
        let now = args
            .now
            .as_deref()
            .map(parse_timestamp)
            .transpose()
            .map_err(|source| CliError::InvalidNow {
                field: ARG_NOW,
                source,
            })?;

        let defaults = DecisionConfig::default();
        let default_weights = defaults.weights;
        let decision = DecisionConfig {
            max_radius_km: args.max_radius_km.unwrap_or(defaults.max_radius_km),
            recency_threshold_minutes: args
                .recency_threshold_minutes
                .unwrap_or(defaults.recency_threshold_minutes),
            score_threshold: args.score_threshold.unwrap_or(defaults.score_threshold),
            weights: ScoreWeights {
                distance: args.distance_weight.unwrap_or(default_weights.distance),
                occupancy: args.occupancy_weight.unwrap_or(default_weights.occupancy),
                rating: args.rating_weight.unwrap_or(default_weights.rating),
                recency: args.recency_weight.unwrap_or(default_weights.recency),
            },
        };

        Ok(Self {
            request: RequestSource::from(request),
            strategy,
            decision,
            now,
        })
    }
}

pub(crate) fn run_decide(args: DecideArgs) -> Result<(), CliError> {
    let mut stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    run_decide_with(args, &mut stdin, &mut stdout)
}

pub(crate) fn run_decide_with(
    args: DecideArgs,
    stdin: &mut dyn Read,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let response = execute_decide(&config, stdin)?;
    write_decide_response(writer, &response)
}

/// Load, validate and decide the request described by `config`.
pub(crate) fn execute_decide(
    config: &DecideConfig,
    stdin: &mut dyn Read,
) -> Result<DecisionResponse, CliError> {
    let request = load_decision_request(&config.request, stdin)?;
    request
        .validate()
        .map_err(|source| CliError::InvalidRequest {
            origin: config.request.clone(),
            source,
        })?;
    let now = config.now.unwrap_or_else(|| SystemClock.now());
    let engine = DecisionEngine::with_clock(config.decision, FixedClock(now))?;
    log::debug!(
        "deciding {} locations from {} with the {} strategy",
        request.locations.len(),
        config.request,
        config.strategy
    );
    Ok(engine.decide(config.strategy, &request))
}

/// Decode a JSON [`DecisionRequest`] from `source`.
pub(crate) fn load_decision_request(
    source: &RequestSource,
    stdin: &mut dyn Read,
) -> Result<DecisionRequest, CliError> {
    let parsed = match source {
        RequestSource::Stdin => serde_json::from_reader(BufReader::new(stdin)),
        RequestSource::File(path) => {
            let file = open_request_file(path)?;
            serde_json::from_reader(BufReader::new(file))
        }
    };
    parsed.map_err(|source_err| CliError::ParseRequest {
        origin: source.clone(),
        source: source_err,
    })
}

fn open_request_file(path: &Utf8Path) -> Result<fs_utf8::File, CliError> {
    fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenRequest {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_decide_response(
    writer: &mut dyn Write,
    response: &DecisionResponse,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(response).map_err(CliError::SerialiseResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<DecideConfig, CliError> {
    let merged = DecideArgs::merge_from_layers(layers).map_err(CliError::from)?;
    DecideConfig::try_from(merged)
}
