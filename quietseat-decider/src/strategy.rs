//! Strategy selection and the shared evaluation sweep.
//!
//! The set of strategies is closed, so selection is a plain enum rather than
//! a trait object.
//!
//! # Examples
//! ```
//! use quietseat_decider::Strategy;
//!
//! assert_eq!(Strategy::Scored.as_str(), "scored");
//! assert_eq!("relaxed".parse::<Strategy>(), Ok(Strategy::Relaxed));
//! ```

use std::str::FromStr;

use chrono::{DateTime, Utc};
use quietseat_core::{
    DecisionConfig, DecisionRequest, DecisionResult, Diagnostics, Evaluation, Exclusion,
};
use thiserror::Error;

use crate::{RuleBasedStrategy, ScoreBasedStrategy};

/// The available decision strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Strategy {
    /// Threshold rules on occupancy and quietness, nearest first.
    #[default]
    Relaxed,
    /// Weighted composite score, best first.
    Scored,
}

/// Errors returned when parsing a [`Strategy`] name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyParseError {
    /// The name matched no strategy.
    #[error("unknown strategy {name:?}; expected \"relaxed\" or \"scored\"")]
    Unknown {
        /// Rejected input.
        name: String,
    },
}

/// Ordered results of one strategy run with exclusion counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluated {
    /// Qualifying locations in presentation order.
    pub results: Vec<DecisionResult>,
    /// Exclusion bookkeeping for the run.
    pub diagnostics: Diagnostics,
}

impl Strategy {
    /// Return the strategy's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relaxed => "relaxed",
            Self::Scored => "scored",
        }
    }

    /// Run the strategy over every location in `request` as of `now`.
    ///
    /// Results are already ordered according to the strategy.
    #[must_use]
    pub fn evaluate(
        self,
        request: &DecisionRequest,
        config: &DecisionConfig,
        now: DateTime<Utc>,
    ) -> Evaluated {
        match self {
            Self::Relaxed => {
                let strategy = RuleBasedStrategy::from_config(config);
                let mut evaluated = sweep(request, config, now, |evaluation| {
                    strategy.judge(evaluation)
                });
                RuleBasedStrategy::order(&mut evaluated.results);
                evaluated
            }
            Self::Scored => {
                let strategy = ScoreBasedStrategy::from_config(config);
                let mut evaluated = sweep(request, config, now, |evaluation| {
                    strategy.judge(evaluation)
                });
                ScoreBasedStrategy::order(&mut evaluated.results);
                evaluated
            }
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Ok(Self::Relaxed),
            "scored" => Ok(Self::Scored),
            _ => Err(StrategyParseError::Unknown { name: s.to_owned() }),
        }
    }
}

/// Evaluate each location, applying the radius and capacity filters shared by
/// every strategy before handing survivors to `judge`.
fn sweep<F>(
    request: &DecisionRequest,
    config: &DecisionConfig,
    now: DateTime<Utc>,
    mut judge: F,
) -> Evaluated
where
    F: FnMut(&Evaluation) -> Option<DecisionResult>,
{
    let mut diagnostics = Diagnostics {
        candidates: request.locations.len(),
        ..Diagnostics::default()
    };
    let mut results = Vec::new();
    for location in &request.locations {
        match Evaluation::assess(location, request.origin, now, config.max_radius_km) {
            Ok(evaluation) => match judge(&evaluation) {
                Some(result) => results.push(result),
                None => {
                    log::debug!("location {} does not qualify", location.id);
                    diagnostics.rejected += 1;
                }
            },
            Err(Exclusion::BeyondRadius { distance_km }) => {
                log::debug!(
                    "location {} excluded: {distance_km:.3} km exceeds radius {} km",
                    location.id,
                    config.max_radius_km
                );
                diagnostics.beyond_radius += 1;
            }
            Err(Exclusion::NotEvaluable) => {
                log::debug!("location {} excluded: no tables", location.id);
                diagnostics.not_evaluable += 1;
            }
        }
    }
    Evaluated {
        results,
        diagnostics,
    }
}
