//! Facade crate for the quietseat decision engine.
//!
//! This crate re-exports the core domain types, the scoring helpers and the
//! decision strategies so callers only need one dependency.

#![forbid(unsafe_code)]

pub use quietseat_core::{
    Clock, ConfigError, DecisionConfig, DecisionRequest, DecisionResponse, DecisionResult,
    Diagnostics, EARTH_RADIUS_KM, Elapsed, Evaluation, Exclusion, FixedClock, Location, Reason,
    RequestValidationError, ScoreWeights, SystemClock, TimestampError, haversine_km,
    has_no_recent_activity, minutes_since, parse_timestamp,
};

pub use quietseat_scorer::{ScoreBreakdown, WeightedScorer, weighted_score};

pub use quietseat_decider::{
    DecisionEngine, Evaluated, RuleBasedStrategy, ScoreBasedStrategy, Strategy,
    StrategyParseError,
};

#[cfg(feature = "test-support")]
pub use quietseat_core::test_support;
