//! Decision strategies and the engine that runs them.
//!
//! Two strategies decide which candidate locations to offer:
//! - [`Strategy::Relaxed`] applies fixed occupancy and quietness rules and
//!   orders results by distance.
//! - [`Strategy::Scored`] blends four normalised factors into a composite
//!   score, keeps locations above a threshold and orders them by score.
//!
//! [`DecisionEngine`] owns the validated configuration and a clock, runs the
//! selected strategy and wraps the ordered results in a
//! [`DecisionResponse`](quietseat_core::DecisionResponse).
//!
//! # Examples
//!
//! ```
//! use geo::Coord;
//! use quietseat_core::{DecisionConfig, DecisionRequest, Location, Reason};
//! use quietseat_decider::{DecisionEngine, Strategy};
//!
//! # fn main() -> Result<(), quietseat_core::ConfigError> {
//! let engine = DecisionEngine::new(DecisionConfig::default())?;
//! let request = DecisionRequest::new(
//!     Coord { x: 126.9780, y: 37.5665 },
//!     vec![Location::new(1, Coord { x: 126.9785, y: 37.5670 }, 10, 3)],
//! );
//! let response = engine.decide(Strategy::Relaxed, &request);
//! assert_eq!(response.count, 1);
//! assert_eq!(response.results[0].reason, Reason::LowOccupancy);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod engine;
mod rule;
mod scored;
mod strategy;

pub use engine::DecisionEngine;
pub use rule::RuleBasedStrategy;
pub use scored::ScoreBasedStrategy;
pub use strategy::{Evaluated, Strategy, StrategyParseError};
