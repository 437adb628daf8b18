//! Core domain types for the Quietseat decision engine.
//!
//! The crate models the per-request snapshot a caller supplies (candidate
//! [`Location`]s and the requester's origin), the derived per-location
//! [`Evaluation`], and the [`DecisionResponse`] envelope returned to callers.
//! It also hosts the two geometric/temporal primitives every strategy relies
//! on: great-circle distance ([`haversine_km`]) and activity recency
//! ([`minutes_since`], [`has_no_recent_activity`]).
//!
//! Nothing here performs I/O or holds shared state. All types are plain
//! values that live for a single decision.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod decision;
pub mod distance;
pub mod evaluation;
pub mod location;
pub mod recency;
pub mod request;
pub mod rounding;
pub mod timestamp;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use config::{ConfigError, DecisionConfig, ScoreWeights};
pub use decision::{DecisionResponse, DecisionResult, Diagnostics, Reason};
pub use distance::{EARTH_RADIUS_KM, haversine_km};
pub use evaluation::{Evaluation, Exclusion};
pub use location::Location;
pub use recency::{Clock, Elapsed, FixedClock, SystemClock, has_no_recent_activity, minutes_since};
pub use request::{DecisionRequest, RequestValidationError};
pub use rounding::round_to;
pub use timestamp::{TimestampError, parse_timestamp};
