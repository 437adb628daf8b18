//! Scoring utilities for Quietseat candidate locations.
//!
//! Raw per-location factors live on incomparable scales: kilometres,
//! percentages, a five-star rating and minutes of inactivity. This crate maps
//! each onto `0..=100` and blends the results:
//! - **Normalisation** turns one factor into a sub-score where higher is
//!   better for the requester.
//! - **Weighting** combines the four sub-scores with the configured
//!   [`ScoreWeights`](quietseat_core::ScoreWeights), rounded to two decimals.
//!
//! # Examples
//!
//! ```
//! use quietseat_core::{Elapsed, Evaluation, ScoreWeights};
//! use quietseat_scorer::WeightedScorer;
//!
//! let evaluation = Evaluation {
//!     id: 1,
//!     distance_km: 0.07,
//!     occupancy_rate: 30.0,
//!     rating: 4.5,
//!     elapsed: Elapsed::Never,
//! };
//! let scorer = WeightedScorer::new(ScoreWeights::default(), 1.0);
//! assert_eq!(scorer.score(&evaluation), 85.75);
//! ```

#![forbid(unsafe_code)]

use quietseat_core::Elapsed;

mod types;
mod weighted;

pub use types::ScoreBreakdown;
pub use weighted::{WeightedScorer, weighted_score};

/// Upper bound of every sub-score.
pub const MAX_SUB_SCORE: f64 = 100.0;

const MAX_RATING: f64 = 5.0;
const RECENCY_SATURATION_MINUTES: f64 = 60.0;

/// Score proximity: `100` at the requester, `0` at `max_distance_km` and
/// beyond.
///
/// `max_distance_km` must be positive; configuration validation guarantees
/// this for the engine.
#[expect(
    clippy::float_arithmetic,
    reason = "distance is scaled linearly against the radius"
)]
#[must_use]
pub fn normalise_distance(distance_km: f64, max_distance_km: f64) -> f64 {
    (MAX_SUB_SCORE - distance_km / max_distance_km * MAX_SUB_SCORE).max(0.0)
}

/// Score free capacity: `100` when empty, `0` at or above full occupancy.
#[expect(
    clippy::float_arithmetic,
    reason = "free capacity is the complement of occupancy"
)]
#[must_use]
pub fn normalise_occupancy(occupancy_rate: f64) -> f64 {
    (MAX_SUB_SCORE - occupancy_rate).max(0.0)
}

/// Score a five-star rating proportionally.
///
/// Out-of-range ratings are not clamped and pass through proportionally.
#[expect(
    clippy::float_arithmetic,
    reason = "ratings scale linearly onto the sub-score range"
)]
#[must_use]
pub fn normalise_rating(rating: f64) -> f64 {
    rating / MAX_RATING * MAX_SUB_SCORE
}

/// Score inactivity, saturating at `100` after an hour.
///
/// [`Elapsed::Never`] saturates immediately.
#[expect(
    clippy::float_arithmetic,
    reason = "elapsed minutes scale linearly up to the saturation point"
)]
#[must_use]
pub fn normalise_recency(elapsed: Elapsed) -> f64 {
    match elapsed {
        Elapsed::Minutes(minutes) => {
            (minutes / RECENCY_SATURATION_MINUTES * MAX_SUB_SCORE).min(MAX_SUB_SCORE)
        }
        Elapsed::Never => MAX_SUB_SCORE,
    }
}

#[cfg(test)]
mod tests;
