//! Sub-score breakdown for a single evaluation.

use quietseat_core::Evaluation;

use crate::{normalise_distance, normalise_occupancy, normalise_rating, normalise_recency};

/// The four normalised sub-scores of one location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    /// Proximity sub-score.
    pub distance: f64,
    /// Free-capacity sub-score.
    pub occupancy: f64,
    /// Rating sub-score.
    pub rating: f64,
    /// Inactivity sub-score.
    pub recency: f64,
}

impl ScoreBreakdown {
    /// Normalise every factor of `evaluation`.
    ///
    /// Distance is scaled against `max_distance_km`, normally the configured
    /// radius.
    #[must_use]
    pub fn from_evaluation(evaluation: &Evaluation, max_distance_km: f64) -> Self {
        Self {
            distance: normalise_distance(evaluation.distance_km, max_distance_km),
            occupancy: normalise_occupancy(evaluation.occupancy_rate),
            rating: normalise_rating(evaluation.rating),
            recency: normalise_recency(evaluation.elapsed),
        }
    }
}
