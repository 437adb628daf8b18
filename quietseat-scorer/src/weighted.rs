//! Weighted blending of sub-scores.

use quietseat_core::{Evaluation, ScoreWeights, round_to};

use crate::ScoreBreakdown;

/// Blend sub-scores with `weights`, rounding to two decimals.
///
/// Weights are applied as given; a total other than `1.0` scales the result.
///
/// # Examples
/// ```
/// use quietseat_core::ScoreWeights;
/// use quietseat_scorer::{ScoreBreakdown, weighted_score};
///
/// let breakdown = ScoreBreakdown {
///     distance: 93.0,
///     occupancy: 70.0,
///     rating: 90.0,
///     recency: 100.0,
/// };
/// assert_eq!(weighted_score(breakdown, ScoreWeights::default()), 85.75);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the composite is a weighted sum"
)]
#[must_use]
pub fn weighted_score(breakdown: ScoreBreakdown, weights: ScoreWeights) -> f64 {
    let raw = breakdown.distance * weights.distance
        + breakdown.occupancy * weights.occupancy
        + breakdown.rating * weights.rating
        + breakdown.recency * weights.recency;
    round_to(raw, 2)
}

/// Scores evaluations with fixed weights and distance ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedScorer {
    weights: ScoreWeights,
    max_distance_km: f64,
}

impl WeightedScorer {
    /// Build a scorer using `weights`, scaling distance against
    /// `max_distance_km`.
    #[must_use]
    pub const fn new(weights: ScoreWeights, max_distance_km: f64) -> Self {
        Self {
            weights,
            max_distance_km,
        }
    }

    /// Return the sub-scores of `evaluation`.
    #[must_use]
    pub fn breakdown(&self, evaluation: &Evaluation) -> ScoreBreakdown {
        ScoreBreakdown::from_evaluation(evaluation, self.max_distance_km)
    }

    /// Return the composite score of `evaluation`.
    #[must_use]
    pub fn score(&self, evaluation: &Evaluation) -> f64 {
        let breakdown = self.breakdown(evaluation);
        let score = weighted_score(breakdown, self.weights);
        log::trace!(
            "location {id}: {breakdown:?} -> {score}",
            id = evaluation.id
        );
        score
    }
}
