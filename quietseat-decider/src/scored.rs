//! Composite-score acceptance.

use quietseat_core::{DecisionConfig, DecisionResult, Evaluation, Reason};
use quietseat_scorer::WeightedScorer;

/// Score-based acceptance: locations whose composite score reaches the
/// threshold qualify with [`Reason::HighScore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBasedStrategy {
    scorer: WeightedScorer,
    threshold: f64,
}

impl ScoreBasedStrategy {
    /// Build the strategy from a scorer and an acceptance threshold.
    #[must_use]
    pub const fn new(scorer: WeightedScorer, threshold: f64) -> Self {
        Self { scorer, threshold }
    }

    /// Build the strategy from a validated configuration.
    ///
    /// Distance is scaled against the configured radius.
    #[must_use]
    pub const fn from_config(config: &DecisionConfig) -> Self {
        Self::new(
            WeightedScorer::new(config.weights, config.max_radius_km),
            config.score_threshold,
        )
    }

    /// Produce a scored result for `evaluation` when it meets the threshold.
    ///
    /// # Examples
    /// ```
    /// use quietseat_core::{Elapsed, Evaluation, Reason, ScoreWeights};
    /// use quietseat_decider::ScoreBasedStrategy;
    /// use quietseat_scorer::WeightedScorer;
    ///
    /// let scorer = WeightedScorer::new(ScoreWeights::default(), 1.0);
    /// let strategy = ScoreBasedStrategy::new(scorer, 50.0);
    /// let evaluation = Evaluation {
    ///     id: 1,
    ///     distance_km: 0.07,
    ///     occupancy_rate: 30.0,
    ///     rating: 4.5,
    ///     elapsed: Elapsed::Never,
    /// };
    /// let result = strategy.judge(&evaluation).expect("qualifies");
    /// assert_eq!(result.reason, Reason::HighScore);
    /// assert_eq!(result.score, Some(85.75));
    /// ```
    #[must_use]
    pub fn judge(&self, evaluation: &Evaluation) -> Option<DecisionResult> {
        let score = self.scorer.score(evaluation);
        (score >= self.threshold)
            .then(|| DecisionResult::qualifying(evaluation, Reason::HighScore, Some(score)))
    }

    /// Order results best first, keeping input order for equal scores.
    pub fn order(results: &mut [DecisionResult]) {
        results.sort_by(|a, b| {
            let left = a.score.unwrap_or(0.0);
            let right = b.score.unwrap_or(0.0);
            right.total_cmp(&left)
        });
    }
}
