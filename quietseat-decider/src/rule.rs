//! Threshold rules on occupancy and quietness.

use quietseat_core::{DecisionConfig, DecisionResult, Elapsed, Evaluation, Reason};

/// Occupancy at or below which a venue always qualifies.
const LOW_OCCUPANCY_PERCENT: f64 = 40.0;

/// Occupancy at or below which a quiet venue still qualifies.
const MODERATE_OCCUPANCY_PERCENT: f64 = 60.0;

/// Rule-based acceptance: low occupancy, or moderate occupancy with no recent
/// activity.
///
/// # Examples
/// ```
/// use quietseat_core::{Elapsed, Reason};
/// use quietseat_decider::RuleBasedStrategy;
///
/// let rules = RuleBasedStrategy::new(15.0);
/// assert_eq!(rules.classify(40.0, Elapsed::Minutes(1.0)), Some(Reason::LowOccupancy));
/// assert_eq!(
///     rules.classify(55.0, Elapsed::Never),
///     Some(Reason::ModerateWithNoRecentActivity)
/// );
/// assert_eq!(rules.classify(55.0, Elapsed::Minutes(5.0)), None);
/// assert_eq!(rules.classify(61.0, Elapsed::Never), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleBasedStrategy {
    recency_threshold_minutes: f64,
}

impl RuleBasedStrategy {
    /// Build the rules with the quietness threshold in minutes.
    #[must_use]
    pub const fn new(recency_threshold_minutes: f64) -> Self {
        Self {
            recency_threshold_minutes,
        }
    }

    /// Build the rules from a validated configuration.
    #[must_use]
    pub const fn from_config(config: &DecisionConfig) -> Self {
        Self::new(config.recency_threshold_minutes)
    }

    /// Decide why a venue with `occupancy_rate` qualifies, if it does.
    ///
    /// The low-occupancy rule takes precedence, so a quiet venue at 30%
    /// reports [`Reason::LowOccupancy`].
    #[must_use]
    pub const fn classify(&self, occupancy_rate: f64, elapsed: Elapsed) -> Option<Reason> {
        if occupancy_rate <= LOW_OCCUPANCY_PERCENT {
            Some(Reason::LowOccupancy)
        } else if occupancy_rate <= MODERATE_OCCUPANCY_PERCENT
            && elapsed.is_at_least(self.recency_threshold_minutes)
        {
            Some(Reason::ModerateWithNoRecentActivity)
        } else {
            None
        }
    }

    /// Produce a result for `evaluation` when it passes the rules.
    #[must_use]
    pub fn judge(&self, evaluation: &Evaluation) -> Option<DecisionResult> {
        self.classify(evaluation.occupancy_rate, evaluation.elapsed)
            .map(|reason| DecisionResult::qualifying(evaluation, reason, None))
    }

    /// Order results nearest first, keeping input order for equal distances.
    pub fn order(results: &mut [DecisionResult]) {
        results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    }
}
