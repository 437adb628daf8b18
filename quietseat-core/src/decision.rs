//! Decision results and the response envelope.

use crate::{Evaluation, round_to};

/// Why a location qualified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Reason {
    /// Occupancy is at most 40%.
    LowOccupancy,
    /// Occupancy is at most 60% and nothing has happened recently.
    ModerateWithNoRecentActivity,
    /// The composite score met the acceptance threshold.
    HighScore,
}

impl Reason {
    /// Return the reason as its wire label.
    ///
    /// # Examples
    /// ```
    /// use quietseat_core::Reason;
    ///
    /// assert_eq!(Reason::LowOccupancy.as_str(), "low_occupancy");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LowOccupancy => "low_occupancy",
            Self::ModerateWithNoRecentActivity => "moderate_with_no_recent_activity",
            Self::HighScore => "high_score",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome for one qualifying location.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionResult {
    /// Identifier copied from the input location.
    pub id: u64,
    /// Distance from the requester, rounded to two decimals.
    pub distance_km: f64,
    /// Occupancy percentage, rounded to one decimal.
    pub occupancy_rate: f64,
    /// Whether the location passed the strategy's acceptance test.
    pub qualifies: bool,
    /// Why the location qualified.
    pub reason: Reason,
    /// Composite score, present only for the scoring strategy.
    pub score: Option<f64>,
}

impl DecisionResult {
    /// Build a qualifying result from an evaluation, rounding for presentation.
    #[must_use]
    pub fn qualifying(evaluation: &Evaluation, reason: Reason, score: Option<f64>) -> Self {
        Self {
            id: evaluation.id,
            distance_km: round_to(evaluation.distance_km, 2),
            occupancy_rate: round_to(evaluation.occupancy_rate, 1),
            qualifies: true,
            reason,
            score,
        }
    }
}

/// Per-request bookkeeping about excluded locations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Locations supplied in the request.
    pub candidates: usize,
    /// Locations dropped for lying outside the radius.
    pub beyond_radius: usize,
    /// Locations dropped for having no tables.
    pub not_evaluable: usize,
    /// Evaluated locations the strategy declined.
    pub rejected: usize,
}

/// Envelope returned for every completed decision.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionResponse {
    /// Always `true` once the engine has produced results.
    pub success: bool,
    /// Number of entries in `results`.
    pub count: usize,
    /// Ordered qualifying locations.
    pub results: Vec<DecisionResult>,
    /// Exclusion counts for the request.
    pub diagnostics: Diagnostics,
}

impl DecisionResponse {
    /// Wrap ordered results in a successful response.
    #[must_use]
    pub fn success(results: Vec<DecisionResult>, diagnostics: Diagnostics) -> Self {
        Self {
            success: true,
            count: results.len(),
            results,
            diagnostics,
        }
    }
}
