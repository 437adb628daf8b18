//! Immutable decision configuration.
//!
//! A [`DecisionConfig`] is built once, validated, and handed to the engine.
//! Strategies only ever read it.

use thiserror::Error;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Coefficients applied to the four normalised sub-scores.
///
/// The weights are expected to sum to `1.0`. They are not renormalised when
/// they do not; [`ScoreWeights::sums_to_one`] lets callers detect that.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreWeights {
    /// Weight of proximity to the requester.
    pub distance: f64,
    /// Weight of free capacity.
    pub occupancy: f64,
    /// Weight of the venue rating.
    pub rating: f64,
    /// Weight of time since the last activity.
    pub recency: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            distance: 0.25,
            occupancy: 0.35,
            rating: 0.20,
            recency: 0.20,
        }
    }
}

impl ScoreWeights {
    /// Sum of all four weights.
    #[expect(clippy::float_arithmetic, reason = "weights are summed")]
    #[must_use]
    pub fn total(self) -> f64 {
        self.distance + self.occupancy + self.rating + self.recency
    }

    /// Report whether the weights sum to `1.0` within a small tolerance.
    #[expect(
        clippy::float_arithmetic,
        reason = "comparison against unity uses an absolute tolerance"
    )]
    #[must_use]
    pub fn sums_to_one(self) -> bool {
        (self.total() - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }

    fn validate(self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("distance", self.distance),
            ("occupancy", self.occupancy),
            ("rating", self.rating),
            ("recency", self.recency),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Tunable thresholds shared by both strategies.
///
/// # Examples
/// ```
/// use quietseat_core::DecisionConfig;
///
/// let config = DecisionConfig::default();
/// assert_eq!(config.max_radius_km, 1.0);
/// assert_eq!(config.recency_threshold_minutes, 15.0);
/// assert_eq!(config.score_threshold, 50.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionConfig {
    /// Locations further than this from the requester are never considered.
    pub max_radius_km: f64,
    /// Minutes of inactivity after which a location counts as quiet.
    pub recency_threshold_minutes: f64,
    /// Minimum composite score accepted by the scoring strategy.
    pub score_threshold: f64,
    /// Sub-score weights used by the scoring strategy.
    pub weights: ScoreWeights,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            max_radius_km: 1.0,
            recency_threshold_minutes: 15.0,
            score_threshold: 50.0,
            weights: ScoreWeights::default(),
        }
    }
}

/// Errors returned by [`DecisionConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The radius must be a positive, finite distance.
    #[error("max radius must be a positive finite number of kilometres, got {value}")]
    InvalidRadius {
        /// Supplied radius.
        value: f64,
    },
    /// A threshold was negative or not finite.
    #[error("{name} must be a non-negative finite number, got {value}")]
    InvalidThreshold {
        /// Name of the threshold.
        name: &'static str,
        /// Supplied value.
        value: f64,
    },
    /// A weight was negative or not finite.
    #[error("{name} weight must be a non-negative finite number, got {value}")]
    InvalidWeight {
        /// Name of the weight.
        name: &'static str,
        /// Supplied value.
        value: f64,
    },
}

impl DecisionConfig {
    /// Validate the configuration and return a copy.
    ///
    /// Weights that do not sum to `1.0` are accepted and logged; scores then
    /// scale with the weight total.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the radius is not positive, a threshold is
    /// negative, or any value is not finite.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !self.max_radius_km.is_finite() || self.max_radius_km <= 0.0 {
            return Err(ConfigError::InvalidRadius {
                value: self.max_radius_km,
            });
        }
        for (name, value) in [
            ("recency threshold", self.recency_threshold_minutes),
            ("score threshold", self.score_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        self.weights.validate()?;
        if !self.weights.sums_to_one() {
            log::warn!(
                "score weights sum to {total} rather than 1.0; composite scores are not renormalised",
                total = self.weights.total()
            );
        }
        Ok(self)
    }
}
