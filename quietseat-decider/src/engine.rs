//! The decision engine: validated configuration plus a clock.

use chrono::{DateTime, Utc};
use quietseat_core::{
    Clock, ConfigError, DecisionConfig, DecisionRequest, DecisionResponse, SystemClock,
};

use crate::Strategy;

/// Runs decision strategies against requests.
///
/// The engine is immutable after construction and reads the current instant
/// once per request, so every location in a request shares one `now`.
#[derive(Debug, Clone)]
pub struct DecisionEngine<C: Clock = SystemClock> {
    config: DecisionConfig,
    clock: C,
}

impl DecisionEngine<SystemClock> {
    /// Build an engine that reads the system clock.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration is out of range.
    pub fn new(config: DecisionConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> DecisionEngine<C> {
    /// Build an engine that reads time from `clock`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the configuration is out of range.
    ///
    /// # Examples
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use quietseat_core::{DecisionConfig, FixedClock};
    /// use quietseat_decider::DecisionEngine;
    ///
    /// let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap();
    /// let config = DecisionConfig {
    ///     max_radius_km: -1.0,
    ///     ..DecisionConfig::default()
    /// };
    /// assert!(DecisionEngine::with_clock(config, FixedClock(now)).is_err());
    /// ```
    pub fn with_clock(config: DecisionConfig, clock: C) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        Ok(Self { config, clock })
    }

    /// Return the validated configuration.
    #[must_use]
    pub const fn config(&self) -> &DecisionConfig {
        &self.config
    }

    /// Decide which locations in `request` to offer, using the engine clock.
    #[must_use]
    pub fn decide(&self, strategy: Strategy, request: &DecisionRequest) -> DecisionResponse {
        self.decide_at(strategy, request, self.clock.now())
    }

    /// Decide which locations in `request` to offer as of `now`.
    #[must_use]
    pub fn decide_at(
        &self,
        strategy: Strategy,
        request: &DecisionRequest,
        now: DateTime<Utc>,
    ) -> DecisionResponse {
        let evaluated = strategy.evaluate(request, &self.config, now);
        let diagnostics = evaluated.diagnostics;
        log::info!(
            "{strategy} decision: {} of {} locations qualify \
             ({} beyond radius, {} without tables, {} rejected)",
            evaluated.results.len(),
            diagnostics.candidates,
            diagnostics.beyond_radius,
            diagnostics.not_evaluable,
            diagnostics.rejected,
        );
        DecisionResponse::success(evaluated.results, diagnostics)
    }
}
