//! Time elapsed since a location last saw activity.
//!
//! A missing timestamp means no activity has ever been observed. Rather than
//! encoding that as an infinite number of minutes, [`Elapsed::Never`] keeps the
//! case explicit; consumers decide how it saturates.

use chrono::{DateTime, Utc};

const MILLIS_PER_MINUTE: f64 = 60_000.0;

/// Elapsed time between an activity timestamp and the evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Elapsed {
    /// Whole and fractional minutes since the last event. Never negative.
    Minutes(f64),
    /// No event was ever recorded.
    Never,
}

impl Elapsed {
    /// Return the elapsed minutes, or `None` when no event was recorded.
    ///
    /// # Examples
    /// ```
    /// use quietseat_core::Elapsed;
    ///
    /// assert_eq!(Elapsed::Minutes(12.5).minutes(), Some(12.5));
    /// assert_eq!(Elapsed::Never.minutes(), None);
    /// ```
    #[must_use]
    pub const fn minutes(self) -> Option<f64> {
        match self {
            Self::Minutes(minutes) => Some(minutes),
            Self::Never => None,
        }
    }

    /// Report whether at least `threshold_minutes` have passed.
    ///
    /// [`Elapsed::Never`] satisfies every threshold.
    #[must_use]
    pub const fn is_at_least(self, threshold_minutes: f64) -> bool {
        match self {
            Self::Minutes(minutes) => minutes >= threshold_minutes,
            Self::Never => true,
        }
    }
}

/// Source of the current instant.
///
/// Implementations must be thread-safe so an engine can be shared across
/// request handlers.
pub trait Clock: Send + Sync {
    /// Return the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// [`Clock`] backed by the system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// [`Clock`] pinned to a single instant.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use quietseat_core::{Clock, FixedClock};
///
/// let instant = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap();
/// assert_eq!(FixedClock(instant).now(), instant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Compute the time elapsed between `last_event_at` and `now`.
///
/// Timestamps later than `now` count as zero minutes ago.
///
/// # Examples
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use quietseat_core::{Elapsed, minutes_since};
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).single().unwrap();
/// let earlier = now - Duration::minutes(90);
/// assert_eq!(minutes_since(now, Some(earlier)), Elapsed::Minutes(90.0));
/// assert_eq!(minutes_since(now, None), Elapsed::Never);
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "millisecond deltas convert to fractional minutes"
)]
#[must_use]
pub fn minutes_since(now: DateTime<Utc>, last_event_at: Option<DateTime<Utc>>) -> Elapsed {
    let Some(at) = last_event_at else {
        return Elapsed::Never;
    };
    let millis = now.signed_duration_since(at).num_milliseconds();
    if millis < 0 {
        log::debug!("last event at {at} lies after {now}; treating it as current activity");
        return Elapsed::Minutes(0.0);
    }
    Elapsed::Minutes(millis as f64 / MILLIS_PER_MINUTE)
}

/// Report whether a location has been quiet for at least `threshold_minutes`.
///
/// A missing timestamp always counts as quiet.
#[must_use]
pub fn has_no_recent_activity(
    now: DateTime<Utc>,
    last_event_at: Option<DateTime<Utc>>,
    threshold_minutes: f64,
) -> bool {
    minutes_since(now, last_event_at).is_at_least(threshold_minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::{fixture, rstest};

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
            .single()
            .expect("valid instant")
    }

    #[rstest]
    fn missing_timestamp_is_never(now: DateTime<Utc>) {
        assert_eq!(minutes_since(now, None), Elapsed::Never);
    }

    #[rstest]
    fn fractional_minutes_are_kept(now: DateTime<Utc>) {
        let at = now - Duration::seconds(90);
        assert_eq!(minutes_since(now, Some(at)), Elapsed::Minutes(1.5));
    }

    #[rstest]
    fn future_timestamps_clamp_to_zero(now: DateTime<Utc>) {
        let at = now + Duration::minutes(5);
        assert_eq!(minutes_since(now, Some(at)), Elapsed::Minutes(0.0));
    }

    #[rstest]
    #[case(Some(14), false)]
    #[case(Some(15), true)]
    #[case(Some(240), true)]
    #[case(None, true)]
    fn quiet_threshold_is_inclusive(
        now: DateTime<Utc>,
        #[case] minutes_ago: Option<i64>,
        #[case] expected: bool,
    ) {
        let at = minutes_ago.map(|minutes| now - Duration::minutes(minutes));
        assert_eq!(has_no_recent_activity(now, at, 15.0), expected);
    }

    #[rstest]
    fn fixed_clock_returns_its_instant(now: DateTime<Utc>) {
        assert_eq!(FixedClock(now).now(), now);
    }
}
