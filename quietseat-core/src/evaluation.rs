//! Derived per-location values shared by every strategy.

use chrono::{DateTime, Utc};
use geo::Coord;

use crate::{Elapsed, Location, haversine_km, minutes_since};

/// Values derived from one location for one request.
///
/// An evaluation only exists for locations inside the radius and with at
/// least one table, so `occupancy_rate` is always defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Identifier of the evaluated location.
    pub id: u64,
    /// Unrounded distance from the requester in kilometres.
    pub distance_km: f64,
    /// Unrounded, unclamped occupancy percentage.
    pub occupancy_rate: f64,
    /// Rating copied from the location.
    pub rating: f64,
    /// Time since the last recorded activity.
    pub elapsed: Elapsed,
}

/// Why a location produced no evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Exclusion {
    /// The location lies further than the configured radius.
    BeyondRadius {
        /// Measured distance in kilometres.
        distance_km: f64,
    },
    /// The location has no tables, so occupancy is undefined.
    NotEvaluable,
}

impl Evaluation {
    /// Evaluate `location` relative to `origin` at instant `now`.
    ///
    /// The radius check runs first, so a tableless venue outside the radius
    /// reports [`Exclusion::BeyondRadius`].
    ///
    /// # Errors
    /// Returns the [`Exclusion`] that removes the location from consideration.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use geo::Coord;
    /// use quietseat_core::{Elapsed, Evaluation, Location};
    ///
    /// let origin = Coord { x: 126.9780, y: 37.5665 };
    /// let cafe = Location::new(1, Coord { x: 126.9785, y: 37.5670 }, 10, 3);
    /// let evaluation = Evaluation::assess(&cafe, origin, Utc::now(), 1.0).unwrap();
    /// assert_eq!(evaluation.occupancy_rate, 30.0);
    /// assert_eq!(evaluation.elapsed, Elapsed::Never);
    /// ```
    pub fn assess(
        location: &Location,
        origin: Coord<f64>,
        now: DateTime<Utc>,
        max_radius_km: f64,
    ) -> Result<Self, Exclusion> {
        let distance_km = haversine_km(origin, location.position);
        if distance_km > max_radius_km {
            return Err(Exclusion::BeyondRadius { distance_km });
        }
        let occupancy_rate = location.occupancy_rate().ok_or(Exclusion::NotEvaluable)?;
        Ok(Self {
            id: location.id,
            distance_km,
            occupancy_rate,
            rating: location.rating,
            elapsed: minutes_since(now, location.last_event_at),
        })
    }
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

    const ORIGIN: Coord<f64> = Coord {
        x: 126.9780,
        y: 37.5665,
    };

    #[rstest]
    fn far_locations_are_beyond_radius(now: DateTime<Utc>) {
        let far = Location::new(1, Coord { x: 127.0276, y: 37.4979 }, 10, 0);
        let exclusion = Evaluation::assess(&far, ORIGIN, now, 1.0).expect_err("too far");
        assert!(matches!(exclusion, Exclusion::BeyondRadius { distance_km } if distance_km > 8.0));
    }

    #[rstest]
    fn radius_check_precedes_capacity_check(now: DateTime<Utc>) {
        let far_and_empty = Location::new(1, Coord { x: 127.0276, y: 37.4979 }, 0, 0);
        let exclusion =
            Evaluation::assess(&far_and_empty, ORIGIN, now, 1.0).expect_err("excluded");
        assert!(matches!(exclusion, Exclusion::BeyondRadius { .. }));
    }

    #[rstest]
    fn tableless_locations_are_not_evaluable(now: DateTime<Utc>) {
        let empty = Location::new(2, ORIGIN, 0, 0);
        assert_eq!(
            Evaluation::assess(&empty, ORIGIN, now, 1.0),
            Err(Exclusion::NotEvaluable)
        );
    }

    #[rstest]
    fn evaluation_carries_rating_and_recency(now: DateTime<Utc>) {
        let cafe = Location::new(3, ORIGIN, 4, 1)
            .with_rating(3.5)
            .with_last_event_at(now - Duration::minutes(30));
        let evaluation = Evaluation::assess(&cafe, ORIGIN, now, 1.0).expect("evaluable");
        assert_eq!(evaluation.id, 3);
        assert_eq!(evaluation.distance_km, 0.0);
        assert_eq!(evaluation.occupancy_rate, 25.0);
        assert_eq!(evaluation.rating, 3.5);
        assert_eq!(evaluation.elapsed, Elapsed::Minutes(30.0));
    }
}
