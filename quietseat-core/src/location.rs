//! Candidate locations supplied with each decision request.

use chrono::{DateTime, Utc};
use geo::Coord;

/// A venue that may be offered to the requester.
///
/// Coordinates are WGS84 degrees with `x = longitude` and `y = latitude`.
/// `table_occupied` is expected to stay within `table_total` but overcapacity
/// is passed through untouched.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use quietseat_core::Location;
///
/// let cafe = Location::new(1, Coord { x: 126.9785, y: 37.5670 }, 10, 3).with_rating(4.5);
/// assert_eq!(cafe.table_total, 10);
/// assert!(cafe.last_event_at.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "LocationRecord", into = "LocationRecord")
)]
pub struct Location {
    /// Identifier, unique within a request.
    pub id: u64,
    /// Geospatial position.
    pub position: Coord<f64>,
    /// Average rating, conventionally `0.0..=5.0`.
    pub rating: f64,
    /// Number of tables the venue has.
    pub table_total: u32,
    /// Number of tables currently in use.
    pub table_occupied: u32,
    /// Instant of the most recent recorded activity, if any.
    pub last_event_at: Option<DateTime<Utc>>,
}

impl Location {
    /// Construct a location with no rating and no recorded activity.
    #[must_use]
    pub const fn new(id: u64, position: Coord<f64>, table_total: u32, table_occupied: u32) -> Self {
        Self {
            id,
            position,
            rating: 0.0,
            table_total,
            table_occupied,
            last_event_at: None,
        }
    }

    /// Set the rating while returning `self` for chaining.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the last activity instant while returning `self` for chaining.
    #[must_use]
    pub const fn with_last_event_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_event_at = Some(at);
        self
    }

    /// Percentage of tables in use, or `None` when the venue has no tables.
    ///
    /// The value is not clamped; overcapacity yields more than `100.0`.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use quietseat_core::Location;
    ///
    /// let origin = Coord { x: 0.0, y: 0.0 };
    /// assert_eq!(Location::new(1, origin, 10, 3).occupancy_rate(), Some(30.0));
    /// assert_eq!(Location::new(2, origin, 0, 0).occupancy_rate(), None);
    /// ```
    #[expect(
        clippy::float_arithmetic,
        reason = "occupancy is a percentage of capacity"
    )]
    #[must_use]
    pub fn occupancy_rate(&self) -> Option<f64> {
        if self.table_total == 0 {
            return None;
        }
        Some(f64::from(self.table_occupied) / f64::from(self.table_total) * 100.0)
    }
}

/// Flat wire representation of a [`Location`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct LocationRecord {
    id: u64,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    rating: f64,
    table_total: u32,
    table_occupied: u32,
    #[serde(default, with = "crate::timestamp::optional")]
    last_event_at: Option<DateTime<Utc>>,
}

#[cfg(feature = "serde")]
impl From<LocationRecord> for Location {
    fn from(record: LocationRecord) -> Self {
        Self {
            id: record.id,
            position: Coord {
                x: record.longitude,
                y: record.latitude,
            },
            rating: record.rating,
            table_total: record.table_total,
            table_occupied: record.table_occupied,
            last_event_at: record.last_event_at,
        }
    }
}

#[cfg(feature = "serde")]
impl From<Location> for LocationRecord {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            latitude: location.position.y,
            longitude: location.position.x,
            rating: location.rating,
            table_total: location.table_total,
            table_occupied: location.table_occupied,
            last_event_at: location.last_event_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(10, 3, Some(30.0))]
    #[case(5, 5, Some(100.0))]
    #[case(4, 6, Some(150.0))]
    #[case(0, 0, None)]
    #[case(0, 3, None)]
    fn occupancy_rate_is_unclamped(
        #[case] total: u32,
        #[case] occupied: u32,
        #[case] expected: Option<f64>,
    ) {
        let location = Location::new(1, Coord { x: 0.0, y: 0.0 }, total, occupied);
        assert_eq!(location.occupancy_rate(), expected);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_flat_record_with_defaults() {
        let json = r#"{"id":7,"latitude":37.567,"longitude":126.9785,"table_total":10,"table_occupied":3}"#;
        let location: Location = serde_json::from_str(json).expect("valid location");
        assert_eq!(location.id, 7);
        assert_eq!(location.position, Coord { x: 126.9785, y: 37.567 });
        assert_eq!(location.rating, 0.0);
        assert!(location.last_event_at.is_none());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn naive_timestamps_are_read_as_utc() {
        let json = r#"{"id":1,"latitude":0.0,"longitude":0.0,"table_total":1,"table_occupied":0,"last_event_at":"2024-05-01T12:00:00"}"#;
        let location: Location = serde_json::from_str(json).expect("valid location");
        let at = location.last_event_at.expect("timestamp present");
        assert_eq!(at.to_rfc3339(), "2024-05-01T12:00:00+00:00");
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn malformed_timestamps_are_rejected() {
        let json = r#"{"id":1,"latitude":0.0,"longitude":0.0,"table_total":1,"table_occupied":0,"last_event_at":"soon"}"#;
        let result = serde_json::from_str::<Location>(json);
        assert!(result.is_err());
    }
}
