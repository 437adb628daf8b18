//! Test-only fixtures shared by unit, behaviour and property tests across
//! the workspace.

use chrono::{DateTime, TimeZone, Utc};
use geo::Coord;

use crate::{DecisionRequest, FixedClock, Location};

/// Seoul City Hall, the requester position used throughout the tests.
pub const SEOUL_ORIGIN: Coord<f64> = Coord {
    x: 126.9780,
    y: 37.5665,
};

/// A venue roughly 70 metres north-east of [`SEOUL_ORIGIN`].
pub const NEARBY: Coord<f64> = Coord {
    x: 126.9785,
    y: 37.5670,
};

/// Gangnam station, about 9 km from [`SEOUL_ORIGIN`].
pub const GANGNAM: Coord<f64> = Coord {
    x: 127.0276,
    y: 37.4979,
};

/// Fixed evaluation instant: 2024-05-01 12:00:00 UTC.
///
/// # Panics
/// Never in practice; the literal date is valid.
#[must_use]
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("reference instant is a valid UTC date"))
}

/// Clock pinned to [`reference_now`].
#[must_use]
pub fn reference_clock() -> FixedClock {
    FixedClock(reference_now())
}

/// Location at [`SEOUL_ORIGIN`] with `occupied` of `total` tables in use.
#[must_use]
pub const fn venue(id: u64, total: u32, occupied: u32) -> Location {
    Location::new(id, SEOUL_ORIGIN, total, occupied)
}

/// Location at [`SEOUL_ORIGIN`] with the given occupancy percentage of 100
/// tables.
#[must_use]
pub const fn venue_at_percent(id: u64, percent: u32) -> Location {
    venue(id, 100, percent)
}

/// Location whose last activity was `minutes_ago` before [`reference_now`].
#[must_use]
pub fn active_minutes_ago(location: Location, minutes_ago: i64) -> Location {
    location.with_last_event_at(reference_now() - chrono::Duration::minutes(minutes_ago))
}

/// Request from [`SEOUL_ORIGIN`] containing `locations`.
#[must_use]
pub const fn request_from_origin(locations: Vec<Location>) -> DecisionRequest {
    DecisionRequest::new(SEOUL_ORIGIN, locations)
}
