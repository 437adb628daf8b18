//! Great-circle distance on a spherical earth.
//!
//! Coordinates follow the `geo` convention: `x` is longitude and `y` is
//! latitude, both in degrees.

use geo::{Coord, Distance, HaversineMeasure, Point};

/// Earth radius used by every distance computation, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Return the haversine distance between `origin` and `target` in kilometres.
///
/// The result is finite and non-negative for finite input, symmetric in its
/// arguments, and exactly `0.0` for identical points. The sphere has radius
/// [`EARTH_RADIUS_KM`] rather than `geo`'s mean earth radius in metres.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use quietseat_core::haversine_km;
///
/// let seoul = Coord { x: 126.9780, y: 37.5665 };
/// assert_eq!(haversine_km(seoul, seoul), 0.0);
/// ```
#[must_use]
pub fn haversine_km(origin: Coord<f64>, target: Coord<f64>) -> f64 {
    HaversineMeasure::new(EARTH_RADIUS_KM).distance(Point::from(origin), Point::from(target))
}
