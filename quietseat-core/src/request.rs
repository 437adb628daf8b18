//! Decision requests and their boundary validation.

use std::collections::HashSet;

use geo::Coord;
use thiserror::Error;

use crate::Location;

/// Parameters for a single decision.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use quietseat_core::{DecisionRequest, Location};
///
/// let request = DecisionRequest::new(
///     Coord { x: 126.9780, y: 37.5665 },
///     vec![Location::new(1, Coord { x: 126.9785, y: 37.5670 }, 10, 3)],
/// );
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RequestRecord", into = "RequestRecord")
)]
pub struct DecisionRequest {
    /// Requester position used as the origin of every distance.
    pub origin: Coord<f64>,
    /// Candidate locations, in caller order.
    pub locations: Vec<Location>,
}

/// Reasons a [`DecisionRequest`] is rejected before reaching a strategy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestValidationError {
    /// The requester position is not a valid WGS84 coordinate.
    #[error("requester position ({latitude}, {longitude}) is not a valid coordinate")]
    InvalidOrigin {
        /// Supplied latitude.
        latitude: f64,
        /// Supplied longitude.
        longitude: f64,
    },
    /// A location position is not a valid WGS84 coordinate.
    #[error("location {id} position ({latitude}, {longitude}) is not a valid coordinate")]
    InvalidPosition {
        /// Identifier of the offending location.
        id: u64,
        /// Supplied latitude.
        latitude: f64,
        /// Supplied longitude.
        longitude: f64,
    },
    /// A location rating is NaN or infinite.
    #[error("location {id} rating {rating} is not finite")]
    NonFiniteRating {
        /// Identifier of the offending location.
        id: u64,
        /// Supplied rating.
        rating: f64,
    },
    /// Two locations share an identifier.
    #[error("location id {id} appears more than once")]
    DuplicateId {
        /// Repeated identifier.
        id: u64,
    },
}

impl DecisionRequest {
    /// Build a request from an origin and candidate locations.
    #[must_use]
    pub const fn new(origin: Coord<f64>, locations: Vec<Location>) -> Self {
        Self { origin, locations }
    }

    /// Check the request is well formed.
    ///
    /// Overcapacity (`table_occupied > table_total`) and out-of-range but
    /// finite ratings are accepted; strategies treat them proportionally.
    ///
    /// # Errors
    /// Returns the first [`RequestValidationError`] encountered, checking the
    /// origin first and then locations in order.
    pub fn validate(&self) -> Result<(), RequestValidationError> {
        if !is_valid_coord(self.origin) {
            return Err(RequestValidationError::InvalidOrigin {
                latitude: self.origin.y,
                longitude: self.origin.x,
            });
        }
        let mut seen = HashSet::with_capacity(self.locations.len());
        for location in &self.locations {
            if !is_valid_coord(location.position) {
                return Err(RequestValidationError::InvalidPosition {
                    id: location.id,
                    latitude: location.position.y,
                    longitude: location.position.x,
                });
            }
            if !location.rating.is_finite() {
                return Err(RequestValidationError::NonFiniteRating {
                    id: location.id,
                    rating: location.rating,
                });
            }
            if !seen.insert(location.id) {
                return Err(RequestValidationError::DuplicateId { id: location.id });
            }
        }
        Ok(())
    }
}

fn is_valid_coord(coord: Coord<f64>) -> bool {
    coord.x.is_finite()
        && coord.y.is_finite()
        && (-90.0..=90.0).contains(&coord.y)
        && (-180.0..=180.0).contains(&coord.x)
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
struct RequesterRecord {
    latitude: f64,
    longitude: f64,
}

#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct RequestRecord {
    requester: RequesterRecord,
    #[serde(default)]
    locations: Vec<Location>,
}

#[cfg(feature = "serde")]
impl From<RequestRecord> for DecisionRequest {
    fn from(record: RequestRecord) -> Self {
        Self {
            origin: Coord {
                x: record.requester.longitude,
                y: record.requester.latitude,
            },
            locations: record.locations,
        }
    }
}

#[cfg(feature = "serde")]
impl From<DecisionRequest> for RequestRecord {
    fn from(request: DecisionRequest) -> Self {
        Self {
            requester: RequesterRecord {
                latitude: request.origin.y,
                longitude: request.origin.x,
            },
            locations: request.locations,
        }
    }
}
