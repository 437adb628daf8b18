//! Parsing of activity timestamps supplied by callers.
//!
//! Upstream systems are inconsistent about offsets: some send RFC 3339 with
//! `Z` or an explicit offset, others send a bare local-looking date-time that
//! is in fact UTC. Every accepted form is normalised to `DateTime<Utc>`.

use chrono::{DateTime, NaiveDateTime, Utc};
use thiserror::Error;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Errors returned by [`parse_timestamp`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The value matched none of the accepted formats.
    #[error("unrecognised timestamp {value:?}; expected RFC 3339 or YYYY-MM-DD[T ]HH:MM:SS")]
    Unrecognised {
        /// Raw input.
        value: String,
    },
}

/// Parse a timestamp, treating values without an offset as UTC.
///
/// # Errors
/// Returns [`TimestampError::Unrecognised`] when the input is neither RFC 3339
/// nor one of the naive `YYYY-MM-DDTHH:MM:SS[.fff]` /
/// `YYYY-MM-DD HH:MM:SS[.fff]` forms.
///
/// # Examples
/// ```
/// use quietseat_core::parse_timestamp;
///
/// # fn main() -> Result<(), quietseat_core::TimestampError> {
/// let zoned = parse_timestamp("2024-05-01T21:00:00+09:00")?;
/// let naive = parse_timestamp("2024-05-01 12:00:00")?;
/// assert_eq!(zoned, naive);
/// # Ok(())
/// # }
/// ```
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = value.trim();
    if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(zoned.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampError::Unrecognised {
            value: value.to_owned(),
        })
}

/// Serde adapter for optional timestamps.
///
/// Deserialisation accepts `null`, a missing field (with `#[serde(default)]`),
/// or any form understood by [`parse_timestamp`]. Serialisation writes RFC 3339
/// with a `Z` suffix.
#[cfg(feature = "serde")]
pub mod optional {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialise an optional timestamp as RFC 3339 or `null`.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(at) => serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialise an optional timestamp, treating offset-less values as UTC.
    ///
    /// # Errors
    /// Fails when the value is present but unparseable.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|value| super::parse_timestamp(&value).map_err(serde::de::Error::custom))
            .transpose()
    }
}
