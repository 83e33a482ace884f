//! Utilities for parsing and formatting ISO 8601 timestamps.
//!
//! The platform emits timestamps in two shapes, with microseconds
//! (`2021-01-01T01:01:01.010000+00:00`) and without
//! (`2021-01-01T01:01:01+00:00`). [`Timestamp`] validates either shape with
//! `chrono` but stores the original text, so a decoded value re-encodes to
//! exactly the string it was decoded from.

mod error;

pub use self::error::{TimestampParseError, TimestampParseErrorType};

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError, Visitor},
    ser::{Serialize, Serializer},
};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Minimum length of an ISO 8601 datetime without microseconds.
///
/// Example: `2021-01-01T01:01:01+00:00` (25 characters).
const MIN_TIMESTAMP_LENGTH: usize = 25;

/// Representation of a timestamp as an ISO 8601 string.
///
/// # serde
///
/// Deserializes from a JSON string and serializes back as the same string.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Timestamp(String);

impl Timestamp {
    /// Parse a timestamp from an ISO 8601 datetime string.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Format`] if the string is too short
    /// to be a datetime, or [`TimestampParseErrorType::Parsing`] if chrono
    /// rejects it.
    pub fn parse(datetime: &str) -> Result<Self, TimestampParseError> {
        if datetime.len() < MIN_TIMESTAMP_LENGTH {
            return Err(TimestampParseError::too_short());
        }

        DateTime::parse_from_rfc3339(datetime).map_err(TimestampParseError::parsing)?;

        Ok(Self(datetime.to_owned()))
    }

    /// Create a timestamp from a Unix timestamp with seconds precision.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Range`] if the value is outside the
    /// range chrono can represent.
    pub fn from_secs(unix_seconds: i64) -> Result<Self, TimestampParseError> {
        DateTime::<Utc>::from_timestamp(unix_seconds, 0)
            .map(Self::from_datetime)
            .ok_or_else(TimestampParseError::out_of_range)
    }

    /// Create a timestamp from a Unix timestamp with microseconds precision.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampParseErrorType::Range`] if the value is outside the
    /// range chrono can represent.
    pub fn from_micros(unix_microseconds: i64) -> Result<Self, TimestampParseError> {
        DateTime::<Utc>::from_timestamp_micros(unix_microseconds)
            .map(Self::from_datetime)
            .ok_or_else(TimestampParseError::out_of_range)
    }

    fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let formatted = datetime
            .fixed_offset()
            .to_rfc3339_opts(SecondsFormat::Micros, false);

        Self(formatted)
    }

    /// Parsed datetime with the offset the platform sent.
    pub fn datetime(&self) -> DateTime<FixedOffset> {
        // Every constructor validated the string.
        DateTime::parse_from_rfc3339(&self.0).unwrap_or_default()
    }

    /// Total number of seconds within the timestamp.
    pub fn as_secs(&self) -> i64 {
        self.datetime().timestamp()
    }

    /// Total number of microseconds within the timestamp.
    pub fn as_micros(&self) -> i64 {
        self.datetime().timestamp_micros()
    }

    /// View the timestamp as the string it was created from.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the timestamp and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TimestampVisitor;

        impl Visitor<'_> for TimestampVisitor {
            type Value = Timestamp;

            fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
                f.write_str("an ISO 8601 datetime string")
            }

            fn visit_str<E: DeError>(self, v: &str) -> Result<Self::Value, E> {
                Timestamp::parse(v).map_err(DeError::custom)
            }
        }

        deserializer.deserialize_any(TimestampVisitor)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl TryFrom<&'_ str> for Timestamp {
    type Error = TimestampParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Timestamp> for String {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl AsRef<str> for Timestamp {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Timestamp, TimestampParseErrorType};
    use serde_test::Token;
    use std::str::FromStr;

    #[test]
    fn parse_with_microseconds() {
        let ts = Timestamp::from_str("2020-02-02T02:02:02.020000+00:00").unwrap();
        assert_eq!(ts.as_str(), "2020-02-02T02:02:02.020000+00:00");
    }

    #[test]
    fn parse_without_microseconds() {
        assert!(Timestamp::from_str("2021-01-01T01:01:01+00:00").is_ok());
    }

    #[test]
    fn parse_too_short() {
        let err = Timestamp::from_str("2021-01-01").unwrap_err();
        assert!(matches!(err.kind(), TimestampParseErrorType::Format));
    }

    #[test]
    fn parse_rejects_invalid_calendar_date() {
        let err = Timestamp::from_str("2021-02-30T01:01:01+00:00").unwrap_err();
        assert!(matches!(err.kind(), TimestampParseErrorType::Parsing));
    }

    #[test]
    fn serde_keeps_original_text() {
        let ts = Timestamp::from_str("2021-08-10T11:16:37.020000+00:00").unwrap();
        serde_test::assert_tokens(&ts, &[Token::Str("2021-08-10T11:16:37.020000+00:00")]);
    }

    #[test]
    fn from_secs_and_back() {
        let ts = Timestamp::from_secs(1_580_608_922).unwrap();
        assert_eq!(ts.as_secs(), 1_580_608_922);
        assert_eq!(ts.as_str(), "2020-02-02T02:02:02.000000+00:00");
    }

    #[test]
    fn from_micros_and_back() {
        let ts = Timestamp::from_micros(1_628_594_197_020_000).unwrap();
        assert_eq!(ts.as_micros(), 1_628_594_197_020_000);
        assert_eq!(ts.as_str(), "2021-08-10T11:16:37.020000+00:00");
    }

    #[test]
    fn parse_then_as_secs() {
        let ts = Timestamp::from_str("2021-08-10T11:16:37.020000+00:00").unwrap();
        assert_eq!(ts.as_secs(), 1_628_594_197);
    }
}
