//! Failures turning text or a unix time into a [`Timestamp`].
//!
//! [`Timestamp`]: super::Timestamp

use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// A message or channel timestamp was rejected.
#[derive(Debug)]
pub struct TimestampParseError {
    kind: TimestampParseErrorType,
    source: Option<chrono::ParseError>,
}

impl TimestampParseError {
    pub(crate) const fn too_short() -> Self {
        Self {
            kind: TimestampParseErrorType::Format,
            source: None,
        }
    }

    pub(crate) const fn out_of_range() -> Self {
        Self {
            kind: TimestampParseErrorType::Range,
            source: None,
        }
    }

    pub(crate) const fn parsing(source: chrono::ParseError) -> Self {
        Self {
            kind: TimestampParseErrorType::Parsing,
            source: Some(source),
        }
    }

    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &TimestampParseErrorType {
        &self.kind
    }

    /// Error chrono reported, for [`TimestampParseErrorType::Parsing`] only.
    pub const fn chrono_error(&self) -> Option<&chrono::ParseError> {
        self.source.as_ref()
    }
}

impl Display for TimestampParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.kind {
            TimestampParseErrorType::Format => {
                f.write_str("timestamp is too short to hold a date and a time")
            }
            TimestampParseErrorType::Parsing => f.write_str("timestamp is not valid rfc 3339"),
            TimestampParseErrorType::Range => {
                f.write_str("unix time is outside the supported calendar range")
            }
        }
    }
}

impl Error for TimestampParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|source| source as &(dyn Error + 'static))
    }
}

/// Why a [`TimestampParseError`] was returned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum TimestampParseErrorType {
    /// Input can't contain both a date and a time.
    Format,
    /// chrono rejected the input.
    Parsing,
    /// Unix time has no calendar date.
    Range,
}
