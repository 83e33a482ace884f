use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minutes of inactivity after which a thread is archived.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum AutoArchiveDuration {
    Hour,
    Day,
    ThreeDays,
    Week,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl AutoArchiveDuration {
    /// Retrieve the length of the duration in minutes, used by the API.
    pub const fn number(self) -> i64 {
        match self {
            Self::Hour => 60,
            Self::Day => 1440,
            Self::ThreeDays => 4320,
            Self::Week => 10080,
            Self::Unknown(value) => value,
        }
    }
}

impl From<i64> for AutoArchiveDuration {
    fn from(value: i64) -> Self {
        match value {
            60 => Self::Hour,
            1440 => Self::Day,
            4320 => Self::ThreeDays,
            10080 => Self::Week,
            value => Self::Unknown(value),
        }
    }
}

impl From<AutoArchiveDuration> for i64 {
    fn from(value: AutoArchiveDuration) -> Self {
        value.number()
    }
}

impl From<AutoArchiveDuration> for Duration {
    fn from(value: AutoArchiveDuration) -> Self {
        let minutes = u64::try_from(value.number()).unwrap_or_default();

        Self::from_secs(minutes.saturating_mul(60))
    }
}
