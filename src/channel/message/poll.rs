//! Polls attached to user-authored messages.

use super::PartialEmoji;
use crate::util::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Poll {
    pub allow_multiselect: bool,
    /// Each answer, in display order.
    pub answers: Vec<PollAnswer>,
    /// When the poll ends; `null` for polls that never expire.
    pub expiry: Option<Timestamp>,
    pub layout_type: PollLayoutType,
    pub question: PollMedia,
    /// Vote counts, absent until the platform has tallied them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<PollResults>,
}

/// Text and emoji of a question or an answer.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PollMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PollAnswer {
    pub answer_id: u8,
    pub poll_media: PollMedia,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PollResults {
    pub answer_counts: Vec<PollAnswerCount>,
    /// Whether the votes have been precisely counted.
    pub is_finalized: bool,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PollAnswerCount {
    pub count: u32,
    /// ID of the answer, matching [`PollAnswer::answer_id`].
    pub id: u8,
    /// Whether the current user voted for this answer.
    pub me_voted: bool,
}

/// Layout of a poll.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum PollLayoutType {
    #[default]
    Default,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for PollLayoutType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Default,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<PollLayoutType> for i64 {
    fn from(value: PollLayoutType) -> Self {
        match value {
            PollLayoutType::Default => 1,
            PollLayoutType::Unknown(unknown) => unknown,
        }
    }
}
