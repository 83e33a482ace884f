use crate::id::{
    marker::{ChannelMarker, GuildMarker, MessageMarker},
    Id,
};
use serde::{Deserialize, Serialize};

/// Origin of a reply, crosspost, pin, or forwarded message.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<Id<ChannelMarker>>,
    /// Whether to error when the referenced message doesn't exist.
    ///
    /// Only meaningful when sending a message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_if_not_exists: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild_id: Option<Id<GuildMarker>>,
    /// Absent means [`MessageReferenceType::Default`].
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageReferenceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<Id<MessageMarker>>,
}

/// How a message reference should be interpreted.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum MessageReferenceType {
    /// Standard reference used by replies.
    #[default]
    Default,
    /// Reference used to point to a message at a point in time.
    Forward,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for MessageReferenceType {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Default,
            1 => Self::Forward,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<MessageReferenceType> for i64 {
    fn from(value: MessageReferenceType) -> Self {
        match value {
            MessageReferenceType::Default => 0,
            MessageReferenceType::Forward => 1,
            MessageReferenceType::Unknown(unknown) => unknown,
        }
    }
}
