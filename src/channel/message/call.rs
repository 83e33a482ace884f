use crate::{
    id::{marker::UserMarker, Id},
    util::Timestamp,
};
use serde::{Deserialize, Serialize};

/// Call associated with a [`MessageType::Call`] message.
///
/// [`MessageType::Call`]: super::MessageType::Call
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageCall {
    /// When the call ended; `null` while it is ongoing.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::util::double_option"
    )]
    pub ended_timestamp: Option<Option<Timestamp>>,
    /// Users that participated in the call.
    pub participants: Vec<Id<UserMarker>>,
}
