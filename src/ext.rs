//! Extension traits for model types.
//!
//! The model structs stay plain data; convenience lookups that combine
//! several fields live here so they can be brought into scope on demand.

use crate::{
    channel::{message::Message, Channel},
    id::{marker::UserMarker, Id},
};

// ===========================================================================
// MessageExt
// ===========================================================================

/// Convenience methods on [`Message`].
pub trait MessageExt {
    /// Unix-millisecond timestamp derived from the message snowflake.
    fn snowflake_timestamp_ms(&self) -> u64;

    /// Whether a given user ID is mentioned in the message.
    fn mentions_user(&self, user_id: Id<UserMarker>) -> bool;

    /// Whether the message replies to another one, deleted or not.
    fn is_reply(&self) -> bool;
}

impl MessageExt for Message {
    fn snowflake_timestamp_ms(&self) -> u64 {
        self.id.timestamp()
    }

    fn mentions_user(&self, user_id: Id<UserMarker>) -> bool {
        self.mentions.iter().any(|user| user.id == user_id)
    }

    fn is_reply(&self) -> bool {
        self.kind.has_reference() && self.message_reference.is_some()
    }
}

// ===========================================================================
// ChannelExt
// ===========================================================================

/// Convenience methods on [`Channel`].
pub trait ChannelExt {
    /// Unix-millisecond timestamp derived from the channel snowflake.
    fn created_at_ms(&self) -> u64;

    /// Markup that renders as a link to the channel, e.g. `<#123>`.
    fn mention(&self) -> String;
}

impl ChannelExt for Channel {
    fn created_at_ms(&self) -> u64 {
        self.id().timestamp()
    }

    fn mention(&self) -> String {
        format!("<#{}>", self.id())
    }
}
