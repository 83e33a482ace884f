//! Messages and everything that can be attached to one.
//!
//! A message is a single flat shape; its `type` selects no variant but
//! decides which companion fields are meaningful. Those cross-field rules are
//! checked by the validation pass, never while decoding.

pub mod component;
pub mod embed;
pub mod poll;

mod activity;
mod call;
mod flags;
mod interaction;
mod kind;
mod mention;
mod reaction;
mod reference;
mod role_subscription;
mod snapshot;
mod sticker;

pub use self::{
    activity::{MessageActivity, MessageActivityType},
    call::MessageCall,
    component::Component,
    embed::Embed,
    flags::MessageFlags,
    interaction::{
        InteractionType, MessageInteraction, MessageInteractionMetadata, MessageInteractionRef,
    },
    kind::MessageType,
    mention::ChannelMention,
    poll::Poll,
    reaction::{PartialEmoji, Reaction, ReactionCountDetails},
    reference::{MessageReference, MessageReferenceType},
    role_subscription::RoleSubscriptionData,
    snapshot::{MessageSnapshot, MessageSnapshotFields},
    sticker::{MessageStickerItem, StickerFormatType},
};

use self::component::{decode_components, encode_components, ComponentContext};
use super::{Attachment, Channel};
use crate::{
    id::{
        marker::{ApplicationMarker, ChannelMarker, MessageMarker, RoleMarker, WebhookMarker},
        Id,
    },
    user::User,
    util::Timestamp,
    wire::{reader::index_path, DecodeError, ObjectReader, ObjectWriter},
};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError},
    ser::{Serialize, Serializer},
};
use serde_json::Value;

/// Levels of `referenced_message` and `triggering_interaction_metadata`
/// nesting accepted before decoding fails with
/// [`DecodeErrorType::RecursionLimitExceeded`].
///
/// [`DecodeErrorType::RecursionLimitExceeded`]: crate::wire::DecodeErrorType::RecursionLimitExceeded
pub const MAX_NESTING_DEPTH: usize = 3;

/// Text message sent in a [`Channel`].
///
/// Sequences the platform always sends (`attachments`, `embeds`,
/// `mentions`, `mention_roles`) decode to empty when absent and are always
/// encoded. `reactions` and `components` are only encoded when non-empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Rich presence activity, sent with Rich Presence-related chat embeds.
    pub activity: Option<MessageActivity>,
    /// ID of the application that sent the message, for interactions and
    /// application-owned webhooks.
    pub application_id: Option<Id<ApplicationMarker>>,
    pub attachments: Vec<Attachment>,
    pub author: User,
    /// Call associated with a [`MessageType::Call`] message.
    pub call: Option<MessageCall>,
    pub channel_id: Id<ChannelMarker>,
    pub components: Vec<Component>,
    pub content: String,
    /// When the message was last edited; `None` if it never was.
    pub edited_timestamp: Option<Timestamp>,
    pub embeds: Vec<Embed>,
    pub flags: Option<MessageFlags>,
    pub id: Id<MessageMarker>,
    /// Deprecated summary of the interaction this message responds to.
    ///
    /// Prefer [`interaction_metadata`], or [`effective_interaction`] to
    /// read whichever is present.
    ///
    /// [`effective_interaction`]: Self::effective_interaction
    /// [`interaction_metadata`]: Self::interaction_metadata
    pub interaction: Option<MessageInteraction>,
    pub interaction_metadata: Option<MessageInteractionMetadata>,
    pub kind: MessageType,
    /// Channels in other guilds mentioned by a crossposted message.
    pub mention_channels: Option<Vec<ChannelMention>>,
    pub mention_everyone: bool,
    pub mention_roles: Vec<Id<RoleMarker>>,
    pub mentions: Vec<User>,
    pub message_reference: Option<MessageReference>,
    /// Copies of forwarded messages.
    pub message_snapshots: Option<Vec<MessageSnapshot>>,
    /// Value used by the sender to confirm the message was sent.
    pub nonce: Option<Nonce>,
    pub pinned: bool,
    pub poll: Option<Poll>,
    /// Approximate position of the message in its thread.
    pub position: Option<u32>,
    pub reactions: Vec<Reaction>,
    /// Message this one replies to.
    ///
    /// `None` when the field was never fetched, `Some(None)` when the
    /// referenced message was deleted.
    pub referenced_message: Option<Option<Box<Message>>>,
    pub role_subscription_data: Option<RoleSubscriptionData>,
    pub sticker_items: Option<Vec<MessageStickerItem>>,
    /// Thread started from this message.
    pub thread: Option<Box<Channel>>,
    pub timestamp: Timestamp,
    pub tts: bool,
    pub webhook_id: Option<Id<WebhookMarker>>,
}

impl Message {
    /// Interaction the message responds to, preferring the current
    /// `interaction_metadata` over the deprecated `interaction`.
    pub fn effective_interaction(&self) -> Option<MessageInteractionRef<'_>> {
        self.interaction_metadata
            .as_ref()
            .map(MessageInteractionRef::Metadata)
            .or_else(|| self.interaction.as_ref().map(MessageInteractionRef::Legacy))
    }

    pub(crate) fn decode(value: &Value, path: &str, depth: usize) -> Result<Self, DecodeError> {
        let reader = ObjectReader::new(value, path)?;

        let interaction = reader.optional("interaction")?;
        if interaction.is_some() {
            tracing::debug!(path, "message carries the deprecated interaction field");
        }

        let interaction_metadata = match reader.get("interaction_metadata") {
            None | Some(Value::Null) => None,
            Some(metadata) => Some(MessageInteractionMetadata::decode(
                metadata,
                &reader.child("interaction_metadata"),
                0,
            )?),
        };

        let referenced_message = match reader.get("referenced_message") {
            None => None,
            Some(Value::Null) => Some(None),
            Some(referenced) => {
                let path = reader.child("referenced_message");

                if depth + 1 >= MAX_NESTING_DEPTH {
                    return Err(DecodeError::recursion_limit(path, MAX_NESTING_DEPTH));
                }

                Some(Some(Box::new(Self::decode(referenced, &path, depth + 1)?)))
            }
        };

        let thread = match reader.get("thread") {
            None | Some(Value::Null) => None,
            Some(thread) => Some(Box::new(Channel::decode(thread, &reader.child("thread"))?)),
        };

        let message_snapshots = match reader.array("message_snapshots")? {
            None => None,
            Some(items) => {
                let path = reader.child("message_snapshots");

                Some(
                    items
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            MessageSnapshot::decode(item, &index_path(&path, index))
                        })
                        .collect::<Result<Vec<_>, _>>()?,
                )
            }
        };

        Ok(Self {
            activity: reader.optional("activity")?,
            application_id: reader.optional("application_id")?,
            attachments: reader.list("attachments")?,
            author: reader.required("author")?,
            call: reader.optional("call")?,
            channel_id: reader.required("channel_id")?,
            components: decode_components(&reader, "components", ComponentContext::Message, 0)?,
            content: reader.required("content")?,
            edited_timestamp: reader.nullable("edited_timestamp")?,
            embeds: reader.list("embeds")?,
            flags: reader.optional("flags")?,
            id: reader.required("id")?,
            interaction,
            interaction_metadata,
            kind: MessageType::from(reader.discriminant()?),
            mention_channels: reader.optional("mention_channels")?,
            mention_everyone: reader.flag("mention_everyone")?,
            mention_roles: reader.list("mention_roles")?,
            mentions: reader.list("mentions")?,
            message_reference: reader.optional("message_reference")?,
            message_snapshots,
            nonce: reader.optional("nonce")?,
            pinned: reader.flag("pinned")?,
            poll: reader.optional("poll")?,
            position: reader.optional("position")?,
            reactions: reader.list("reactions")?,
            referenced_message,
            role_subscription_data: reader.optional("role_subscription_data")?,
            sticker_items: reader.optional("sticker_items")?,
            thread,
            timestamp: reader.required("timestamp")?,
            tts: reader.flag("tts")?,
            webhook_id: reader.optional("webhook_id")?,
        })
    }

    pub(crate) fn encode(&self) -> Value {
        let mut writer = ObjectWriter::new();

        if !self.components.is_empty() {
            writer.value("components", encode_components(&self.components));
        }

        if let Some(snapshots) = &self.message_snapshots {
            writer.value(
                "message_snapshots",
                Value::Array(snapshots.iter().map(MessageSnapshot::encode).collect()),
            );
        }

        match &self.referenced_message {
            None => {}
            Some(None) => {
                writer.value("referenced_message", Value::Null);
            }
            Some(Some(referenced)) => {
                writer.value("referenced_message", referenced.encode());
            }
        }

        if let Some(thread) = &self.thread {
            writer.value("thread", thread.encode());
        }

        writer
            .optional("activity", &self.activity)
            .optional("application_id", &self.application_id)
            .field("attachments", &self.attachments)
            .field("author", &self.author)
            .optional("call", &self.call)
            .field("channel_id", &self.channel_id)
            .field("content", &self.content)
            .field("edited_timestamp", &self.edited_timestamp)
            .field("embeds", &self.embeds)
            .optional("flags", &self.flags)
            .field("id", &self.id)
            .optional("interaction", &self.interaction)
            .optional("interaction_metadata", &self.interaction_metadata)
            .optional("mention_channels", &self.mention_channels)
            .field("mention_everyone", &self.mention_everyone)
            .field("mention_roles", &self.mention_roles)
            .field("mentions", &self.mentions)
            .optional("message_reference", &self.message_reference)
            .optional("nonce", &self.nonce)
            .field("pinned", &self.pinned)
            .optional("poll", &self.poll)
            .optional("position", &self.position)
            .non_empty("reactions", &self.reactions)
            .optional("role_subscription_data", &self.role_subscription_data)
            .optional("sticker_items", &self.sticker_items)
            .field("timestamp", &self.timestamp)
            .field("tts", &self.tts)
            .field("type", &self.kind)
            .optional("webhook_id", &self.webhook_id);

        writer.finish()
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        Self::decode(&value, "message", 0).map_err(DeError::custom)
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

/// Sender-chosen value echoed back on message creation.
#[derive(Clone, Debug, serde::Deserialize, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Nonce {
    Integer(i64),
    String(String),
}

#[cfg(test)]
mod tests {
    use super::{
        Message, MessageFlags, MessageInteractionRef, MessageType, Nonce, MAX_NESTING_DEPTH,
    };
    use crate::{
        channel::{message::component::Component, Channel},
        id::Id,
        user::tests::user,
        wire::DecodeErrorType,
    };
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json::{json, Value};
    use static_assertions::assert_impl_all;
    use std::fmt::Debug;

    assert_impl_all!(
        Message: Clone,
        Debug,
        DeserializeOwned,
        PartialEq,
        Send,
        Serialize,
        Sync
    );

    fn author() -> Value {
        serde_json::to_value(user()).unwrap()
    }

    fn minimal(kind: i64) -> Value {
        json!({
            "attachments": [],
            "author": author(),
            "channel_id": "2",
            "content": "hello",
            "edited_timestamp": null,
            "embeds": [],
            "id": "3",
            "mention_everyone": false,
            "mention_roles": [],
            "mentions": [],
            "pinned": false,
            "timestamp": "2021-08-10T12:18:37.000000+00:00",
            "tts": false,
            "type": kind,
        })
    }

    fn decode(value: &Value) -> Result<Message, crate::wire::DecodeError> {
        Message::decode(value, "message", 0)
    }

    #[test]
    fn minimal_round_trip() {
        let value = minimal(0);
        let message = decode(&value).unwrap();

        assert_eq!(message.kind, MessageType::Regular);
        assert_eq!(message.author, user());
        assert_eq!(message.edited_timestamp, None);
        assert_eq!(message.referenced_message, None);
        assert_eq!(message.encode(), value);
    }

    #[test]
    fn sequences_default_to_empty_and_encode_present() {
        let value = json!({
            "author": author(),
            "channel_id": "2",
            "content": "",
            "edited_timestamp": null,
            "id": "3",
            "timestamp": "2021-08-10T12:18:37.000000+00:00",
            "type": 0,
        });
        let message = decode(&value).unwrap();

        assert!(message.mentions.is_empty());
        assert!(message.attachments.is_empty());
        assert!(message.embeds.is_empty());
        assert!(message.reactions.is_empty());

        let encoded = message.encode();
        assert_eq!(encoded["mentions"], json!([]));
        assert_eq!(encoded["attachments"], json!([]));
        assert_eq!(encoded["embeds"], json!([]));
        assert!(encoded.get("reactions").is_none());
        assert!(encoded.get("components").is_none());
    }

    #[test]
    fn edited_timestamp_is_required() {
        let mut value = minimal(0);
        value.as_object_mut().unwrap().remove("edited_timestamp");

        let err = decode(&value).unwrap_err();
        assert_eq!(err.path(), "message.edited_timestamp");
    }

    #[test]
    fn author_is_required() {
        let mut value = minimal(0);
        value.as_object_mut().unwrap().remove("author");

        let err = decode(&value).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorType::MalformedField { path, actual, .. }
                if path == "message.author" && actual == "missing"
        ));
    }

    #[test]
    fn deleted_reply_is_distinct_from_unfetched() {
        let mut value = minimal(19);
        value["referenced_message"] = Value::Null;

        let message = decode(&value).unwrap();
        assert_eq!(message.kind, MessageType::Reply);
        assert_eq!(message.referenced_message, Some(None));
        assert_eq!(message.encode(), value);

        let unfetched = decode(&minimal(19)).unwrap();
        assert_eq!(unfetched.referenced_message, None);
        assert!(unfetched.encode().get("referenced_message").is_none());
    }

    #[test]
    fn referenced_message_round_trip() {
        let mut value = minimal(19);
        value["referenced_message"] = minimal(0);
        value["message_reference"] = json!({ "channel_id": "2", "message_id": "3" });

        let message = decode(&value).unwrap();
        let Some(Some(referenced)) = &message.referenced_message else {
            panic!("expected a referenced message");
        };
        assert_eq!(referenced.kind, MessageType::Regular);
        assert_eq!(message.encode(), value);
    }

    #[test]
    fn referenced_message_nesting_is_capped() {
        let mut value = minimal(19);
        for _ in 0..MAX_NESTING_DEPTH {
            let mut outer = minimal(19);
            outer["referenced_message"] = value;
            value = outer;
        }

        let err = decode(&value).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorType::RecursionLimitExceeded { depth, .. } if *depth == MAX_NESTING_DEPTH
        ));
    }

    #[test]
    fn unknown_type_is_preserved() {
        for raw in [255, 70_000, -1] {
            let value = minimal(raw);
            let message = decode(&value).unwrap();

            assert_eq!(message.kind, MessageType::Unknown(raw));
            assert_eq!(message.encode()["type"], json!(raw));
        }
    }

    #[test]
    fn unreadable_type() {
        let mut value = minimal(0);
        value["type"] = json!("reply");

        assert!(matches!(
            decode(&value).unwrap_err().kind(),
            DecodeErrorType::UnrecognizedDiscriminant { .. }
        ));
    }

    #[test]
    fn unknown_flag_bits_round_trip() {
        let mut value = minimal(0);
        value["flags"] = json!((1_u64 << 33) | 32);

        let message = decode(&value).unwrap();
        assert!(message.flags.unwrap().contains(MessageFlags::HAS_THREAD));
        assert_eq!(message.encode(), value);
    }

    #[test]
    fn interaction_metadata_is_preferred() {
        let mut value = minimal(20);
        value["interaction"] = json!({
            "id": "7",
            "name": "ping",
            "type": 2,
            "user": author(),
        });

        let legacy = decode(&value).unwrap();
        let Some(MessageInteractionRef::Legacy(interaction)) = legacy.effective_interaction() else {
            panic!("expected the legacy interaction");
        };
        assert_eq!(interaction.name, "ping");

        value["interaction_metadata"] = json!({
            "authorizing_integration_owners": {},
            "id": "8",
            "type": 2,
            "user": author(),
        });
        let both = decode(&value).unwrap();

        let effective = both.effective_interaction().unwrap();
        assert!(matches!(effective, MessageInteractionRef::Metadata(_)));
        assert_eq!(effective.id(), Id::new(8));
        assert_eq!(both.encode(), value);
    }

    #[test]
    fn thread_and_components() {
        let mut value = minimal(0);
        value["flags"] = json!(32);
        value["thread"] = json!({ "type": 11, "id": "3", "name": "t", "applied_tags": [] });
        value["components"] = json!([{
            "type": 1,
            "components": [{ "type": 2, "style": 5, "url": "https://example.com" }],
        }]);
        value["nonce"] = json!("abc");

        let message = decode(&value).unwrap();
        assert!(matches!(message.thread.as_deref(), Some(Channel::PublicThread(_))));
        assert!(matches!(message.components[0], Component::ActionRow(_)));
        assert_eq!(message.nonce, Some(Nonce::String("abc".to_owned())));
        assert_eq!(message.encode(), value);
    }

    #[test]
    fn component_errors_carry_message_path() {
        let mut value = minimal(0);
        value["components"] = json!([{
            "type": 1,
            "components": [{}, { "type": 2, "style": 1, "url": "https://example.com" }],
        }]);

        let err = decode(&value).unwrap_err();
        assert_eq!(err.path(), "message.components[0].components[0].type");

        value["components"][0]["components"]
            .as_array_mut()
            .unwrap()
            .remove(0);
        let err = decode(&value).unwrap_err();
        assert_eq!(err.path(), "message.components[0].components[0].style");
    }

    #[test]
    fn reactions_poll_and_snapshots() {
        let mut value = minimal(0);
        value["reactions"] = json!([{
            "count": 1,
            "emoji": { "id": null, "name": "👍" },
            "me": true,
        }]);
        value["poll"] = json!({
            "allow_multiselect": true,
            "answers": [{ "answer_id": 1, "poll_media": { "text": "a" } }],
            "expiry": "2021-08-11T12:18:37.000000+00:00",
            "layout_type": 1,
            "question": { "text": "q" },
        });
        value["message_snapshots"] = json!([{
            "message": {
                "attachments": [],
                "content": "fwd",
                "edited_timestamp": null,
                "embeds": [],
                "mention_roles": [],
                "mentions": [],
                "timestamp": "2021-08-10T12:18:37.000000+00:00",
                "type": 0,
            },
        }]);

        let message = decode(&value).unwrap();
        assert_eq!(message.reactions.len(), 1);
        assert!(message.poll.as_ref().unwrap().allow_multiselect);
        assert_eq!(message.message_snapshots.as_ref().unwrap().len(), 1);
        assert_eq!(message.encode(), value);
    }

    #[test]
    fn nonce_accepts_integers() {
        let mut value = minimal(0);
        value["nonce"] = json!(12345);

        assert_eq!(decode(&value).unwrap().nonce, Some(Nonce::Integer(12345)));
    }

    #[test]
    fn serde_impls_route_through_codec() {
        let value = minimal(0);
        let message: Message = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(serde_json::to_value(&message).unwrap(), value);
    }
}
