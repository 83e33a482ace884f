use super::{
    component::{decode_components, encode_components, Component, ComponentContext},
    Embed, MessageFlags, MessageStickerItem, MessageType,
};
use crate::{
    channel::Attachment,
    id::{
        marker::{GuildMarker, RoleMarker},
        Id,
    },
    user::User,
    util::Timestamp,
    wire::{DecodeError, ObjectReader, ObjectWriter},
};
use serde_json::Value;

/// Copy of a forwarded message, taken when it was forwarded.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageSnapshot {
    /// Guild of the forwarded message.
    ///
    /// Deprecated by the platform and not reliably sent; kept verbatim when
    /// present and never inferred.
    pub guild_id: Option<Id<GuildMarker>>,
    pub message: MessageSnapshotFields,
}

impl MessageSnapshot {
    pub(crate) fn decode(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let reader = ObjectReader::new(value, path)?;

        Ok(Self {
            guild_id: reader.optional("guild_id")?,
            message: MessageSnapshotFields::decode(&reader.object("message")?)?,
        })
    }

    pub(crate) fn encode(&self) -> Value {
        ObjectWriter::new()
            .optional("guild_id", &self.guild_id)
            .value("message", self.message.encode())
            .finish()
    }
}

/// Subset of message fields captured by a snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageSnapshotFields {
    pub attachments: Vec<Attachment>,
    pub components: Vec<Component>,
    pub content: String,
    pub edited_timestamp: Option<Timestamp>,
    pub embeds: Vec<Embed>,
    pub flags: Option<MessageFlags>,
    pub kind: MessageType,
    pub mention_roles: Vec<Id<RoleMarker>>,
    pub mentions: Vec<User>,
    pub sticker_items: Option<Vec<MessageStickerItem>>,
    pub timestamp: Timestamp,
}

impl MessageSnapshotFields {
    fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            attachments: reader.list("attachments")?,
            components: decode_components(reader, "components", ComponentContext::Message, 0)?,
            content: reader.required("content")?,
            edited_timestamp: reader.optional("edited_timestamp")?,
            embeds: reader.list("embeds")?,
            flags: reader.optional("flags")?,
            kind: MessageType::from(reader.discriminant()?),
            mention_roles: reader.list("mention_roles")?,
            mentions: reader.list("mentions")?,
            sticker_items: reader.optional("sticker_items")?,
            timestamp: reader.required("timestamp")?,
        })
    }

    fn encode(&self) -> Value {
        let mut writer = ObjectWriter::new();

        if !self.components.is_empty() {
            writer.value("components", encode_components(&self.components));
        }

        writer
            .field("attachments", &self.attachments)
            .field("content", &self.content)
            .field("edited_timestamp", &self.edited_timestamp)
            .field("embeds", &self.embeds)
            .optional("flags", &self.flags)
            .field("mention_roles", &self.mention_roles)
            .field("mentions", &self.mentions)
            .optional("sticker_items", &self.sticker_items)
            .field("timestamp", &self.timestamp)
            .field("type", &self.kind)
            .finish()
    }
}
