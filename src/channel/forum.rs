//! Thread-only channels (forums and media channels) and their settings.

use super::{thread::AutoArchiveDuration, ChannelBase, GuildFields};
use crate::{
    id::{
        marker::{EmojiMarker, MessageMarker, TagMarker},
        Id,
    },
    wire::{DecodeError, ObjectReader, ObjectWriter},
};
use serde::{Deserialize, Serialize};

/// Settings shared by forum and media channels.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ForumSettings {
    /// Tags that can be applied to posts. Required, possibly empty.
    pub available_tags: Vec<ForumTag>,
    pub default_auto_archive_duration: Option<AutoArchiveDuration>,
    /// Emoji on the add-reaction button of posts. Required, nullable.
    pub default_reaction_emoji: Option<DefaultReaction>,
    /// Default sort order of posts. Required, nullable.
    pub default_sort_order: Option<ForumSortOrder>,
    pub default_thread_rate_limit_per_user: Option<u16>,
    /// ID of the last post created in the channel.
    pub last_message_id: Option<Option<Id<MessageMarker>>>,
    pub position: Option<i32>,
    /// Slowmode for creating posts.
    pub rate_limit_per_user: Option<u16>,
    /// Guidelines shown when creating a post.
    pub topic: Option<Option<String>>,
}

impl ForumSettings {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            available_tags: reader.required("available_tags")?,
            default_auto_archive_duration: reader.optional("default_auto_archive_duration")?,
            default_reaction_emoji: reader.nullable("default_reaction_emoji")?,
            default_sort_order: reader.nullable("default_sort_order")?,
            default_thread_rate_limit_per_user: reader
                .optional("default_thread_rate_limit_per_user")?,
            last_message_id: reader.optional_nullable("last_message_id")?,
            position: reader.optional("position")?,
            rate_limit_per_user: reader.optional("rate_limit_per_user")?,
            topic: reader.optional_nullable("topic")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        writer
            .field("available_tags", &self.available_tags)
            .optional(
                "default_auto_archive_duration",
                &self.default_auto_archive_duration,
            )
            .field("default_reaction_emoji", &self.default_reaction_emoji)
            .field("default_sort_order", &self.default_sort_order)
            .optional(
                "default_thread_rate_limit_per_user",
                &self.default_thread_rate_limit_per_user,
            )
            .optional_nullable("last_message_id", &self.last_message_id)
            .optional("position", &self.position)
            .optional("rate_limit_per_user", &self.rate_limit_per_user)
            .optional_nullable("topic", &self.topic);
    }
}

/// Channel that can only contain threads, shown as posts.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ForumChannel {
    pub base: ChannelBase,
    /// Required on forum channels.
    pub default_forum_layout: ForumLayout,
    pub guild: GuildFields,
    pub settings: ForumSettings,
}

impl ForumChannel {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            base: ChannelBase::decode(reader)?,
            default_forum_layout: reader.required("default_forum_layout")?,
            guild: GuildFields::decode(reader)?,
            settings: ForumSettings::decode(reader)?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.base.encode(writer);
        self.guild.encode(writer);
        self.settings.encode(writer);
        writer.field("default_forum_layout", &self.default_forum_layout);
    }
}

/// Channel that can only contain threads, laid out for media.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct MediaChannel {
    pub base: ChannelBase,
    pub guild: GuildFields,
    pub settings: ForumSettings,
}

impl MediaChannel {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            base: ChannelBase::decode(reader)?,
            guild: GuildFields::decode(reader)?,
            settings: ForumSettings::decode(reader)?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.base.encode(writer);
        self.guild.encode(writer);
        self.settings.encode(writer);
    }
}

/// Emoji shown on the add-reaction button of new forum posts.
///
/// Exactly one of the fields is set: a custom emoji ID or a unicode emoji.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct DefaultReaction {
    pub emoji_id: Option<Id<EmojiMarker>>,
    pub emoji_name: Option<String>,
}

/// Tag that can be applied to a thread in a forum or media channel.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ForumTag {
    /// ID of custom emoji of the tag.
    pub emoji_id: Option<Id<EmojiMarker>>,
    /// Unicode emoji of the tag.
    pub emoji_name: Option<String>,
    pub id: Id<TagMarker>,
    /// Whether only moderators may apply the tag.
    pub moderated: bool,
    pub name: String,
}

/// Layout of a forum channel.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum ForumLayout {
    /// Display posts as a collection of tiles.
    GalleryView,
    /// Display posts as a list.
    ListView,
    /// No default has been set for the forum channel.
    NotSet,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for ForumLayout {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::NotSet,
            1 => Self::ListView,
            2 => Self::GalleryView,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<ForumLayout> for i64 {
    fn from(value: ForumLayout) -> Self {
        match value {
            ForumLayout::NotSet => 0,
            ForumLayout::ListView => 1,
            ForumLayout::GalleryView => 2,
            ForumLayout::Unknown(unknown) => unknown,
        }
    }
}

/// Order in which posts of a thread-only channel are sorted.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum ForumSortOrder {
    /// Sort forum posts by activity.
    LatestActivity,
    /// Sort forum posts by creation time (from most recent to oldest).
    CreationDate,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for ForumSortOrder {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::LatestActivity,
            1 => Self::CreationDate,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<ForumSortOrder> for i64 {
    fn from(value: ForumSortOrder) -> Self {
        match value {
            ForumSortOrder::LatestActivity => 0,
            ForumSortOrder::CreationDate => 1,
            ForumSortOrder::Unknown(unknown) => unknown,
        }
    }
}
