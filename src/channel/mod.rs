//! Channels: a tagged union over the `type` discriminant.
//!
//! Every variant embeds a [`ChannelBase`]; guild variants additionally embed
//! [`GuildFields`]. Selection is by `type` alone, no other field takes part
//! in dispatch. Types this library doesn't know decode into
//! [`Channel::Unknown`] instead of failing.

pub mod forum;
pub mod message;
pub mod thread;

mod attachment;
mod attachment_flags;
mod base;
mod category;
mod channel_type;
mod flags;
mod permission_overwrite;
mod private;
mod text;
mod thread_channel;
mod unknown;
mod video_quality_mode;
mod voice;

pub use self::{
    attachment::Attachment,
    attachment_flags::AttachmentFlags,
    base::{ChannelBase, GuildFields},
    category::{CategoryChannel, DirectoryChannel},
    channel_type::ChannelType,
    flags::ChannelFlags,
    forum::{ForumChannel, ForumSettings, MediaChannel},
    message::Message,
    permission_overwrite::{PermissionOverwrite, PermissionOverwriteType},
    private::{GroupChannel, PrivateChannel},
    text::TextChannel,
    thread_channel::ThreadChannel,
    unknown::UnknownChannel,
    video_quality_mode::VideoQualityMode,
    voice::VoiceChannel,
};

use crate::{
    id::{
        marker::{ChannelMarker, GuildMarker},
        Id,
    },
    wire::{DecodeError, ObjectReader, ObjectWriter},
};
use serde::{
    de::{Deserialize, Deserializer, Error as DeError},
    ser::{Serialize, Serializer},
};
use serde_json::Value;

/// Channel of any type.
///
/// Announcement channels share [`TextChannel`], stage channels share
/// [`VoiceChannel`], and the three thread types share [`ThreadChannel`]; the
/// enum variant carries the `type`, so the two can never disagree.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Channel {
    AnnouncementThread(ThreadChannel),
    /// Direct message between more than two users.
    Group(GroupChannel),
    GuildAnnouncement(TextChannel),
    GuildCategory(CategoryChannel),
    GuildDirectory(DirectoryChannel),
    GuildForum(ForumChannel),
    GuildMedia(MediaChannel),
    GuildStageVoice(VoiceChannel),
    GuildText(TextChannel),
    GuildVoice(VoiceChannel),
    /// Direct message between two users.
    Private(PrivateChannel),
    PrivateThread(ThreadChannel),
    PublicThread(ThreadChannel),
    /// Channel of a type unknown to the library.
    Unknown(UnknownChannel),
}

impl Channel {
    /// Type of the channel.
    pub const fn kind(&self) -> ChannelType {
        match self {
            Self::AnnouncementThread(_) => ChannelType::AnnouncementThread,
            Self::Group(_) => ChannelType::Group,
            Self::GuildAnnouncement(_) => ChannelType::GuildAnnouncement,
            Self::GuildCategory(_) => ChannelType::GuildCategory,
            Self::GuildDirectory(_) => ChannelType::GuildDirectory,
            Self::GuildForum(_) => ChannelType::GuildForum,
            Self::GuildMedia(_) => ChannelType::GuildMedia,
            Self::GuildStageVoice(_) => ChannelType::GuildStageVoice,
            Self::GuildText(_) => ChannelType::GuildText,
            Self::GuildVoice(_) => ChannelType::GuildVoice,
            Self::Private(_) => ChannelType::Private,
            Self::PrivateThread(_) => ChannelType::PrivateThread,
            Self::PublicThread(_) => ChannelType::PublicThread,
            Self::Unknown(unknown) => ChannelType::Unknown(unknown.kind),
        }
    }

    /// Fields shared by every channel type.
    pub const fn base(&self) -> &ChannelBase {
        match self {
            Self::AnnouncementThread(c) | Self::PrivateThread(c) | Self::PublicThread(c) => {
                &c.base
            }
            Self::Group(c) => &c.base,
            Self::GuildAnnouncement(c) | Self::GuildText(c) => &c.base,
            Self::GuildCategory(c) => &c.base,
            Self::GuildDirectory(c) => &c.base,
            Self::GuildForum(c) => &c.base,
            Self::GuildMedia(c) => &c.base,
            Self::GuildStageVoice(c) | Self::GuildVoice(c) => &c.base,
            Self::Private(c) => &c.base,
            Self::Unknown(c) => &c.base,
        }
    }

    /// Guild fields, for channels that live in a guild.
    pub const fn guild(&self) -> Option<&GuildFields> {
        match self {
            Self::AnnouncementThread(c) | Self::PrivateThread(c) | Self::PublicThread(c) => {
                Some(&c.guild)
            }
            Self::GuildAnnouncement(c) | Self::GuildText(c) => Some(&c.guild),
            Self::GuildCategory(c) => Some(&c.guild),
            Self::GuildDirectory(c) => Some(&c.guild),
            Self::GuildForum(c) => Some(&c.guild),
            Self::GuildMedia(c) => Some(&c.guild),
            Self::GuildStageVoice(c) | Self::GuildVoice(c) => Some(&c.guild),
            Self::Group(_) | Self::Private(_) | Self::Unknown(_) => None,
        }
    }

    pub const fn id(&self) -> Id<ChannelMarker> {
        self.base().id
    }

    /// ID of the guild the channel is in, if it is known.
    pub fn guild_id(&self) -> Option<Id<GuildMarker>> {
        self.guild().and_then(|guild| guild.guild_id)
    }

    /// Name of the channel, `None` if it is absent or `null`.
    pub fn name(&self) -> Option<&str> {
        self.base().name.as_ref()?.as_deref()
    }

    /// Whether the channel is a thread.
    pub const fn is_thread(&self) -> bool {
        self.kind().is_thread()
    }

    pub(crate) fn decode(value: &Value, path: &str) -> Result<Self, DecodeError> {
        let reader = ObjectReader::new(value, path)?;

        Ok(match ChannelType::from(reader.discriminant()?) {
            ChannelType::AnnouncementThread => {
                Self::AnnouncementThread(ThreadChannel::decode(&reader)?)
            }
            ChannelType::Group => Self::Group(GroupChannel::decode(&reader)?),
            ChannelType::GuildAnnouncement => {
                Self::GuildAnnouncement(TextChannel::decode(&reader)?)
            }
            ChannelType::GuildCategory => Self::GuildCategory(CategoryChannel::decode(&reader)?),
            ChannelType::GuildDirectory => {
                Self::GuildDirectory(DirectoryChannel::decode(&reader)?)
            }
            ChannelType::GuildForum => Self::GuildForum(ForumChannel::decode(&reader)?),
            ChannelType::GuildMedia => Self::GuildMedia(MediaChannel::decode(&reader)?),
            ChannelType::GuildStageVoice => Self::GuildStageVoice(VoiceChannel::decode(&reader)?),
            ChannelType::GuildText => Self::GuildText(TextChannel::decode(&reader)?),
            ChannelType::GuildVoice => Self::GuildVoice(VoiceChannel::decode(&reader)?),
            ChannelType::Private => Self::Private(PrivateChannel::decode(&reader)?),
            ChannelType::PrivateThread => Self::PrivateThread(ThreadChannel::decode(&reader)?),
            ChannelType::PublicThread => Self::PublicThread(ThreadChannel::decode(&reader)?),
            ChannelType::Unknown(kind) => {
                tracing::trace!(kind, path = reader.path(), "preserving unknown channel type");

                Self::Unknown(UnknownChannel::decode(&reader, kind)?)
            }
        })
    }

    pub(crate) fn encode(&self) -> Value {
        let mut writer = ObjectWriter::new();
        writer.field("type", &self.kind());

        match self {
            Self::AnnouncementThread(c) | Self::PrivateThread(c) | Self::PublicThread(c) => {
                c.encode(&mut writer)
            }
            Self::Group(c) => c.encode(&mut writer),
            Self::GuildAnnouncement(c) | Self::GuildText(c) => c.encode(&mut writer),
            Self::GuildCategory(c) => c.encode(&mut writer),
            Self::GuildDirectory(c) => c.encode(&mut writer),
            Self::GuildForum(c) => c.encode(&mut writer),
            Self::GuildMedia(c) => c.encode(&mut writer),
            Self::GuildStageVoice(c) | Self::GuildVoice(c) => c.encode(&mut writer),
            Self::Private(c) => c.encode(&mut writer),
            Self::Unknown(c) => c.encode(&mut writer),
        }

        writer.finish()
    }
}

impl<'de> Deserialize<'de> for Channel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        Self::decode(&value, "channel").map_err(DeError::custom)
    }
}

impl Serialize for Channel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}
