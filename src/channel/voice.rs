use super::{ChannelBase, GuildFields, VideoQualityMode};
use crate::{
    id::{marker::MessageMarker, Id},
    wire::{DecodeError, ObjectReader, ObjectWriter},
};

/// Guild voice or stage channel.
///
/// Voice channels carry a text chat, but never a `last_pin_timestamp`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct VoiceChannel {
    pub base: ChannelBase,
    /// Bitrate in bits per second.
    pub bitrate: Option<u32>,
    pub guild: GuildFields,
    pub last_message_id: Option<Option<Id<MessageMarker>>>,
    pub position: Option<i32>,
    pub rate_limit_per_user: Option<u16>,
    /// Voice region ID, `null` for automatic selection.
    pub rtc_region: Option<Option<String>>,
    /// Maximum number of users, `0` for no limit.
    pub user_limit: Option<u32>,
    pub video_quality_mode: Option<VideoQualityMode>,
}

impl VoiceChannel {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            base: ChannelBase::decode(reader)?,
            bitrate: reader.optional("bitrate")?,
            guild: GuildFields::decode(reader)?,
            last_message_id: reader.optional_nullable("last_message_id")?,
            position: reader.optional("position")?,
            rate_limit_per_user: reader.optional("rate_limit_per_user")?,
            rtc_region: reader.optional_nullable("rtc_region")?,
            user_limit: reader.optional("user_limit")?,
            video_quality_mode: reader.optional("video_quality_mode")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.base.encode(writer);
        self.guild.encode(writer);
        writer
            .optional("bitrate", &self.bitrate)
            .optional_nullable("last_message_id", &self.last_message_id)
            .optional("position", &self.position)
            .optional("rate_limit_per_user", &self.rate_limit_per_user)
            .optional_nullable("rtc_region", &self.rtc_region)
            .optional("user_limit", &self.user_limit)
            .optional("video_quality_mode", &self.video_quality_mode);
    }
}
