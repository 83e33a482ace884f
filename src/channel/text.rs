use super::{thread::AutoArchiveDuration, ChannelBase, GuildFields};
use crate::{
    id::{marker::MessageMarker, Id},
    util::Timestamp,
    wire::{DecodeError, ObjectReader, ObjectWriter},
};

/// Guild text or announcement channel.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TextChannel {
    pub base: ChannelBase,
    /// Default auto archive duration of threads created in the channel.
    pub default_auto_archive_duration: Option<AutoArchiveDuration>,
    /// Initial slowmode of threads created in the channel.
    pub default_thread_rate_limit_per_user: Option<u16>,
    pub guild: GuildFields,
    pub last_message_id: Option<Option<Id<MessageMarker>>>,
    pub last_pin_timestamp: Option<Option<Timestamp>>,
    /// Sorting position of the channel.
    pub position: i32,
    /// Slowmode in seconds. Absent is distinct from `0`.
    pub rate_limit_per_user: Option<u16>,
    pub topic: Option<Option<String>>,
}

impl TextChannel {
    /// Text channel with only its required fields set.
    pub fn new(base: ChannelBase, position: i32) -> Self {
        Self {
            base,
            default_auto_archive_duration: None,
            default_thread_rate_limit_per_user: None,
            guild: GuildFields::default(),
            last_message_id: None,
            last_pin_timestamp: None,
            position,
            rate_limit_per_user: None,
            topic: None,
        }
    }

    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            base: ChannelBase::decode(reader)?,
            default_auto_archive_duration: reader.optional("default_auto_archive_duration")?,
            default_thread_rate_limit_per_user: reader
                .optional("default_thread_rate_limit_per_user")?,
            guild: GuildFields::decode(reader)?,
            last_message_id: reader.optional_nullable("last_message_id")?,
            last_pin_timestamp: reader.optional_nullable("last_pin_timestamp")?,
            position: reader.required("position")?,
            rate_limit_per_user: reader.optional("rate_limit_per_user")?,
            topic: reader.optional_nullable("topic")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.base.encode(writer);
        self.guild.encode(writer);
        writer
            .optional(
                "default_auto_archive_duration",
                &self.default_auto_archive_duration,
            )
            .optional(
                "default_thread_rate_limit_per_user",
                &self.default_thread_rate_limit_per_user,
            )
            .optional_nullable("last_message_id", &self.last_message_id)
            .optional_nullable("last_pin_timestamp", &self.last_pin_timestamp)
            .field("position", &self.position)
            .optional("rate_limit_per_user", &self.rate_limit_per_user)
            .optional_nullable("topic", &self.topic);
    }
}
