use super::{
    thread::{ThreadMember, ThreadMetadata},
    ChannelBase, GuildFields,
};
use crate::{
    id::{
        marker::{MessageMarker, TagMarker, UserMarker},
        Id,
    },
    util::Timestamp,
    wire::{DecodeError, ObjectReader, ObjectWriter},
};

/// Announcement, public or private thread.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ThreadChannel {
    /// Tags applied to a thread in a forum or media channel.
    ///
    /// Always present on the wire, possibly empty.
    pub applied_tags: Vec<Id<TagMarker>>,
    pub base: ChannelBase,
    pub guild: GuildFields,
    pub last_message_id: Option<Option<Id<MessageMarker>>>,
    pub last_pin_timestamp: Option<Option<Timestamp>>,
    /// Thread member object of the current user, if they joined.
    pub member: Option<ThreadMember>,
    /// Approximate member count, stops counting at 50.
    pub member_count: Option<u32>,
    /// Number of messages, excluding the initial message and deleted ones.
    pub message_count: Option<u32>,
    /// Creator of the thread.
    pub owner_id: Option<Id<UserMarker>>,
    pub rate_limit_per_user: Option<u16>,
    pub thread_metadata: Option<ThreadMetadata>,
    /// Number of messages ever sent, deleted ones included.
    pub total_message_sent: Option<u32>,
}

impl ThreadChannel {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            applied_tags: reader.required("applied_tags")?,
            base: ChannelBase::decode(reader)?,
            guild: GuildFields::decode(reader)?,
            last_message_id: reader.optional_nullable("last_message_id")?,
            last_pin_timestamp: reader.optional_nullable("last_pin_timestamp")?,
            member: reader.optional("member")?,
            member_count: reader.optional("member_count")?,
            message_count: reader.optional("message_count")?,
            owner_id: reader.optional("owner_id")?,
            rate_limit_per_user: reader.optional("rate_limit_per_user")?,
            thread_metadata: reader.optional("thread_metadata")?,
            total_message_sent: reader.optional("total_message_sent")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.base.encode(writer);
        self.guild.encode(writer);
        writer
            .field("applied_tags", &self.applied_tags)
            .optional_nullable("last_message_id", &self.last_message_id)
            .optional_nullable("last_pin_timestamp", &self.last_pin_timestamp)
            .optional("member", &self.member)
            .optional("member_count", &self.member_count)
            .optional("message_count", &self.message_count)
            .optional("owner_id", &self.owner_id)
            .optional("rate_limit_per_user", &self.rate_limit_per_user)
            .optional("thread_metadata", &self.thread_metadata)
            .optional("total_message_sent", &self.total_message_sent);
    }
}
