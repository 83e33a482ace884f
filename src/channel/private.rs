use super::ChannelBase;
use crate::{
    id::{
        marker::{ApplicationMarker, ChannelMarker, MessageMarker, UserMarker},
        Id,
    },
    user::User,
    util::Timestamp,
    wire::{DecodeError, ObjectReader, ObjectWriter},
};
use serde_json::Value;

/// Direct message between two users.
///
/// Direct messages have no name: it is always decoded and encoded as
/// `null`, whatever the payload carried.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PrivateChannel {
    pub base: ChannelBase,
    pub last_message_id: Option<Option<Id<MessageMarker>>>,
    pub last_pin_timestamp: Option<Option<Timestamp>>,
    pub recipients: Option<Vec<User>>,
}

impl PrivateChannel {
    /// Direct message channel with a `null` name.
    pub fn new(id: Id<ChannelMarker>) -> Self {
        let mut base = ChannelBase::new(id);
        base.name = Some(None);

        Self {
            base,
            last_message_id: None,
            last_pin_timestamp: None,
            recipients: None,
        }
    }

    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        let mut base = ChannelBase::decode(reader)?;
        base.name = Some(None);

        Ok(Self {
            base,
            last_message_id: reader.optional_nullable("last_message_id")?,
            last_pin_timestamp: reader.optional_nullable("last_pin_timestamp")?,
            recipients: reader.optional("recipients")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.base.encode(writer);
        writer
            .value("name", Value::Null)
            .optional_nullable("last_message_id", &self.last_message_id)
            .optional_nullable("last_pin_timestamp", &self.last_pin_timestamp)
            .optional("recipients", &self.recipients);
    }
}

/// Direct message between more than two users.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct GroupChannel {
    /// Application that created the group, if it was created by one.
    pub application_id: Option<Id<ApplicationMarker>>,
    pub base: ChannelBase,
    /// Icon hash.
    pub icon: Option<Option<String>>,
    pub last_message_id: Option<Option<Id<MessageMarker>>>,
    pub last_pin_timestamp: Option<Option<Timestamp>>,
    /// Whether the group is managed by an application.
    pub managed: Option<bool>,
    pub owner_id: Option<Id<UserMarker>>,
    pub recipients: Option<Vec<User>>,
}

impl GroupChannel {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            application_id: reader.optional("application_id")?,
            base: ChannelBase::decode(reader)?,
            icon: reader.optional_nullable("icon")?,
            last_message_id: reader.optional_nullable("last_message_id")?,
            last_pin_timestamp: reader.optional_nullable("last_pin_timestamp")?,
            managed: reader.optional("managed")?,
            owner_id: reader.optional("owner_id")?,
            recipients: reader.optional("recipients")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.base.encode(writer);
        writer
            .optional("application_id", &self.application_id)
            .optional_nullable("icon", &self.icon)
            .optional_nullable("last_message_id", &self.last_message_id)
            .optional_nullable("last_pin_timestamp", &self.last_pin_timestamp)
            .optional("managed", &self.managed)
            .optional("owner_id", &self.owner_id)
            .optional("recipients", &self.recipients);
    }
}
