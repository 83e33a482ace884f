use super::{ChannelBase, GuildFields};
use crate::wire::{DecodeError, ObjectReader, ObjectWriter};

/// Category that groups other guild channels.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CategoryChannel {
    pub base: ChannelBase,
    pub guild: GuildFields,
    pub position: i32,
}

impl CategoryChannel {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            base: ChannelBase::decode(reader)?,
            guild: GuildFields::decode(reader)?,
            position: reader.required("position")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.base.encode(writer);
        self.guild.encode(writer);
        writer.field("position", &self.position);
    }
}

/// Channel in a student hub listing guilds.
///
/// Only the base and guild fields are modeled.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct DirectoryChannel {
    pub base: ChannelBase,
    pub guild: GuildFields,
}

impl DirectoryChannel {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            base: ChannelBase::decode(reader)?,
            guild: GuildFields::decode(reader)?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.base.encode(writer);
        self.guild.encode(writer);
    }
}
