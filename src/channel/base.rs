use super::{ChannelFlags, PermissionOverwrite};
use crate::{
    id::{
        marker::{ChannelMarker, GuildMarker},
        Id,
    },
    wire::{DecodeError, ObjectReader, ObjectWriter},
};

/// Fields every channel carries, whatever its type.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ChannelBase {
    pub flags: Option<ChannelFlags>,
    pub id: Id<ChannelMarker>,
    /// Name of the channel.
    ///
    /// `None` when the key is absent, `Some(None)` when it is `null`.
    pub name: Option<Option<String>>,
}

impl ChannelBase {
    /// Base with only an ID, as used by the smart constructors.
    pub const fn new(id: Id<ChannelMarker>) -> Self {
        Self {
            flags: None,
            id,
            name: None,
        }
    }

    pub(crate) const KEYS: &'static [&'static str] = &["flags", "id", "name", "type"];

    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            flags: reader.optional("flags")?,
            id: reader.required("id")?,
            name: reader.optional_nullable("name")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        writer
            .optional("flags", &self.flags)
            .field("id", &self.id)
            .optional_nullable("name", &self.name);
    }
}

/// Fields shared by every channel that lives in a guild.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct GuildFields {
    /// Absent in some gateway payloads, where the guild is implied.
    pub guild_id: Option<Id<GuildMarker>>,
    pub nsfw: Option<bool>,
    /// Category or, for threads, the channel the thread was created in.
    pub parent_id: Option<Option<Id<ChannelMarker>>>,
    pub permission_overwrites: Option<Vec<PermissionOverwrite>>,
}

impl GuildFields {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            guild_id: reader.optional("guild_id")?,
            nsfw: reader.optional("nsfw")?,
            parent_id: reader.optional_nullable("parent_id")?,
            permission_overwrites: reader.optional("permission_overwrites")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        writer
            .optional("guild_id", &self.guild_id)
            .optional("nsfw", &self.nsfw)
            .optional_nullable("parent_id", &self.parent_id)
            .optional("permission_overwrites", &self.permission_overwrites);
    }
}

#[cfg(test)]
mod tests {
    use super::{ChannelBase, GuildFields};
    use crate::{
        channel::ChannelFlags,
        id::Id,
        wire::{ObjectReader, ObjectWriter},
    };
    use serde_json::json;

    #[test]
    fn base_round_trip() {
        let value = json!({ "id": "10", "name": null, "flags": 2 });
        let reader = ObjectReader::new(&value, "channel").unwrap();
        let base = ChannelBase::decode(&reader).unwrap();

        assert_eq!(base.id, Id::new(10));
        assert_eq!(base.name, Some(None));
        assert_eq!(base.flags, Some(ChannelFlags::PINNED));

        let mut writer = ObjectWriter::new();
        base.encode(&mut writer);
        assert_eq!(writer.finish(), value);
    }

    #[test]
    fn guild_fields_default_to_absent() {
        let value = json!({ "id": "10" });
        let reader = ObjectReader::new(&value, "channel").unwrap();

        assert_eq!(GuildFields::decode(&reader).unwrap(), GuildFields::default());
    }
}
