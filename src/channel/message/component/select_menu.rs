use super::ComponentType;
use crate::{
    channel::{message::PartialEmoji, ChannelType},
    id::{
        marker::{ChannelMarker, GenericMarker, RoleMarker, UserMarker},
        Id,
    },
    wire::{
        reader::{deserialize_at, index_path},
        DecodeError, ObjectReader, ObjectWriter,
    },
};
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

/// Dropdown-style menu with developer-defined options.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct StringSelectMenu {
    pub custom_id: String,
    pub disabled: bool,
    pub id: Option<i32>,
    /// Maximum number of options that may be chosen.
    pub max_values: Option<u8>,
    /// Minimum number of options that must be chosen.
    pub min_values: Option<u8>,
    pub options: Vec<SelectMenuOption>,
    pub placeholder: Option<String>,
}

impl StringSelectMenu {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            custom_id: reader.required("custom_id")?,
            disabled: reader.flag("disabled")?,
            id: reader.optional("id")?,
            max_values: reader.optional("max_values")?,
            min_values: reader.optional("min_values")?,
            options: reader.required("options")?,
            placeholder: reader.optional("placeholder")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        writer
            .field("custom_id", &self.custom_id)
            .flag("disabled", self.disabled)
            .optional("id", &self.id)
            .optional("max_values", &self.max_values)
            .optional("min_values", &self.min_values)
            .field("options", &self.options)
            .optional("placeholder", &self.placeholder);
    }
}

/// Option of a [`StringSelectMenu`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct SelectMenuOption {
    /// Whether the option is selected by default.
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<PartialEmoji>,
    pub label: String,
    /// Value sent back to the application when chosen.
    pub value: String,
}

/// Menu whose options are populated by the client: users, roles, or both.
///
/// Shared by the user, role and mentionable select types; the enclosing
/// [`Component`] variant carries the type.
///
/// [`Component`]: super::Component
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SelectMenu {
    pub custom_id: String,
    /// Pre-selected values. Their types must match the menu type.
    pub default_values: Option<Vec<SelectDefaultValue>>,
    pub disabled: bool,
    pub id: Option<i32>,
    pub max_values: Option<u8>,
    pub min_values: Option<u8>,
    pub placeholder: Option<String>,
}

impl SelectMenu {
    pub(crate) fn decode(
        reader: &ObjectReader<'_>,
        kind: ComponentType,
    ) -> Result<Self, DecodeError> {
        Ok(Self {
            custom_id: reader.required("custom_id")?,
            default_values: decode_default_values(reader, kind)?,
            disabled: reader.flag("disabled")?,
            id: reader.optional("id")?,
            max_values: reader.optional("max_values")?,
            min_values: reader.optional("min_values")?,
            placeholder: reader.optional("placeholder")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        writer
            .field("custom_id", &self.custom_id)
            .optional("default_values", &self.default_values)
            .flag("disabled", self.disabled)
            .optional("id", &self.id)
            .optional("max_values", &self.max_values)
            .optional("min_values", &self.min_values)
            .optional("placeholder", &self.placeholder);
    }
}

/// Menu populated with the guild's channels.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ChannelSelectMenu {
    /// Channel types offered; all types when absent.
    pub channel_types: Option<Vec<ChannelType>>,
    pub menu: SelectMenu,
}

impl ChannelSelectMenu {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            channel_types: reader.optional("channel_types")?,
            menu: SelectMenu::decode(reader, ComponentType::ChannelSelect)?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        self.menu.encode(writer);
        writer.optional("channel_types", &self.channel_types);
    }
}

/// Pre-selected value of an auto-populated select menu.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SelectDefaultValue {
    Channel(Id<ChannelMarker>),
    Role(Id<RoleMarker>),
    User(Id<UserMarker>),
}

impl SelectDefaultValue {
    /// Wire name of the value's `type`.
    pub const fn kind(self) -> &'static str {
        match self {
            Self::Channel(_) => "channel",
            Self::Role(_) => "role",
            Self::User(_) => "user",
        }
    }

    /// Whether a value of the given wire type may pre-fill a menu of the
    /// given component type.
    pub fn allowed_in(kind: &str, menu: ComponentType) -> bool {
        matches!(
            (menu, kind),
            (ComponentType::ChannelSelect, "channel")
                | (ComponentType::RoleSelect, "role")
                | (ComponentType::UserSelect, "user")
                | (ComponentType::MentionableSelect, "role" | "user")
        )
    }
}

impl Serialize for SelectDefaultValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SelectDefaultValue", 2)?;

        match self {
            Self::Channel(id) => state.serialize_field("id", id)?,
            Self::Role(id) => state.serialize_field("id", id)?,
            Self::User(id) => state.serialize_field("id", id)?,
        }
        state.serialize_field("type", self.kind())?;

        state.end()
    }
}

#[derive(Deserialize)]
struct RawDefaultValue {
    id: Id<GenericMarker>,
    #[serde(rename = "type")]
    kind: String,
}

fn decode_default_values(
    reader: &ObjectReader<'_>,
    menu: ComponentType,
) -> Result<Option<Vec<SelectDefaultValue>>, DecodeError> {
    let Some(items) = reader.array("default_values")? else {
        return Ok(None);
    };
    let path = reader.child("default_values");

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let path = index_path(&path, index);
            let raw: RawDefaultValue = deserialize_at(item, &path)?;

            if !SelectDefaultValue::allowed_in(&raw.kind, menu) {
                return Err(DecodeError::invalid_combination(
                    format!("{path}.type"),
                    format!(
                        "{} default value in a {} menu",
                        raw.kind,
                        menu.name()
                    ),
                ));
            }

            Ok(match raw.kind.as_str() {
                "channel" => SelectDefaultValue::Channel(raw.id.cast()),
                "role" => SelectDefaultValue::Role(raw.id.cast()),
                _ => SelectDefaultValue::User(raw.id.cast()),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

#[cfg(test)]
mod tests {
    use super::{SelectDefaultValue, SelectMenuOption};
    use crate::{
        channel::{
            message::component::{Component, ComponentContext, ComponentType},
            ChannelType,
        },
        id::Id,
        wire::DecodeErrorType,
    };
    use serde_json::json;
    use serde_test::Token;

    #[test]
    fn default_value_serialization() {
        serde_test::assert_ser_tokens(
            &SelectDefaultValue::Role(Id::new(5)),
            &[
                Token::Struct {
                    name: "SelectDefaultValue",
                    len: 2,
                },
                Token::Str("id"),
                Token::Str("5"),
                Token::Str("type"),
                Token::Str("role"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn allowed_default_values() {
        assert!(SelectDefaultValue::allowed_in("user", ComponentType::UserSelect));
        assert!(SelectDefaultValue::allowed_in("role", ComponentType::MentionableSelect));
        assert!(SelectDefaultValue::allowed_in("user", ComponentType::MentionableSelect));
        assert!(!SelectDefaultValue::allowed_in("channel", ComponentType::MentionableSelect));
        assert!(!SelectDefaultValue::allowed_in("user", ComponentType::ChannelSelect));
        assert!(!SelectDefaultValue::allowed_in("user", ComponentType::StringSelect));
    }

    #[test]
    fn channel_select_round_trip() {
        let value = json!({
            "type": 8,
            "custom_id": "pick",
            "channel_types": [0, 5],
            "default_values": [{ "id": "3", "type": "channel" }],
            "max_values": 2,
        });
        let component = Component::decode(&value, "select", ComponentContext::Message, 0).unwrap();

        let Component::ChannelSelect(select) = &component else {
            panic!("expected a channel select, got {component:?}");
        };
        assert_eq!(
            select.channel_types.as_deref(),
            Some([ChannelType::GuildText, ChannelType::GuildAnnouncement].as_slice())
        );
        assert_eq!(
            select.menu.default_values.as_deref(),
            Some([SelectDefaultValue::Channel(Id::new(3))].as_slice())
        );
        assert_eq!(component.encode(), value);
    }

    #[test]
    fn mismatched_default_value() {
        let value = json!({
            "type": 5,
            "custom_id": "pick",
            "default_values": [{ "id": "1", "type": "user" }, { "id": "2", "type": "channel" }],
        });
        let err = Component::decode(&value, "select", ComponentContext::Message, 0).unwrap_err();

        assert!(matches!(
            err.kind(),
            DecodeErrorType::InvalidVariantCombination { path, .. }
                if path == "select.default_values[1].type"
        ));
    }

    #[test]
    fn mentionable_accepts_users_and_roles() {
        let value = json!({
            "type": 7,
            "custom_id": "who",
            "default_values": [{ "id": "1", "type": "user" }, { "id": "2", "type": "role" }],
        });
        let component = Component::decode(&value, "select", ComponentContext::Message, 0).unwrap();

        assert_eq!(component.kind(), ComponentType::MentionableSelect);
        assert_eq!(component.encode(), value);
    }

    #[test]
    fn string_select_requires_options() {
        let err = Component::decode(
            &json!({ "type": 3, "custom_id": "s" }),
            "select",
            ComponentContext::Message,
            0,
        )
        .unwrap_err();

        assert_eq!(err.path(), "select.options");
    }

    #[test]
    fn select_option() {
        let option = SelectMenuOption {
            default: true,
            description: None,
            emoji: None,
            label: "Red".to_owned(),
            value: "red".to_owned(),
        };

        serde_test::assert_tokens(
            &option,
            &[
                Token::Struct {
                    name: "SelectMenuOption",
                    len: 3,
                },
                Token::Str("default"),
                Token::Bool(true),
                Token::Str("label"),
                Token::Str("Red"),
                Token::Str("value"),
                Token::Str("red"),
                Token::StructEnd,
            ],
        );
    }
}
