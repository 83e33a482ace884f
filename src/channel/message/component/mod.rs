//! Interactive message components.
//!
//! Components form a tree of at most [`MAX_COMPONENT_DEPTH`] action-row
//! levels. Which leaves are legal depends on the [`ComponentContext`] the
//! tree is decoded in: messages hold buttons and select menus, modals hold
//! text inputs. Component types the library doesn't know are kept as
//! [`UnknownComponent`] in either context.

mod action_row;
mod button;
mod select_menu;
mod text_input;

pub use self::{
    action_row::ActionRow,
    button::{Button, ButtonError, ButtonErrorType, ButtonIdentity, ButtonStyle},
    select_menu::{
        ChannelSelectMenu, SelectDefaultValue, SelectMenu, SelectMenuOption, StringSelectMenu,
    },
    text_input::{TextInput, TextInputStyle},
};

use crate::wire::{reader::index_path, DecodeError, ObjectReader, ObjectWriter};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Number of action-row levels a component tree may have.
///
/// A row may sit inside a row, but a row found at this depth is rejected
/// with [`DecodeErrorType::RecursionLimitExceeded`] before its children are
/// read.
///
/// [`DecodeErrorType::RecursionLimitExceeded`]: crate::wire::DecodeErrorType::RecursionLimitExceeded
pub const MAX_COMPONENT_DEPTH: usize = 2;

/// Surface a component tree is decoded for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ComponentContext {
    /// Components attached to a message: buttons and select menus.
    Message,
    /// Components of a modal: text inputs.
    Modal,
}

impl ComponentContext {
    /// Whether a component of the given type may appear in this context.
    pub const fn allows(self, kind: ComponentType) -> bool {
        match kind {
            ComponentType::ActionRow | ComponentType::Unknown(_) => true,
            ComponentType::TextInput => matches!(self, Self::Modal),
            ComponentType::Button
            | ComponentType::ChannelSelect
            | ComponentType::MentionableSelect
            | ComponentType::RoleSelect
            | ComponentType::StringSelect
            | ComponentType::UserSelect => matches!(self, Self::Message),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Modal => "modal",
        }
    }
}

impl Display for ComponentContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Interactive element of a message or modal.
///
/// Decoding needs a [`ComponentContext`], so there is no context-free
/// `Deserialize` implementation; use [`decode_component`] instead.
///
/// [`decode_component`]: crate::wire::decode_component
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Component {
    /// Top-level, non-interactive container of other components.
    ActionRow(ActionRow),
    Button(Button),
    ChannelSelect(ChannelSelectMenu),
    MentionableSelect(SelectMenu),
    RoleSelect(SelectMenu),
    StringSelect(StringSelectMenu),
    /// Pop-up item that renders on modals.
    TextInput(TextInput),
    UserSelect(SelectMenu),
    /// Component of a type unknown to the library.
    Unknown(UnknownComponent),
}

impl Component {
    /// Type of the component.
    ///
    /// String selects decoded from the legacy alias tag report
    /// [`ComponentType::StringSelect`].
    pub const fn kind(&self) -> ComponentType {
        match self {
            Self::ActionRow(_) => ComponentType::ActionRow,
            Self::Button(_) => ComponentType::Button,
            Self::ChannelSelect(_) => ComponentType::ChannelSelect,
            Self::MentionableSelect(_) => ComponentType::MentionableSelect,
            Self::RoleSelect(_) => ComponentType::RoleSelect,
            Self::StringSelect(_) => ComponentType::StringSelect,
            Self::TextInput(_) => ComponentType::TextInput,
            Self::UserSelect(_) => ComponentType::UserSelect,
            Self::Unknown(unknown) => ComponentType::Unknown(unknown.kind),
        }
    }

    /// Optional numeric identifier of the component within its message.
    pub const fn id(&self) -> Option<i32> {
        match self {
            Self::ActionRow(row) => row.id,
            Self::Button(button) => button.id,
            Self::ChannelSelect(select) => select.menu.id,
            Self::MentionableSelect(select)
            | Self::RoleSelect(select)
            | Self::UserSelect(select) => select.id,
            Self::StringSelect(select) => select.id,
            Self::TextInput(input) => input.id,
            Self::Unknown(_) => None,
        }
    }

    /// Developer-defined identifier sent back with interactions.
    pub fn custom_id(&self) -> Option<&str> {
        match self {
            Self::Button(button) => match &button.identity {
                ButtonIdentity::CustomId(custom_id) => Some(custom_id),
                ButtonIdentity::Sku(_) | ButtonIdentity::Url(_) => None,
            },
            Self::ChannelSelect(select) => Some(&select.menu.custom_id),
            Self::MentionableSelect(select)
            | Self::RoleSelect(select)
            | Self::UserSelect(select) => Some(&select.custom_id),
            Self::StringSelect(select) => Some(&select.custom_id),
            Self::TextInput(input) => Some(&input.custom_id),
            Self::ActionRow(_) | Self::Unknown(_) => None,
        }
    }

    pub(crate) fn decode(
        value: &Value,
        path: &str,
        context: ComponentContext,
        depth: usize,
    ) -> Result<Self, DecodeError> {
        let reader = ObjectReader::new(value, path)?;
        let kind = ComponentType::from(reader.discriminant()?);

        if !context.allows(kind) {
            return Err(DecodeError::invalid_combination(
                reader.child("type"),
                format!("{} component is not allowed in a {context}", kind.name()),
            ));
        }

        Ok(match kind {
            ComponentType::ActionRow => {
                if depth >= MAX_COMPONENT_DEPTH {
                    return Err(DecodeError::recursion_limit(path, MAX_COMPONENT_DEPTH));
                }

                Self::ActionRow(ActionRow::decode(&reader, context, depth)?)
            }
            ComponentType::Button => Self::Button(Button::decode(&reader)?),
            ComponentType::ChannelSelect => {
                Self::ChannelSelect(ChannelSelectMenu::decode(&reader)?)
            }
            ComponentType::MentionableSelect => {
                Self::MentionableSelect(SelectMenu::decode(&reader, kind)?)
            }
            ComponentType::RoleSelect => Self::RoleSelect(SelectMenu::decode(&reader, kind)?),
            ComponentType::StringSelect => Self::StringSelect(StringSelectMenu::decode(&reader)?),
            ComponentType::TextInput => Self::TextInput(TextInput::decode(&reader)?),
            ComponentType::UserSelect => Self::UserSelect(SelectMenu::decode(&reader, kind)?),
            ComponentType::Unknown(kind) => {
                tracing::trace!(kind, path, "preserving unknown component type");

                Self::Unknown(UnknownComponent {
                    fields: reader.remaining(&["type"]),
                    kind,
                })
            }
        })
    }

    pub(crate) fn encode(&self) -> Value {
        let mut writer = ObjectWriter::new();

        match self {
            Self::ActionRow(row) => row.encode(&mut writer),
            Self::Button(button) => button.encode(&mut writer),
            Self::ChannelSelect(select) => select.encode(&mut writer),
            Self::MentionableSelect(select)
            | Self::RoleSelect(select)
            | Self::UserSelect(select) => select.encode(&mut writer),
            Self::StringSelect(select) => select.encode(&mut writer),
            Self::TextInput(input) => input.encode(&mut writer),
            Self::Unknown(unknown) => {
                writer.extend(&unknown.fields);
            }
        }

        writer.field("type", &self.kind());

        writer.finish()
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(serializer)
    }
}

/// Decode the array under `key` into components, treating absence as empty.
pub(crate) fn decode_components(
    reader: &ObjectReader<'_>,
    key: &str,
    context: ComponentContext,
    depth: usize,
) -> Result<Vec<Component>, DecodeError> {
    let path = reader.child(key);

    reader
        .array(key)?
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, item)| Component::decode(item, &index_path(&path, index), context, depth))
        .collect()
}

pub(crate) fn encode_components(components: &[Component]) -> Value {
    Value::Array(components.iter().map(Component::encode).collect())
}

/// Component of a type the library doesn't know yet.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownComponent {
    /// Every key except `type`, verbatim.
    pub fields: Map<String, Value>,
    /// Raw `type` discriminant.
    pub kind: i64,
}

/// Type of a [`Component`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum ComponentType {
    /// Component is an [`ActionRow`].
    ActionRow,
    /// Component is a [`Button`].
    Button,
    /// Component is a [`StringSelectMenu`].
    ///
    /// Also decoded from the alias tag `17`.
    StringSelect,
    /// Component is a [`TextInput`].
    TextInput,
    /// Component is a user [`SelectMenu`].
    UserSelect,
    /// Component is a role [`SelectMenu`].
    RoleSelect,
    /// Component is a mentionable [`SelectMenu`].
    MentionableSelect,
    /// Component is a [`ChannelSelectMenu`].
    ChannelSelect,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

#[allow(non_upper_case_globals)]
impl ComponentType {
    /// Former name of [`ComponentType::StringSelect`].
    #[deprecated(note = "renamed to `StringSelect`")]
    pub const SelectMenu: Self = Self::StringSelect;

    /// Alias tag that also selects a string select menu.
    pub const STRING_SELECT_ALIAS: i64 = 17;

    pub const fn name(self) -> &'static str {
        match self {
            Self::ActionRow => "ActionRow",
            Self::Button => "Button",
            Self::StringSelect => "StringSelect",
            Self::TextInput => "TextInput",
            Self::UserSelect => "UserSelect",
            Self::RoleSelect => "RoleSelect",
            Self::MentionableSelect => "MentionableSelect",
            Self::ChannelSelect => "ChannelSelect",
            Self::Unknown(_) => "Unknown",
        }
    }

    /// Whether the type is one of the select menus.
    pub const fn is_select(self) -> bool {
        matches!(
            self,
            Self::ChannelSelect
                | Self::MentionableSelect
                | Self::RoleSelect
                | Self::StringSelect
                | Self::UserSelect
        )
    }
}

impl From<i64> for ComponentType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::ActionRow,
            2 => Self::Button,
            3 | Self::STRING_SELECT_ALIAS => Self::StringSelect,
            4 => Self::TextInput,
            5 => Self::UserSelect,
            6 => Self::RoleSelect,
            7 => Self::MentionableSelect,
            8 => Self::ChannelSelect,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<ComponentType> for i64 {
    fn from(value: ComponentType) -> Self {
        match value {
            ComponentType::ActionRow => 1,
            ComponentType::Button => 2,
            ComponentType::StringSelect => 3,
            ComponentType::TextInput => 4,
            ComponentType::UserSelect => 5,
            ComponentType::RoleSelect => 6,
            ComponentType::MentionableSelect => 7,
            ComponentType::ChannelSelect => 8,
            ComponentType::Unknown(unknown) => unknown,
        }
    }
}
