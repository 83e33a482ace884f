use super::MAX_NESTING_DEPTH;
use crate::{
    id::{
        marker::{GenericMarker, InteractionMarker, MessageMarker},
        Id,
    },
    user::User,
    wire::{DecodeError, ObjectReader},
};
use serde::{de::Error as DeError, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Metadata about the interaction that produced a message.
///
/// Supersedes [`MessageInteraction`]. A follow-up to a modal submission
/// carries the metadata of the interaction that opened the modal in
/// [`triggering_interaction_metadata`], which nests at most
/// [`MAX_NESTING_DEPTH`] levels deep.
///
/// [`triggering_interaction_metadata`]: Self::triggering_interaction_metadata
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize)]
pub struct MessageInteractionMetadata {
    /// Installation context owners, keyed by integration type.
    pub authorizing_integration_owners: BTreeMap<String, Id<GenericMarker>>,
    pub id: Id<InteractionMarker>,
    /// ID of the message that contained the interactive component.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interacted_message_id: Option<Id<MessageMarker>>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// ID of the original response message, present only on follow-ups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_response_message_id: Option<Id<MessageMarker>>,
    /// ID of the message the command was run on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_message_id: Option<Id<MessageMarker>>,
    /// User the command was run on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub triggering_interaction_metadata: Option<Box<MessageInteractionMetadata>>,
    /// User who triggered the interaction.
    pub user: User,
}

impl MessageInteractionMetadata {
    pub(crate) fn decode(value: &Value, path: &str, depth: usize) -> Result<Self, DecodeError> {
        let reader = ObjectReader::new(value, path)?;

        let triggering_interaction_metadata = match reader.get("triggering_interaction_metadata") {
            None | Some(Value::Null) => None,
            Some(nested) => {
                let path = reader.child("triggering_interaction_metadata");

                if depth + 1 >= MAX_NESTING_DEPTH {
                    return Err(DecodeError::recursion_limit(path, MAX_NESTING_DEPTH));
                }

                Some(Box::new(Self::decode(nested, &path, depth + 1)?))
            }
        };

        Ok(Self {
            authorizing_integration_owners: reader.required("authorizing_integration_owners")?,
            id: reader.required("id")?,
            interacted_message_id: reader.optional("interacted_message_id")?,
            kind: reader.required("type")?,
            original_response_message_id: reader.optional("original_response_message_id")?,
            target_message_id: reader.optional("target_message_id")?,
            target_user: reader.optional("target_user")?,
            triggering_interaction_metadata,
            user: reader.required("user")?,
        })
    }
}

impl<'de> Deserialize<'de> for MessageInteractionMetadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        Self::decode(&value, "interaction_metadata", 0).map_err(DeError::custom)
    }
}

/// Summary of the interaction a message responds to.
///
/// Superseded by [`MessageInteractionMetadata`]; both may be present while
/// the platform migrates.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageInteraction {
    pub id: Id<InteractionMarker>,
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// Name of the command, including subcommands and subcommand groups.
    pub name: String,
    pub user: User,
}

/// Borrowed view over whichever interaction record a message carries.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageInteractionRef<'a> {
    Metadata(&'a MessageInteractionMetadata),
    Legacy(&'a MessageInteraction),
}

impl<'a> MessageInteractionRef<'a> {
    pub const fn id(self) -> Id<InteractionMarker> {
        match self {
            Self::Metadata(metadata) => metadata.id,
            Self::Legacy(interaction) => interaction.id,
        }
    }

    pub const fn kind(self) -> InteractionType {
        match self {
            Self::Metadata(metadata) => metadata.kind,
            Self::Legacy(interaction) => interaction.kind,
        }
    }

    /// User who triggered the interaction.
    pub const fn user(self) -> &'a User {
        match self {
            Self::Metadata(metadata) => &metadata.user,
            Self::Legacy(interaction) => &interaction.user,
        }
    }
}

/// Type of an interaction.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum InteractionType {
    /// Interaction involves a ping (webhook-based interactions).
    Ping,
    /// Interaction involves an application command.
    ApplicationCommand,
    /// Interaction involves a message component.
    MessageComponent,
    /// Interaction involves an autocomplete request.
    ApplicationCommandAutocomplete,
    /// Interaction involves a modal submit.
    ModalSubmit,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for InteractionType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Ping,
            2 => Self::ApplicationCommand,
            3 => Self::MessageComponent,
            4 => Self::ApplicationCommandAutocomplete,
            5 => Self::ModalSubmit,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<InteractionType> for i64 {
    fn from(value: InteractionType) -> Self {
        match value {
            InteractionType::Ping => 1,
            InteractionType::ApplicationCommand => 2,
            InteractionType::MessageComponent => 3,
            InteractionType::ApplicationCommandAutocomplete => 4,
            InteractionType::ModalSubmit => 5,
            InteractionType::Unknown(unknown) => unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{InteractionType, MessageInteractionMetadata};
    use crate::{id::Id, wire::DecodeErrorType};
    use serde_json::{json, Value};
    use serde_test::Token;

    fn metadata(nested: Option<Value>) -> Value {
        let mut value = json!({
            "authorizing_integration_owners": { "0": "10" },
            "id": "1",
            "type": 5,
            "user": {
                "avatar": null,
                "discriminator": "0",
                "global_name": null,
                "id": "2",
                "username": "user",
            },
        });

        if let Some(nested) = nested {
            value["triggering_interaction_metadata"] = nested;
        }

        value
    }

    #[test]
    fn interaction_type() {
        const MAP: &[(InteractionType, i64)] = &[
            (InteractionType::Ping, 1),
            (InteractionType::ApplicationCommand, 2),
            (InteractionType::MessageComponent, 3),
            (InteractionType::ApplicationCommandAutocomplete, 4),
            (InteractionType::ModalSubmit, 5),
            (InteractionType::Unknown(99), 99),
        ];

        for (kind, num) in MAP {
            serde_test::assert_tokens(kind, &[Token::I64(*num)]);
        }
    }

    #[test]
    fn nested_metadata_round_trip() {
        let value = metadata(Some(metadata(None)));
        let decoded =
            MessageInteractionMetadata::decode(&value, "interaction_metadata", 0).unwrap();

        assert_eq!(decoded.kind, InteractionType::ModalSubmit);
        assert_eq!(
            decoded.authorizing_integration_owners.get("0"),
            Some(&Id::new(10))
        );
        assert!(decoded.triggering_interaction_metadata.is_some());
        assert_eq!(serde_json::to_value(&decoded).unwrap(), value);
    }

    #[test]
    fn nesting_is_capped() {
        let value = metadata(Some(metadata(Some(metadata(Some(metadata(None)))))));
        let err =
            MessageInteractionMetadata::decode(&value, "interaction_metadata", 0).unwrap_err();

        assert!(matches!(
            err.kind(),
            DecodeErrorType::RecursionLimitExceeded { depth: 3, .. }
        ));
    }
}
