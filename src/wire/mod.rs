//! Entry points for converting between structured values and the model.
//!
//! Every decoder takes a borrowed [`Value`] and copies what it keeps, so the
//! input can be dropped as soon as the call returns. Failures are returned as
//! [`DecodeError`]s carrying the path of the offending field.

mod error;
pub(crate) mod reader;

pub use self::error::{DecodeError, DecodeErrorType};

pub(crate) use self::reader::{ObjectReader, ObjectWriter};

use self::reader::{deserialize_at, to_json};
use crate::channel::{
    message::{component::ComponentContext, Component, Message},
    Channel,
};
use bitflags::Flags;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Decode a channel, dispatching on its `type`.
///
/// Unknown channel types decode into [`Channel::Unknown`] and keep every key.
///
/// # Errors
///
/// Returns [`DecodeErrorType::UnrecognizedDiscriminant`] if `type` is absent
/// or not an integer, and [`DecodeErrorType::MalformedField`] if a known
/// field has the wrong shape.
pub fn decode_channel(value: &Value) -> Result<Channel, DecodeError> {
    Channel::decode(value, "channel")
}

pub fn encode_channel(channel: &Channel) -> Value {
    channel.encode()
}

/// Decode a message with its components, referenced message and thread.
///
/// # Errors
///
/// Returns [`DecodeErrorType::RecursionLimitExceeded`] if referenced
/// messages or component rows nest too deep, and any error of the embedded
/// channel and component decoders.
pub fn decode_message(value: &Value) -> Result<Message, DecodeError> {
    Message::decode(value, "message", 0)
}

pub fn encode_message(message: &Message) -> Value {
    message.encode()
}

/// Decode a component tree for the given surface.
///
/// # Errors
///
/// Returns [`DecodeErrorType::InvalidVariantCombination`] if a component is
/// not allowed in `context`, or if a button or select menu disagrees with
/// itself.
pub fn decode_component(
    value: &Value,
    context: ComponentContext,
) -> Result<Component, DecodeError> {
    Component::decode(value, "component", context, 0)
}

pub fn encode_component(component: &Component) -> Value {
    component.encode()
}

/// Decode a bitfield, keeping bits without a name.
///
/// # Errors
///
/// Returns [`DecodeErrorType::MalformedField`] if the value isn't an integer
/// of the flag type's width.
pub fn decode_bitfield<T>(value: &Value) -> Result<T, DecodeError>
where
    T: Flags,
    T::Bits: DeserializeOwned,
{
    deserialize_at::<T::Bits>(value, "bitfield").map(T::from_bits_retain)
}

/// Encode a bitfield, named and unnamed bits alike.
pub fn encode_bitfield<T>(flags: &T) -> Value
where
    T: Flags,
    T::Bits: Serialize,
{
    to_json(&flags.bits())
}

/// Decode an enum from its raw integer or string.
///
/// Unrecognized raw values map to the enum's `Unknown` arm.
///
/// # Errors
///
/// Returns [`DecodeErrorType::MalformedField`] if the value can't be read as
/// `R`.
pub fn decode_enum<T, R>(value: &Value) -> Result<T, DecodeError>
where
    T: From<R>,
    R: DeserializeOwned,
{
    deserialize_at::<R>(value, "enum").map(T::from)
}

/// Encode an enum as its raw integer or string.
pub fn encode_enum<T, R>(value: T) -> Value
where
    R: From<T> + Serialize,
{
    to_json(&R::from(value))
}

/// Records decoded from a list, with the ones that failed set aside.
#[derive(Debug)]
pub struct Batch<T> {
    pub decoded: Vec<T>,
    /// Index into the input and the error of each skipped record.
    pub skipped: Vec<(usize, DecodeError)>,
}

impl<T> Batch<T> {
    fn collect(
        values: &[Value],
        kind: &'static str,
        decode: impl Fn(&Value, &str) -> Result<T, DecodeError>,
    ) -> Self {
        let mut batch = Self {
            decoded: Vec::with_capacity(values.len()),
            skipped: Vec::new(),
        };

        for (index, value) in values.iter().enumerate() {
            match decode(value, &reader::index_path(kind, index)) {
                Ok(decoded) => batch.decoded.push(decoded),
                Err(e) => {
                    tracing::warn!(
                        kind,
                        index,
                        error = %e,
                        "skipping record that failed to decode"
                    );
                    batch.skipped.push((index, e));
                }
            }
        }

        batch
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Decode a list of channels, skipping the ones that fail.
pub fn decode_channels(values: &[Value]) -> Batch<Channel> {
    Batch::collect(values, "channels", Channel::decode)
}

/// Decode a list of messages, skipping the ones that fail.
pub fn decode_messages(values: &[Value]) -> Batch<Message> {
    Batch::collect(values, "messages", |value, path| {
        Message::decode(value, path, 0)
    })
}

#[cfg(test)]
mod tests {
    use super::{
        decode_bitfield, decode_channels, decode_component, decode_enum, encode_bitfield,
        encode_component, encode_enum, DecodeErrorType,
    };
    use crate::{
        channel::{
            message::{component::ComponentContext, MessageFlags, MessageType},
            ChannelFlags, ChannelType,
        },
        guild::Permissions,
    };
    use serde_json::json;

    #[test]
    fn bitfield_keeps_unknown_bits() {
        let raw = json!((1_u64 << 40) | 2);
        let flags: ChannelFlags = decode_bitfield(&raw).unwrap();

        assert!(flags.contains(ChannelFlags::PINNED));
        assert_eq!(encode_bitfield(&flags), raw);

        let flags: MessageFlags = decode_bitfield(&json!(1 << 13)).unwrap();
        assert!(flags.contains(MessageFlags::IS_VOICE_MESSAGE));
    }

    #[test]
    fn bitfield_rejects_strings() {
        let err = decode_bitfield::<MessageFlags>(&json!("4")).unwrap_err();

        assert!(matches!(
            err.kind(),
            DecodeErrorType::MalformedField { actual, .. } if actual == "string"
        ));
    }

    #[test]
    fn permissions_bitfield_is_raw_integer() {
        let permissions = Permissions::SEND_MESSAGES | Permissions::VIEW_CHANNEL;
        let raw = encode_bitfield(&permissions);

        assert_eq!(raw, json!(permissions.bits()));
        assert_eq!(decode_bitfield::<Permissions>(&raw).unwrap(), permissions);
    }

    #[test]
    fn enum_unknown_arm() {
        let kind: ChannelType = decode_enum::<_, i64>(&json!(999)).unwrap();
        assert_eq!(kind, ChannelType::Unknown(999));
        assert_eq!(encode_enum::<_, i64>(kind), json!(999));

        let kind: MessageType = decode_enum::<_, i64>(&json!(300)).unwrap();
        assert_eq!(kind, MessageType::Unknown(300));
        assert_eq!(encode_enum::<_, i64>(kind), json!(300));
    }

    #[test]
    fn component_context_is_enforced() {
        let input = json!({ "type": 4, "custom_id": "a", "style": 1, "label": "A" });

        let err = decode_component(&input, ComponentContext::Message).unwrap_err();
        assert!(matches!(
            err.kind(),
            DecodeErrorType::InvalidVariantCombination { path, .. } if path == "component.type"
        ));

        let component = decode_component(&input, ComponentContext::Modal).unwrap();
        assert_eq!(encode_component(&component), input);
    }

    #[test]
    fn batch_skips_bad_records() {
        let values = [
            json!({ "type": 0, "id": "1", "name": "general", "position": 0 }),
            json!({ "id": "2" }),
            json!({ "type": 0, "id": "3", "name": "x", "position": "first" }),
            json!({ "type": 999, "id": "4" }),
        ];
        let batch = decode_channels(&values);

        assert_eq!(batch.decoded.len(), 2);
        assert!(!batch.is_complete());
        assert_eq!(batch.skipped[0].0, 1);
        assert_eq!(batch.skipped[0].1.path(), "channels[1].type");
        assert_eq!(batch.skipped[1].0, 2);
    }
}
