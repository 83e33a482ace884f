use super::ChannelBase;
use crate::wire::{DecodeError, ObjectReader, ObjectWriter};
use serde_json::{Map, Value};

/// Channel of a type the model doesn't know yet.
///
/// Keeps the raw `type`, the base fields, and every other key verbatim so
/// that encoding reproduces the payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownChannel {
    pub base: ChannelBase,
    /// Keys outside of the base fields.
    pub extra: Map<String, Value>,
    /// Raw `type` discriminant.
    pub kind: i64,
}

impl UnknownChannel {
    pub(crate) fn decode(reader: &ObjectReader<'_>, kind: i64) -> Result<Self, DecodeError> {
        Ok(Self {
            base: ChannelBase::decode(reader)?,
            extra: reader.remaining(ChannelBase::KEYS),
            kind,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        writer.extend(&self.extra);
        self.base.encode(writer);
    }
}
