use super::{decode_components, encode_components, Component, ComponentContext};
use crate::wire::{reader::value_kind, DecodeError, ObjectReader, ObjectWriter};

/// Non-interactive container of other components.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ActionRow {
    /// Components in the row, in display order.
    pub components: Vec<Component>,
    pub id: Option<i32>,
}

impl ActionRow {
    pub(crate) fn decode(
        reader: &ObjectReader<'_>,
        context: ComponentContext,
        depth: usize,
    ) -> Result<Self, DecodeError> {
        match reader.get("components") {
            Some(serde_json::Value::Array(_)) => {}
            other => {
                return Err(DecodeError::malformed(
                    reader.child("components"),
                    "array",
                    other.map_or("missing", value_kind),
                ))
            }
        }

        Ok(Self {
            components: decode_components(reader, "components", context, depth + 1)?,
            id: reader.optional("id")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        writer
            .value("components", encode_components(&self.components))
            .optional("id", &self.id);
    }
}
