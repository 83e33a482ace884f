use crate::wire::{DecodeError, ObjectReader, ObjectWriter};
use serde::{Deserialize, Serialize};

/// Text field of a modal.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct TextInput {
    pub custom_id: String,
    pub id: Option<i32>,
    pub label: Option<String>,
    /// Maximum input length, at most 4000.
    pub max_length: Option<u16>,
    pub min_length: Option<u16>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub style: TextInputStyle,
    /// Pre-filled text.
    pub value: Option<String>,
}

impl TextInput {
    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            custom_id: reader.required("custom_id")?,
            id: reader.optional("id")?,
            label: reader.optional("label")?,
            max_length: reader.optional("max_length")?,
            min_length: reader.optional("min_length")?,
            placeholder: reader.optional("placeholder")?,
            required: reader.optional("required")?,
            style: reader.required("style")?,
            value: reader.optional("value")?,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        writer
            .field("custom_id", &self.custom_id)
            .optional("id", &self.id)
            .optional("label", &self.label)
            .optional("max_length", &self.max_length)
            .optional("min_length", &self.min_length)
            .optional("placeholder", &self.placeholder)
            .optional("required", &self.required)
            .field("style", &self.style)
            .optional("value", &self.value);
    }
}

/// Style of a [`TextInput`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum TextInputStyle {
    /// Single-line input.
    Short,
    /// Multi-line input.
    Paragraph,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for TextInputStyle {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Short,
            2 => Self::Paragraph,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<TextInputStyle> for i64 {
    fn from(value: TextInputStyle) -> Self {
        match value {
            TextInputStyle::Short => 1,
            TextInputStyle::Paragraph => 2,
            TextInputStyle::Unknown(unknown) => unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TextInputStyle;
    use crate::channel::message::component::{Component, ComponentContext};
    use serde_json::json;
    use serde_test::Token;

    #[test]
    fn style() {
        serde_test::assert_tokens(&TextInputStyle::Short, &[Token::I64(1)]);
        serde_test::assert_tokens(&TextInputStyle::Paragraph, &[Token::I64(2)]);
        serde_test::assert_tokens(&TextInputStyle::Unknown(3), &[Token::I64(3)]);
    }

    #[test]
    fn modal_row() {
        let value = json!({
            "type": 1,
            "components": [{
                "type": 4,
                "custom_id": "feedback",
                "label": "Feedback",
                "style": 2,
                "max_length": 4000,
                "required": false,
            }],
        });
        let component = Component::decode(&value, "modal", ComponentContext::Modal, 0).unwrap();

        assert_eq!(component.encode(), value);
    }
}
