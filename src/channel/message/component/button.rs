use crate::{
    channel::message::PartialEmoji,
    id::{marker::SkuMarker, Id},
    wire::{DecodeError, ObjectReader, ObjectWriter},
};
use serde::{Deserialize, Serialize};
use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// Clickable item that renders below messages.
///
/// The [`style`] decides which [`identity`] is legal: interactive styles
/// need a custom ID, [`ButtonStyle::Link`] a URL and
/// [`ButtonStyle::Premium`] a SKU. Use [`Button::new`] to build one.
///
/// [`identity`]: Self::identity
/// [`style`]: Self::style
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Button {
    pub disabled: bool,
    pub emoji: Option<PartialEmoji>,
    pub id: Option<i32>,
    pub identity: ButtonIdentity,
    /// User-facing label. Premium buttons have none.
    pub label: Option<String>,
    pub style: ButtonStyle,
}

impl Button {
    /// Create a button, checking that the identity matches the style.
    ///
    /// # Errors
    ///
    /// Returns a [`ButtonErrorType::IdentityMismatch`] error type if the
    /// style requires a different identity.
    pub fn new(style: ButtonStyle, identity: ButtonIdentity) -> Result<Self, ButtonError> {
        if let Some(expected) = style.identity_key() {
            if expected != identity.key() {
                return Err(ButtonError {
                    kind: ButtonErrorType::IdentityMismatch {
                        expected,
                        found: identity.key(),
                        style,
                    },
                });
            }
        }

        Ok(Self {
            disabled: false,
            emoji: None,
            id: None,
            identity,
            label: None,
            style,
        })
    }

    pub(crate) fn decode(reader: &ObjectReader<'_>) -> Result<Self, DecodeError> {
        let style: ButtonStyle = reader.required("style")?;

        let mut present = Vec::with_capacity(1);
        if let Some(custom_id) = reader.optional("custom_id")? {
            present.push(ButtonIdentity::CustomId(custom_id));
        }
        if let Some(url) = reader.optional("url")? {
            present.push(ButtonIdentity::Url(url));
        }
        if let Some(sku_id) = reader.optional("sku_id")? {
            present.push(ButtonIdentity::Sku(sku_id));
        }

        if present.len() != 1 {
            return Err(DecodeError::invalid_combination(
                reader.child("style"),
                format!(
                    "button must carry exactly one of custom_id, url and sku_id, found {}",
                    present.len()
                ),
            ));
        }

        let identity = present.remove(0);

        if let Some(expected) = style.identity_key() {
            if expected != identity.key() {
                return Err(DecodeError::invalid_combination(
                    reader.child("style"),
                    format!(
                        "{} button requires {expected}, found {}",
                        style.name(),
                        identity.key()
                    ),
                ));
            }
        }

        Ok(Self {
            disabled: reader.flag("disabled")?,
            emoji: reader.optional("emoji")?,
            id: reader.optional("id")?,
            identity,
            label: reader.optional("label")?,
            style,
        })
    }

    pub(crate) fn encode(&self, writer: &mut ObjectWriter) {
        match &self.identity {
            ButtonIdentity::CustomId(custom_id) => writer.field("custom_id", custom_id),
            ButtonIdentity::Sku(sku_id) => writer.field("sku_id", sku_id),
            ButtonIdentity::Url(url) => writer.field("url", url),
        };

        writer
            .flag("disabled", self.disabled)
            .optional("emoji", &self.emoji)
            .optional("id", &self.id)
            .optional("label", &self.label)
            .field("style", &self.style);
    }
}

/// The one field that identifies what a button does.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ButtonIdentity {
    /// Developer-defined identifier sent back on click.
    CustomId(String),
    /// SKU of a premium purchase.
    Sku(Id<SkuMarker>),
    /// URL opened by a link button.
    Url(String),
}

impl ButtonIdentity {
    /// Wire key the identity is stored under.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::CustomId(_) => "custom_id",
            Self::Sku(_) => "sku_id",
            Self::Url(_) => "url",
        }
    }
}

/// Style of a [`Button`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum ButtonStyle {
    /// Blurple.
    Primary,
    /// Grey.
    Secondary,
    /// Green.
    Success,
    /// Red.
    Danger,
    /// Grey, navigates to a URL.
    Link,
    /// Blurple, starts a purchase of a SKU.
    Premium,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl ButtonStyle {
    /// Key of the identity this style requires.
    ///
    /// Unknown styles accept any single identity.
    pub const fn identity_key(self) -> Option<&'static str> {
        match self {
            Self::Primary | Self::Secondary | Self::Success | Self::Danger => Some("custom_id"),
            Self::Link => Some("url"),
            Self::Premium => Some("sku_id"),
            Self::Unknown(_) => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Success => "Success",
            Self::Danger => "Danger",
            Self::Link => "Link",
            Self::Premium => "Premium",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl From<i64> for ButtonStyle {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Primary,
            2 => Self::Secondary,
            3 => Self::Success,
            4 => Self::Danger,
            5 => Self::Link,
            6 => Self::Premium,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<ButtonStyle> for i64 {
    fn from(value: ButtonStyle) -> Self {
        match value {
            ButtonStyle::Primary => 1,
            ButtonStyle::Secondary => 2,
            ButtonStyle::Success => 3,
            ButtonStyle::Danger => 4,
            ButtonStyle::Link => 5,
            ButtonStyle::Premium => 6,
            ButtonStyle::Unknown(unknown) => unknown,
        }
    }
}

/// A [`Button`] couldn't be constructed.
#[derive(Debug)]
pub struct ButtonError {
    kind: ButtonErrorType,
}

impl ButtonError {
    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &ButtonErrorType {
        &self.kind
    }

    /// Consume the error, returning the owned error type.
    #[must_use = "consuming the error into its type has no effect if left unused"]
    pub fn into_kind(self) -> ButtonErrorType {
        self.kind
    }
}

impl Display for ButtonError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            ButtonErrorType::IdentityMismatch {
                expected,
                found,
                style,
            } => {
                f.write_str(style.name())?;
                f.write_str(" button requires ")?;
                f.write_str(expected)?;
                f.write_str(", found ")?;

                f.write_str(found)
            }
        }
    }
}

impl Error for ButtonError {}

/// Type of [`ButtonError`] that occurred.
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ButtonErrorType {
    /// The identity is not the one the style requires.
    IdentityMismatch {
        /// Key of the identity the style requires.
        expected: &'static str,
        /// Key of the identity that was given.
        found: &'static str,
        style: ButtonStyle,
    },
}

#[cfg(test)]
mod tests {
    use super::{Button, ButtonErrorType, ButtonIdentity, ButtonStyle};
    use crate::{
        channel::message::component::{Component, ComponentContext},
        id::Id,
        wire::DecodeErrorType,
    };
    use serde_json::{json, Value};
    use serde_test::Token;

    const STYLES: &[(ButtonStyle, i64)] = &[
        (ButtonStyle::Primary, 1),
        (ButtonStyle::Secondary, 2),
        (ButtonStyle::Success, 3),
        (ButtonStyle::Danger, 4),
        (ButtonStyle::Link, 5),
        (ButtonStyle::Premium, 6),
    ];

    fn identities() -> [(&'static str, Value); 3] {
        [
            ("custom_id", json!("click")),
            ("url", json!("https://example.com")),
            ("sku_id", json!("99")),
        ]
    }

    #[test]
    fn styles() {
        for (style, num) in STYLES {
            serde_test::assert_tokens(style, &[Token::I64(*num)]);
        }

        serde_test::assert_tokens(&ButtonStyle::Unknown(7), &[Token::I64(7)]);
    }

    #[test]
    fn exactly_one_identity_matches_each_style() {
        for (style, num) in STYLES {
            let mut accepted = 0;

            for (key, value) in identities() {
                let mut button = json!({ "type": 2, "style": num });
                button[key] = value;

                match Component::decode(&button, "button", ComponentContext::Message, 0) {
                    Ok(Component::Button(decoded)) => {
                        accepted += 1;
                        assert_eq!(decoded.identity.key(), key);
                        assert_eq!(Some(key), style.identity_key());
                    }
                    Ok(other) => panic!("expected a button, got {other:?}"),
                    Err(err) => assert!(
                        matches!(
                            err.kind(),
                            DecodeErrorType::InvalidVariantCombination { path, .. }
                                if path == "button.style"
                        ),
                        "{err}"
                    ),
                }
            }

            assert_eq!(accepted, 1, "{style:?}");
        }
    }

    #[test]
    fn two_identities_are_rejected() {
        let button = json!({
            "type": 2,
            "style": 5,
            "url": "https://example.com",
            "custom_id": "x",
        });
        let err = Component::decode(&button, "button", ComponentContext::Message, 0).unwrap_err();

        assert!(matches!(
            err.kind(),
            DecodeErrorType::InvalidVariantCombination { .. }
        ));
    }

    #[test]
    fn unknown_style_takes_any_single_identity() {
        let button = json!({ "type": 2, "style": 9, "sku_id": "3" });
        let decoded = Component::decode(&button, "button", ComponentContext::Message, 0).unwrap();

        assert_eq!(decoded.encode(), button);
    }

    #[test]
    fn wide_style_is_unknown() {
        let button = json!({ "type": 2, "style": 300, "custom_id": "x" });
        let decoded = Component::decode(&button, "button", ComponentContext::Message, 0).unwrap();

        let Component::Button(inner) = &decoded else {
            panic!("expected a button, got {decoded:?}");
        };
        assert_eq!(inner.style, ButtonStyle::Unknown(300));
        assert_eq!(decoded.encode(), button);
    }

    #[test]
    fn premium_round_trip() {
        let button = json!({ "type": 2, "style": 6, "sku_id": "3", "disabled": true, "id": 4 });
        let decoded = Component::decode(&button, "button", ComponentContext::Message, 0).unwrap();

        let Component::Button(inner) = &decoded else {
            panic!("expected a button, got {decoded:?}");
        };
        assert_eq!(inner.identity, ButtonIdentity::Sku(Id::new(3)));
        assert!(inner.disabled);
        assert_eq!(decoded.encode(), button);
    }

    #[test]
    fn smart_constructor() {
        let link = Button::new(
            ButtonStyle::Link,
            ButtonIdentity::Url("https://example.com".to_owned()),
        )
        .unwrap();
        assert_eq!(link.style, ButtonStyle::Link);

        let err = Button::new(ButtonStyle::Danger, ButtonIdentity::Sku(Id::new(1))).unwrap_err();
        assert_eq!(
            err.kind(),
            &ButtonErrorType::IdentityMismatch {
                expected: "custom_id",
                found: "sku_id",
                style: ButtonStyle::Danger,
            }
        );
        assert_eq!(err.to_string(), "Danger button requires custom_id, found sku_id");
    }
}
