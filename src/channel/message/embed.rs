//! Rich content attached to a message.
//!
//! Length limits are not enforced here; see the validation pass.

use crate::util::Timestamp;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<EmbedAuthor>,
    /// 24-bit RGB color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EmbedType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<EmbedProvider>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<EmbedThumbnail>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<EmbedVideo>,
}

impl Embed {
    /// Number of characters counted against the combined embed limit.
    ///
    /// Sums the title, description, field names and values, footer text and
    /// author name.
    pub fn text_len(&self) -> usize {
        fn chars(value: Option<&str>) -> usize {
            value.map_or(0, |value| value.chars().count())
        }

        chars(self.title.as_deref())
            + chars(self.description.as_deref())
            + self
                .fields
                .iter()
                .map(|field| field.name.chars().count() + field.value.chars().count())
                .sum::<usize>()
            + chars(self.footer.as_ref().map(|footer| footer.text.as_str()))
            + chars(self.author.as_ref().map(|author| author.name.as_str()))
    }
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedField {
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub inline: bool,
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedFooter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_icon_url: Option<String>,
    pub text: String,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedProvider {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedThumbnail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct EmbedVideo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,
}

/// Type of an embed, keyed by a string.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "String", into = "String")]
pub enum EmbedType {
    /// Article embed.
    Article,
    /// Auto moderation alert embed.
    AutoModerationMessage,
    /// Animated gif image embed rendered as a video embed.
    Gifv,
    /// Image embed.
    Image,
    /// Link embed.
    Link,
    /// Poll result embed.
    PollResult,
    /// Generic embed rendered from embed attributes.
    Rich,
    /// Video embed.
    Video,
    /// Variant value is unknown to the library.
    Unknown(String),
}

impl EmbedType {
    pub fn name(&self) -> &str {
        match self {
            Self::Article => "article",
            Self::AutoModerationMessage => "auto_moderation_message",
            Self::Gifv => "gifv",
            Self::Image => "image",
            Self::Link => "link",
            Self::PollResult => "poll_result",
            Self::Rich => "rich",
            Self::Video => "video",
            Self::Unknown(unknown) => unknown,
        }
    }
}

impl From<String> for EmbedType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "article" => Self::Article,
            "auto_moderation_message" => Self::AutoModerationMessage,
            "gifv" => Self::Gifv,
            "image" => Self::Image,
            "link" => Self::Link,
            "poll_result" => Self::PollResult,
            "rich" => Self::Rich,
            "video" => Self::Video,
            _ => Self::Unknown(value),
        }
    }
}

impl From<EmbedType> for String {
    fn from(value: EmbedType) -> Self {
        match value {
            EmbedType::Unknown(unknown) => unknown,
            known => known.name().to_owned(),
        }
    }
}
