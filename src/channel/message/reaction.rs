use crate::id::{marker::EmojiMarker, Id};
use serde::{Deserialize, Serialize};

/// Reaction to a message, aggregated over every user who added it.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Reaction {
    /// HEX colors used for super reactions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub burst_colors: Vec<String>,
    /// Total number of times the emoji was used, burst included.
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count_details: Option<ReactionCountDetails>,
    pub emoji: PartialEmoji,
    /// Whether the current user reacted with this emoji.
    pub me: bool,
    /// Whether the current user super-reacted with this emoji.
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub me_burst: bool,
}

/// Breakdown of a reaction count into normal and super reactions.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ReactionCountDetails {
    pub burst: u32,
    pub normal: u32,
}

/// Emoji as referenced by reactions, buttons, select options and polls.
///
/// Custom emojis carry an `id`; unicode emojis only a `name`.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PartialEmoji {
    #[serde(default, skip_serializing_if = "crate::util::is_false")]
    pub animated: bool,
    pub id: Option<Id<EmojiMarker>>,
    pub name: Option<String>,
}

impl PartialEmoji {
    /// Unicode emoji.
    pub fn unicode(name: impl Into<String>) -> Self {
        Self {
            animated: false,
            id: None,
            name: Some(name.into()),
        }
    }

    /// Whether the emoji is a custom one rather than unicode.
    pub const fn is_custom(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::{PartialEmoji, Reaction, ReactionCountDetails};
    use crate::id::Id;
    use serde_json::json;
    use serde_test::Token;

    #[test]
    fn unicode_emoji() {
        serde_test::assert_tokens(
            &PartialEmoji::unicode("🔥"),
            &[
                Token::Struct {
                    name: "PartialEmoji",
                    len: 2,
                },
                Token::Str("id"),
                Token::None,
                Token::Str("name"),
                Token::Some,
                Token::Str("🔥"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn reaction() {
        let value = json!({
            "count": 3,
            "count_details": { "burst": 1, "normal": 2 },
            "emoji": { "animated": true, "id": "5", "name": "party" },
            "me": false,
            "burst_colors": ["#ffffff"],
        });
        let reaction: Reaction = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(
            reaction,
            Reaction {
                burst_colors: vec!["#ffffff".to_owned()],
                count: 3,
                count_details: Some(ReactionCountDetails {
                    burst: 1,
                    normal: 2
                }),
                emoji: PartialEmoji {
                    animated: true,
                    id: Some(Id::new(5)),
                    name: Some("party".to_owned()),
                },
                me: false,
                me_burst: false,
            }
        );
        assert!(reaction.emoji.is_custom());
        assert_eq!(serde_json::to_value(&reaction).unwrap(), value);
    }
}
