use serde::{Deserialize, Serialize};

/// Rich presence activity a message invites others to.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageActivity {
    #[serde(rename = "type")]
    pub kind: MessageActivityType,
    /// ID of the player's party, lobby or group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_id: Option<String>,
}

/// Activity of this message.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum MessageActivityType {
    Join,
    Spectate,
    Listen,
    JoinRequest,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for MessageActivityType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Join,
            2 => Self::Spectate,
            3 => Self::Listen,
            5 => Self::JoinRequest,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<MessageActivityType> for i64 {
    fn from(value: MessageActivityType) -> Self {
        match value {
            MessageActivityType::Join => 1,
            MessageActivityType::Spectate => 2,
            MessageActivityType::Listen => 3,
            MessageActivityType::JoinRequest => 5,
            MessageActivityType::Unknown(unknown) => unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MessageActivity, MessageActivityType};
    use serde_test::Token;

    #[test]
    fn variants() {
        serde_test::assert_tokens(&MessageActivityType::Join, &[Token::I64(1)]);
        serde_test::assert_tokens(&MessageActivityType::Spectate, &[Token::I64(2)]);
        serde_test::assert_tokens(&MessageActivityType::Listen, &[Token::I64(3)]);
        serde_test::assert_tokens(&MessageActivityType::JoinRequest, &[Token::I64(5)]);
        serde_test::assert_tokens(&MessageActivityType::Unknown(4), &[Token::I64(4)]);
    }

    #[test]
    fn activity() {
        let value = MessageActivity {
            kind: MessageActivityType::Join,
            party_id: Some("party".to_owned()),
        };

        serde_test::assert_tokens(
            &value,
            &[
                Token::Struct {
                    name: "MessageActivity",
                    len: 2,
                },
                Token::Str("type"),
                Token::I64(1),
                Token::Str("party_id"),
                Token::Some,
                Token::Str("party"),
                Token::StructEnd,
            ],
        );
    }
}
