use crate::{
    id::{
        marker::{ChannelMarker, UserMarker},
        Id,
    },
    util::Timestamp,
};
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Membership of the current user in a thread.
///
/// `id` and `user_id` are omitted in the member object nested in a thread
/// channel payload.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ThreadMember {
    pub flags: ThreadMemberFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id<ChannelMarker>>,
    pub join_timestamp: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Id<UserMarker>>,
}

bitflags! {
    /// Notification settings of a [`ThreadMember`].
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct ThreadMemberFlags: u64 {
        /// Member has interacted with the thread.
        const HAS_INTERACTED = 1 << 0;
        /// Member receives notifications for all messages.
        const ALL_MESSAGES = 1 << 1;
        /// Member receives notifications only for mentions.
        const ONLY_MENTIONS = 1 << 2;
        /// Member receives no notifications.
        const NO_MESSAGES = 1 << 3;
    }
}

impl<'de> Deserialize<'de> for ThreadMemberFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_retain(u64::deserialize(deserializer)?))
    }
}

impl Serialize for ThreadMemberFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::{ThreadMember, ThreadMemberFlags};
    use crate::{id::Id, util::Timestamp};
    use serde_test::Token;
    use std::str::FromStr;

    #[test]
    fn thread_member() {
        let value = ThreadMember {
            flags: ThreadMemberFlags::HAS_INTERACTED | ThreadMemberFlags::ALL_MESSAGES,
            id: Some(Id::new(1)),
            join_timestamp: Timestamp::from_str("2015-04-26T06:26:56.936000+00:00").unwrap(),
            user_id: Some(Id::new(2)),
        };

        serde_test::assert_tokens(
            &value,
            &[
                Token::Struct {
                    name: "ThreadMember",
                    len: 4,
                },
                Token::Str("flags"),
                Token::U64(3),
                Token::Str("id"),
                Token::Some,
                Token::Str("1"),
                Token::Str("join_timestamp"),
                Token::Str("2015-04-26T06:26:56.936000+00:00"),
                Token::Str("user_id"),
                Token::Some,
                Token::Str("2"),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn unknown_flag_bits() {
        let flags = ThreadMemberFlags::from_bits_retain(1 << 9 | 1);
        serde_test::assert_tokens(&flags, &[Token::U64(1 << 9 | 1)]);
        assert!(flags.contains(ThreadMemberFlags::HAS_INTERACTED));
    }
}
