use bitflags::bitflags;
use serde::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

bitflags! {
    /// Flags of a [`Message`].
    ///
    /// [`Message`]: super::Message
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct MessageFlags: u64 {
        /// Has been published to subscribed channels via Channel Following.
        const CROSSPOSTED = 1;
        /// Is a crosspost from another channel via Channel Following.
        const IS_CROSSPOST = 1 << 1;
        /// Do not include any embeds when serializing this message.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// Source message for this crosspost has been deleted via Channel
        /// Following.
        const SOURCE_MESSAGE_DELETED = 1 << 3;
        /// Comes from the urgent message system.
        const URGENT = 1 << 4;
        /// Has an associated thread, with the same ID as the message.
        const HAS_THREAD = 1 << 5;
        /// Is only visible to the user who invoked the interaction.
        const EPHEMERAL = 1 << 6;
        /// Is an interaction response and the bot is "thinking".
        const LOADING = 1 << 7;
        /// Failed to mention some roles and add their members to the
        /// thread.
        const FAILED_TO_MENTION_SOME_ROLES_IN_THREAD = 1 << 8;
        /// Links in the message show a "not discordable" warning.
        ///
        /// Unstable: the platform does not document this bit.
        const SHOULD_SHOW_LINK_NOT_DISCORDABLE_WARNING = 1 << 10;
        /// Will not trigger push and desktop notifications.
        const SUPPRESS_NOTIFICATIONS = 1 << 12;
        /// Is a voice message.
        const IS_VOICE_MESSAGE = 1 << 13;
        /// Has a snapshot, via message forwarding.
        const HAS_SNAPSHOT = 1 << 14;
        /// Uses the newer component layout system.
        const IS_COMPONENTS_V2 = 1 << 15;
    }
}

impl<'de> Deserialize<'de> for MessageFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_retain(u64::deserialize(deserializer)?))
    }
}

impl Serialize for MessageFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}
