use bitflags::bitflags;
use serde::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

bitflags! {
    /// Flags of a [`Channel`].
    ///
    /// Bits without a name are retained, so a value decoded from a newer
    /// protocol revision encodes back to the same integer.
    ///
    /// [`Channel`]: super::Channel
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct ChannelFlags: u64 {
        /// Channel was removed from the guild's home feed.
        ///
        /// Unstable: the platform does not document this bit.
        const GUILD_FEED_REMOVED = 1 << 0;
        /// Channel is pinned in a forum.
        const PINNED = 1 << 1;
        /// Channel was removed from the guild's active channels.
        ///
        /// Unstable: the platform does not document this bit.
        const ACTIVE_CHANNELS_REMOVED = 1 << 2;
        /// New threads in a forum channel require a tag.
        const REQUIRE_TAG = 1 << 4;
        /// Channel is marked as spam.
        ///
        /// Unstable: the platform does not document this bit.
        const IS_SPAM = 1 << 5;
        /// Channel is a guild resource channel.
        ///
        /// Unstable: the platform does not document this bit.
        const IS_GUILD_RESOURCE_CHANNEL = 1 << 7;
        /// Channel is created by the platform's assistant.
        ///
        /// Unstable: the platform does not document this bit.
        const CLYDE_AI = 1 << 8;
        /// Channel is scheduled for deletion.
        ///
        /// Unstable: the platform does not document this bit.
        const IS_SCHEDULED_FOR_DELETION = 1 << 9;
        /// Embedded media download options are hidden for the media channel.
        const HIDE_MEDIA_DOWNLOAD_OPTIONS = 1 << 15;
    }
}

impl<'de> Deserialize<'de> for ChannelFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_retain(u64::deserialize(deserializer)?))
    }
}

impl Serialize for ChannelFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}
