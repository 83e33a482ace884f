use bitflags::bitflags;
use serde::{
    de::{Deserialize, Deserializer},
    ser::{Serialize, Serializer},
};

bitflags! {
    /// Flags of an [`Attachment`].
    ///
    /// [`Attachment`]: super::Attachment
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    pub struct AttachmentFlags: u64 {
        /// Attachment is a clip from a stream.
        const IS_CLIP = 1 << 0;
        /// Attachment is the thumbnail of a thread in a media channel.
        const IS_THUMBNAIL = 1 << 1;
        /// Attachment has been edited using the remix feature.
        const IS_REMIX = 1 << 2;
        /// Attachment was marked as a spoiler.
        const IS_SPOILER = 1 << 3;
        /// Attachment was flagged as sensitive content.
        const CONTAINS_EXPLICIT_MEDIA = 1 << 4;
        /// Attachment is an animated image.
        const IS_ANIMATED = 1 << 5;
    }
}

impl<'de> Deserialize<'de> for AttachmentFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_bits_retain(u64::deserialize(deserializer)?))
    }
}

impl Serialize for AttachmentFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.bits())
    }
}
