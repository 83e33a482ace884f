use crate::id::{marker::StickerMarker, Id};
use serde::{Deserialize, Serialize};

/// Smallest amount of data required to render a sticker.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct MessageStickerItem {
    pub format_type: StickerFormatType,
    pub id: Id<StickerMarker>,
    pub name: String,
}

/// Format of a sticker's image.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum StickerFormatType {
    Png,
    Apng,
    Lottie,
    Gif,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for StickerFormatType {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Png,
            2 => Self::Apng,
            3 => Self::Lottie,
            4 => Self::Gif,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<StickerFormatType> for i64 {
    fn from(value: StickerFormatType) -> Self {
        match value {
            StickerFormatType::Png => 1,
            StickerFormatType::Apng => 2,
            StickerFormatType::Lottie => 3,
            StickerFormatType::Gif => 4,
            StickerFormatType::Unknown(unknown) => unknown,
        }
    }
}
