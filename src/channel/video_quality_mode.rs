use serde::{Deserialize, Serialize};

/// Camera video quality mode of a voice or stage channel.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum VideoQualityMode {
    /// The platform chooses the quality for optimal performance.
    Auto,
    /// 720p.
    Full,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

impl From<i64> for VideoQualityMode {
    fn from(value: i64) -> Self {
        match value {
            1 => Self::Auto,
            2 => Self::Full,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<VideoQualityMode> for i64 {
    fn from(value: VideoQualityMode) -> Self {
        match value {
            VideoQualityMode::Auto => 1,
            VideoQualityMode::Full => 2,
            VideoQualityMode::Unknown(unknown) => unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VideoQualityMode;
    use serde_test::Token;

    #[test]
    fn variants() {
        serde_test::assert_tokens(&VideoQualityMode::Auto, &[Token::I64(1)]);
        serde_test::assert_tokens(&VideoQualityMode::Full, &[Token::I64(2)]);
        serde_test::assert_tokens(&VideoQualityMode::Unknown(3), &[Token::I64(3)]);
    }
}
