use serde::{Deserialize, Serialize};

/// Kind of a [`Channel`], read from its `type` discriminant.
///
/// Values the model doesn't know yet are kept in [`ChannelType::Unknown`] so
/// that they survive a round trip.
///
/// [`Channel`]: super::Channel
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum ChannelType {
    GuildText,
    Private,
    GuildVoice,
    Group,
    GuildCategory,
    GuildAnnouncement,
    AnnouncementThread,
    PublicThread,
    PrivateThread,
    GuildStageVoice,
    /// Channel in a hub containing the listed servers.
    GuildDirectory,
    /// Channel that can only contain threads.
    GuildForum,
    /// Channel that can only contain threads, laid out for media.
    GuildMedia,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

#[allow(non_upper_case_globals)]
impl ChannelType {
    /// Former name of [`ChannelType::GuildAnnouncement`].
    #[deprecated(note = "renamed to `GuildAnnouncement`")]
    pub const GuildNews: Self = Self::GuildAnnouncement;

    /// Former name of [`ChannelType::AnnouncementThread`].
    #[deprecated(note = "renamed to `AnnouncementThread`")]
    pub const GuildNewsThread: Self = Self::AnnouncementThread;

    /// Former name of [`ChannelType::PublicThread`].
    #[deprecated(note = "renamed to `PublicThread`")]
    pub const GuildPublicThread: Self = Self::PublicThread;

    /// Former name of [`ChannelType::PrivateThread`].
    #[deprecated(note = "renamed to `PrivateThread`")]
    pub const GuildPrivateThread: Self = Self::PrivateThread;

    /// Whether the channel type is that of a guild.
    ///
    /// The following channel types are considered guild channel types:
    ///
    /// - [`AnnouncementThread`][Self::AnnouncementThread]
    /// - [`GuildAnnouncement`][Self::GuildAnnouncement]
    /// - [`GuildCategory`][Self::GuildCategory]
    /// - [`GuildDirectory`][Self::GuildDirectory]
    /// - [`GuildForum`][Self::GuildForum]
    /// - [`GuildMedia`][Self::GuildMedia]
    /// - [`GuildStageVoice`][Self::GuildStageVoice]
    /// - [`GuildText`][Self::GuildText]
    /// - [`GuildVoice`][Self::GuildVoice]
    /// - [`PrivateThread`][Self::PrivateThread]
    /// - [`PublicThread`][Self::PublicThread]
    pub const fn is_guild(self) -> bool {
        matches!(
            self,
            Self::GuildCategory
                | Self::GuildDirectory
                | Self::AnnouncementThread
                | Self::GuildAnnouncement
                | Self::PrivateThread
                | Self::PublicThread
                | Self::GuildStageVoice
                | Self::GuildText
                | Self::GuildVoice
                | Self::GuildForum
                | Self::GuildMedia
        )
    }

    /// Whether the channel type is a thread.
    pub const fn is_thread(self) -> bool {
        matches!(
            self,
            Self::AnnouncementThread | Self::PublicThread | Self::PrivateThread
        )
    }

    /// Whether the channel type only holds threads.
    pub const fn is_thread_only(self) -> bool {
        matches!(self, Self::GuildForum | Self::GuildMedia)
    }

    /// Name of the associated channel type.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AnnouncementThread => "AnnouncementThread",
            Self::Group => "Group",
            Self::GuildCategory => "GuildCategory",
            Self::GuildDirectory => "GuildDirectory",
            Self::GuildForum => "GuildForum",
            Self::GuildAnnouncement => "GuildAnnouncement",
            Self::GuildMedia => "GuildMedia",
            Self::GuildStageVoice => "GuildStageVoice",
            Self::GuildText => "GuildText",
            Self::GuildVoice => "GuildVoice",
            Self::Private => "Private",
            Self::PrivateThread => "PrivateThread",
            Self::PublicThread => "PublicThread",
            Self::Unknown(_) => "Unknown",
        }
    }
}

impl From<i64> for ChannelType {
    fn from(value: i64) -> Self {
        match value {
            0 => ChannelType::GuildText,
            1 => ChannelType::Private,
            2 => ChannelType::GuildVoice,
            3 => ChannelType::Group,
            4 => ChannelType::GuildCategory,
            5 => ChannelType::GuildAnnouncement,
            10 => ChannelType::AnnouncementThread,
            11 => ChannelType::PublicThread,
            12 => ChannelType::PrivateThread,
            13 => ChannelType::GuildStageVoice,
            14 => ChannelType::GuildDirectory,
            15 => ChannelType::GuildForum,
            16 => ChannelType::GuildMedia,
            unknown => ChannelType::Unknown(unknown),
        }
    }
}

impl From<ChannelType> for i64 {
    fn from(value: ChannelType) -> Self {
        match value {
            ChannelType::GuildText => 0,
            ChannelType::Private => 1,
            ChannelType::GuildVoice => 2,
            ChannelType::Group => 3,
            ChannelType::GuildCategory => 4,
            ChannelType::GuildAnnouncement => 5,
            ChannelType::AnnouncementThread => 10,
            ChannelType::PublicThread => 11,
            ChannelType::PrivateThread => 12,
            ChannelType::GuildStageVoice => 13,
            ChannelType::GuildDirectory => 14,
            ChannelType::GuildForum => 15,
            ChannelType::GuildMedia => 16,
            ChannelType::Unknown(unknown) => unknown,
        }
    }
}
