use serde::{Deserialize, Serialize};

/// Type of a [`Message`].
///
/// The value range is not contiguous; values in the gaps, and any the
/// platform adds later, decode to [`MessageType::Unknown`].
///
/// [`Message`]: super::Message
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
#[serde(from = "i64", into = "i64")]
pub enum MessageType {
    /// Regular message.
    Regular,
    /// System message denoting a recipient has been added to a group.
    RecipientAdd,
    /// System message denoting a recipient has been removed from a group.
    RecipientRemove,
    /// System message denoting a call state, e.g. missed, started.
    Call,
    /// System message denoting a channel's name has been changed.
    ChannelNameChange,
    /// System message denoting a channel's icon has been changed.
    ChannelIconChange,
    /// System message denoting a message has been pinned.
    ChannelMessagePinned,
    /// System message denoting a member has joined a guild.
    UserJoin,
    /// System message denoting a user boosted a guild.
    GuildBoost,
    /// System message denoting a user boosted a guild to level 1.
    GuildBoostTier1,
    /// System message denoting a user boosted a guild to level 2.
    GuildBoostTier2,
    /// System message denoting a user boosted a guild to level 3.
    GuildBoostTier3,
    /// System message denoting a channel has been followed.
    ChannelFollowAdd,
    /// System message denoting a guild has been disqualified for Server
    /// Discovery.
    GuildDiscoveryDisqualified,
    /// System message denoting a guild has been redisqualified for Server
    /// Discovery.
    GuildDiscoveryRequalified,
    /// System message denoting an initial warning for Server Discovery
    /// disqualification.
    GuildDiscoveryGracePeriodInitialWarning,
    /// System message denoting a final warning for Server Discovery
    /// disqualification.
    GuildDiscoveryGracePeriodFinalWarning,
    ThreadCreated,
    /// Message is an inline reply.
    Reply,
    /// Message is a chat input command.
    ChatInputCommand,
    ThreadStarterMessage,
    GuildInviteReminder,
    ContextMenuCommand,
    /// Message is an auto moderation action.
    AutoModerationAction,
    /// System message denoting a user subscribed to a role.
    RoleSubscriptionPurchase,
    /// System message denoting a interaction premium upsell.
    InteractionPremiumUpsell,
    /// System message denoting a stage instance has started.
    StageStart,
    /// System message denoting a stage instance has ended.
    StageEnd,
    /// System message denoting a user has become a stage speaker.
    StageSpeaker,
    /// System message denoting a user has raised their hand in a stage.
    StageRaiseHand,
    /// System message denoting a stage's topic has changed.
    StageTopic,
    /// System message denoting a guild application premium subscription.
    GuildApplicationPremiumSubscription,
    /// System message denoting security actions were enabled.
    GuildIncidentAlertModeEnabled,
    /// System message denoting security actions were disabled.
    GuildIncidentAlertModeDisabled,
    /// System message denoting a raid was reported.
    GuildIncidentReportRaid,
    /// System message denoting a raid report was a false alarm.
    GuildIncidentReportFalseAlarm,
    /// System message denoting a purchase.
    PurchaseNotification,
    /// System message carrying the results of a finished poll.
    PollResult,
    /// Variant value is unknown to the library.
    Unknown(i64),
}

#[allow(non_upper_case_globals)]
impl MessageType {
    /// Former name of [`MessageType::ChannelMessagePinned`].
    #[deprecated(note = "renamed to `ChannelMessagePinned`")]
    pub const ChannelPinnedMessage: Self = Self::ChannelMessagePinned;

    /// Former name of [`MessageType::UserJoin`].
    #[deprecated(note = "renamed to `UserJoin`")]
    pub const GuildMemberJoin: Self = Self::UserJoin;

    /// Former name of [`MessageType::GuildBoost`].
    #[deprecated(note = "renamed to `GuildBoost`")]
    pub const UserPremiumGuildSubscription: Self = Self::GuildBoost;

    /// Former name of [`MessageType::GuildBoostTier1`].
    #[deprecated(note = "renamed to `GuildBoostTier1`")]
    pub const UserPremiumGuildSubscriptionTier1: Self = Self::GuildBoostTier1;

    /// Former name of [`MessageType::GuildBoostTier2`].
    #[deprecated(note = "renamed to `GuildBoostTier2`")]
    pub const UserPremiumGuildSubscriptionTier2: Self = Self::GuildBoostTier2;

    /// Former name of [`MessageType::GuildBoostTier3`].
    #[deprecated(note = "renamed to `GuildBoostTier3`")]
    pub const UserPremiumGuildSubscriptionTier3: Self = Self::GuildBoostTier3;

    /// Former name of [`MessageType::ChatInputCommand`].
    #[deprecated(note = "renamed to `ChatInputCommand`")]
    pub const ApplicationCommand: Self = Self::ChatInputCommand;

    /// Whether a `referenced_message` is expected on messages of this type.
    pub const fn has_reference(self) -> bool {
        matches!(self, Self::Reply | Self::ThreadStarterMessage)
    }

    /// Whether the message was sent by the platform rather than a user or
    /// an application.
    pub const fn is_system(self) -> bool {
        !matches!(
            self,
            Self::Regular
                | Self::Reply
                | Self::ChatInputCommand
                | Self::ContextMenuCommand
                | Self::Unknown(_)
        )
    }
}

impl From<i64> for MessageType {
    fn from(value: i64) -> Self {
        match value {
            0 => Self::Regular,
            1 => Self::RecipientAdd,
            2 => Self::RecipientRemove,
            3 => Self::Call,
            4 => Self::ChannelNameChange,
            5 => Self::ChannelIconChange,
            6 => Self::ChannelMessagePinned,
            7 => Self::UserJoin,
            8 => Self::GuildBoost,
            9 => Self::GuildBoostTier1,
            10 => Self::GuildBoostTier2,
            11 => Self::GuildBoostTier3,
            12 => Self::ChannelFollowAdd,
            14 => Self::GuildDiscoveryDisqualified,
            15 => Self::GuildDiscoveryRequalified,
            16 => Self::GuildDiscoveryGracePeriodInitialWarning,
            17 => Self::GuildDiscoveryGracePeriodFinalWarning,
            18 => Self::ThreadCreated,
            19 => Self::Reply,
            20 => Self::ChatInputCommand,
            21 => Self::ThreadStarterMessage,
            22 => Self::GuildInviteReminder,
            23 => Self::ContextMenuCommand,
            24 => Self::AutoModerationAction,
            25 => Self::RoleSubscriptionPurchase,
            26 => Self::InteractionPremiumUpsell,
            27 => Self::StageStart,
            28 => Self::StageEnd,
            29 => Self::StageSpeaker,
            30 => Self::StageRaiseHand,
            31 => Self::StageTopic,
            32 => Self::GuildApplicationPremiumSubscription,
            36 => Self::GuildIncidentAlertModeEnabled,
            37 => Self::GuildIncidentAlertModeDisabled,
            38 => Self::GuildIncidentReportRaid,
            39 => Self::GuildIncidentReportFalseAlarm,
            44 => Self::PurchaseNotification,
            46 => Self::PollResult,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<MessageType> for i64 {
    fn from(value: MessageType) -> Self {
        match value {
            MessageType::Regular => 0,
            MessageType::RecipientAdd => 1,
            MessageType::RecipientRemove => 2,
            MessageType::Call => 3,
            MessageType::ChannelNameChange => 4,
            MessageType::ChannelIconChange => 5,
            MessageType::ChannelMessagePinned => 6,
            MessageType::UserJoin => 7,
            MessageType::GuildBoost => 8,
            MessageType::GuildBoostTier1 => 9,
            MessageType::GuildBoostTier2 => 10,
            MessageType::GuildBoostTier3 => 11,
            MessageType::ChannelFollowAdd => 12,
            MessageType::GuildDiscoveryDisqualified => 14,
            MessageType::GuildDiscoveryRequalified => 15,
            MessageType::GuildDiscoveryGracePeriodInitialWarning => 16,
            MessageType::GuildDiscoveryGracePeriodFinalWarning => 17,
            MessageType::ThreadCreated => 18,
            MessageType::Reply => 19,
            MessageType::ChatInputCommand => 20,
            MessageType::ThreadStarterMessage => 21,
            MessageType::GuildInviteReminder => 22,
            MessageType::ContextMenuCommand => 23,
            MessageType::AutoModerationAction => 24,
            MessageType::RoleSubscriptionPurchase => 25,
            MessageType::InteractionPremiumUpsell => 26,
            MessageType::StageStart => 27,
            MessageType::StageEnd => 28,
            MessageType::StageSpeaker => 29,
            MessageType::StageRaiseHand => 30,
            MessageType::StageTopic => 31,
            MessageType::GuildApplicationPremiumSubscription => 32,
            MessageType::GuildIncidentAlertModeEnabled => 36,
            MessageType::GuildIncidentAlertModeDisabled => 37,
            MessageType::GuildIncidentReportRaid => 38,
            MessageType::GuildIncidentReportFalseAlarm => 39,
            MessageType::PurchaseNotification => 44,
            MessageType::PollResult => 46,
            MessageType::Unknown(unknown) => unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MessageType;
    use serde_test::Token;
    use static_assertions::const_assert;

    const_assert!(MessageType::Reply.has_reference());
    const_assert!(!MessageType::Regular.has_reference());
    const_assert!(MessageType::UserJoin.is_system());
    const_assert!(!MessageType::ChatInputCommand.is_system());

    #[test]
    fn known_ranges() {
        let known = (0..=12)
            .chain(14..=32)
            .chain(36..=39)
            .chain([44, 46]);

        for value in known {
            let kind = MessageType::from(value);
            assert!(
                !matches!(kind, MessageType::Unknown(_)),
                "{value} should be known"
            );
            serde_test::assert_tokens(&kind, &[Token::I64(value)]);
        }
    }

    #[test]
    fn gaps_are_unknown() {
        for value in [13, 33, 40, 45, 47, 1000] {
            assert_eq!(MessageType::from(value), MessageType::Unknown(value));
            assert_eq!(i64::from(MessageType::from(value)), value);
        }
    }

    #[allow(deprecated)]
    #[test]
    fn deprecated_aliases() {
        assert_eq!(MessageType::from(6), MessageType::ChannelPinnedMessage);
        assert_eq!(i64::from(MessageType::GuildMemberJoin), 7);
        assert_eq!(i64::from(MessageType::UserPremiumGuildSubscriptionTier3), 11);
        assert_eq!(MessageType::ApplicationCommand, MessageType::ChatInputCommand);
    }
}
