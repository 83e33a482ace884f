use super::{chars, range, ValidationError, ValidationErrorType};
use crate::channel::{Channel, ForumSettings, GuildFields};

/// Length of a channel name.
pub const NAME_LENGTH: (usize, usize) = (1, 100);

/// Maximum length of a text channel topic.
pub const TOPIC_LENGTH: usize = 1024;

/// Maximum length of a forum or media channel topic.
pub const FORUM_TOPIC_LENGTH: usize = 4096;

/// Maximum slowmode, in seconds.
pub const RATE_LIMIT_PER_USER: usize = 21_600;

pub const VOICE_USER_LIMIT: usize = 99;

pub const STAGE_USER_LIMIT: usize = 10_000;

/// Maximum number of tags a forum or media channel may offer.
pub const AVAILABLE_TAGS: usize = 20;

/// Check a channel against the platform's limits.
///
/// # Errors
///
/// Returns [`ValidationErrorType::OutOfRange`] for a name, topic, slowmode,
/// user limit or tag list outside its bounds, and
/// [`ValidationErrorType::OverlappingOverwrite`] for an overwrite that both
/// allows and denies a permission.
pub fn validate_channel(channel: &Channel) -> Result<(), ValidationError> {
    if let Some(Some(name)) = &channel.base().name {
        let (min, max) = NAME_LENGTH;
        range(|| "name".to_owned(), name.chars().count(), min, max)?;
    }

    if let Some(guild) = channel.guild() {
        overwrites(guild)?;
    }

    match channel {
        Channel::GuildAnnouncement(text) | Channel::GuildText(text) => {
            if let Some(Some(topic)) = &text.topic {
                chars(|| "topic".to_owned(), topic, TOPIC_LENGTH)?;
            }

            rate_limit("rate_limit_per_user", text.rate_limit_per_user)?;
            rate_limit(
                "default_thread_rate_limit_per_user",
                text.default_thread_rate_limit_per_user,
            )
        }
        Channel::GuildForum(forum) => forum_settings(&forum.settings),
        Channel::GuildMedia(media) => forum_settings(&media.settings),
        Channel::GuildVoice(voice) => {
            user_limit(voice.user_limit, VOICE_USER_LIMIT)?;
            rate_limit("rate_limit_per_user", voice.rate_limit_per_user)
        }
        Channel::GuildStageVoice(stage) => {
            user_limit(stage.user_limit, STAGE_USER_LIMIT)?;
            rate_limit("rate_limit_per_user", stage.rate_limit_per_user)
        }
        Channel::AnnouncementThread(thread)
        | Channel::PrivateThread(thread)
        | Channel::PublicThread(thread) => {
            rate_limit("rate_limit_per_user", thread.rate_limit_per_user)
        }
        _ => Ok(()),
    }
}

fn forum_settings(settings: &ForumSettings) -> Result<(), ValidationError> {
    if let Some(Some(topic)) = &settings.topic {
        chars(|| "topic".to_owned(), topic, FORUM_TOPIC_LENGTH)?;
    }

    range(
        || "available_tags".to_owned(),
        settings.available_tags.len(),
        0,
        AVAILABLE_TAGS,
    )?;
    rate_limit("rate_limit_per_user", settings.rate_limit_per_user)?;

    rate_limit(
        "default_thread_rate_limit_per_user",
        settings.default_thread_rate_limit_per_user,
    )
}

fn rate_limit(field: &'static str, value: Option<u16>) -> Result<(), ValidationError> {
    match value {
        Some(value) => range(|| field.to_owned(), usize::from(value), 0, RATE_LIMIT_PER_USER),
        None => Ok(()),
    }
}

fn user_limit(value: Option<u32>, max: usize) -> Result<(), ValidationError> {
    match value.and_then(|value| usize::try_from(value).ok()) {
        Some(value) => range(|| "user_limit".to_owned(), value, 0, max),
        None => Ok(()),
    }
}

fn overwrites(guild: &GuildFields) -> Result<(), ValidationError> {
    let Some(overwrites) = &guild.permission_overwrites else {
        return Ok(());
    };

    for (index, overwrite) in overwrites.iter().enumerate() {
        let overlap = overwrite.conflicting();

        if !overlap.is_empty() {
            return Err(ValidationError::new(
                ValidationErrorType::OverlappingOverwrite {
                    path: format!("permission_overwrites[{index}]"),
                    overlap,
                },
            ));
        }
    }

    Ok(())
}
