use super::{chars, component, not_allowed, range, ValidationError};
use crate::{
    channel::message::{Embed, Message, MessageFlags},
    wire::reader::index_path,
};

/// Maximum number of embeds in a message.
pub const EMBED_COUNT: usize = 10;

/// Maximum number of top-level components in a message.
pub const COMPONENT_COUNT: usize = 5;

pub const EMBED_TITLE_LENGTH: usize = 256;

pub const EMBED_DESCRIPTION_LENGTH: usize = 4096;

pub const EMBED_FIELD_COUNT: usize = 25;

pub const EMBED_FIELD_NAME_LENGTH: usize = 256;

pub const EMBED_FIELD_VALUE_LENGTH: usize = 1024;

pub const EMBED_FOOTER_TEXT_LENGTH: usize = 2048;

pub const EMBED_AUTHOR_NAME_LENGTH: usize = 256;

/// Maximum combined length of every text of an embed.
pub const EMBED_TOTAL_LENGTH: usize = 6000;

/// Check the cross-field rules and limits of a message.
///
/// # Errors
///
/// Returns [`ValidationErrorType::FieldNotAllowed`] for a referenced message
/// on a type that can't reference one, a thread without the
/// [`MessageFlags::HAS_THREAD`] flag, or a poll sent by a webhook. Embed and
/// component errors are returned with their path under `embeds` and
/// `components`.
///
/// [`ValidationErrorType::FieldNotAllowed`]: super::ValidationErrorType::FieldNotAllowed
pub fn validate_message(message: &Message) -> Result<(), ValidationError> {
    if message.referenced_message.is_some() && !message.kind.has_reference() {
        return Err(not_allowed(
            "referenced_message",
            "only replies and thread starter messages reference a message",
        ));
    }

    if message.thread.is_some()
        && !message
            .flags
            .is_some_and(|flags| flags.contains(MessageFlags::HAS_THREAD))
    {
        return Err(not_allowed(
            "thread",
            "a message with a thread has the HAS_THREAD flag",
        ));
    }

    if message.poll.is_some() && message.webhook_id.is_some() {
        return Err(not_allowed("poll", "webhook messages can't carry a poll"));
    }

    range(|| "embeds".to_owned(), message.embeds.len(), 0, EMBED_COUNT)?;

    for (index, embed) in message.embeds.iter().enumerate() {
        check_embed(embed, &index_path("embeds", index))?;
    }

    range(
        || "components".to_owned(),
        message.components.len(),
        0,
        COMPONENT_COUNT,
    )?;

    for (index, child) in message.components.iter().enumerate() {
        component::check(child, &index_path("components", index))?;
    }

    Ok(())
}

/// Check the length limits of an embed.
///
/// # Errors
///
/// Returns [`ValidationErrorType::OutOfRange`] for any text or field count
/// past its limit, including the combined length of all texts.
///
/// [`ValidationErrorType::OutOfRange`]: super::ValidationErrorType::OutOfRange
pub fn validate_embed(embed: &Embed) -> Result<(), ValidationError> {
    check_embed(embed, "embed")
}

fn check_embed(embed: &Embed, path: &str) -> Result<(), ValidationError> {
    if let Some(title) = &embed.title {
        chars(|| format!("{path}.title"), title, EMBED_TITLE_LENGTH)?;
    }

    if let Some(description) = &embed.description {
        chars(
            || format!("{path}.description"),
            description,
            EMBED_DESCRIPTION_LENGTH,
        )?;
    }

    let fields_path = format!("{path}.fields");
    range(
        || fields_path.clone(),
        embed.fields.len(),
        0,
        EMBED_FIELD_COUNT,
    )?;

    for (index, field) in embed.fields.iter().enumerate() {
        let field_path = index_path(&fields_path, index);

        chars(
            || format!("{field_path}.name"),
            &field.name,
            EMBED_FIELD_NAME_LENGTH,
        )?;
        chars(
            || format!("{field_path}.value"),
            &field.value,
            EMBED_FIELD_VALUE_LENGTH,
        )?;
    }

    if let Some(footer) = &embed.footer {
        chars(
            || format!("{path}.footer.text"),
            &footer.text,
            EMBED_FOOTER_TEXT_LENGTH,
        )?;
    }

    if let Some(author) = &embed.author {
        chars(
            || format!("{path}.author.name"),
            &author.name,
            EMBED_AUTHOR_NAME_LENGTH,
        )?;
    }

    range(|| path.to_owned(), embed.text_len(), 0, EMBED_TOTAL_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::{validate_embed, validate_message};
    use crate::{
        channel::message::{embed::EmbedField, Embed},
        user::tests::user,
        validate::ValidationErrorType,
        wire::decode_message,
    };
    use serde_json::{json, Value};

    fn message(kind: i64) -> Value {
        json!({
            "author": serde_json::to_value(user()).unwrap(),
            "channel_id": "2",
            "content": "hi",
            "edited_timestamp": null,
            "id": "3",
            "timestamp": "2021-08-10T12:18:37.000000+00:00",
            "type": kind,
        })
    }

    fn field(name: &str, value: &str) -> EmbedField {
        EmbedField {
            inline: false,
            name: name.to_owned(),
            value: value.to_owned(),
        }
    }

    #[test]
    fn referenced_message_needs_reply() {
        let mut value = message(0);
        value["referenced_message"] = Value::Null;

        let err = validate_message(&decode_message(&value).unwrap()).unwrap_err();
        assert_eq!(err.path(), "referenced_message");

        value["type"] = json!(19);
        assert!(validate_message(&decode_message(&value).unwrap()).is_ok());
    }

    #[test]
    fn thread_needs_flag() {
        let mut value = message(0);
        value["thread"] = json!({ "type": 11, "id": "3", "name": "t", "applied_tags": [] });

        let err = validate_message(&decode_message(&value).unwrap()).unwrap_err();
        assert_eq!(err.path(), "thread");

        value["flags"] = json!(32);
        assert!(validate_message(&decode_message(&value).unwrap()).is_ok());
    }

    #[test]
    fn webhook_poll() {
        let mut value = message(0);
        value["webhook_id"] = json!("9");
        value["poll"] = json!({
            "allow_multiselect": false,
            "answers": [],
            "expiry": null,
            "layout_type": 1,
            "question": { "text": "q" },
        });

        assert_eq!(
            validate_message(&decode_message(&value).unwrap()).unwrap_err().path(),
            "poll"
        );
    }

    #[test]
    fn embed_errors_carry_index() {
        let mut value = message(0);
        value["embeds"] = json!([{ "title": "ok" }, { "title": "x".repeat(257) }]);

        assert_eq!(
            validate_message(&decode_message(&value).unwrap()).unwrap_err().path(),
            "embeds[1].title"
        );
    }

    #[test]
    fn embed_field_limits() {
        let embed = Embed {
            fields: vec![field("a", "b"), field("name", &"v".repeat(1025))],
            ..Embed::default()
        };

        assert_eq!(
            validate_embed(&embed).unwrap_err().path(),
            "embed.fields[1].value"
        );

        let many = Embed {
            fields: (0..26).map(|_| field("a", "b")).collect(),
            ..Embed::default()
        };
        assert!(matches!(
            validate_embed(&many).unwrap_err().kind(),
            ValidationErrorType::OutOfRange { value: 26, .. }
        ));
    }

    #[test]
    fn embed_total_length() {
        let embed = Embed {
            description: Some("d".repeat(4000)),
            fields: (0..3).map(|_| field("n", &"v".repeat(1000))).collect(),
            ..Embed::default()
        };

        assert!(matches!(
            validate_embed(&embed).unwrap_err().kind(),
            ValidationErrorType::OutOfRange { path, max: 6000, .. } if path == "embed"
        ));
    }
}
