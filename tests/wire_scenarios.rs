use discord_model::{
    channel::{
        message::{
            component::{ButtonStyle, ComponentContext, MAX_COMPONENT_DEPTH},
            Component, MessageType,
        },
        Channel, ChannelType,
    },
    wire::{self, DecodeErrorType},
};
use serde_json::{json, Value};
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

fn author() -> Value {
    json!({
        "avatar": null,
        "discriminator": "0",
        "global_name": null,
        "id": "42",
        "username": "someone",
    })
}

#[test]
fn guild_text_without_rate_limit() {
    init_tracing();

    let input = json!({ "type": 0, "id": "123", "name": "general", "position": 0 });
    let channel = wire::decode_channel(&input).unwrap();

    let Channel::GuildText(text) = &channel else {
        panic!("expected a guild text channel, got {channel:?}");
    };
    assert_eq!(text.rate_limit_per_user, None);
    assert_eq!(text.position, 0);

    let encoded = wire::encode_channel(&channel);
    assert!(encoded.get("rate_limit_per_user").is_none());
    assert_eq!(encoded, input);
}

#[test]
fn direct_message_with_null_name() {
    init_tracing();

    let input = json!({ "type": 1, "id": "456", "name": null });
    let channel = wire::decode_channel(&input).unwrap();

    assert!(matches!(channel, Channel::Private(_)));
    assert_eq!(channel.name(), None);
    assert_eq!(wire::encode_channel(&channel), input);
}

#[test]
fn unknown_channel_type_round_trips() {
    init_tracing();

    let input = json!({ "type": 999, "id": "789", "name": "x" });
    let channel = wire::decode_channel(&input).unwrap();

    assert_eq!(channel.kind(), ChannelType::Unknown(999));
    assert!(matches!(channel, Channel::Unknown(ref unknown) if unknown.kind == 999));
    assert_eq!(wire::encode_channel(&channel), input);
}

#[test]
fn deleted_reply_is_not_unfetched() {
    init_tracing();

    let mut input = json!({
        "attachments": [],
        "author": author(),
        "channel_id": "1",
        "content": "replying",
        "edited_timestamp": null,
        "embeds": [],
        "id": "2",
        "mention_everyone": false,
        "mention_roles": [],
        "mentions": [],
        "message_reference": { "channel_id": "1", "message_id": "3" },
        "pinned": false,
        "referenced_message": null,
        "timestamp": "2024-01-01T00:00:00.000000+00:00",
        "tts": false,
        "type": 19,
    });

    let deleted = wire::decode_message(&input).unwrap();
    assert_eq!(deleted.kind, MessageType::Reply);
    assert_eq!(deleted.referenced_message, Some(None));
    assert_eq!(wire::encode_message(&deleted), input);

    input.as_object_mut().unwrap().remove("referenced_message");
    let unfetched = wire::decode_message(&input).unwrap();
    assert_eq!(unfetched.referenced_message, None);
    assert_ne!(deleted, unfetched);
}

#[test]
fn button_identity_matches_style() {
    init_tracing();

    let identities = [
        ("custom_id", json!("click")),
        ("url", json!("https://example.com")),
        ("sku_id", json!("99")),
    ];

    for raw_style in 1..=6_i64 {
        let style = ButtonStyle::from(raw_style);
        let accepted: Vec<_> = identities
            .iter()
            .filter(|(key, value)| {
                let mut button = json!({ "type": 2, "style": raw_style, "label": "b" });
                button[*key] = value.clone();

                match wire::decode_component(&button, ComponentContext::Message) {
                    Ok(_) => true,
                    Err(e) => {
                        assert!(
                            matches!(e.kind(), DecodeErrorType::InvalidVariantCombination { .. }),
                            "{style:?} with {key}: {e}"
                        );
                        false
                    }
                }
            })
            .map(|(key, _)| *key)
            .collect();

        assert_eq!(accepted, [style.identity_key().unwrap()], "{style:?}");
    }
}

#[test]
fn two_levels_of_rows() {
    init_tracing();

    let button = json!({ "type": 2, "style": 1, "custom_id": "a", "label": "A" });
    let two = json!({
        "type": 1,
        "components": [{ "type": 1, "components": [button] }],
    });
    assert!(wire::decode_component(&two, ComponentContext::Message).is_ok());

    let three = json!({
        "type": 1,
        "components": [{
            "type": 1,
            "components": [{ "type": 1, "components": [button] }],
        }],
    });
    let err = wire::decode_component(&three, ComponentContext::Message).unwrap_err();

    assert_eq!(
        err.kind(),
        &DecodeErrorType::RecursionLimitExceeded {
            path: "component.components[0].components[0]".to_owned(),
            depth: MAX_COMPONENT_DEPTH,
        }
    );
}

#[test]
fn string_select_alias_reencodes_current_tag() {
    init_tracing();

    let input = json!({
        "type": 17,
        "custom_id": "s",
        "options": [{ "label": "a", "value": "a" }],
    });
    let component = wire::decode_component(&input, ComponentContext::Message).unwrap();

    assert!(matches!(component, Component::StringSelect(_)));
    assert_eq!(wire::encode_component(&component)["type"], json!(3));
}

#[test]
fn batch_keeps_going_past_bad_records() {
    init_tracing();

    let values = [
        json!({ "type": 0, "id": "1", "name": "a", "position": 0 }),
        json!({ "type": "text", "id": "2" }),
        json!({ "type": 2, "id": "3", "name": "voice" }),
    ];
    let batch = wire::decode_channels(&values);

    assert_eq!(batch.decoded.len(), 2);
    assert_eq!(batch.skipped.len(), 1);
    assert!(matches!(
        batch.skipped[0].1.kind(),
        DecodeErrorType::UnrecognizedDiscriminant { .. }
    ));
}

#[cfg(feature = "validate")]
#[test]
fn decoded_values_validate_separately() {
    use discord_model::validate;

    init_tracing();

    let long_name = json!({ "type": 0, "id": "1", "name": "n".repeat(150), "position": 0 });
    let channel = wire::decode_channel(&long_name).unwrap();

    assert!(validate::validate_channel(&channel).is_err());
}
