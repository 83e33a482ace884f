use super::{chars, min_max, not_allowed, range, ValidationError, ValidationErrorType};
use crate::{
    channel::message::component::{ButtonIdentity, Component, SelectMenu, TextInput},
    wire::reader::index_path,
};

/// Maximum number of components in an action row.
pub const ACTION_ROW_COMPONENT_COUNT: usize = 5;

pub const CUSTOM_ID_LENGTH: usize = 100;

/// Maximum length of a button or text input label.
pub const LABEL_LENGTH: usize = 80;

/// Maximum number of options of a string select, and of values any select
/// may require.
pub const SELECT_OPTION_COUNT: usize = 25;

/// Maximum length of text input contents.
pub const TEXT_INPUT_LENGTH: usize = 4000;

/// Check a component tree against the platform's limits.
///
/// # Errors
///
/// Returns [`ValidationErrorType::OutOfRange`] for a count or length outside
/// its bounds, [`ValidationErrorType::SelectNotAlone`] for a row sharing a
/// select menu with other components, [`ValidationErrorType::MinAboveMax`]
/// for inverted bounds, and [`ValidationErrorType::FieldNotAllowed`] for a
/// row nested in a row.
pub fn validate_component(component: &Component) -> Result<(), ValidationError> {
    check(component, "component")
}

pub(super) fn check(component: &Component, path: &str) -> Result<(), ValidationError> {
    if let Some(custom_id) = component.custom_id() {
        chars(|| format!("{path}.custom_id"), custom_id, CUSTOM_ID_LENGTH)?;
    }

    match component {
        Component::ActionRow(row) => {
            let path = format!("{path}.components");

            range(
                || path.clone(),
                row.components.len(),
                0,
                ACTION_ROW_COMPONENT_COUNT,
            )?;

            let has_select = row.components.iter().any(|child| child.kind().is_select());
            if has_select && row.components.len() > 1 {
                return Err(ValidationError::new(ValidationErrorType::SelectNotAlone {
                    path,
                    siblings: row.components.len() - 1,
                }));
            }

            for (index, child) in row.components.iter().enumerate() {
                let child_path = index_path(&path, index);

                if matches!(child, Component::ActionRow(_)) {
                    return Err(not_allowed(child_path, "action rows can't hold action rows"));
                }

                check(child, &child_path)?;
            }

            Ok(())
        }
        Component::Button(button) => {
            if let Some(label) = &button.label {
                chars(|| format!("{path}.label"), label, LABEL_LENGTH)?;
            }

            if button.label.is_none()
                && button.emoji.is_none()
                && !matches!(button.identity, ButtonIdentity::Sku(_))
            {
                return Err(not_allowed(
                    format!("{path}.label"),
                    "buttons need a label or an emoji",
                ));
            }

            Ok(())
        }
        Component::StringSelect(select) => {
            range(
                || format!("{path}.options"),
                select.options.len(),
                1,
                SELECT_OPTION_COUNT,
            )?;

            values(path, select.min_values, select.max_values)
        }
        Component::ChannelSelect(select) => menu(path, &select.menu),
        Component::MentionableSelect(select)
        | Component::RoleSelect(select)
        | Component::UserSelect(select) => menu(path, select),
        Component::TextInput(input) => text_input(path, input),
        _ => Ok(()),
    }
}

fn menu(path: &str, menu: &SelectMenu) -> Result<(), ValidationError> {
    if let Some(defaults) = &menu.default_values {
        range(
            || format!("{path}.default_values"),
            defaults.len(),
            0,
            usize::from(menu.max_values.unwrap_or(1)),
        )?;
    }

    values(path, menu.min_values, menu.max_values)
}

fn values(path: &str, min: Option<u8>, max: Option<u8>) -> Result<(), ValidationError> {
    let min = min.map(usize::from);
    let max = max.map(usize::from);

    if let Some(min) = min {
        range(|| format!("{path}.min_values"), min, 0, SELECT_OPTION_COUNT)?;
    }

    if let Some(max) = max {
        range(|| format!("{path}.max_values"), max, 1, SELECT_OPTION_COUNT)?;
    }

    min_max(|| format!("{path}.min_values"), min, max)
}

fn text_input(path: &str, input: &TextInput) -> Result<(), ValidationError> {
    if let Some(label) = &input.label {
        chars(|| format!("{path}.label"), label, LABEL_LENGTH)?;
    }

    let min = input.min_length.map(usize::from);
    let max = input.max_length.map(usize::from);

    if let Some(min) = min {
        range(|| format!("{path}.min_length"), min, 0, TEXT_INPUT_LENGTH)?;
    }

    if let Some(max) = max {
        range(|| format!("{path}.max_length"), max, 1, TEXT_INPUT_LENGTH)?;
    }

    if let Some(value) = &input.value {
        chars(|| format!("{path}.value"), value, TEXT_INPUT_LENGTH)?;
    }

    min_max(|| format!("{path}.min_length"), min, max)
}

#[cfg(test)]
mod tests {
    use super::validate_component;
    use crate::{
        channel::message::component::ComponentContext,
        validate::ValidationErrorType,
        wire::decode_component,
    };
    use serde_json::{json, Value};

    fn button(custom_id: &str) -> Value {
        json!({ "type": 2, "style": 1, "custom_id": custom_id, "label": "Go" })
    }

    fn message(value: &Value) -> crate::channel::message::Component {
        decode_component(value, ComponentContext::Message).unwrap()
    }

    #[test]
    fn row_of_buttons() {
        let row = json!({ "type": 1, "components": [button("a"), button("b")] });

        assert!(validate_component(&message(&row)).is_ok());
    }

    #[test]
    fn row_is_capped_at_five() {
        let buttons: Vec<_> = (0..6).map(|i| button(&i.to_string())).collect();
        let row = json!({ "type": 1, "components": buttons });

        assert!(matches!(
            validate_component(&message(&row)).unwrap_err().kind(),
            ValidationErrorType::OutOfRange { value: 6, max: 5, .. }
        ));
    }

    #[test]
    fn select_must_be_alone() {
        let row = json!({
            "type": 1,
            "components": [
                { "type": 5, "custom_id": "who" },
                button("a"),
            ],
        });

        assert_eq!(
            validate_component(&message(&row)).unwrap_err().kind(),
            &ValidationErrorType::SelectNotAlone {
                path: "component.components".to_owned(),
                siblings: 1,
            }
        );
    }

    #[test]
    fn nested_rows_are_flagged() {
        let row = json!({
            "type": 1,
            "components": [{ "type": 1, "components": [button("a")] }],
        });

        let err = validate_component(&message(&row)).unwrap_err();
        assert_eq!(err.path(), "component.components[0]");
    }

    #[test]
    fn custom_id_length() {
        let err = validate_component(&message(&button(&"x".repeat(101)))).unwrap_err();

        assert_eq!(err.path(), "component.custom_id");
    }

    #[test]
    fn select_value_bounds() {
        let select = json!({
            "type": 3,
            "custom_id": "s",
            "options": [{ "label": "a", "value": "a" }],
            "min_values": 3,
            "max_values": 2,
        });

        assert!(matches!(
            validate_component(&message(&select)).unwrap_err().kind(),
            ValidationErrorType::MinAboveMax { min: 3, max: 2, .. }
        ));

        let empty = json!({ "type": 3, "custom_id": "s", "options": [] });
        assert_eq!(
            validate_component(&message(&empty)).unwrap_err().path(),
            "component.options"
        );
    }

    #[test]
    fn text_input_lengths() {
        let input = json!({
            "type": 4,
            "custom_id": "t",
            "style": 1,
            "label": "Name",
            "max_length": 4001,
        });
        let component = decode_component(&input, ComponentContext::Modal).unwrap();

        assert_eq!(
            validate_component(&component).unwrap_err().path(),
            "component.max_length"
        );
    }
}
