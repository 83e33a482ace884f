//! Builders for the values an application most often sends.
//!
//! The model types are plain structs with public fields; these helpers fill
//! in the defaults so call sites only name what they care about.

use crate::{
    channel::message::{
        component::{
            ActionRow, Button, ButtonError, ButtonIdentity, ButtonStyle, SelectMenuOption,
            StringSelectMenu, TextInput, TextInputStyle,
        },
        embed::{EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedThumbnail},
        Component, Embed,
    },
    id::{marker::SkuMarker, Id},
    util::Timestamp,
};

// ===========================================================================
// Embed builder
// ===========================================================================

/// Ergonomic builder for [`Embed`].
///
/// # Examples
///
/// ```
/// use discord_model::builders::EmbedBuilder;
///
/// let embed = EmbedBuilder::new()
///     .title("Hello")
///     .description("World")
///     .color(0x00FF00)
///     .build();
///
/// assert_eq!(embed.title.as_deref(), Some("Hello"));
/// ```
#[derive(Debug, Default)]
#[must_use = "builders have no effect if unused"]
pub struct EmbedBuilder {
    inner: Embed,
}

impl EmbedBuilder {
    /// Create a new empty embed builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.inner.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.inner.description = Some(description.into());
        self
    }

    /// Set the embed color (as a 24-bit RGB integer, e.g. `0xFF6600`).
    pub fn color(mut self, color: u32) -> Self {
        self.inner.color = Some(color);
        self
    }

    /// Add a field to the embed.
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.inner.fields.push(EmbedField {
            inline,
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.inner.footer = Some(EmbedFooter {
            icon_url: None,
            proxy_icon_url: None,
            text: text.into(),
        });
        self
    }

    /// Set the footer text and icon URL.
    pub fn footer_with_icon(
        mut self,
        text: impl Into<String>,
        icon_url: impl Into<String>,
    ) -> Self {
        self.inner.footer = Some(EmbedFooter {
            icon_url: Some(icon_url.into()),
            proxy_icon_url: None,
            text: text.into(),
        });
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.inner.thumbnail = Some(EmbedThumbnail {
            height: None,
            proxy_url: None,
            url: url.into(),
            width: None,
        });
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.inner.image = Some(EmbedImage {
            height: None,
            proxy_url: None,
            url: url.into(),
            width: None,
        });
        self
    }

    pub fn author(mut self, name: impl Into<String>) -> Self {
        self.inner.author = Some(EmbedAuthor {
            icon_url: None,
            name: name.into(),
            proxy_icon_url: None,
            url: None,
        });
        self
    }

    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.inner.timestamp = Some(timestamp);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.inner.url = Some(url.into());
        self
    }

    /// Consume the builder and return the finished [`Embed`].
    pub fn build(self) -> Embed {
        self.inner
    }
}

// ===========================================================================
// Component helper functions
// ===========================================================================

/// Build an action row wrapping other components.
pub fn action_row(components: Vec<Component>) -> Component {
    Component::ActionRow(ActionRow {
        components,
        id: None,
    })
}

/// Build a labelled button that reports `custom_id` when pressed.
///
/// # Errors
///
/// Returns a [`ButtonError`] if `style` is [`ButtonStyle::Link`] or
/// [`ButtonStyle::Premium`], which don't carry a `custom_id`; use
/// [`link_button`] or [`premium_button`] for those.
pub fn button(
    style: ButtonStyle,
    label: impl Into<String>,
    custom_id: impl Into<String>,
) -> Result<Component, ButtonError> {
    let mut button = Button::new(style, ButtonIdentity::CustomId(custom_id.into()))?;
    button.label = Some(label.into());

    Ok(Component::Button(button))
}

/// Build a link button.
pub fn link_button(label: impl Into<String>, url: impl Into<String>) -> Component {
    Component::Button(Button {
        disabled: false,
        emoji: None,
        id: None,
        identity: ButtonIdentity::Url(url.into()),
        label: Some(label.into()),
        style: ButtonStyle::Link,
    })
}

/// Build a button that opens the purchase flow of a SKU.
///
/// Premium buttons have no label; the client renders the SKU.
pub fn premium_button(sku_id: Id<SkuMarker>) -> Component {
    Component::Button(Button {
        disabled: false,
        emoji: None,
        id: None,
        identity: ButtonIdentity::Sku(sku_id),
        label: None,
        style: ButtonStyle::Premium,
    })
}

/// Build a single-choice string select menu.
pub fn string_select(
    custom_id: impl Into<String>,
    placeholder: impl Into<String>,
    options: Vec<SelectMenuOption>,
) -> Component {
    Component::StringSelect(StringSelectMenu {
        custom_id: custom_id.into(),
        disabled: false,
        id: None,
        max_values: Some(1),
        min_values: Some(1),
        options,
        placeholder: Some(placeholder.into()),
    })
}

/// Build a text input for use inside a modal.
pub fn text_input(
    custom_id: impl Into<String>,
    label: impl Into<String>,
    style: TextInputStyle,
    required: bool,
) -> Component {
    Component::TextInput(TextInput {
        custom_id: custom_id.into(),
        id: None,
        label: Some(label.into()),
        max_length: None,
        min_length: None,
        placeholder: None,
        required: Some(required),
        style,
        value: None,
    })
}
