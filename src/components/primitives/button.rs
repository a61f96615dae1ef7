//! Button Component

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::view::{self, RenderOnce, View};

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    /// Solid black (default)
    #[default]
    Black,
    White,
    Red,
    Gray,
    Lime,
    TransparentBlack,
    TransparentWhite,
    TransparentRed,
    TransparentGray,
    TransparentLime,
}

impl ButtonVariant {
    /// Value of the `data-variant` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Black => "black",
            ButtonVariant::White => "white",
            ButtonVariant::Red => "red",
            ButtonVariant::Gray => "gray",
            ButtonVariant::Lime => "lime",
            ButtonVariant::TransparentBlack => "transparent-black",
            ButtonVariant::TransparentWhite => "transparent-white",
            ButtonVariant::TransparentRed => "transparent-red",
            ButtonVariant::TransparentGray => "transparent-gray",
            ButtonVariant::TransparentLime => "transparent-lime",
        }
    }
}

/// Button size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small button
    Sm,
    /// Medium button (default)
    #[default]
    Md,
    /// Large button
    Lg,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
            ButtonSize::Lg => "lg",
        }
    }
}

/// Button corner shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ButtonShape {
    #[default]
    Rounded,
    Square,
}

impl ButtonShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonShape::Rounded => "rounded",
            ButtonShape::Square => "square",
        }
    }
}

/// Button described in page configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ButtonConfig {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<ButtonShape>,
    #[serde(default)]
    pub blank: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl From<ButtonConfig> for Button {
    fn from(config: ButtonConfig) -> Self {
        let button = Button::new(config.text)
            .url(config.url)
            .blank(config.blank)
            .variant(config.variant.unwrap_or_default())
            .size(config.size.unwrap_or_default())
            .shape(config.shape.unwrap_or_default());
        match config.class_name {
            Some(class_name) => button.class_name(class_name),
            None => button,
        }
    }
}

/// A styled call-to-action button, optionally wrapped in a link
#[derive(Debug, Clone)]
pub struct Button {
    text: String,
    url: Option<String>,
    blank: bool,
    variant: ButtonVariant,
    size: ButtonSize,
    shape: ButtonShape,
    unstyled: bool,
    class_name: Option<String>,
    submit: bool,
    disabled: bool,
    loading: bool,
}

impl Button {
    /// Create a new button
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
            blank: false,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            shape: ButtonShape::default(),
            unstyled: false,
            class_name: None,
            submit: false,
            disabled: false,
            loading: false,
        }
    }

    /// Link target; the button is wrapped in an anchor
    pub fn url(mut self, url: Option<impl Into<String>>) -> Self {
        self.url = url.map(Into::into);
        self
    }

    /// Open the link in a new tab
    pub fn blank(mut self, blank: bool) -> Self {
        self.blank = blank;
        self
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn shape(mut self, shape: ButtonShape) -> Self {
        self.shape = shape;
        self
    }

    /// Skip the default styling and only use the custom class
    pub fn unstyled(mut self, unstyled: bool) -> Self {
        self.unstyled = unstyled;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Render as a form submit button
    pub fn submit(mut self, submit: bool) -> Self {
        self.submit = submit;
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Busy state; also disables the button
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

impl RenderOnce for Button {
    fn render(self) -> View {
        let target = if self.blank { "_blank" } else { "_self" };
        let disabled = self.disabled || self.loading;

        if self.unstyled {
            return match self.url {
                Some(url) => view::a()
                    .attr("href", url)
                    .class_opt(self.class_name)
                    .attr("target", target)
                    .child(self.text)
                    .into(),
                None => view::button()
                    .class_opt(self.class_name)
                    .flag("disabled", disabled)
                    .child(self.text)
                    .into(),
            };
        }

        let button = view::button()
            .class("ma-btn")
            .class_opt(self.class_name)
            .attr("type", if self.submit { "submit" } else { "button" })
            .attr("data-variant", self.variant.as_str())
            .attr("data-size", self.size.as_str())
            .attr("data-shape", self.shape.as_str())
            .class_if(self.loading, "ma-btn--loading")
            .attr_opt("aria-busy", self.loading.then_some("true"))
            .flag("disabled", disabled)
            .child(self.text);

        match self.url {
            Some(url) => view::a()
                .attr("href", url)
                .attr("target", target)
                .style("text-decoration", "none")
                .style("display", "inline-block")
                .child(button)
                .into(),
            None => button.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_button_carries_data_attributes() {
        let view = Button::new("Go")
            .variant(ButtonVariant::TransparentRed)
            .size(ButtonSize::Lg)
            .render();

        let button = view.as_element().expect("button element");
        assert_eq!(button.tag(), "button");
        assert!(button.has_class("ma-btn"));
        assert_eq!(button.get_attr("data-variant"), Some("transparent-red"));
        assert_eq!(button.get_attr("data-size"), Some("lg"));
        assert_eq!(button.get_attr("data-shape"), Some("rounded"));
        assert_eq!(button.text_content(), "Go");
    }

    #[test]
    fn test_url_wraps_button_in_anchor() {
        let view = Button::new("Docs").url(Some("/docs")).blank(true).render();

        let anchor = view.as_element().expect("anchor element");
        assert_eq!(anchor.tag(), "a");
        assert_eq!(anchor.get_attr("href"), Some("/docs"));
        assert_eq!(anchor.get_attr("target"), Some("_blank"));
        assert!(anchor.find_by_class("ma-btn").is_some());
    }

    #[test]
    fn test_unstyled_link_uses_only_custom_class() {
        let view = Button::new("More")
            .url(Some("#"))
            .unstyled(true)
            .class_name("cta")
            .render();

        let anchor = view.as_element().expect("anchor element");
        assert_eq!(anchor.classes(), &["cta".to_string()]);
        assert!(view.find_by_class("ma-btn").is_none());
    }

    #[test]
    fn test_loading_disables_button() {
        let view = Button::new("Send").submit(true).loading(true).render();

        let button = view.as_element().expect("button element");
        assert_eq!(button.get_attr("type"), Some("submit"));
        assert!(button.has_flag("disabled"));
        assert!(button.has_class("ma-btn--loading"));
    }

    #[test]
    fn test_config_fills_unset_fields_with_defaults() {
        let config: ButtonConfig = serde_json::from_value(serde_json::json!({
            "text": "Book",
            "url": "/book",
            "size": "sm",
            "className": "book-cta"
        }))
        .expect("valid button config");

        let view = Button::from(config).render();
        let button = view.find_by_class("ma-btn").expect("button");
        assert!(button.has_class("book-cta"));
        assert_eq!(button.get_attr("data-variant"), Some("black"));
        assert_eq!(button.get_attr("data-size"), Some("sm"));
        let anchor = view.as_element().expect("anchor");
        assert_eq!(anchor.get_attr("target"), Some("_self"));
    }

    #[test]
    fn test_variant_deserializes_kebab_case() {
        let variant: ButtonVariant =
            serde_json::from_str("\"transparent-white\"").expect("valid variant");
        assert_eq!(variant, ButtonVariant::TransparentWhite);
    }
}
