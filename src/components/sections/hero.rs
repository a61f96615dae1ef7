//! Hero Section

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::components::primitives::{Button, ButtonSize, ButtonVariant};
use crate::components::style::Background;
use crate::constants::{HERO_DEFAULT_BACKGROUND, HERO_DEFAULT_MIN_HEIGHT, HERO_DEFAULT_OVERLAY_OPACITY};
use crate::view::{self, RenderOnce, View, format_number};

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Full-width heading block with up to two calls to action
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button_variant: Option<ButtonVariant>,
    #[serde(flatten)]
    pub background: Background,
    /// Opacity of the overlay drawn over a background image (0-1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlay_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Hero {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

impl RenderOnce for Hero {
    fn render(self) -> View {
        let has_image = self.background.has_image();
        let background = if has_image || self.background.background_color.is_some() {
            self.background.styles()
        } else {
            Background::color(HERO_DEFAULT_BACKGROUND).styles()
        };

        let overlay = has_image.then(|| {
            let opacity = self.overlay_opacity.unwrap_or(HERO_DEFAULT_OVERLAY_OPACITY);
            view::div()
                .class("ma-hero-overlay")
                .style("opacity", format_number(opacity))
        });

        let primary = self.primary_button_text.map(|text| {
            Button::new(text)
                .variant(self.primary_button_variant.unwrap_or(ButtonVariant::Black))
                .url(self.primary_button_url)
                .size(ButtonSize::Lg)
        });
        let secondary = self.secondary_button_text.map(|text| {
            Button::new(text)
                .variant(
                    self.secondary_button_variant
                        .unwrap_or(ButtonVariant::TransparentBlack),
                )
                .url(self.secondary_button_url)
                .size(ButtonSize::Lg)
        });
        let buttons = (primary.is_some() || secondary.is_some()).then(|| {
            view::div()
                .class("ma-hero-buttons")
                .child(primary)
                .child(secondary)
        });

        view::div()
            .class("ma-hero")
            .class(format!("ma-hero--{}", self.align.as_str()))
            .class_opt(self.class_name)
            .style(
                "min-height",
                self.min_height.unwrap_or_else(|| HERO_DEFAULT_MIN_HEIGHT.to_string()),
            )
            .styles(background)
            .style_opt("position", has_image.then_some("relative"))
            .style_opt("color", self.text_color)
            .child(overlay)
            .child(
                view::div()
                    .class("ma-hero-content")
                    .child(
                        self.subtitle
                            .map(|text| view::p().class("ma-hero-subtitle").child(text)),
                    )
                    .child(view::h1().class("ma-hero-title").child(self.title))
                    .child(
                        self.description
                            .map(|text| view::p().class("ma-hero-description").child(text)),
                    )
                    .child(buttons),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_hero_uses_defaults() {
        let view = Hero::new("Welcome").render();

        let root = view.as_element().expect("hero root");
        assert!(root.has_class("ma-hero--center"));
        assert_eq!(root.style_value("min-height"), Some("500px"));
        assert_eq!(root.style_value("background-color"), Some("#ffffff"));
        assert!(view.find_by_class("ma-hero-overlay").is_none());
        assert!(view.find_by_class("ma-hero-buttons").is_none());
        assert_eq!(
            view.find_by_class("ma-hero-title").map(|t| t.text_content()),
            Some("Welcome".to_string())
        );
    }

    #[test]
    fn test_background_image_adds_overlay() {
        let hero: Hero = serde_json::from_value(serde_json::json!({
            "title": "Launch",
            "backgroundColor": "#000",
            "backgroundImage": "/hero.jpg",
            "overlayOpacity": 0.6,
            "align": "left"
        }))
        .expect("valid hero");
        let view = hero.render();

        let root = view.as_element().expect("hero root");
        assert!(root.has_class("ma-hero--left"));
        assert_eq!(root.style_value("background-image"), Some("url(/hero.jpg)"));
        assert_eq!(root.style_value("background-color"), None);
        assert_eq!(root.style_value("position"), Some("relative"));
        let overlay = view.find_by_class("ma-hero-overlay").expect("overlay");
        assert_eq!(overlay.style_value("opacity"), Some("0.6"));
    }

    #[test]
    fn test_buttons_default_variants() {
        let view = Hero {
            primary_button_text: Some("Start".into()),
            primary_button_url: Some("/start".into()),
            secondary_button_text: Some("Learn".into()),
            ..Hero::new("Hi")
        }
        .render();

        let buttons = view.find_all_by_class("ma-btn");
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons[0].get_attr("data-variant"), Some("black"));
        assert_eq!(buttons[0].get_attr("data-size"), Some("lg"));
        assert_eq!(buttons[1].get_attr("data-variant"), Some("transparent-black"));
        assert!(view.find_by_tag("a").is_some_and(|a| a.get_attr("href") == Some("/start")));
    }
}
