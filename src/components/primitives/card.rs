//! Card Component
//!
//! Colored content card with an optional image and call to action.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Button, ButtonShape, ButtonSize, ButtonVariant};
use crate::view::{self, RenderOnce, View};

/// Card color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardVariant {
    Blue,
    Purple,
    Green,
    Red,
    #[default]
    Neutral,
    Outline,
}

impl CardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardVariant::Blue => "blue",
            CardVariant::Purple => "purple",
            CardVariant::Green => "green",
            CardVariant::Red => "red",
            CardVariant::Neutral => "neutral",
            CardVariant::Outline => "outline",
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cta_href() -> String {
    "#".to_string()
}

fn default_cta_variant() -> ButtonVariant {
    ButtonVariant::Red
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_src: Option<String>,
    /// Falls back to the title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default = "default_cta_href")]
    pub cta_href: String,
    #[serde(default = "default_cta_variant")]
    pub cta_variant: ButtonVariant,
    #[serde(default)]
    pub cta_size: ButtonSize,
    #[serde(default)]
    pub cta_shape: ButtonShape,
    #[serde(default)]
    pub cta_blank: bool,
    #[serde(default)]
    pub variant: CardVariant,
    #[serde(default = "default_true")]
    pub rounded: bool,
    /// Scale the image on hover
    #[serde(default = "default_true")]
    pub hover_animation: bool,
    #[serde(default = "default_true")]
    pub shadow_on_hover: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            image_src: None,
            image_alt: None,
            cta_text: None,
            cta_href: default_cta_href(),
            cta_variant: default_cta_variant(),
            cta_size: ButtonSize::default(),
            cta_shape: ButtonShape::default(),
            cta_blank: false,
            variant: CardVariant::default(),
            rounded: true,
            hover_animation: true,
            shadow_on_hover: true,
            class_name: None,
        }
    }
}

impl RenderOnce for Card {
    fn render(self) -> View {
        let media = self.image_src.map(|src| {
            view::div().class("media").child(
                view::img()
                    .attr("src", src)
                    .attr("alt", self.image_alt.unwrap_or_else(|| self.title.clone())),
            )
        });

        // CTA styling comes from the card stylesheet
        let cta = self.cta_text.map(|text| {
            view::div().class("ctaWrap").child(
                Button::new(text)
                    .url(Some(self.cta_href))
                    .variant(self.cta_variant)
                    .size(self.cta_size)
                    .shape(self.cta_shape)
                    .blank(self.cta_blank)
                    .unstyled(true)
                    .class_name("cta"),
            )
        });

        view::div()
            .class("card")
            .class(self.variant.as_str())
            .class_if(!self.rounded, "not-rounded")
            .class_if(self.hover_animation, "card-hover-animation")
            .class_if(self.shadow_on_hover, "card-shadow-hover")
            .class_opt(self.class_name)
            .child(media)
            .child(
                view::div()
                    .class("content")
                    .child(view::h3().class("title").child(self.title))
                    .child(self.description.map(|d| view::p().class("desc").child(d)))
                    .child(cta),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_classes() {
        let view = Card::new("Plans").render();

        let root = view.as_element().expect("card root");
        assert_eq!(
            root.classes(),
            &["card", "neutral", "card-hover-animation", "card-shadow-hover"]
                .map(String::from)
        );
        assert!(view.find_by_class("media").is_none());
        assert!(view.find_by_class("desc").is_none());
        assert!(view.find_by_class("ctaWrap").is_none());
        assert_eq!(
            view.find_by_class("title").map(|t| t.text_content()),
            Some("Plans".to_string())
        );
    }

    #[test]
    fn test_image_alt_falls_back_to_title() {
        let view = Card {
            image_src: Some("/room.jpg".into()),
            ..Card::new("Suite")
        }
        .render();

        let img = view.find_by_tag("img").expect("image");
        assert_eq!(img.get_attr("alt"), Some("Suite"));
    }

    #[test]
    fn test_cta_is_an_unstyled_link() {
        let card: Card = serde_json::from_value(serde_json::json!({
            "title": "Offer",
            "ctaText": "Learn more",
            "ctaBlank": true,
            "variant": "purple",
            "rounded": false,
            "shadowOnHover": false
        }))
        .expect("valid card");
        let view = card.render();

        let root = view.as_element().expect("card root");
        assert!(root.has_class("purple"));
        assert!(root.has_class("not-rounded"));
        assert!(!root.has_class("card-shadow-hover"));

        let cta = view.find_by_class("cta").expect("cta");
        assert_eq!(cta.tag(), "a");
        assert_eq!(cta.get_attr("href"), Some("#"));
        assert_eq!(cta.get_attr("target"), Some("_blank"));
        assert!(view.find_by_class("ma-btn").is_none());
    }
}
