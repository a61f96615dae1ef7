//! Info With Images Section
//!
//! Text column with eyebrow, paragraphs and buttons beside a collage of one to three
//! images. Three images form an L-shaped grid with the last image spanning both rows.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::components::primitives::{Button, ButtonConfig};
use crate::components::style::{Background, ImagePosition, Padding};
use crate::i18n::{Locale, t};
use crate::view::{self, Element, RenderOnce, View};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ImageItem {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl ImageItem {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfoWithImages {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eyebrow: Option<String>,
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button: Option<ButtonConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button: Option<ButtonConfig>,
    /// One to three images; any other count renders an empty collage
    pub images: Vec<ImageItem>,
    #[serde(default)]
    pub image_position: ImagePosition,
    #[serde(default)]
    pub image_rounded: bool,
    #[serde(default = "default_true")]
    pub hover_animation: bool,
    #[serde(flatten)]
    pub background: Background,
    #[serde(flatten)]
    pub padding: Padding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip)]
    pub locale: Locale,
}

impl InfoWithImages {
    pub fn new(title: impl Into<String>, images: Vec<ImageItem>) -> Self {
        Self {
            eyebrow: None,
            title: title.into(),
            paragraphs: Vec::new(),
            primary_button: None,
            secondary_button: None,
            images,
            image_position: ImagePosition::default(),
            image_rounded: false,
            hover_animation: true,
            background: Background::default(),
            padding: Padding::default(),
            class_name: None,
            locale: Locale::default(),
        }
    }

    fn collage(images: Vec<ImageItem>, hover_animation: bool, locale: Locale) -> Option<Element> {
        let picture = |image: ImageItem, class: Option<&'static str>| {
            view::div()
                .class_opt(class)
                .class_if(hover_animation, "info-hover-animation")
                .child(
                    view::img()
                        .attr("src", image.src)
                        .attr("alt", image.alt.unwrap_or_else(|| t(locale, "info-image-alt"))),
                )
        };

        let collage = match <[ImageItem; 3]>::try_from(images) {
            Ok([first, second, third]) => view::div()
                .class("info-collage")
                .class("info-collage-triple")
                .child(
                    view::div()
                        .class("info-collage-grid")
                        .child(picture(third, Some("info-collage-large")))
                        .child(picture(first, Some("info-collage-item")))
                        .child(picture(second, Some("info-collage-item"))),
                ),
            Err(images) => match <[ImageItem; 2]>::try_from(images) {
                Ok([first, second]) => view::div()
                    .class("info-collage")
                    .class("info-collage-double")
                    .child(picture(first, Some("info-collage-item")))
                    .child(picture(second, Some("info-collage-item"))),
                Err(mut images) if images.len() == 1 => {
                    let only = images.remove(0);
                    view::div()
                        .class("info-collage")
                        .class("info-collage-single")
                        .child(picture(only, None))
                }
                Err(_) => return None,
            },
        };
        Some(collage)
    }
}

impl RenderOnce for InfoWithImages {
    fn render(self) -> View {
        let right = self.image_position == ImagePosition::Right;

        let eyebrow = self.eyebrow.map(|text| {
            view::div()
                .class("info-eyebrow")
                .child(view::span().class("bar"))
                .child(view::span().class("text").child(text))
        });

        let buttons = (self.primary_button.is_some() || self.secondary_button.is_some()).then(|| {
            view::div()
                .class("info-buttons")
                .child(self.primary_button.map(Button::from))
                .child(self.secondary_button.map(Button::from))
        });

        let media = view::div()
            .class(if right { "info-collage-right" } else { "info-collage-left" })
            .class_if(self.image_rounded, "info-collage-rounded")
            .child(Self::collage(self.images, self.hover_animation, self.locale));

        let content = view::div()
            .class("info-content")
            .class(if right { "info-content-right" } else { "info-content-left" })
            .child(eyebrow)
            .child(view::h2().class("info-title").child(self.title))
            .child(
                view::div()
                    .class("info-paragraphs")
                    .children(self.paragraphs.into_iter().map(|p| view::p().child(p))),
            )
            .child(buttons);

        view::section()
            .class("info-section")
            .class_opt(self.class_name)
            .styles(self.background.styles())
            .child(
                view::div()
                    .class("info-wrapper")
                    .styles(self.padding.vars())
                    .child(view::div().class("info-grid").child(media).child(content)),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(count: usize) -> Vec<ImageItem> {
        (1..=count)
            .map(|i| ImageItem::new(format!("/img{i}.jpg")))
            .collect()
    }

    fn sources(view: &View) -> Vec<String> {
        view.find_all_by_tag("img")
            .iter()
            .filter_map(|img| img.get_attr("src").map(String::from))
            .collect()
    }

    #[test]
    fn test_collage_shape_follows_image_count() {
        let single = InfoWithImages::new("About", images(1)).render();
        assert!(single.find_by_class("info-collage-single").is_some());
        assert_eq!(
            single.find_by_tag("img").and_then(|img| img.get_attr("alt")),
            Some("Section image")
        );

        let double = InfoWithImages::new("About", images(2)).render();
        assert_eq!(double.find_all_by_class("info-collage-item").len(), 2);

        let triple = InfoWithImages::new("About", images(3)).render();
        let large = triple.find_by_class("info-collage-large").expect("large image");
        assert_eq!(
            large.find_by_tag("img").and_then(|img| img.get_attr("src")),
            Some("/img3.jpg")
        );
        assert_eq!(sources(&triple), vec!["/img3.jpg", "/img1.jpg", "/img2.jpg"]);
    }

    #[test]
    fn test_unsupported_image_count_renders_empty_collage() {
        for count in [0, 4] {
            let view = InfoWithImages::new("About", images(count)).render();
            assert!(view.find_by_class("info-collage").is_none());
            assert!(view.find_by_class("info-collage-left").is_some());
            assert!(view.find_by_class("info-title").is_some());
        }
    }

    #[test]
    fn test_right_position_and_buttons() {
        let info: InfoWithImages = serde_json::from_value(serde_json::json!({
            "eyebrow": "Our story",
            "title": "Built by locals",
            "paragraphs": ["One", "Two"],
            "primaryButton": { "text": "Visit", "url": "/visit" },
            "images": [{ "src": "/a.jpg", "alt": "Lobby" }],
            "imagePosition": "right",
            "imageRounded": true,
            "hoverAnimation": false
        }))
        .expect("valid info section");
        let view = info.render();

        let media = view.find_by_class("info-collage-right").expect("media column");
        assert!(media.has_class("info-collage-rounded"));
        assert!(view.find_by_class("info-content-right").is_some());
        assert!(view.find_by_class("info-hover-animation").is_none());
        assert_eq!(
            view.find_by_class("info-eyebrow").map(|e| e.text_content()),
            Some("Our story".to_string())
        );
        let paragraphs = view.find_by_class("info-paragraphs").expect("paragraphs");
        assert_eq!(paragraphs.find_all_by_tag("p").len(), 2);

        let buttons = view.find_by_class("info-buttons").expect("buttons");
        assert_eq!(buttons.find_all_by_class("ma-btn").len(), 1);
    }

    #[test]
    fn test_no_buttons_no_button_row() {
        let view = InfoWithImages::new("About", images(1)).render();
        assert!(view.find_by_class("info-buttons").is_none());
        assert!(view.find_by_class("info-eyebrow").is_none());
    }
}
