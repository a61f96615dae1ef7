//! Alternating Content Section
//!
//! Rows of media beside text, with the media switching sides on every row.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::components::style::{Background, ImagePosition, Padding};
use crate::view::{self, RenderOnce, View};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Icon glyph or short text, shown when there is no image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
}

impl ContentItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon: None,
            title: title.into(),
            description: description.into(),
            image: None,
            image_alt: None,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlternatingContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub items: Vec<ContentItem>,
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
}

impl AlternatingContent {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self {
            title: None,
            subtitle: None,
            items,
            image_position: ImagePosition::default(),
            image_rounded: false,
            hover_animation: true,
            background: Background::default(),
            padding: Padding::default(),
            class_name: None,
        }
    }
}

impl RenderOnce for AlternatingContent {
    fn render(self) -> View {
        let flipped = self.image_position == ImagePosition::Right;
        let image_rounded = self.image_rounded;
        let hover_animation = self.hover_animation;

        let rows = self.items.into_iter().enumerate().map(|(index, item)| {
            // Even rows take the `-right` modifier unless the position is flipped.
            let right = (index % 2 == 0) != flipped;
            let side = if right { "right" } else { "left" };

            let text_icon = item
                .image
                .is_none()
                .then(|| item.icon.clone())
                .flatten()
                .map(|icon| view::div().class("alternating-content-text-icon").child(icon));
            let media = match item.image {
                Some(src) => view::div()
                    .class("alternating-content-image-wrapper")
                    .class_if(image_rounded, "alternating-content-image-rounded")
                    .class_if(hover_animation, "alternating-content-hover-animation")
                    .child(
                        view::img()
                            .attr("src", src)
                            .attr("alt", item.image_alt.unwrap_or_else(|| item.title.clone()))
                            .class("alternating-content-image"),
                    ),
                None => view::div().class("alternating-content-icon-wrapper").child(
                    item.icon
                        .map(|icon| view::div().class("alternating-content-icon").child(icon)),
                ),
            };

            view::div()
                .class("alternating-content-item")
                .child(
                    view::div()
                        .class("alternating-content-media")
                        .class(format!("alternating-content-media-{side}"))
                        .child(media),
                )
                .child(
                    view::div()
                        .class("alternating-content-text")
                        .class(format!("alternating-content-text-{side}"))
                        .child(
                            view::div()
                                .class("alternating-content-text-inner")
                                .child(text_icon)
                                .child(
                                    view::div()
                                        .child(
                                            view::h3()
                                                .class("alternating-content-item-title")
                                                .child(item.title),
                                        )
                                        .child(
                                            view::p()
                                                .class("alternating-content-item-description")
                                                .child(item.description),
                                        ),
                                ),
                        ),
                )
        });

        view::section()
            .class("alternating-content-section")
            .class_opt(self.class_name)
            .styles(self.background.styles())
            .child(
                view::div()
                    .class("alternating-content-wrapper")
                    .styles(self.padding.vars())
                    .child(
                        view::div()
                            .class("alternating-content-header")
                            .child(self.subtitle.map(|s| {
                                view::p().class("alternating-content-subtitle").child(s)
                            }))
                            .child(
                                self.title
                                    .map(|t| view::h2().class("alternating-content-title").child(t)),
                            ),
                    )
                    .child(view::div().class("alternating-content-list").children(rows)),
            )
            .into()
    }
}
