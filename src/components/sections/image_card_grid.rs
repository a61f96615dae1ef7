//! Image Card Grid Section
//!
//! Titled image cards laid out as a grid or a horizontally scrolling row.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::components::style::{Background, Padding};
use crate::constants::IMAGE_CARD_DEFAULT_IMAGE_HEIGHT;
use crate::view::{self, RenderOnce, View};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageCard {
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ImageCard {
    pub fn new(image: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            image_alt: None,
            title: title.into(),
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CardLayout {
    #[default]
    Grid,
    Carousel,
}

/// Class names for one layout's card list
struct LayoutClasses {
    item: &'static str,
    image_wrapper: &'static str,
    content: &'static str,
    title: &'static str,
    description: &'static str,
}

impl CardLayout {
    fn classes(&self) -> LayoutClasses {
        match self {
            CardLayout::Grid => LayoutClasses {
                item: "image-card-item",
                image_wrapper: "image-card-image-wrapper",
                content: "image-card-content",
                title: "image-card-item-title",
                description: "image-card-item-description",
            },
            CardLayout::Carousel => LayoutClasses {
                item: "image-card-carousel-item",
                image_wrapper: "image-card-carousel-image-wrapper",
                content: "image-card-carousel-content",
                title: "image-card-carousel-title",
                description: "image-card-carousel-description",
            },
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_image_height() -> String {
    IMAGE_CARD_DEFAULT_IMAGE_HEIGHT.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageCardGrid {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub items: Vec<ImageCard>,
    #[serde(default)]
    pub layout: CardLayout,
    #[serde(default = "default_image_height")]
    pub image_height: String,
    #[serde(default = "default_true")]
    pub hover_animation: bool,
    #[serde(flatten)]
    pub background: Background,
    #[serde(flatten)]
    pub padding: Padding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl ImageCardGrid {
    pub fn new(items: Vec<ImageCard>) -> Self {
        Self {
            title: None,
            subtitle: None,
            items,
            layout: CardLayout::default(),
            image_height: default_image_height(),
            hover_animation: true,
            background: Background::default(),
            padding: Padding::default(),
            class_name: None,
        }
    }
}

impl RenderOnce for ImageCardGrid {
    fn render(self) -> View {
        let classes = self.layout.classes();
        let hover_animation = self.hover_animation;
        let image_height = self.image_height;

        let cards = self.items.into_iter().map(|item| {
            let alt = item.image_alt.unwrap_or_else(|| item.title.clone());
            view::div()
                .class(classes.item)
                .child(
                    view::div()
                        .class(classes.image_wrapper)
                        .class_if(hover_animation, "image-card-hover-animation")
                        .style("height", image_height.clone())
                        .child(
                            view::img()
                                .attr("src", item.image)
                                .attr("alt", alt)
                                .class("image-card-image"),
                        ),
                )
                .child(
                    view::div()
                        .class(classes.content)
                        .child(view::h3().class(classes.title).child(item.title))
                        .child(
                            item.description
                                .map(|d| view::p().class(classes.description).child(d)),
                        ),
                )
        });

        let list = match self.layout {
            CardLayout::Grid => view::div().class("image-card-grid").children(cards),
            CardLayout::Carousel => view::div()
                .class("image-card-carousel-wrapper")
                .child(view::div().class("image-card-carousel").children(cards)),
        };

        view::section()
            .class("image-card-section")
            .class_opt(self.class_name)
            .styles(self.background.styles())
            .child(
                view::div()
                    .class("image-card-wrapper")
                    .styles(self.padding.vars())
                    .child(
                        view::div()
                            .class("image-card-header")
                            .child(
                                self.subtitle
                                    .map(|s| view::p().class("image-card-subtitle").child(s)),
                            )
                            .child(
                                self.title
                                    .map(|t| view::h2().class("image-card-title").child(t)),
                            ),
                    )
                    .child(list),
            )
            .into()
    }
}
