//! Overview Section
//!
//! Header, free-text description, a "Key Highlights" list and one image or video.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::components::style::{Background, Padding};
use crate::i18n::{Locale, t};
use crate::view::{self, RenderOnce, View};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HighlightItem {
    pub label: String,
    pub value: String,
    /// Icon glyph or short text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    #[serde(default)]
    pub highlights: Vec<HighlightItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Scale images on hover
    #[serde(default = "default_true")]
    pub hover_animation: bool,
    #[serde(flatten)]
    pub background: Background,
    #[serde(flatten)]
    pub padding: Padding,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlights_class_name: Option<String>,
    #[serde(default)]
    pub rounded_caption: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_caption_class_name: Option<String>,
    #[serde(skip)]
    pub locale: Locale,
}

fn default_true() -> bool {
    true
}

impl Default for Overview {
    fn default() -> Self {
        Self {
            highlights: Vec::new(),
            description: None,
            media: None,
            class_name: None,
            title: None,
            subtitle: None,
            hover_animation: true,
            background: Background::default(),
            padding: Padding::default(),
            title_class_name: None,
            subtitle_class_name: None,
            description_class_name: None,
            highlights_class_name: None,
            rounded_caption: false,
            media_caption_class_name: None,
            locale: Locale::default(),
        }
    }
}

impl RenderOnce for Overview {
    fn render(self) -> View {
        let locale = self.locale;

        let header = (self.title.is_some() || self.subtitle.is_some()).then(|| {
            view::div()
                .class("overview-header")
                .child(self.subtitle.map(|text| {
                    view::p()
                        .class("overview-subtitle")
                        .class_opt(self.subtitle_class_name)
                        .child(text)
                }))
                .child(self.title.map(|text| {
                    view::h2()
                        .class("overview-title")
                        .class_opt(self.title_class_name)
                        .child(text)
                }))
        });

        let description = self.description.filter(|d| !d.is_empty()).map(|text| {
            view::div()
                .class("overview-description")
                .class_opt(self.description_class_name)
                .child(
                    view::div()
                        .class("overview-description-content")
                        .child(view::p().child(text)),
                )
        });

        let highlights = (!self.highlights.is_empty()).then(|| {
            let items = self.highlights.into_iter().map(|item| {
                view::div()
                    .class("overview-highlight-item")
                    .child(
                        item.icon
                            .map(|icon| view::div().class("overview-highlight-icon").child(icon)),
                    )
                    .child(
                        view::div()
                            .class("overview-highlight-content")
                            .child(view::div().class("overview-highlight-label").child(item.label))
                            .child(view::div().class("overview-highlight-value").child(item.value)),
                    )
            });
            view::div()
                .class("overview-highlights")
                .class_opt(self.highlights_class_name)
                .child(
                    view::h3()
                        .class("overview-highlights-title")
                        .child(t(locale, "overview-key-highlights")),
                )
                .child(view::div().class("overview-highlights-list").children(items))
        });

        let hover_animation = self.hover_animation;
        let rounded_caption = self.rounded_caption;
        let caption_class = self.media_caption_class_name;
        let media = self.media.map(|media| {
            let content = match media.kind {
                MediaKind::Image => view::img()
                    .attr("src", media.src)
                    .attr(
                        "alt",
                        media.alt.unwrap_or_else(|| t(locale, "overview-media-alt")),
                    )
                    .attr("loading", "lazy")
                    .style("width", "100%"),
                MediaKind::Video => view::video()
                    .attr("src", media.src)
                    .flag("controls", true)
                    .child(t(locale, "overview-video-unsupported")),
            };
            view::div()
                .class("overview-media")
                .class_if(
                    hover_animation && media.kind == MediaKind::Image,
                    "overview-hover-animation",
                )
                .child(content)
                .child(media.caption.map(|caption| {
                    view::p()
                        .class("overview-media-caption")
                        .class_if(rounded_caption, "rounded")
                        .class_opt(caption_class)
                        .child(caption)
                }))
        });

        view::section()
            .class("overview-section")
            .class_opt(self.class_name)
            .styles(self.background.styles())
            .child(
                view::div()
                    .class("overview-wrapper")
                    .styles(self.padding.vars())
                    .child(header)
                    .child(description)
                    .child(
                        view::div()
                            .class("overview-grid")
                            .child(highlights)
                            .child(media),
                    ),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlights_section_only_when_non_empty() {
        let view = Overview::default().render();
        assert!(view.find_by_class("overview-highlights").is_none());
        assert!(view.find_by_class("overview-header").is_none());

        let view = Overview {
            highlights: vec![HighlightItem {
                label: "Location".into(),
                value: "Lisbon".into(),
                icon: None,
            }],
            ..Default::default()
        }
        .render();
        let title = view.find_by_class("overview-highlights-title").expect("title");
        assert_eq!(title.text_content(), "Key Highlights");
        assert_eq!(view.find_all_by_class("overview-highlight-item").len(), 1);
    }

    #[test]
    fn test_image_media_defaults() {
        let overview: Overview = serde_json::from_value(serde_json::json!({
            "title": "About",
            "media": { "type": "image", "src": "/a.png", "caption": "Site" },
            "roundedCaption": true
        }))
        .expect("valid overview");
        assert!(overview.hover_animation);
        let view = overview.render();

        let media = view.find_by_class("overview-media").expect("media");
        assert!(media.has_class("overview-hover-animation"));
        let img = view.find_by_tag("img").expect("image");
        assert_eq!(img.get_attr("alt"), Some("Project overview"));
        assert_eq!(img.get_attr("loading"), Some("lazy"));
        let caption = view.find_by_class("overview-media-caption").expect("caption");
        assert!(caption.has_class("rounded"));
    }

    #[test]
    fn test_video_media_has_no_hover_animation() {
        let view = Overview {
            media: Some(MediaItem {
                kind: MediaKind::Video,
                src: "/intro.mp4".into(),
                alt: None,
                caption: None,
            }),
            ..Default::default()
        }
        .render();

        let media = view.find_by_class("overview-media").expect("media");
        assert!(!media.has_class("overview-hover-animation"));
        let video = view.find_by_tag("video").expect("video");
        assert!(video.has_flag("controls"));
    }
}
