//! Features Section

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::components::style::Background;
use crate::view::{self, RenderOnce, View};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeatureItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
}

impl FeatureItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            icon: None,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Grid of feature cards under an optional heading
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub features: Vec<FeatureItem>,
    #[serde(flatten)]
    pub background: Background,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl RenderOnce for Features {
    fn render(self) -> View {
        let items = self.features.into_iter().map(|feature| {
            view::div()
                .class("feature-item")
                .child(feature.icon.map(|icon| {
                    view::div()
                        .class("feature-icon")
                        .child(view::span().child(icon))
                }))
                .child(view::h3().class("feature-title").child(feature.title))
                .child(view::p().class("feature-description").child(feature.description))
        });

        view::div()
            .class("features-section")
            .class_opt(self.class_name)
            .styles(self.background.styles())
            .child(
                view::div()
                    .class("features-content")
                    .child(self.title.map(|t| view::h2().class("features-title").child(t)))
                    .child(self.subtitle.map(|s| view::h3().class("features-subtitle").child(s)))
                    .child(view::div().class("features-grid").children(items)),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_render_in_order() {
        let view = Features {
            title: Some("Why us".into()),
            features: vec![
                FeatureItem {
                    icon: Some("⚡".into()),
                    ..FeatureItem::new("Fast", "Loads quickly")
                },
                FeatureItem::new("Safe", "No surprises"),
            ],
            background: Background::color("#fafafa"),
            ..Default::default()
        }
        .render();

        let titles: Vec<String> = view
            .find_all_by_class("feature-title")
            .iter()
            .map(|t| t.text_content())
            .collect();
        assert_eq!(titles, vec!["Fast", "Safe"]);
        assert_eq!(view.find_all_by_class("feature-icon").len(), 1);
        assert!(view.find_by_class("features-subtitle").is_none());
        let root = view.as_element().expect("root");
        assert_eq!(root.style_value("background-color"), Some("#fafafa"));
    }
}
