//! Shared Section Styling
//!
//! Background and padding props used by every full-width block. Padding values become
//! CSS custom properties so the stylesheet can pick desktop or mobile values.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Background color or image; the image wins when both are set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl Background {
    pub fn color(color: impl Into<String>) -> Self {
        Self {
            background_color: Some(color.into()),
            background_image: None,
        }
    }

    pub fn image(url: impl Into<String>) -> Self {
        Self {
            background_color: None,
            background_image: Some(url.into()),
        }
    }

    pub fn has_image(&self) -> bool {
        self.background_image.is_some()
    }

    /// Inline style declarations
    pub fn styles(&self) -> Vec<(&'static str, String)> {
        match (&self.background_image, &self.background_color) {
            (Some(image), _) => vec![
                ("background-image", format!("url({image})")),
                ("background-size", "cover".to_string()),
                ("background-position", "center".to_string()),
            ],
            (None, Some(color)) => vec![("background-color", color.clone())],
            (None, None) => Vec::new(),
        }
    }
}

/// Desktop and mobile padding overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Padding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_x_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_y_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom_mobile: Option<String>,
}

impl Padding {
    /// `--padding-*` custom properties for the values that are set
    pub fn vars(&self) -> Vec<(String, String)> {
        self.prefixed_vars("padding")
    }

    /// Custom properties named `--{prefix}-x`, `--{prefix}-x-mobile`, ...
    pub fn prefixed_vars(&self, prefix: &str) -> Vec<(String, String)> {
        [
            ("x", &self.padding_x),
            ("x-mobile", &self.padding_x_mobile),
            ("y", &self.padding_y),
            ("y-mobile", &self.padding_y_mobile),
            ("top", &self.padding_top),
            ("top-mobile", &self.padding_top_mobile),
            ("bottom", &self.padding_bottom),
            ("bottom-mobile", &self.padding_bottom_mobile),
        ]
        .into_iter()
        .filter_map(|(suffix, value)| {
            value
                .as_ref()
                .map(|value| (format!("--{prefix}-{suffix}"), value.clone()))
        })
        .collect()
    }
}

/// Side of the text column that images sit on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

/// Padding overrides for a form's content column (excludes its image)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentPadding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_padding_x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_padding_x_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_padding_y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_padding_y_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_padding_top: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_padding_top_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_padding_bottom: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_padding_bottom_mobile: Option<String>,
}

impl ContentPadding {
    /// `--content-padding-*` custom properties for the values that are set
    pub fn vars(&self) -> Vec<(String, String)> {
        Padding {
            padding_x: self.content_padding_x.clone(),
            padding_x_mobile: self.content_padding_x_mobile.clone(),
            padding_y: self.content_padding_y.clone(),
            padding_y_mobile: self.content_padding_y_mobile.clone(),
            padding_top: self.content_padding_top.clone(),
            padding_top_mobile: self.content_padding_top_mobile.clone(),
            padding_bottom: self.content_padding_bottom.clone(),
            padding_bottom_mobile: self.content_padding_bottom_mobile.clone(),
        }
        .prefixed_vars("content-padding")
    }
}
