//! Sections Renderer
//!
//! Turns an ordered list of `{type, content}` records into one view per record. The
//! list index is each slot's identity; unknown types become empty slots.

use std::borrow::Cow;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

use super::{AlternatingContent, Features, Hero, ImageCardGrid, InfoWithImages, Overview, StatsGrid};
use crate::view::{RenderOnce, View};

/// Wire shape of a section record
#[derive(Debug, Clone, Deserialize)]
struct RawSection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Value,
}

/// One page section, chosen by its `type` tag
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawSection")]
pub enum SectionConfig {
    Hero(Hero),
    StatsGrid(StatsGrid),
    Overview(Overview),
    Features(Features),
    ImageCardGrid(ImageCardGrid),
    InfoWithImages(InfoWithImages),
    AlternatingContent(AlternatingContent),
    /// Any other tag; renders nothing
    Unknown { kind: String },
}

impl SectionConfig {
    /// The `type` tag
    pub fn kind(&self) -> &str {
        match self {
            SectionConfig::Hero(_) => "hero",
            SectionConfig::StatsGrid(_) => "stats-grid",
            SectionConfig::Overview(_) => "overview",
            SectionConfig::Features(_) => "features",
            SectionConfig::ImageCardGrid(_) => "image-card-grid",
            SectionConfig::InfoWithImages(_) => "info-with-images",
            SectionConfig::AlternatingContent(_) => "alternating-content",
            SectionConfig::Unknown { kind } => kind,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SectionConfig::Unknown { .. })
    }
}

impl TryFrom<RawSection> for SectionConfig {
    type Error = String;

    fn try_from(raw: RawSection) -> Result<Self, Self::Error> {
        fn parse<T: serde::de::DeserializeOwned>(kind: &str, content: Value) -> Result<T, String> {
            serde_json::from_value(content).map_err(|e| format!("invalid `{kind}` section: {e}"))
        }

        let content = match raw.content {
            Value::Null => Value::Object(serde_json::Map::new()),
            content => content,
        };
        Ok(match raw.kind.as_str() {
            "hero" => SectionConfig::Hero(parse(&raw.kind, content)?),
            "stats-grid" => SectionConfig::StatsGrid(parse(&raw.kind, content)?),
            "overview" => SectionConfig::Overview(parse(&raw.kind, content)?),
            "features" => SectionConfig::Features(parse(&raw.kind, content)?),
            "image-card-grid" => SectionConfig::ImageCardGrid(parse(&raw.kind, content)?),
            "info-with-images" => SectionConfig::InfoWithImages(parse(&raw.kind, content)?),
            "alternating-content" => SectionConfig::AlternatingContent(parse(&raw.kind, content)?),
            _ => SectionConfig::Unknown { kind: raw.kind },
        })
    }
}

impl Serialize for SectionConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(tag = "type", content = "content", rename_all = "kebab-case")]
        enum Tagged<'a> {
            Hero(&'a Hero),
            StatsGrid(&'a StatsGrid),
            Overview(&'a Overview),
            Features(&'a Features),
            ImageCardGrid(&'a ImageCardGrid),
            InfoWithImages(&'a InfoWithImages),
            AlternatingContent(&'a AlternatingContent),
        }

        match self {
            SectionConfig::Hero(c) => Tagged::Hero(c).serialize(serializer),
            SectionConfig::StatsGrid(c) => Tagged::StatsGrid(c).serialize(serializer),
            SectionConfig::Overview(c) => Tagged::Overview(c).serialize(serializer),
            SectionConfig::Features(c) => Tagged::Features(c).serialize(serializer),
            SectionConfig::ImageCardGrid(c) => Tagged::ImageCardGrid(c).serialize(serializer),
            SectionConfig::InfoWithImages(c) => Tagged::InfoWithImages(c).serialize(serializer),
            SectionConfig::AlternatingContent(c) => {
                Tagged::AlternatingContent(c).serialize(serializer)
            }
            SectionConfig::Unknown { kind } => {
                let mut state = serializer.serialize_struct("SectionConfig", 2)?;
                state.serialize_field("type", kind)?;
                state.serialize_field("content", &serde_json::Map::new())?;
                state.end()
            }
        }
    }
}

impl JsonSchema for SectionConfig {
    fn schema_name() -> Cow<'static, str> {
        "SectionConfig".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let variant = |tag: &str, content: Schema| {
            json_schema!({
                "type": "object",
                "properties": {
                    "type": { "const": tag },
                    "content": content
                },
                "required": ["type", "content"]
            })
        };

        json_schema!({
            "anyOf": [
                variant("hero", generator.subschema_for::<Hero>()),
                variant("stats-grid", generator.subschema_for::<StatsGrid>()),
                variant("overview", generator.subschema_for::<Overview>()),
                variant("features", generator.subschema_for::<Features>()),
                variant("image-card-grid", generator.subschema_for::<ImageCardGrid>()),
                variant("info-with-images", generator.subschema_for::<InfoWithImages>()),
                variant("alternating-content", generator.subschema_for::<AlternatingContent>()),
                {
                    "description": "Unknown section types are accepted and render nothing",
                    "type": "object",
                    "properties": { "type": { "type": "string" } },
                    "required": ["type"]
                }
            ]
        })
    }
}

impl RenderOnce for SectionConfig {
    fn render(self) -> View {
        match self {
            SectionConfig::Hero(hero) => hero.render(),
            SectionConfig::StatsGrid(grid) => grid.render(),
            SectionConfig::Overview(overview) => overview.render(),
            SectionConfig::Features(features) => features.render(),
            SectionConfig::ImageCardGrid(grid) => grid.render(),
            SectionConfig::InfoWithImages(info) => info.render(),
            SectionConfig::AlternatingContent(content) => content.render(),
            SectionConfig::Unknown { kind } => {
                warn!(kind = %kind, "Skipping unknown section type");
                View::Empty
            }
        }
    }
}

/// One rendered slot, keyed by its list index
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub key: usize,
    pub view: View,
}

/// Render every section independently, preserving order and length
pub fn render_sections(sections: &[SectionConfig]) -> Vec<RenderedSection> {
    sections
        .iter()
        .enumerate()
        .map(|(key, section)| RenderedSection {
            key,
            view: section.clone().render(),
        })
        .collect()
}

/// Renders a section list as sibling views
#[derive(Debug, Clone, Default)]
pub struct SectionsRenderer {
    sections: Vec<SectionConfig>,
}

impl SectionsRenderer {
    pub fn new(sections: impl IntoIterator<Item = SectionConfig>) -> Self {
        Self {
            sections: sections.into_iter().collect(),
        }
    }
}

impl RenderOnce for SectionsRenderer {
    fn render(self) -> View {
        View::fragment(self.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(json: &str) -> Vec<SectionConfig> {
        serde_json::from_str(json).expect("valid sections")
    }

    #[test]
    fn test_unknown_type_is_an_empty_slot() {
        let sections = parse(
            r#"[
                {"type": "hero", "content": {"title": "Welcome"}},
                {"type": "bogus", "content": {}},
                {"type": "features"}
            ]"#,
        );

        assert_eq!(sections[1], SectionConfig::Unknown { kind: "bogus".into() });
        let rendered = render_sections(&sections);
        assert_eq!(rendered.len(), 3);
        assert_eq!(
            rendered.iter().map(|s| s.key).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(!rendered[0].view.is_empty());
        assert!(rendered[1].view.is_empty());
        assert!(!rendered[2].view.is_empty());
    }

    #[test]
    fn test_known_type_with_wrong_shape_is_rejected() {
        let result: Result<Vec<SectionConfig>, _> =
            serde_json::from_str(r#"[{"type": "hero", "content": {"subtitle": "no title"}}]"#);
        let err = result.expect_err("missing title");
        assert!(err.to_string().contains("invalid `hero` section"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert!(render_sections(&[]).is_empty());
        assert!(SectionsRenderer::default().render().is_empty());
    }

    #[test]
    fn test_identical_adjacent_sections_render_independently() {
        let hero = SectionConfig::Hero(Hero::new("Same"));
        let rendered = render_sections(&[hero.clone(), hero]);

        assert_eq!(rendered[0].view, rendered[1].view);
        assert_ne!(rendered[0].key, rendered[1].key);
    }

    #[test]
    fn test_serialize_keeps_tag_and_content() {
        let value = serde_json::to_value(SectionConfig::Hero(Hero::new("Hi"))).expect("serializable");
        assert_eq!(value["type"], "hero");
        assert_eq!(value["content"]["title"], "Hi");

        let back: SectionConfig = serde_json::from_value(value).expect("round trip");
        assert_eq!(back.kind(), "hero");
    }

    #[test]
    fn test_media_section_tags_dispatch() {
        let sections = parse(
            r#"[
                {"type": "image-card-grid", "content": {"items": [{"image": "/a.jpg", "title": "A"}]}},
                {"type": "info-with-images", "content": {"title": "Info", "images": [{"src": "/b.jpg"}]}},
                {"type": "alternating-content", "content": {"items": [{"title": "Row", "description": "Text"}]}}
            ]"#,
        );

        assert_eq!(
            sections.iter().map(SectionConfig::kind).collect::<Vec<_>>(),
            vec!["image-card-grid", "info-with-images", "alternating-content"]
        );
        let rendered = render_sections(&sections);
        assert!(rendered[0].view.find_by_class("image-card-section").is_some());
        assert!(rendered[1].view.find_by_class("info-section").is_some());
        assert!(rendered[2].view.find_by_class("alternating-content-section").is_some());

        let value = serde_json::to_value(&sections[2]).expect("serializable");
        assert_eq!(value["type"], "alternating-content");
        assert_eq!(value["content"]["items"][0]["title"], "Row");
    }

    #[test]
    fn test_info_section_requires_images() {
        let result: Result<Vec<SectionConfig>, _> =
            serde_json::from_str(r#"[{"type": "info-with-images", "content": {"title": "Info"}}]"#);
        let err = result.expect_err("missing images");
        assert!(err.to_string().contains("invalid `info-with-images` section"));
    }

    #[test]
    fn test_renderer_fragment_skips_unknown() {
        let view = SectionsRenderer::new(vec![
            SectionConfig::Unknown { kind: "x".into() },
            SectionConfig::Features(Features::default()),
        ])
        .render();

        let View::Fragment(children) = view else {
            panic!("expected fragment");
        };
        assert_eq!(children.len(), 1);
    }
}
