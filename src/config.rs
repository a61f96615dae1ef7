//! Page Configuration
//!
//! A whole landing page described as data: optional sticky navigation, the ordered
//! section list, any number of forms and an optional footer. Loaded from TOML or JSON.

use std::collections::BTreeMap;
use std::path::Path;

use hashlink::LinkedHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use tracing::{debug, error};

use crate::components::composite::{Form, FormProps};
use crate::components::layout::{Footer, StickyNavProps, StickyNavView};
use crate::components::sections::{SectionConfig, SectionsRenderer};
use crate::error::{Error, IoSnafu, Result};
use crate::form::{FieldConfig, FieldValue, FieldValues, FormController};
use crate::view::{IntoView, View};

/// One form on the page
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormConfig {
    pub fields: Vec<FieldConfig>,
    #[serde(default, skip_serializing_if = "LinkedHashMap::is_empty")]
    #[schemars(with = "BTreeMap<String, FieldValue>")]
    pub initial_values: FieldValues,
    #[serde(flatten)]
    pub props: FormProps,
}

impl FormConfig {
    /// A fresh controller holding this form's fields and initial values
    pub fn controller(&self) -> FormController {
        FormController::new(self.fields.clone(), &self.initial_values)
    }
}

/// Landing page description
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct PageConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav: Option<StickyNavProps>,
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<FormConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

impl PageConfig {
    pub fn from_toml_str(value: &str) -> Result<Self> {
        let page: Self = toml::from_str(value).map_err(|e| {
            error!(error = %e, "Failed to parse TOML page config");
            e
        })?;
        Ok(page)
    }

    pub fn from_json_str(value: &str) -> Result<Self> {
        let page: Self = serde_json::from_str(value).map_err(|e| {
            error!(error = %e, "Failed to parse JSON page config");
            e
        })?;
        Ok(page)
    }

    /// Load a `.toml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        let parse: fn(&str) -> Result<Self> = match extension.as_str() {
            "toml" => Self::from_toml_str,
            "json" => Self::from_json_str,
            _ => {
                return Err(Error::UnsupportedFormat {
                    extension: extension.clone(),
                });
            }
        };

        let value = std::fs::read_to_string(path).context(IoSnafu { path })?;
        let page = parse(&value)?;
        debug!(
            path = ?path,
            sections = page.sections.len(),
            forms = page.forms.len(),
            "Page config loaded"
        );
        Ok(page)
    }

    /// Sections with a tag this crate does not render
    pub fn unknown_sections(&self) -> impl Iterator<Item = (usize, &str)> {
        self.sections
            .iter()
            .enumerate()
            .filter(|(_, section)| !section.is_known())
            .map(|(index, section)| (index, section.kind()))
    }
}

/// JSON Schema for page configuration files
pub fn page_json_schema() -> Result<serde_json::Value> {
    let schema = schemars::schema_for!(PageConfig);
    Ok(serde_json::to_value(schema)?)
}

/// Navigation, then sections, then forms, then the footer, in the unscrolled state
pub fn render_page(page: &PageConfig) -> View {
    let nav = page.nav.clone().map(StickyNavView::new);
    let footer = page.footer.clone().into_view();
    let sections = SectionsRenderer::new(page.sections.iter().cloned());
    let forms = page
        .forms
        .iter()
        .map(|form| Form::new(form.controller()).props(form.props.clone()).into_view());

    View::fragment(
        [nav.into_view(), sections.into_view()]
            .into_iter()
            .chain(forms)
            .chain([footer]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE_TOML: &str = r##"
[nav]
brandName = "Acme"
scrollOffset = 80

[[nav.links]]
text = "Pricing"
url = "/pricing"

[[sections]]
type = "hero"
content = { title = "Welcome", backgroundColor = "#000" }

[[sections]]
type = "carousel"

[[forms]]
title = "Contact"

[[forms.fields]]
name = "email"
type = "email"
required = true

[footer]
brandName = "Acme"
copyright = "© Acme"
"##;

    #[test]
    fn test_toml_page_round_trips_through_renderer() {
        let page = PageConfig::from_toml_str(PAGE_TOML).expect("valid page");

        let nav = page.nav.as_ref().expect("nav");
        assert_eq!(nav.scroll_offset, 80.0);
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.unknown_sections().collect::<Vec<_>>(), vec![(1, "carousel")]);
        assert_eq!(page.forms[0].props.title.as_deref(), Some("Contact"));

        let view = render_page(&page);
        assert!(view.find_by_class("ma-sticky-nav").is_some());
        assert!(view.find_by_class("ma-hero").is_some());
        assert!(view.find_by_class("form-section").is_some());

        let View::Fragment(children) = &view else {
            panic!("expected fragment");
        };
        let last = children.last().and_then(View::as_element).expect("footer");
        assert_eq!(last.tag(), "footer");
        assert_eq!(
            view.find_by_class("ma-footer-brand-name").map(|h| h.text_content()),
            Some("Acme".to_string())
        );
    }

    #[test]
    fn test_mismatched_content_is_an_error() {
        let result = PageConfig::from_json_str(
            r#"{"sections": [{"type": "stats-grid", "content": {"stats": 3}}]}"#,
        );
        assert!(matches!(result, Err(Error::Json { .. })));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let result = PageConfig::from_json_str(
            r#"{"forms": [{"fields": [{"name": "code", "validation": {"pattern": "("}}]}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_schema_lists_top_level_keys() {
        let schema = page_json_schema().expect("schema");
        let properties = schema["properties"].as_object().expect("properties");
        assert!(properties.contains_key("nav"));
        assert!(properties.contains_key("sections"));
        assert!(properties.contains_key("forms"));
        assert!(properties.contains_key("footer"));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = PageConfig::load("page.yaml");
        assert!(matches!(
            result,
            Err(Error::UnsupportedFormat { extension }) if extension == "yaml"
        ));
    }
}
