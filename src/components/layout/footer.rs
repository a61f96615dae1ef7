//! Page Footer
//!
//! Brand block with social links, link columns and a copyright row.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::NavLink;
use crate::constants::{FOOTER_DEFAULT_BACKGROUND, FOOTER_DEFAULT_TEXT_COLOR};
use crate::i18n::{Locale, t};
use crate::view::{self, RenderOnce, View};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FooterColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SocialLink {
    /// Also the accessible label
    pub platform: String,
    pub url: String,
    /// Shown instead of the platform name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Defaults to `_blank`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

fn default_background() -> String {
    FOOTER_DEFAULT_BACKGROUND.to_string()
}

fn default_text_color() -> String {
    FOOTER_DEFAULT_TEXT_COLOR.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Footer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_hover_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Rendered after the copyright line
    #[serde(skip)]
    pub extra: Vec<View>,
    #[serde(skip)]
    pub locale: Locale,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            brand_name: None,
            logo_url: None,
            logo_alt: None,
            description: None,
            columns: Vec::new(),
            social_links: Vec::new(),
            copyright: None,
            background_color: default_background(),
            text_color: default_text_color(),
            link_color: None,
            link_hover_color: None,
            class_name: None,
            extra: Vec::new(),
            locale: Locale::default(),
        }
    }
}

impl RenderOnce for Footer {
    fn render(self) -> View {
        let link_color = self.link_color;
        let hover_color = self.link_hover_color;

        let social = (!self.social_links.is_empty()).then(|| {
            let links = self.social_links.into_iter().map(|social| {
                view::a()
                    .attr("href", social.url)
                    .attr("target", social.target.unwrap_or_else(|| "_blank".to_string()))
                    .attr("rel", "noopener noreferrer")
                    .class("ma-footer-social-link")
                    .style_opt("color", link_color.clone())
                    .attr("aria-label", social.platform.clone())
                    .child(social.icon.unwrap_or(social.platform))
            });
            view::div().class("ma-footer-social").children(links)
        });

        let has_brand = self.logo_url.is_some() || self.brand_name.is_some();
        let brand = has_brand.then(|| {
            let logo = self.logo_url.map(|url| {
                let alt = self
                    .logo_alt
                    .or_else(|| self.brand_name.clone())
                    .unwrap_or_else(|| t(self.locale, "footer-logo-alt"));
                view::img()
                    .attr("src", url)
                    .attr("alt", alt)
                    .class("ma-footer-logo")
            });
            let name = match logo {
                Some(_) => None,
                None => self
                    .brand_name
                    .map(|name| view::h3().class("ma-footer-brand-name").child(name)),
            };
            view::div()
                .class("ma-footer-brand")
                .child(logo)
                .child(name)
                .child(
                    self.description
                        .map(|d| view::p().class("ma-footer-description").child(d)),
                )
                .child(social)
        });

        let columns = (!self.columns.is_empty()).then(|| {
            let columns = self.columns.into_iter().map(|column| {
                let links = column.links.into_iter().map(|link| {
                    view::li().child(
                        view::a()
                            .attr("href", link.url)
                            .attr("target", link.target.unwrap_or_else(|| "_self".to_string()))
                            .class("ma-footer-link")
                            .style_opt("color", link_color.clone())
                            .style_opt("--link-hover-color", hover_color.clone())
                            .child(link.text),
                    )
                });
                view::div()
                    .class("ma-footer-column")
                    .child(
                        view::h4()
                            .class("ma-footer-column-title")
                            .class_if(column.title.is_none(), "ma-footer-column-title--empty")
                            .style_opt("color", link_color.clone())
                            .child(column.title.unwrap_or_else(|| "\u{00A0}".to_string())),
                    )
                    .child(view::ul().class("ma-footer-links").children(links))
            });
            view::div().class("ma-footer-columns").children(columns)
        });

        view::footer()
            .class("ma-footer")
            .class_opt(self.class_name)
            .style("background-color", self.background_color)
            .style("color", self.text_color)
            .child(
                view::div()
                    .class("ma-footer-container")
                    .child(
                        view::div()
                            .class("ma-footer-top")
                            .child(brand)
                            .child(columns),
                    )
                    .child(
                        view::div()
                            .class("ma-footer-bottom")
                            .child(
                                self.copyright
                                    .map(|c| view::p().class("ma-footer-copyright").child(c)),
                            )
                            .children(self.extra),
                    ),
            )
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_footer_colors_and_empty_top() {
        let view = Footer::default().render();

        let root = view.as_element().expect("footer root");
        assert_eq!(root.tag(), "footer");
        assert_eq!(root.style_value("background-color"), Some("#111827"));
        assert_eq!(root.style_value("color"), Some("#ffffff"));
        assert!(view.find_by_class("ma-footer-brand").is_none());
        assert!(view.find_by_class("ma-footer-columns").is_none());
        assert!(view.find_by_class("ma-footer-bottom").is_some());
    }

    #[test]
    fn test_logo_replaces_brand_name() {
        let view = Footer {
            brand_name: Some("Acme".into()),
            logo_url: Some("/logo.svg".into()),
            ..Default::default()
        }
        .render();

        let logo = view.find_by_class("ma-footer-logo").expect("logo");
        assert_eq!(logo.get_attr("alt"), Some("Acme"));
        assert!(view.find_by_class("ma-footer-brand-name").is_none());

        let view = Footer {
            brand_name: Some("Acme".into()),
            ..Default::default()
        }
        .render();
        assert_eq!(
            view.find_by_class("ma-footer-brand-name").map(|h| h.text_content()),
            Some("Acme".to_string())
        );

        let view = Footer {
            logo_url: Some("/logo.svg".into()),
            ..Default::default()
        }
        .render();
        assert_eq!(
            view.find_by_class("ma-footer-logo").and_then(|l| l.get_attr("alt")),
            Some("Logo")
        );
    }

    #[test]
    fn test_social_links_need_a_brand_block() {
        let footer: Footer = serde_json::from_value(serde_json::json!({
            "socialLinks": [{ "platform": "GitHub", "url": "https://github.com" }]
        }))
        .expect("valid footer");
        assert!(footer.clone().render().find_by_class("ma-footer-social").is_none());

        let view = Footer {
            brand_name: Some("Acme".into()),
            ..footer
        }
        .render();
        let link = view.find_by_class("ma-footer-social-link").expect("social link");
        assert_eq!(link.get_attr("target"), Some("_blank"));
        assert_eq!(link.get_attr("rel"), Some("noopener noreferrer"));
        assert_eq!(link.get_attr("aria-label"), Some("GitHub"));
        assert_eq!(link.text_content(), "GitHub");
    }

    #[test]
    fn test_columns_and_link_colors() {
        let footer: Footer = serde_json::from_value(serde_json::json!({
            "columns": [
                { "title": "Company", "links": [{ "text": "About", "url": "/about" }] },
                { "links": [{ "text": "Careers", "url": "/jobs", "target": "_blank" }] }
            ],
            "linkColor": "#ccc",
            "linkHoverColor": "#fff",
            "copyright": "© Acme"
        }))
        .expect("valid footer");
        let view = footer.render();

        let titles = view.find_all_by_class("ma-footer-column-title");
        assert_eq!(titles[0].text_content(), "Company");
        assert!(titles[1].has_class("ma-footer-column-title--empty"));
        assert_eq!(titles[1].text_content(), "\u{00A0}");

        let links = view.find_all_by_class("ma-footer-link");
        assert_eq!(links[0].get_attr("target"), Some("_self"));
        assert_eq!(links[1].get_attr("target"), Some("_blank"));
        assert_eq!(links[0].style_value("color"), Some("#ccc"));
        assert_eq!(links[0].style_value("--link-hover-color"), Some("#fff"));
        assert_eq!(
            view.find_by_class("ma-footer-copyright").map(|c| c.text_content()),
            Some("© Acme".to_string())
        );
    }

    #[test]
    fn test_extra_content_follows_copyright() {
        let view = Footer {
            copyright: Some("© Acme".into()),
            extra: vec![view::p().class("legal").child("Terms").into()],
            ..Default::default()
        }
        .render();

        let bottom = view.find_by_class("ma-footer-bottom").expect("bottom row");
        assert_eq!(bottom.get_children().len(), 2);
        assert!(bottom.find_by_class("legal").is_some());
    }
}
