//! Sticky Navigation Bar
//!
//! Brand, links and call to action, with colors that switch once the page scrolls past
//! the configured offset. Scroll tracking lives in [`crate::nav::StickyNav`]; this view
//! only renders a given state.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::components::primitives::{Button, ButtonSize, ButtonVariant};
use crate::constants::{
    NAV_DEFAULT_BACKGROUND, NAV_DEFAULT_MOBILE_MENU_BACKGROUND, NAV_DEFAULT_MOBILE_MENU_TEXT,
    NAV_DEFAULT_PADDING_X, NAV_DEFAULT_PADDING_X_MOBILE, NAV_DEFAULT_SCROLLED_BACKGROUND,
    NAV_DEFAULT_TEXT_COLOR,
};
use crate::i18n::{Locale, t};
use crate::view::{self, Element, RenderOnce, View};

/// Navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NavLink {
    pub text: String,
    pub url: String,
    /// Defaults to `_self`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl NavLink {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: url.into(),
            target: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_cta_variant() -> ButtonVariant {
    ButtonVariant::Red
}

fn default_background() -> String {
    NAV_DEFAULT_BACKGROUND.to_string()
}

fn default_scrolled_background() -> String {
    NAV_DEFAULT_SCROLLED_BACKGROUND.to_string()
}

fn default_text_color() -> String {
    NAV_DEFAULT_TEXT_COLOR.to_string()
}

fn default_padding_x() -> String {
    NAV_DEFAULT_PADDING_X.to_string()
}

fn default_padding_x_mobile() -> String {
    NAV_DEFAULT_PADDING_X_MOBILE.to_string()
}

fn default_mobile_menu_background() -> String {
    NAV_DEFAULT_MOBILE_MENU_BACKGROUND.to_string()
}

fn default_mobile_menu_text() -> String {
    NAV_DEFAULT_MOBILE_MENU_TEXT.to_string()
}

/// Sticky navigation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StickyNavProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub links: Vec<NavLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_url: Option<String>,
    #[serde(default = "default_cta_variant")]
    pub cta_variant: ButtonVariant,
    #[serde(default = "default_background")]
    pub background_color: String,
    #[serde(default = "default_scrolled_background")]
    pub scrolled_background_color: String,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrolled_text_color: Option<String>,
    #[serde(default = "default_true")]
    pub show_background_on_scroll: bool,
    #[serde(default)]
    pub blur_on_scroll: bool,
    #[serde(default = "default_true")]
    pub shadow_on_scroll: bool,
    #[serde(default = "default_padding_x")]
    pub padding_x: String,
    #[serde(default = "default_padding_x_mobile")]
    pub padding_x_mobile: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Scroll distance in pixels after which the bar counts as scrolled
    #[serde(default)]
    pub scroll_offset: f64,
    #[serde(default = "default_true")]
    pub sticky: bool,
    #[serde(default = "default_mobile_menu_background")]
    pub mobile_menu_background_color: String,
    #[serde(default = "default_mobile_menu_text")]
    pub mobile_menu_text_color: String,
}

impl Default for StickyNavProps {
    fn default() -> Self {
        Self {
            logo_url: None,
            logo_alt: None,
            brand_name: None,
            links: Vec::new(),
            cta_text: None,
            cta_url: None,
            cta_variant: default_cta_variant(),
            background_color: default_background(),
            scrolled_background_color: default_scrolled_background(),
            text_color: default_text_color(),
            scrolled_text_color: None,
            show_background_on_scroll: true,
            blur_on_scroll: false,
            shadow_on_scroll: true,
            padding_x: default_padding_x(),
            padding_x_mobile: default_padding_x_mobile(),
            class_name: None,
            scroll_offset: 0.0,
            sticky: true,
            mobile_menu_background_color: default_mobile_menu_background(),
            mobile_menu_text_color: default_mobile_menu_text(),
        }
    }
}

/// Transparent backgrounds let the page show through the bar
fn is_transparent(color: &str) -> bool {
    let compact: String = color.chars().filter(|c| !c.is_whitespace()).collect();
    compact.is_empty()
        || compact == "transparent"
        || (compact.starts_with("rgba") && compact.contains("0,0,0,0"))
}

/// Rendered navigation bar for a given scroll and menu state
#[derive(Debug, Clone)]
pub struct StickyNavView {
    props: StickyNavProps,
    scrolled: bool,
    menu_open: bool,
    locale: Locale,
}

impl StickyNavView {
    pub fn new(props: StickyNavProps) -> Self {
        Self {
            props,
            scrolled: false,
            menu_open: false,
            locale: Locale::default(),
        }
    }

    pub fn scrolled(mut self, scrolled: bool) -> Self {
        self.scrolled = scrolled;
        self
    }

    pub fn menu_open(mut self, menu_open: bool) -> Self {
        self.menu_open = menu_open;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    fn background(&self) -> &str {
        if self.scrolled && self.props.show_background_on_scroll {
            &self.props.scrolled_background_color
        } else {
            &self.props.background_color
        }
    }

    fn text_color(&self) -> &str {
        match &self.props.scrolled_text_color {
            Some(color) if self.scrolled => color,
            _ => &self.props.text_color,
        }
    }

    fn links(&self, color: &str) -> Option<Element> {
        if self.props.links.is_empty() {
            return None;
        }
        Some(
            view::ul()
                .class("ma-sticky-nav-links")
                .children(self.props.links.iter().map(|link| {
                    view::li().child(
                        view::a()
                            .class("ma-sticky-nav-link")
                            .attr("href", link.url.clone())
                            .attr("target", link.target.as_deref().unwrap_or("_self"))
                            .style("color", color)
                            .child(link.text.clone()),
                    )
                })),
        )
    }

    fn cta(&self) -> Option<View> {
        self.props.cta_text.as_ref().map(|text| {
            Button::new(text.clone())
                .url(self.props.cta_url.clone())
                .variant(self.props.cta_variant)
                .size(ButtonSize::Md)
                .render()
        })
    }

    fn brand(&self, color: &str) -> Element {
        let props = &self.props;
        let content: Option<Element> = match (&props.logo_url, &props.brand_name) {
            (Some(logo), _) => Some(
                view::img()
                    .class("ma-sticky-nav-logo")
                    .attr("src", logo.clone())
                    .attr(
                        "alt",
                        props
                            .logo_alt
                            .clone()
                            .or_else(|| props.brand_name.clone())
                            .unwrap_or_else(|| t(self.locale, "nav-logo-alt")),
                    ),
            ),
            (None, Some(name)) => Some(
                view::span()
                    .class("ma-sticky-nav-brand-name")
                    .child(name.clone()),
            ),
            (None, None) => None,
        };

        view::a()
            .class("ma-sticky-nav-brand")
            .attr("href", "/")
            .style("color", color)
            .child(content)
    }
}

impl RenderOnce for StickyNavView {
    fn render(self) -> View {
        let props = &self.props;
        let background = self.background().to_string();
        let text_color = self.text_color().to_string();
        let mobile_color = props.mobile_menu_text_color.clone();

        let toggle = view::button()
            .class("ma-sticky-nav-toggle")
            .class_if(self.menu_open, "ma-sticky-nav-toggle--active")
            .attr("aria-label", t(self.locale, "nav-toggle-menu"))
            .style(
                "color",
                if self.menu_open { mobile_color.as_str() } else { text_color.as_str() },
            )
            .children((0..3).map(|_| view::span()));

        let mobile = view::div()
            .class("ma-sticky-nav-mobile")
            .class_if(self.menu_open, "ma-sticky-nav-mobile--open")
            .style("background-color", props.mobile_menu_background_color.clone())
            .style("color", mobile_color.clone())
            .child(self.links(&mobile_color))
            .child(
                self.cta()
                    .map(|cta| view::div().class("ma-sticky-nav-mobile-cta").child(cta)),
            );

        let container = view::div()
            .class("ma-sticky-nav-container")
            .child(self.brand(&text_color))
            .child(
                view::div()
                    .class("ma-sticky-nav-desktop")
                    .child(self.links(&text_color))
                    .child(self.cta()),
            )
            .child(toggle)
            .child(
                self.menu_open
                    .then(|| view::div().class("ma-sticky-nav-backdrop")),
            )
            .child(mobile);

        view::nav()
            .class("ma-sticky-nav")
            .class(if props.sticky { "ma-sticky-nav--sticky" } else { "ma-sticky-nav--static" })
            .class_if(self.scrolled, "ma-sticky-nav--scrolled")
            .class_if(self.scrolled && props.blur_on_scroll, "ma-sticky-nav--blur")
            .class_if(self.scrolled && props.shadow_on_scroll, "ma-sticky-nav--shadow")
            .class_if(is_transparent(&background), "ma-sticky-nav--transparent")
            .class_opt(props.class_name.as_deref())
            .style("--nav-padding-x", props.padding_x.clone())
            .style("--nav-padding-x-mobile", props.padding_x_mobile.clone())
            .style("background-color", background)
            .style("color", text_color)
            .child(container)
            .into()
    }
}
