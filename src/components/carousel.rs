//! Carousel Component
//!
//! The slider engine is external. This component renders the slide markup, computes the
//! options object the engine is initialised with, and relays slide-change events so the
//! thumbnail strip can follow the main slider.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

use crate::constants::{
    CAROUSEL_DEFAULT_ACTIVE_COLOR, CAROUSEL_DEFAULT_DELAY_MS, CAROUSEL_DEFAULT_SPACE_BETWEEN,
    CAROUSEL_THUMBS_DEFAULT_PER_VIEW,
};
use crate::i18n::{Locale, t};
use crate::view::{self, Element, IntoView, RenderOnce, View, format_number};

/// `true`/`false`, or a delay in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Autoplay {
    Enabled(bool),
    Delay(u64),
}

impl Default for Autoplay {
    fn default() -> Self {
        Autoplay::Enabled(false)
    }
}

/// Number of visible slides, or `"auto"`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlidesPerView {
    Count(f64),
    Auto,
}

impl Default for SlidesPerView {
    fn default() -> Self {
        SlidesPerView::Count(1.0)
    }
}

impl Serialize for SlidesPerView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SlidesPerView::Count(n) => serializer.serialize_f64(*n),
            SlidesPerView::Auto => serializer.serialize_str("auto"),
        }
    }
}

impl<'de> Deserialize<'de> for SlidesPerView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(SlidesPerView::Count(n)),
            Raw::Text(text) if text == "auto" => Ok(SlidesPerView::Auto),
            Raw::Text(text) => Err(serde::de::Error::custom(format!(
                "expected a number or \"auto\", got \"{text}\""
            ))),
        }
    }
}

impl JsonSchema for SlidesPerView {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        "SlidesPerView".into()
    }

    fn json_schema(_: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "anyOf": [{ "type": "number" }, { "const": "auto" }]
        })
    }
}

/// CSS length; bare numbers are pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CssSize {
    Px(f64),
    Css(String),
}

impl fmt::Display for CssSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssSize::Px(n) => write!(f, "{}px", format_number(*n)),
            CssSize::Css(value) => f.write_str(value),
        }
    }
}

/// Aspect ratio such as `"16/9"` or `1.777`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AspectRatio {
    Number(f64),
    Text(String),
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AspectRatio::Number(n) => f.write_str(&format_number(*n)),
            AspectRatio::Text(value) => f.write_str(value),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_delay() -> u64 {
    CAROUSEL_DEFAULT_DELAY_MS
}

fn default_space_between() -> u32 {
    CAROUSEL_DEFAULT_SPACE_BETWEEN
}

fn default_active_color() -> String {
    CAROUSEL_DEFAULT_ACTIVE_COLOR.to_string()
}

/// Carousel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    #[serde(default)]
    pub autoplay: Autoplay,
    #[serde(default = "default_true")]
    pub show_thumbnails: bool,
    #[serde(default = "default_true")]
    pub show_arrows: bool,
    #[serde(default = "default_true")]
    pub show_pagination: bool,
    /// Autoplay delay when `autoplay` is `true`
    #[serde(default = "default_delay")]
    pub delay: u64,
    #[serde(default)]
    pub pause_on_hover: bool,
    #[serde(default = "default_true", rename = "loop")]
    pub looped: bool,
    #[serde(default = "default_space_between")]
    pub space_between: u32,
    #[serde(default)]
    pub slides_per_view: SlidesPerView,
    #[serde(default)]
    pub slides_per_view_mobile: SlidesPerView,
    #[serde(default)]
    pub slides_per_view_desktop: SlidesPerView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<CssSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_mobile: Option<CssSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_desktop: Option<CssSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
    /// Active pagination dot and thumbnail border
    #[serde(default = "default_active_color")]
    pub active_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub enable_fullscreen: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: Autoplay::default(),
            show_thumbnails: true,
            show_arrows: true,
            show_pagination: true,
            delay: CAROUSEL_DEFAULT_DELAY_MS,
            pause_on_hover: false,
            looped: true,
            space_between: CAROUSEL_DEFAULT_SPACE_BETWEEN,
            slides_per_view: SlidesPerView::default(),
            slides_per_view_mobile: SlidesPerView::default(),
            slides_per_view_desktop: SlidesPerView::default(),
            height: None,
            height_mobile: None,
            height_desktop: None,
            aspect_ratio: None,
            active_color: default_active_color(),
            class_name: None,
            enable_fullscreen: false,
        }
    }
}

// ==================== Slider engine options ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoplaySettings {
    pub delay: u64,
    pub disable_on_interaction: bool,
    pub pause_on_mouse_enter: bool,
}

/// `false`, or the settings object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AutoplayOption {
    Off(bool),
    On(AutoplaySettings),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationSettings {
    pub clickable: bool,
    pub dynamic_bullets: bool,
    pub dynamic_main_bullets: u32,
    pub hide_on_click: bool,
    /// Selector of the external bullet container
    pub el: String,
}

/// `false`, or the settings object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaginationOption {
    Off(bool),
    On(PaginationSettings),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub slides_per_view: SlidesPerView,
    pub space_between: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbsLink {
    pub slide_thumb_active_class: String,
    pub multiple_active_thumbs: bool,
}

/// Options for the main slider
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderOptions {
    pub space_between: u32,
    pub slides_per_view: SlidesPerView,
    pub navigation: bool,
    pub pagination: PaginationOption,
    pub autoplay: AutoplayOption,
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Keyed by minimum viewport width in pixels
    pub breakpoints: BTreeMap<u32, Breakpoint>,
    /// Present only when linked to a thumbnail strip
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbs: Option<ThumbsLink>,
}

/// Options for the thumbnail strip
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailOptions {
    pub space_between: u32,
    pub slides_per_view: SlidesPerView,
    pub free_mode: bool,
    pub watch_slides_progress: bool,
    pub slide_to_clicked_slide: bool,
    pub centered_slides: bool,
    pub centered_slides_bounds: bool,
}

impl Default for ThumbnailOptions {
    fn default() -> Self {
        Self {
            space_between: 10,
            slides_per_view: SlidesPerView::Auto,
            free_mode: true,
            watch_slides_progress: true,
            slide_to_clicked_slide: true,
            centered_slides: true,
            centered_slides_bounds: true,
        }
    }
}

/// Index the thumbnail strip should scroll to so the active thumb sits centred
pub fn thumbnail_target(real_index: usize, thumbs_per_view: SlidesPerView) -> usize {
    let per_view = match thumbs_per_view {
        SlidesPerView::Count(n) if n.is_finite() && n >= 0.0 => n as usize,
        _ => CAROUSEL_THUMBS_DEFAULT_PER_VIEW as usize,
    };
    real_index.saturating_sub(per_view / 2)
}

// ==================== Component ====================

type SlideListener = Rc<dyn Fn(usize)>;

/// Slider with optional thumbnail strip and fullscreen view
#[derive(Clone)]
pub struct Carousel {
    config: CarouselConfig,
    slides: Vec<View>,
    hovered: bool,
    fullscreen: bool,
    thumbnails: ThumbnailOptions,
    on_slide_change: Option<SlideListener>,
    locale: Locale,
}

impl Carousel {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            slides: Vec::new(),
            hovered: false,
            fullscreen: false,
            thumbnails: ThumbnailOptions::default(),
            on_slide_change: None,
            locale: Locale::default(),
        }
    }

    pub fn slide(mut self, slide: impl IntoView) -> Self {
        self.slides.push(slide.into_view());
        self
    }

    pub fn slides<V: IntoView>(mut self, slides: impl IntoIterator<Item = V>) -> Self {
        self.slides.extend(slides.into_iter().map(IntoView::into_view));
        self
    }

    /// Called with the real index whenever the main slider changes slide
    pub fn on_slide_change(mut self, listener: impl Fn(usize) + 'static) -> Self {
        self.on_slide_change = Some(Rc::new(listener));
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Pointer entered or left the carousel
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen && self.config.enable_fullscreen;
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Thumbnails are shown only for more than one slide
    pub fn has_thumbnails(&self) -> bool {
        self.config.show_thumbnails && self.slides.len() > 1
    }

    fn autoplay(&self) -> AutoplayOption {
        let delay = match self.config.autoplay {
            Autoplay::Enabled(false) => return AutoplayOption::Off(false),
            Autoplay::Enabled(true) => self.config.delay,
            Autoplay::Delay(delay) => delay,
        };
        if self.hovered && self.config.pause_on_hover {
            return AutoplayOption::Off(false);
        }
        AutoplayOption::On(AutoplaySettings {
            delay,
            disable_on_interaction: false,
            pause_on_mouse_enter: self.config.pause_on_hover,
        })
    }

    fn breakpoints(&self) -> BTreeMap<u32, Breakpoint> {
        let mobile = self.config.slides_per_view_mobile;
        let desktop = self.config.slides_per_view_desktop;
        BTreeMap::from([
            (320, Breakpoint { slides_per_view: mobile, space_between: 10 }),
            (640, Breakpoint { slides_per_view: mobile, space_between: 20 }),
            (768, Breakpoint { slides_per_view: mobile, space_between: 30 }),
            (1024, Breakpoint { slides_per_view: desktop, space_between: 30 }),
        ])
    }

    /// Options for the main slider in its current hover state
    pub fn slider_options(&self) -> SliderOptions {
        let thumbs = self.has_thumbnails();
        let pagination = if self.config.show_pagination && !thumbs {
            PaginationOption::On(PaginationSettings {
                clickable: true,
                dynamic_bullets: true,
                dynamic_main_bullets: 1,
                hide_on_click: false,
                el: ".carousel-pagination-container".to_string(),
            })
        } else {
            PaginationOption::Off(false)
        };

        SliderOptions {
            space_between: self.config.space_between,
            slides_per_view: self.config.slides_per_view,
            navigation: self.config.show_arrows,
            pagination,
            autoplay: self.autoplay(),
            looped: self.config.looped,
            breakpoints: self.breakpoints(),
            thumbs: thumbs.then(|| ThumbsLink {
                slide_thumb_active_class: "swiper-slide-thumb-active".to_string(),
                multiple_active_thumbs: false,
            }),
        }
    }

    /// Options for the thumbnail strip, when it is shown
    pub fn thumbnail_options(&self) -> Option<ThumbnailOptions> {
        self.has_thumbnails().then(|| self.thumbnails.clone())
    }

    /// Relay a slide change; returns the thumbnail index to scroll to, if thumbnails are shown
    pub fn slide_changed(&self, real_index: usize) -> Option<usize> {
        if let Some(listener) = &self.on_slide_change {
            listener(real_index);
        }
        self.has_thumbnails()
            .then(|| thumbnail_target(real_index, self.thumbnails.slides_per_view))
    }

    /// CSS custom properties on the wrapper
    pub fn style_vars(&self) -> Vec<(&'static str, String)> {
        let config = &self.config;
        [
            ("--carousel-height", config.height.as_ref().map(ToString::to_string)),
            ("--carousel-height-mobile", config.height_mobile.as_ref().map(ToString::to_string)),
            ("--carousel-height-desktop", config.height_desktop.as_ref().map(ToString::to_string)),
            ("--carousel-aspect-ratio", config.aspect_ratio.as_ref().map(ToString::to_string)),
            ("--carousel-active-color", Some(config.active_color.clone())),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name, value)))
        .collect()
    }

    fn swiper(class: &str, options: Option<String>, slides: &[View], wrap: bool) -> Element {
        view::div()
            .class("swiper")
            .class(class)
            .attr_opt("data-options", options)
            .children(slides.iter().map(|slide| {
                let slide = if wrap {
                    view::div().class("thumbnail-slide").child(slide.clone()).into()
                } else {
                    slide.clone()
                };
                view::div().class("swiper-slide").child(slide)
            }))
    }
}

fn options_json<T: Serialize>(options: &T) -> Option<String> {
    serde_json::to_string(options)
        .map_err(|e| warn!(error = %e, "Failed to serialize slider options"))
        .ok()
}

impl RenderOnce for Carousel {
    fn render(self) -> View {
        let options = options_json(&self.slider_options());

        let fullscreen_button = self.config.enable_fullscreen.then(|| {
            view::button()
                .class("carousel-fullscreen-btn")
                .attr("aria-label", t(self.locale, "carousel-fullscreen"))
        });

        let mut wrapper = view::div()
            .class("carousel-wrapper")
            .class_opt(self.config.class_name.as_deref())
            .styles(self.style_vars())
            .child(fullscreen_button);

        wrapper = match self.thumbnail_options() {
            Some(thumbs) => wrapper
                .child(
                    view::div()
                        .class("main-carousel-wrapper")
                        .child(Self::swiper("main-swiper", options, &self.slides, false)),
                )
                .child(view::div().class("thumbnail-carousel-wrapper").child(Self::swiper(
                    "thumbnail-swiper",
                    options_json(&thumbs),
                    &self.slides,
                    true,
                ))),
            None => wrapper
                .child(Self::swiper("main-swiper", options, &self.slides, false))
                .child(self.config.show_pagination.then(|| {
                    view::div()
                        .class("carousel-pagination-container")
                        .style("display", "flex")
                        .style("justify-content", "center")
                        .style("align-items", "center")
                        .style("width", "100%")
                })),
        };

        let modal = self.fullscreen.then(|| {
            let fullscreen_options = serde_json::json!({
                "spaceBetween": 0,
                "slidesPerView": 1,
                "navigation": true,
                "pagination": true,
                "autoplay": false,
                "loop": self.config.looped,
            });
            view::div()
                .class("carousel-fullscreen-modal")
                .child(
                    view::button()
                        .class("carousel-fullscreen-close")
                        .attr("aria-label", t(self.locale, "carousel-close-fullscreen")),
                )
                .child(view::div().class("carousel-fullscreen-content").child(Self::swiper(
                    "carousel-fullscreen-swiper",
                    Some(fullscreen_options.to_string()),
                    &self.slides,
                    false,
                )))
        });

        match modal {
            Some(modal) => View::fragment([wrapper, modal]),
            None => wrapper.into(),
        }
    }
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("config", &self.config)
            .field("slides", &self.slides.len())
            .field("hovered", &self.hovered)
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn slides(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("slide {i}")).collect()
    }

    #[test]
    fn test_autoplay_delay_and_hover_pause() {
        let config = CarouselConfig {
            autoplay: Autoplay::Enabled(true),
            pause_on_hover: true,
            ..Default::default()
        };
        let mut carousel = Carousel::new(config).slides(slides(3));

        let AutoplayOption::On(settings) = carousel.slider_options().autoplay else {
            panic!("autoplay should be on");
        };
        assert_eq!(settings.delay, 3000);
        assert!(!settings.disable_on_interaction);
        assert!(settings.pause_on_mouse_enter);

        carousel.set_hovered(true);
        assert_eq!(carousel.slider_options().autoplay, AutoplayOption::Off(false));
    }

    #[test]
    fn test_numeric_autoplay_overrides_delay() {
        let config: CarouselConfig =
            serde_json::from_str(r#"{"autoplay": 5000, "delay": 1000}"#).expect("valid config");
        let options = Carousel::new(config).slider_options();
        assert!(matches!(options.autoplay, AutoplayOption::On(AutoplaySettings { delay: 5000, .. })));
    }

    #[test]
    fn test_breakpoints_and_serialized_shape() {
        let config = CarouselConfig {
            slides_per_view_mobile: SlidesPerView::Count(1.0),
            slides_per_view_desktop: SlidesPerView::Count(3.0),
            ..Default::default()
        };
        let options = Carousel::new(config).slides(slides(1)).slider_options();
        let json = serde_json::to_value(&options).expect("serializable");

        assert_eq!(json["breakpoints"]["320"]["spaceBetween"], 10);
        assert_eq!(json["breakpoints"]["640"]["spaceBetween"], 20);
        assert_eq!(json["breakpoints"]["1024"]["slidesPerView"], 3.0);
        assert_eq!(json["autoplay"], false);
        assert_eq!(json["loop"], true);
        assert!(json.get("thumbs").is_none());
        assert_eq!(json["pagination"]["clickable"], true);
    }

    #[test]
    fn test_thumbnails_need_more_than_one_slide() {
        let single = Carousel::new(CarouselConfig::default()).slides(slides(1));
        assert!(!single.has_thumbnails());
        assert!(single.thumbnail_options().is_none());

        let many = Carousel::new(CarouselConfig::default()).slides(slides(4));
        let options = many.slider_options();
        assert!(options.thumbs.is_some());
        assert_eq!(options.pagination, PaginationOption::Off(false));

        let view = many.render();
        assert_eq!(view.find_all_by_class("thumbnail-slide").len(), 4);
    }

    #[test]
    fn test_slide_change_forwards_and_centres_thumbs() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let carousel = Carousel::new(CarouselConfig::default())
            .slides(slides(8))
            .on_slide_change(move |index| sink.borrow_mut().push(index));

        assert_eq!(carousel.slide_changed(1), Some(0));
        assert_eq!(carousel.slide_changed(6), Some(4));
        assert_eq!(*seen.borrow(), vec![1, 6]);

        assert_eq!(thumbnail_target(6, SlidesPerView::Count(3.0)), 5);
    }

    #[test]
    fn test_style_vars_and_pagination_container() {
        let config = CarouselConfig {
            show_thumbnails: false,
            height: Some(CssSize::Px(500.0)),
            aspect_ratio: Some(AspectRatio::Text("16/9".into())),
            ..Default::default()
        };
        let view = Carousel::new(config).slides(slides(2)).render();

        let wrapper = view.as_element().expect("wrapper");
        assert_eq!(wrapper.style_value("--carousel-height"), Some("500px"));
        assert_eq!(wrapper.style_value("--carousel-aspect-ratio"), Some("16/9"));
        assert_eq!(wrapper.style_value("--carousel-active-color"), Some("#007bff"));
        assert!(view.find_by_class("carousel-pagination-container").is_some());
    }

    #[test]
    fn test_fullscreen_requires_opt_in() {
        let mut plain = Carousel::new(CarouselConfig::default()).slides(slides(2));
        plain.set_fullscreen(true);
        assert!(!plain.is_fullscreen());

        let config = CarouselConfig {
            enable_fullscreen: true,
            ..Default::default()
        };
        let mut carousel = Carousel::new(config).slides(slides(2));
        carousel.set_fullscreen(true);
        let view = carousel.render();
        assert!(view.find_by_class("carousel-fullscreen-btn").is_some());
        assert!(view.find_by_class("carousel-fullscreen-modal").is_some());
    }
}
