//! Form Component
//!
//! Renders a [`FormController`]'s fields and submit button, optionally inside a section
//! with a heading and an illustration.

use std::fmt;
use std::rc::Rc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::form_field::FormField;
use crate::components::primitives::{Button, ButtonSize, ButtonVariant};
use crate::components::style::{Background, ContentPadding, Padding};
use crate::form::{FieldConfig, FieldState, FormController};
use crate::i18n::{Locale, t};
use crate::view::{self, Element, RenderOnce, View};

/// Custom renderer that fully replaces a field's default control
pub type RenderFieldFn = Rc<dyn Fn(&FieldConfig, &FieldState) -> View>;

/// Custom renderer for the submit button
pub type RenderSubmitFn = Rc<dyn Fn(SubmitButtonState) -> View>;

/// State handed to a custom submit renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButtonState {
    /// Submitting or loading
    pub is_submitting: bool,
    pub is_valid: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FormLayout {
    #[default]
    Vertical,
    Horizontal,
}

impl FormLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormLayout::Vertical => "vertical",
            FormLayout::Horizontal => "horizontal",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

impl ImagePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePosition::Left => "left",
            ImagePosition::Right => "right",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Presentation props of a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Illustration shown beside the form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub image_position: ImagePosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(default = "default_true")]
    pub image_rounded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submit_text: Option<String>,
    #[serde(default)]
    pub submit_variant: ButtonVariant,
    #[serde(default)]
    pub submit_size: ButtonSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default)]
    pub layout: FormLayout,
    #[serde(default = "default_true")]
    pub show_labels: bool,
    #[serde(flatten)]
    pub background: Background,
    #[serde(flatten)]
    pub padding: Padding,
    #[serde(flatten)]
    pub content_padding: ContentPadding,
}

impl Default for FormProps {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            image: None,
            image_position: ImagePosition::default(),
            image_alt: None,
            image_rounded: true,
            submit_text: None,
            submit_variant: ButtonVariant::default(),
            submit_size: ButtonSize::default(),
            class_name: None,
            layout: FormLayout::default(),
            show_labels: true,
            background: Background::default(),
            padding: Padding::default(),
            content_padding: ContentPadding::default(),
        }
    }
}

/// A form bound to a controller
#[derive(Clone)]
pub struct Form {
    controller: FormController,
    props: FormProps,
    render_field: Option<RenderFieldFn>,
    render_submit_button: Option<RenderSubmitFn>,
    locale: Locale,
}

impl Form {
    /// Create a new form
    pub fn new(controller: FormController) -> Self {
        Self {
            controller,
            props: FormProps::default(),
            render_field: None,
            render_submit_button: None,
            locale: Locale::default(),
        }
    }

    /// Replace all presentation props
    pub fn props(mut self, props: FormProps) -> Self {
        self.props = props;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.props.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.props.description = Some(description.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>, position: ImagePosition) -> Self {
        self.props.image = Some(url.into());
        self.props.image_position = position;
        self
    }

    pub fn submit_text(mut self, text: impl Into<String>) -> Self {
        self.props.submit_text = Some(text.into());
        self
    }

    pub fn layout(mut self, layout: FormLayout) -> Self {
        self.props.layout = layout;
        self
    }

    pub fn show_labels(mut self, show_labels: bool) -> Self {
        self.props.show_labels = show_labels;
        self
    }

    /// Replace every field's default control
    pub fn render_field(mut self, render: impl Fn(&FieldConfig, &FieldState) -> View + 'static) -> Self {
        self.render_field = Some(Rc::new(render));
        self
    }

    pub fn render_submit_button(mut self, render: impl Fn(SubmitButtonState) -> View + 'static) -> Self {
        self.render_submit_button = Some(Rc::new(render));
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    fn render_form(&self) -> Element {
        let props = &self.props;
        let loading = self.controller.is_loading();
        let busy = loading || self.controller.is_submitting();
        let is_valid = self.controller.is_valid();

        let fields = self.controller.fields().into_iter().map(|field| {
            let state = self.controller.field_state(&field.name).unwrap_or_default();
            let content = match &self.render_field {
                Some(render) => render(&field, &state),
                None => FormField::new(field, state)
                    .show_label(props.show_labels)
                    .disabled(loading)
                    .locale(self.locale)
                    .render(),
            };
            view::div().class("reusable-form__field-wrapper").child(content)
        });

        let submit = match &self.render_submit_button {
            Some(render) => render(SubmitButtonState {
                is_submitting: busy,
                is_valid,
            }),
            None => {
                let text = if busy {
                    t(self.locale, "form-submitting")
                } else {
                    props
                        .submit_text
                        .clone()
                        .unwrap_or_else(|| t(self.locale, "form-submit"))
                };
                Button::new(text)
                    .submit(true)
                    .class_name("reusable-form__submit")
                    .variant(props.submit_variant)
                    .size(props.submit_size)
                    .disabled(busy || !is_valid)
                    .render()
            }
        };

        view::form()
            .class("reusable-form")
            .class(format!("reusable-form--{}", props.layout.as_str()))
            .class_opt(props.class_name.as_deref())
            .flag("novalidate", true)
            .children(fields)
            .child(submit)
    }

    fn render_image(&self, image: &str) -> Element {
        let props = &self.props;
        let alt = props
            .image_alt
            .clone()
            .or_else(|| props.title.clone())
            .unwrap_or_else(|| t(self.locale, "form-illustration"));
        view::div().class("form-section__image-wrapper").child(
            view::img()
                .attr("src", image)
                .attr("alt", alt)
                .class("form-section__image")
                .class_if(props.image_rounded, "form-section__image--rounded"),
        )
    }
}

impl RenderOnce for Form {
    fn render(self) -> View {
        let form = self.render_form();
        let props = &self.props;
        if props.title.is_none() && props.description.is_none() && props.image.is_none() {
            return form.into();
        }

        let position = props.image_position;
        let image = props.image.as_deref().map(|url| self.render_image(url));
        let has_image = image.is_some();

        let header = (props.title.is_some() || props.description.is_some()).then(|| {
            view::div()
                .class("form-section__header")
                .class_if(
                    has_image && position == ImagePosition::Left,
                    "form-section__header--above-form",
                )
                .class_if(
                    has_image && position == ImagePosition::Right,
                    "form-section__header--with-image",
                )
                .child(
                    props
                        .title
                        .clone()
                        .map(|title| view::h2().class("form-section__title").child(title)),
                )
                .child(
                    props
                        .description
                        .clone()
                        .map(|d| view::p().class("form-section__description").child(d)),
                )
        });

        let (left, right) = match position {
            ImagePosition::Left => (image, None),
            ImagePosition::Right => (None, image),
        };

        view::section()
            .class("form-section")
            .class_if(has_image, format!("form-section--image-{}", position.as_str()))
            .class_if(has_image, "form-section--with-image")
            .styles(props.background.styles())
            .styles(props.padding.vars())
            .child(
                view::div().class("form-section__wrapper").child(
                    view::div()
                        .class("form-section__content")
                        .child(left)
                        .child(
                            view::div()
                                .class("form-section__form-wrapper")
                                .styles(props.content_padding.vars())
                                .child(header)
                                .child(form),
                        )
                        .child(right),
                ),
            )
            .into()
    }
}

impl fmt::Debug for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("controller", &self.controller)
            .field("props", &self.props)
            .field("render_field", &self.render_field.is_some())
            .field("render_submit_button", &self.render_submit_button.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{FieldKind, FieldValues, InputEvent};

    fn controller() -> FormController {
        FormController::new(
            vec![
                FieldConfig::new("name", FieldKind::Text).label("Name").required(true),
                FieldConfig::new("email", FieldKind::Email).label("Email"),
            ],
            &FieldValues::new(),
        )
    }

    #[test]
    fn test_bare_form_without_heading_or_image() {
        let view = Form::new(controller()).render();

        let form = view.as_element().expect("form root");
        assert_eq!(form.tag(), "form");
        assert!(form.has_class("reusable-form--vertical"));
        assert_eq!(view.find_all_by_class("reusable-form__field-wrapper").len(), 2);
        let submit = view.find_by_class("reusable-form__submit").expect("submit");
        assert_eq!(submit.text_content(), "Submit");
        assert_eq!(submit.get_attr("type"), Some("submit"));
        assert!(!submit.has_flag("disabled"));
    }

    #[test]
    fn test_loading_disables_fields_and_changes_submit_text() {
        let form = controller();
        form.set_loading(true);
        let view = Form::new(form).submit_text("Send").render();

        let submit = view.find_by_class("reusable-form__submit").expect("submit");
        assert_eq!(submit.text_content(), "Submitting...");
        assert!(submit.has_flag("disabled"));
        assert!(view.find_all_by_tag("input").iter().all(|i| i.has_flag("disabled")));
    }

    #[test]
    fn test_invalid_form_disables_default_submit() {
        let form = controller();
        form.handle_input("email", InputEvent::Text("nope".into()));
        let view = Form::new(form).render();

        let submit = view.find_by_class("reusable-form__submit").expect("submit");
        assert!(submit.has_flag("disabled"));
    }

    #[test]
    fn test_section_with_image_on_left() {
        let view = Form::new(controller())
            .title("Contact us")
            .description("We reply fast")
            .image("/contact.png", ImagePosition::Left)
            .render();

        let section = view.as_element().expect("section root");
        assert!(section.has_class("form-section--image-left"));
        assert!(section.has_class("form-section--with-image"));
        let img = view.find_by_tag("img").expect("illustration");
        assert_eq!(img.get_attr("alt"), Some("Contact us"));
        assert!(img.has_class("form-section__image--rounded"));
        assert!(view.find_by_class("form-section__header--above-form").is_some());

        let content = view.find_by_class("form-section__content").expect("content");
        let first = content.get_children()[0].as_element().expect("first child");
        assert!(first.has_class("form-section__image-wrapper"));
    }

    #[test]
    fn test_custom_renderers_replace_defaults() {
        let view = Form::new(controller())
            .render_field(|field, state| {
                view::span()
                    .class("custom-field")
                    .child(format!("{}={}", field.name, state.value.display()))
                    .into()
            })
            .render_submit_button(|state| {
                view::button()
                    .class("custom-submit")
                    .flag("disabled", state.is_submitting)
                    .into()
            })
            .render();

        let custom: Vec<String> = view
            .find_all_by_class("custom-field")
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(custom, vec!["name=", "email="]);
        assert!(view.find_by_class("custom-submit").is_some());
        assert!(view.find_by_class("reusable-form__submit").is_none());
    }
}
