//! FormField Component
//!
//! One configured field: label, the control chosen by its kind, and the error or
//! helper line under it.

use crate::components::primitives::{Checkbox, FilePicker, RadioGroup, Select, TextInput};
use crate::form::{FieldConfig, FieldKind, FieldState};
use crate::i18n::Locale;
use crate::view::{self, RenderOnce, View};

/// A field control bound to its current state
#[derive(Debug, Clone)]
pub struct FormField {
    config: FieldConfig,
    state: FieldState,
    show_label: bool,
    disabled: bool,
    locale: Locale,
}

impl FormField {
    pub fn new(config: FieldConfig, state: FieldState) -> Self {
        Self {
            config,
            state,
            show_label: true,
            disabled: false,
            locale: Locale::default(),
        }
    }

    pub fn show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    /// Disable the control regardless of the field's own flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl RenderOnce for FormField {
    fn render(self) -> View {
        let config = self.config;
        let error = self.state.visible_error().map(str::to_string);
        let has_error = error.is_some();
        let disabled = config.disabled || self.disabled;
        let label = if self.show_label { config.label.clone() } else { None };
        let value = self.state.value;
        let id = config.dom_id();

        let control: View = match config.kind {
            FieldKind::Select => Select::new(&config.name)
                .value(value)
                .options(config.choices().to_vec())
                .placeholder(config.placeholder.clone())
                .multiple(config.multiple)
                .disabled(disabled)
                .error(has_error)
                .class_name(config.class_name.clone())
                .render(),
            FieldKind::Checkbox => Checkbox::new(&config.name)
                .checked(value.as_bool().unwrap_or(false))
                .label(label.clone())
                .required(config.required)
                .disabled(disabled)
                .error(has_error)
                .class_name(config.class_name.clone())
                .render(),
            FieldKind::Radio => RadioGroup::new(&config.name)
                .value(value)
                .options(config.choices().to_vec())
                .disabled(disabled)
                .error(has_error)
                .class_name(config.class_name.clone())
                .render(),
            FieldKind::File => FilePicker::new(&config.name)
                .value(value)
                .accept(config.accept.clone())
                .multiple(config.multiple)
                .disabled(disabled)
                .error(has_error)
                .class_name(config.class_name.clone())
                .locale(self.locale)
                .render(),
            kind => TextInput::new(&config.name)
                .kind(kind)
                .value(value.display())
                .placeholder(config.placeholder.clone())
                .rows(config.rows)
                .disabled(disabled)
                .error(has_error)
                .class_name(config.class_name.clone())
                .render(),
        };

        // Checkbox and radio render their own labels
        let outer_label = match config.kind {
            FieldKind::Checkbox | FieldKind::Radio => None,
            _ => label.map(|text| {
                view::label()
                    .class("reusable-form__label")
                    .attr("for", id)
                    .child(text)
                    .child(
                        config
                            .required
                            .then(|| view::span().class("reusable-form__required").child("*")),
                    )
            }),
        };

        let helper = if has_error { None } else { config.helper_text };

        view::div()
            .class("reusable-form__field")
            .class_opt(config.class_name)
            .child(outer_label)
            .child(control)
            .child(error.map(|e| view::div().class("reusable-form__error").child(e)))
            .child(helper.map(|h| view::div().class("reusable-form__helper").child(h)))
            .into()
    }
}
