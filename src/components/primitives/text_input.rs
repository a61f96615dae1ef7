//! TextInput Component

use crate::constants::TEXTAREA_DEFAULT_ROWS;
use crate::form::FieldKind;
use crate::view::{self, RenderOnce, View};

/// A single-line input, or a textarea for [`FieldKind::Textarea`]
#[derive(Debug, Clone)]
pub struct TextInput {
    name: String,
    kind: FieldKind,
    value: String,
    placeholder: Option<String>,
    rows: Option<u32>,
    disabled: bool,
    has_error: bool,
    class_name: Option<String>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            value: String::new(),
            placeholder: None,
            rows: None,
            disabled: false,
            has_error: false,
            class_name: None,
        }
    }

    /// Input kind; decides the `type` attribute
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: Option<impl Into<String>>) -> Self {
        self.placeholder = placeholder.map(Into::into);
        self
    }

    /// Textarea rows
    pub fn rows(mut self, rows: Option<u32>) -> Self {
        self.rows = rows;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn error(mut self, has_error: bool) -> Self {
        self.has_error = has_error;
        self
    }

    pub fn class_name(mut self, class_name: Option<impl Into<String>>) -> Self {
        self.class_name = class_name.map(Into::into);
        self
    }
}

impl RenderOnce for TextInput {
    fn render(self) -> View {
        let id = format!("field-{}", self.name);

        if self.kind == FieldKind::Textarea {
            return view::textarea()
                .id(id)
                .class("reusable-form__input reusable-form__textarea")
                .class_opt(self.class_name)
                .class_if(self.has_error, "reusable-form__input--error")
                .class_if(self.disabled, "reusable-form__input--disabled")
                .attr("name", self.name)
                .attr_opt("placeholder", self.placeholder)
                .attr("rows", self.rows.unwrap_or(TEXTAREA_DEFAULT_ROWS).to_string())
                .flag("disabled", self.disabled)
                .child(self.value)
                .into();
        }

        view::input()
            .id(id)
            .class("reusable-form__input")
            .class_opt(self.class_name)
            .class_if(self.has_error, "reusable-form__input--error")
            .class_if(self.disabled, "reusable-form__input--disabled")
            .attr("type", self.kind.input_type())
            .attr("name", self.name)
            .attr("value", self.value)
            .attr_opt("placeholder", self.placeholder)
            .flag("disabled", self.disabled)
            .into()
    }
}
