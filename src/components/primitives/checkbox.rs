//! Checkbox Component

use crate::view::{self, RenderOnce, View};

/// A boolean toggle with an optional trailing label
#[derive(Debug, Clone)]
pub struct Checkbox {
    name: String,
    checked: bool,
    label: Option<String>,
    required: bool,
    disabled: bool,
    has_error: bool,
    class_name: Option<String>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            checked: false,
            label: None,
            required: false,
            disabled: false,
            has_error: false,
            class_name: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: Option<impl Into<String>>) -> Self {
        self.label = label.map(Into::into);
        self
    }

    /// Show the required marker after the label
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
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

impl RenderOnce for Checkbox {
    fn render(self) -> View {
        let id = format!("field-{}", self.name);

        let label = self.label.map(|text| {
            view::label()
                .class("reusable-form__checkbox-label")
                .attr("for", id.clone())
                .child(text)
                .child(
                    self.required
                        .then(|| view::span().class("reusable-form__required").child("*")),
                )
        });

        view::div()
            .class("reusable-form__checkbox-wrapper")
            .child(
                view::input()
                    .id(id.clone())
                    .class("reusable-form__checkbox")
                    .class_opt(self.class_name)
                    .class_if(self.has_error, "reusable-form__checkbox--error")
                    .class_if(self.disabled, "reusable-form__checkbox--disabled")
                    .attr("type", "checkbox")
                    .attr("name", self.name)
                    .flag("checked", self.checked)
                    .flag("disabled", self.disabled),
            )
            .child(label)
            .into()
    }
}
