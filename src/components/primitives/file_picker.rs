//! FilePicker Component

use crate::form::FieldValue;
use crate::i18n::{Locale, t};
use crate::view::{self, RenderOnce, View};

/// A file input that shows the name of the chosen file
#[derive(Debug, Clone)]
pub struct FilePicker {
    name: String,
    value: FieldValue,
    accept: Option<String>,
    multiple: bool,
    disabled: bool,
    has_error: bool,
    class_name: Option<String>,
    locale: Locale,
}

impl FilePicker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Null,
            accept: None,
            multiple: false,
            disabled: false,
            has_error: false,
            class_name: None,
            locale: Locale::default(),
        }
    }

    /// Currently held handle
    pub fn value(mut self, value: FieldValue) -> Self {
        self.value = value;
        self
    }

    /// Accepted file types, e.g. `.pdf,image/*`
    pub fn accept(mut self, accept: Option<impl Into<String>>) -> Self {
        self.accept = accept.map(Into::into);
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

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

    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

impl RenderOnce for FilePicker {
    fn render(self) -> View {
        let file_name = match &self.value {
            FieldValue::File(file) => Some(file.name.clone()),
            value if !value.is_blank() => Some(t(self.locale, "form-file-selected")),
            _ => None,
        };

        view::div()
            .class("reusable-form__file-wrapper")
            .child(
                view::input()
                    .id(format!("field-{}", self.name))
                    .class("reusable-form__file")
                    .class_opt(self.class_name)
                    .class_if(self.has_error, "reusable-form__file--error")
                    .class_if(self.disabled, "reusable-form__file--disabled")
                    .attr("type", "file")
                    .attr("name", self.name)
                    .attr_opt("accept", self.accept)
                    .flag("multiple", self.multiple)
                    .flag("disabled", self.disabled),
            )
            .child(file_name.map(|name| view::div().class("reusable-form__file-name").child(name)))
            .into()
    }
}
