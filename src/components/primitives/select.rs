//! Select Component

use crate::form::{ChoiceOption, FieldValue};
use crate::view::{self, RenderOnce, View};

/// An enumerated choice control populated from options in input order
#[derive(Debug, Clone)]
pub struct Select {
    name: String,
    value: FieldValue,
    options: Vec<ChoiceOption>,
    placeholder: Option<String>,
    multiple: bool,
    disabled: bool,
    has_error: bool,
    class_name: Option<String>,
}

impl Select {
    /// Create a new select
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Null,
            options: Vec::new(),
            placeholder: None,
            multiple: false,
            disabled: false,
            has_error: false,
            class_name: None,
        }
    }

    /// Set the selected value (a list for multi-select)
    pub fn value(mut self, value: FieldValue) -> Self {
        self.value = value;
        self
    }

    /// Set the options
    pub fn options(mut self, options: impl IntoIterator<Item = ChoiceOption>) -> Self {
        self.options = options.into_iter().collect();
        self
    }

    /// Rendered as an empty-valued first option
    pub fn placeholder(mut self, placeholder: Option<impl Into<String>>) -> Self {
        self.placeholder = placeholder.map(Into::into);
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
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

impl RenderOnce for Select {
    fn render(self) -> View {
        let placeholder = self
            .placeholder
            .map(|text| view::option().attr("value", "").child(text));

        let value = self.value;
        let options = self.options.into_iter().map(|option| {
            view::option()
                .attr("value", option.value.to_string())
                .flag("selected", option.value.matches(&value))
                .child(option.label)
        });

        view::select()
            .id(format!("field-{}", self.name))
            .class("reusable-form__input reusable-form__select")
            .class_opt(self.class_name)
            .class_if(self.has_error, "reusable-form__input--error")
            .class_if(self.disabled, "reusable-form__input--disabled")
            .attr("name", self.name)
            .flag("multiple", self.multiple)
            .flag("disabled", self.disabled)
            .child(placeholder)
            .children(options)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_first_then_options_in_order() {
        let view = Select::new("plan")
            .placeholder(Some("Pick a plan"))
            .options(vec![
                ChoiceOption::new("Free", "free"),
                ChoiceOption::new("Pro", "pro"),
            ])
            .value(FieldValue::Text("pro".into()))
            .render();

        let options = view.find_all_by_tag("option");
        let labels: Vec<String> = options.iter().map(|o| o.text_content()).collect();
        assert_eq!(labels, vec!["Pick a plan", "Free", "Pro"]);
        assert_eq!(options[0].get_attr("value"), Some(""));
        assert!(!options[1].has_flag("selected"));
        assert!(options[2].has_flag("selected"));
    }

    #[test]
    fn test_missing_options_render_empty_list() {
        let view = Select::new("plan").render();
        let select = view.as_element().expect("select element");
        assert!(select.get_children().is_empty());
    }

    #[test]
    fn test_multiple_marks_every_chosen_option() {
        let view = Select::new("tags")
            .multiple(true)
            .options(vec![
                ChoiceOption::new("A", "a"),
                ChoiceOption::new("B", "b"),
                ChoiceOption::new("C", "c"),
            ])
            .value(FieldValue::Many(vec!["a".into(), "c".into()]))
            .render();

        let select = view.as_element().expect("select element");
        assert!(select.has_flag("multiple"));
        let selected: Vec<bool> = view
            .find_all_by_tag("option")
            .iter()
            .map(|o| o.has_flag("selected"))
            .collect();
        assert_eq!(selected, vec![true, false, true]);
    }
}
