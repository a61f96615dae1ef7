//! RadioGroup Component

use crate::form::{ChoiceOption, FieldValue};
use crate::view::{self, RenderOnce, View};

/// Mutually exclusive choices, one radio per option
#[derive(Debug, Clone)]
pub struct RadioGroup {
    name: String,
    value: FieldValue,
    options: Vec<ChoiceOption>,
    disabled: bool,
    has_error: bool,
    class_name: Option<String>,
}

impl RadioGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Null,
            options: Vec::new(),
            disabled: false,
            has_error: false,
            class_name: None,
        }
    }

    pub fn value(mut self, value: FieldValue) -> Self {
        self.value = value;
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = ChoiceOption>) -> Self {
        self.options = options.into_iter().collect();
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
}

impl RenderOnce for RadioGroup {
    fn render(self) -> View {
        if self.options.is_empty() {
            return View::Empty;
        }

        let field_id = format!("field-{}", self.name);
        let radios = self.options.iter().map(|option| {
            let value = option.value.to_string();
            let radio_id = format!("{field_id}-{value}");
            view::div()
                .class("reusable-form__radio-wrapper")
                .child(
                    view::input()
                        .id(radio_id.clone())
                        .class("reusable-form__radio")
                        .class_opt(self.class_name.as_deref())
                        .class_if(self.has_error, "reusable-form__radio--error")
                        .class_if(self.disabled, "reusable-form__radio--disabled")
                        .attr("type", "radio")
                        .attr("name", self.name.clone())
                        .flag("checked", option.value.matches(&self.value))
                        .flag("disabled", self.disabled)
                        .attr("value", value),
                )
                .child(
                    view::label()
                        .class("reusable-form__radio-label")
                        .attr("for", radio_id)
                        .child(option.label.clone()),
                )
        });

        view::div()
            .class("reusable-form__radio-group")
            .children(radios)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_radio_per_option_with_current_checked() {
        let view = RadioGroup::new("size")
            .options(vec![ChoiceOption::new("Small", "s"), ChoiceOption::new("Large", "l")])
            .value(FieldValue::Text("l".into()))
            .render();

        let radios = view.find_all_by_tag("input");
        assert_eq!(radios.len(), 2);
        assert_eq!(radios[0].get_attr("id"), Some("field-size-s"));
        assert!(!radios[0].has_flag("checked"));
        assert!(radios[1].has_flag("checked"));
        assert!(radios.iter().all(|r| r.get_attr("name") == Some("size")));
    }

    #[test]
    fn test_missing_options_render_nothing() {
        assert!(RadioGroup::new("size").render().is_empty());
    }
}
