//! Field Configuration
//!
//! Declarative description of one form input: its kind, choices, and validation rules.

use std::fmt;
use std::sync::Arc;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::value::FieldValue;
use crate::view::format_number;

/// Input kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Date,
    File,
}

impl FieldKind {
    /// Kinds whose value is a string; `min`/`max` compare lengths and `pattern` applies
    pub fn is_string_like(&self) -> bool {
        matches!(
            self,
            FieldKind::Text
                | FieldKind::Email
                | FieldKind::Password
                | FieldKind::Tel
                | FieldKind::Url
                | FieldKind::Textarea
                | FieldKind::Select
                | FieldKind::Radio
        )
    }

    /// Value of the `type` attribute for single-line inputs
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::Textarea | FieldKind::Select => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Number => "number",
            FieldKind::Tel => "tel",
            FieldKind::Url => "url",
            FieldKind::Checkbox => "checkbox",
            FieldKind::Radio => "radio",
            FieldKind::Date => "date",
            FieldKind::File => "file",
        }
    }
}

/// Value carried by a choice option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Number(f64),
}

impl OptionValue {
    /// The field value stored when this option is chosen
    pub fn to_field_value(&self) -> FieldValue {
        match self {
            OptionValue::Text(text) => FieldValue::Text(text.clone()),
            OptionValue::Number(n) => FieldValue::Number(*n),
        }
    }

    /// Whether a stored value selects this option
    pub fn matches(&self, value: &FieldValue) -> bool {
        match value {
            FieldValue::Many(items) => items.iter().any(|item| *item == self.to_string()),
            FieldValue::Null => false,
            other => other.display() == self.to_string(),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Text(text) => f.write_str(text),
            OptionValue::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

/// A `{label, value}` choice for select and radio fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ChoiceOption {
    pub label: String,
    pub value: OptionValue,
}

impl ChoiceOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: OptionValue::Text(value.into()),
        }
    }
}

/// Compiled regular expression, (de)serialized as its source string
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Pattern)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern(regex)
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// Outcome of a custom predicate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    /// Fail with the rule's default message
    Fail,
    /// Fail with this message
    Message(String),
}

impl From<bool> for Verdict {
    fn from(ok: bool) -> Self {
        if ok { Verdict::Pass } else { Verdict::Fail }
    }
}

impl From<String> for Verdict {
    fn from(message: String) -> Self {
        Verdict::Message(message)
    }
}

impl From<&str> for Verdict {
    fn from(message: &str) -> Self {
        Verdict::Message(message.to_string())
    }
}

type PredicateFn = dyn Fn(&FieldValue) -> Verdict + Send + Sync;

/// Caller-supplied predicate run against the candidate value
#[derive(Clone)]
pub struct CustomRule(Arc<PredicateFn>);

impl CustomRule {
    pub fn new<V, F>(predicate: F) -> Self
    where
        V: Into<Verdict>,
        F: Fn(&FieldValue) -> V + Send + Sync + 'static,
    {
        Self(Arc::new(move |value| predicate(value).into()))
    }

    pub fn check(&self, value: &FieldValue) -> Verdict {
        (self.0)(value)
    }
}

impl fmt::Debug for CustomRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomRule(..)")
    }
}

/// Inline validation rules for a field
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRule {
    /// Minimum value (number) or length (string-like)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum value (number) or length (string-like)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub pattern: Option<Pattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern_message: Option<String>,
    #[serde(skip)]
    pub custom_predicate: Option<CustomRule>,
    /// Overrides every default message of this rule set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<Pattern>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn pattern_message(mut self, message: impl Into<String>) -> Self {
        self.pattern_message = Some(message.into());
        self
    }

    pub fn custom<V, F>(mut self, predicate: F) -> Self
    where
        V: Into<Verdict>,
        F: Fn(&FieldValue) -> V + Send + Sync + 'static,
    {
        self.custom_predicate = Some(CustomRule::new(predicate));
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Configuration of one form field
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldConfig {
    /// Unique within a form
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type", alias = "kind")]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Choices for select and radio fields, in display order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<ChoiceOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helper_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,
}

impl FieldConfig {
    /// Create a new optional field
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            kind,
            placeholder: None,
            options: None,
            rows: None,
            multiple: false,
            accept: None,
            disabled: false,
            required: false,
            required_message: None,
            helper_text: None,
            class_name: None,
            validation: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn options(mut self, options: Vec<ChoiceOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = Some(message.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn validation(mut self, validation: ValidationRule) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Label if set, otherwise the field name
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Choices, empty when none were configured
    pub fn choices(&self) -> &[ChoiceOption] {
        self.options.as_deref().unwrap_or_default()
    }

    /// DOM id shared by the control and its label
    pub fn dom_id(&self) -> String {
        format!("field-{}", self.name)
    }

    /// Value a fresh store holds before any input
    pub fn initial_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Checkbox => FieldValue::Bool(false),
            FieldKind::File => FieldValue::Null,
            FieldKind::Select if self.multiple => FieldValue::Many(Vec::new()),
            _ => FieldValue::Text(String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_config_from_json() {
        let field: FieldConfig = serde_json::from_str(
            r#"{
                "name": "age",
                "label": "Age",
                "type": "number",
                "required": true,
                "requiredMessage": "Tell us your age",
                "validation": { "min": 18, "max": 120, "message": "Out of range" }
            }"#,
        )
        .expect("valid field");

        assert_eq!(field.kind, FieldKind::Number);
        assert!(field.required);
        assert_eq!(field.required_message.as_deref(), Some("Tell us your age"));
        let rule = field.validation.expect("validation present");
        assert_eq!(rule.min, Some(18.0));
        assert_eq!(rule.max, Some(120.0));
        assert_eq!(rule.message.as_deref(), Some("Out of range"));
    }

    #[test]
    fn test_kind_defaults_to_text_and_accepts_kind_alias() {
        let plain: FieldConfig = serde_json::from_str(r#"{"name":"a"}"#).expect("valid field");
        assert_eq!(plain.kind, FieldKind::Text);

        let aliased: FieldConfig =
            serde_json::from_str(r#"{"name":"b","kind":"textarea"}"#).expect("valid field");
        assert_eq!(aliased.kind, FieldKind::Textarea);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let result: Result<ValidationRule, _> = serde_json::from_str(r#"{"pattern":"([a-z"}"#);
        assert!(result.is_err());

        let rule: ValidationRule =
            serde_json::from_str(r#"{"pattern":"^[0-9]{5}$"}"#).expect("valid pattern");
        let pattern = rule.pattern.expect("pattern present");
        assert!(pattern.is_match("12345"));
        assert!(!pattern.is_match("1234"));
    }

    #[test]
    fn test_numeric_option_values_match_text() {
        let option = ChoiceOption {
            label: "Two".into(),
            value: OptionValue::Number(2.0),
        };
        assert!(option.value.matches(&FieldValue::Text("2".into())));
        assert!(option.value.matches(&FieldValue::Number(2.0)));
        assert!(!option.value.matches(&FieldValue::Null));
    }

    #[test]
    fn test_verdict_conversions() {
        assert_eq!(Verdict::from(true), Verdict::Pass);
        assert_eq!(Verdict::from(false), Verdict::Fail);
        assert_eq!(Verdict::from("nope"), Verdict::Message("nope".into()));
    }
}
