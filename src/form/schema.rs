//! Validation Schema
//!
//! Compiles an ordered list of [`FieldConfig`] into a [`ValidationSchema`]: one composed
//! validator per field name. Each validator checks, in order, the value's shape for the
//! field kind, `min`, `max`, `pattern`, the custom predicate and finally presence. The
//! first failure is reported. A blank value (null, missing, empty text, no selections)
//! on an optional field never reaches any rule.

use std::borrow::Cow;
use std::sync::LazyLock;

use ahash::AHashSet;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use hashlink::LinkedHashMap;
use regex::Regex;
use tracing::{debug, warn};

use super::field::{CustomRule, FieldConfig, FieldKind, Pattern, Verdict};
use super::value::{FieldValue, FieldValues};
use crate::i18n::{Locale, t, t_args};
use crate::view::format_number;

/// Same shape browsers accept for `<input type="email">`
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email regex is valid")
});

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:https?|ftp)://[^\s/$.?#][^\s]*$").expect("url regex is valid")
});

/// Date formats accepted besides RFC 3339
const DATE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Base value shape expected by a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Any string; numbers and booleans are read as their text
    Text,
    Email,
    Url,
    /// Number or numeric text
    Number,
    /// RFC 3339 / `YYYY-MM-DD` text or epoch milliseconds
    Date,
    /// Boolean or `"true"`/`"false"`
    Boolean,
    /// Opaque value (file handles)
    Any,
}

impl Shape {
    /// Shape used for a field kind
    pub fn for_kind(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Email => Shape::Email,
            FieldKind::Number => Shape::Number,
            FieldKind::Url => Shape::Url,
            FieldKind::Checkbox => Shape::Boolean,
            FieldKind::File => Shape::Any,
            FieldKind::Date => Shape::Date,
            _ => Shape::Text,
        }
    }
}

/// What `min`/`max` bounds compare against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Numeric value
    Value,
    /// Character count of text, or number of selections
    Length,
}

#[derive(Debug, Clone)]
enum Rule {
    Min {
        bound: f64,
        measure: Measure,
        message: String,
    },
    Max {
        bound: f64,
        measure: Measure,
        message: String,
    },
    Pattern {
        pattern: Pattern,
        message: String,
    },
    Custom {
        rule: CustomRule,
        message: String,
    },
}

#[derive(Debug, Clone)]
enum Presence {
    Optional,
    Required { message: String },
    MustBeTrue { message: String },
}

/// Value after shape coercion
enum Coerced<'a> {
    Str(Cow<'a, str>),
    Items(&'a [String]),
    Number(f64),
    Bool(bool),
    Opaque,
}

impl Coerced<'_> {
    fn measure(&self, measure: Measure) -> Option<f64> {
        match (measure, self) {
            (Measure::Value, Coerced::Number(n)) => Some(*n),
            (Measure::Length, Coerced::Str(s)) => Some(s.chars().count() as f64),
            (Measure::Length, Coerced::Items(items)) => Some(items.len() as f64),
            _ => None,
        }
    }

    /// The value custom predicates see: converted scalars replace the raw input
    fn to_value<'v>(&self, original: &'v FieldValue) -> Cow<'v, FieldValue> {
        match (self, original) {
            (Coerced::Number(n), FieldValue::Text(_)) => Cow::Owned(FieldValue::Number(*n)),
            (Coerced::Bool(b), FieldValue::Text(_)) => Cow::Owned(FieldValue::Bool(*b)),
            (Coerced::Str(text), FieldValue::Number(_) | FieldValue::Bool(_)) => {
                Cow::Owned(FieldValue::Text(text.to_string()))
            }
            _ => Cow::Borrowed(original),
        }
    }
}

/// Composed validator for one field
#[derive(Debug, Clone)]
pub struct FieldSchema {
    shape: Shape,
    shape_message: String,
    rules: Vec<Rule>,
    presence: Presence,
}

impl FieldSchema {
    /// Create an optional validator with the given base shape
    pub fn new(shape: Shape, shape_message: impl Into<String>) -> Self {
        Self {
            shape,
            shape_message: shape_message.into(),
            rules: Vec::new(),
            presence: Presence::Optional,
        }
    }

    /// Lower bound
    pub fn min(mut self, bound: f64, measure: Measure, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Min {
            bound,
            measure,
            message: message.into(),
        });
        self
    }

    /// Upper bound
    pub fn max(mut self, bound: f64, measure: Measure, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Max {
            bound,
            measure,
            message: message.into(),
        });
        self
    }

    /// Text must match `pattern`
    pub fn matches(mut self, pattern: Pattern, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Pattern {
            pattern,
            message: message.into(),
        });
        self
    }

    /// Run a custom predicate; `message` is used when it returns a bare failure
    pub fn test(mut self, rule: CustomRule, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Custom {
            rule,
            message: message.into(),
        });
        self
    }

    /// Blank values fail with `message`
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.presence = Presence::Required {
            message: message.into(),
        };
        self
    }

    /// Value must be exactly `true`
    pub fn must_be_true(mut self, message: impl Into<String>) -> Self {
        self.presence = Presence::MustBeTrue {
            message: message.into(),
        };
        self
    }

    /// Blank values pass without running any rule
    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn is_required(&self) -> bool {
        !matches!(self.presence, Presence::Optional)
    }

    /// Check a candidate value, returning the first failure message
    pub fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if value.is_blank() {
            return match &self.presence {
                Presence::Optional => Ok(()),
                Presence::Required { message } | Presence::MustBeTrue { message } => {
                    Err(message.clone())
                }
            };
        }

        let coerced = self.coerce(value)?;

        for rule in &self.rules {
            match rule {
                Rule::Min {
                    bound,
                    measure,
                    message,
                } => {
                    if coerced.measure(*measure).is_some_and(|m| m < *bound) {
                        return Err(message.clone());
                    }
                }
                Rule::Max {
                    bound,
                    measure,
                    message,
                } => {
                    if coerced.measure(*measure).is_some_and(|m| m > *bound) {
                        return Err(message.clone());
                    }
                }
                Rule::Pattern { pattern, message } => {
                    let ok = match &coerced {
                        Coerced::Str(text) => pattern.is_match(text),
                        Coerced::Items(items) => items.iter().all(|item| pattern.is_match(item)),
                        _ => true,
                    };
                    if !ok {
                        return Err(message.clone());
                    }
                }
                Rule::Custom { rule, message } => match rule.check(&coerced.to_value(value)) {
                    Verdict::Pass => {}
                    Verdict::Fail => return Err(message.clone()),
                    Verdict::Message(custom) => return Err(custom),
                },
            }
        }

        if let Presence::MustBeTrue { message } = &self.presence {
            if !matches!(coerced, Coerced::Bool(true)) {
                return Err(message.clone());
            }
        }

        Ok(())
    }

    fn coerce<'a>(&self, value: &'a FieldValue) -> Result<Coerced<'a>, String> {
        let invalid = || self.shape_message.clone();
        match self.shape {
            Shape::Any => Ok(Coerced::Opaque),
            Shape::Text => match value {
                FieldValue::Many(items) => Ok(Coerced::Items(items)),
                other => as_text(other).map(Coerced::Str).ok_or_else(invalid),
            },
            Shape::Email => {
                let text = as_text(value).ok_or_else(invalid)?;
                if EMAIL_REGEX.is_match(&text) {
                    Ok(Coerced::Str(text))
                } else {
                    Err(invalid())
                }
            }
            Shape::Url => {
                let text = as_text(value).ok_or_else(invalid)?;
                if URL_REGEX.is_match(&text) {
                    Ok(Coerced::Str(text))
                } else {
                    Err(invalid())
                }
            }
            Shape::Number => match value {
                FieldValue::Number(n) => Ok(Coerced::Number(*n)),
                FieldValue::Text(text) => text
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map(Coerced::Number)
                    .ok_or_else(invalid),
                _ => Err(invalid()),
            },
            Shape::Date => {
                let valid = match value {
                    FieldValue::Text(text) => parse_date(text.trim()),
                    FieldValue::Number(ms) => DateTime::from_timestamp_millis(*ms as i64).is_some(),
                    _ => false,
                };
                if valid { Ok(Coerced::Opaque) } else { Err(invalid()) }
            }
            Shape::Boolean => match value {
                FieldValue::Bool(b) => Ok(Coerced::Bool(*b)),
                FieldValue::Text(text) if text == "true" => Ok(Coerced::Bool(true)),
                FieldValue::Text(text) if text == "false" => Ok(Coerced::Bool(false)),
                _ => Err(invalid()),
            },
        }
    }
}

fn as_text(value: &FieldValue) -> Option<Cow<'_, str>> {
    match value {
        FieldValue::Text(text) => Some(Cow::Borrowed(text.as_str())),
        FieldValue::Number(n) => Some(Cow::Owned(format_number(*n))),
        FieldValue::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

fn parse_date(text: &str) -> bool {
    DateTime::parse_from_rfc3339(text).is_ok()
        || NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
        || DATE_FORMATS
            .iter()
            .any(|format| NaiveDateTime::parse_from_str(text, format).is_ok())
}

/// Per-field errors from a validation pass, in field order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    errors: LinkedHashMap<String, String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error message for a field, if it failed
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Failing `(field, message)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Mapping from field name to its composed validator. Never mutated once built.
#[derive(Debug, Clone, Default)]
pub struct ValidationSchema {
    fields: LinkedHashMap<String, FieldSchema>,
}

impl ValidationSchema {
    /// Create an empty schema; add entries with [`ValidationSchema::field`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the validator for `name`
    pub fn field(mut self, name: impl Into<String>, schema: FieldSchema) -> Self {
        self.fields.replace(name.into(), schema);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate one field; names without an entry always pass
    pub fn validate_field(&self, name: &str, value: &FieldValue) -> Result<(), String> {
        match self.fields.get(name) {
            Some(schema) => schema.validate(value),
            None => Ok(()),
        }
    }

    /// Validate every entry; missing values are treated as null
    pub fn validate(&self, values: &FieldValues) -> ValidationReport {
        let mut report = ValidationReport::default();
        for (name, schema) in &self.fields {
            let value = values.get(name).unwrap_or(&FieldValue::Null);
            if let Err(message) = schema.validate(value) {
                debug!(field = %name, %message, "Field failed validation");
                report.errors.insert(name.clone(), message);
            }
        }
        report
    }
}

/// Builds a [`ValidationSchema`] from field configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaBuilder {
    locale: Locale,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Locale used for default messages
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Compile every field; duplicate names keep their first definition
    pub fn build(&self, fields: &[FieldConfig]) -> ValidationSchema {
        let mut seen = AHashSet::with_capacity(fields.len());
        let mut schema = ValidationSchema::new();
        for field in fields {
            if !seen.insert(field.name.as_str()) {
                warn!(field = %field.name, "Duplicate form field name ignored");
                continue;
            }
            schema = schema.field(field.name.clone(), self.field_schema(field));
        }
        schema
    }

    /// Compile a single field
    pub fn field_schema(&self, field: &FieldConfig) -> FieldSchema {
        let locale = self.locale;
        let rules = field.validation.as_ref();
        let rule_message = rules.and_then(|r| r.message.clone());
        let or_default = |key: &str| rule_message.clone().unwrap_or_else(|| t(locale, key));

        let shape = Shape::for_kind(field.kind);
        let shape_message = match shape {
            Shape::Email => or_default("form-invalid-email"),
            Shape::Number => or_default("form-not-number"),
            Shape::Url => or_default("form-invalid-url"),
            Shape::Date => or_default("form-invalid-date"),
            Shape::Boolean => t(locale, "form-invalid-boolean"),
            Shape::Text | Shape::Any => t(locale, "form-invalid-value"),
        };
        let mut schema = FieldSchema::new(shape, shape_message);

        let measure = if field.kind == FieldKind::Number {
            Some(Measure::Value)
        } else if field.kind.is_string_like() {
            Some(Measure::Length)
        } else {
            None
        };
        let counts_items = field.kind == FieldKind::Select && field.multiple;

        if let Some(rules) = rules {
            if let Some(min) = rules.min {
                match measure {
                    Some(measure) => {
                        let key = bound_key("min", measure, counts_items);
                        let message = rule_message.clone().unwrap_or_else(|| {
                            t_args(locale, key, &[("min", &format_number(min))])
                        });
                        schema = schema.min(min, measure, message);
                    }
                    None => debug!(field = %field.name, kind = ?field.kind, "min ignored for kind"),
                }
            }

            if let Some(max) = rules.max {
                match measure {
                    Some(measure) => {
                        let key = bound_key("max", measure, counts_items);
                        let message = rule_message.clone().unwrap_or_else(|| {
                            t_args(locale, key, &[("max", &format_number(max))])
                        });
                        schema = schema.max(max, measure, message);
                    }
                    None => debug!(field = %field.name, kind = ?field.kind, "max ignored for kind"),
                }
            }

            if let Some(pattern) = &rules.pattern {
                if field.kind.is_string_like() {
                    let message = rules
                        .pattern_message
                        .clone()
                        .unwrap_or_else(|| or_default("form-invalid-format"));
                    schema = schema.matches(pattern.clone(), message);
                } else {
                    debug!(field = %field.name, kind = ?field.kind, "pattern ignored for kind");
                }
            }

            if let Some(custom) = &rules.custom_predicate {
                schema = schema.test(custom.clone(), or_default("form-validation-failed"));
            }
        }

        if field.required {
            let explicit = field.required_message.clone().or_else(|| rule_message.clone());
            if field.kind == FieldKind::Checkbox {
                let message = explicit.unwrap_or_else(|| t(locale, "form-field-required"));
                schema.must_be_true(message)
            } else {
                let message = explicit.unwrap_or_else(|| {
                    t_args(locale, "form-named-required", &[("field", field.display_name())])
                });
                schema.required(message)
            }
        } else {
            schema.optional()
        }
    }
}

fn bound_key(bound: &str, measure: Measure, counts_items: bool) -> &'static str {
    match (bound, measure, counts_items) {
        ("min", Measure::Value, _) => "form-min-number",
        ("min", Measure::Length, true) => "form-min-items",
        ("min", Measure::Length, false) => "form-min-length",
        (_, Measure::Value, _) => "form-max-number",
        (_, Measure::Length, true) => "form-max-items",
        (_, Measure::Length, false) => "form-max-length",
    }
}

/// Compile field configuration with English default messages
pub fn build_schema(fields: &[FieldConfig]) -> ValidationSchema {
    SchemaBuilder::new().build(fields)
}
