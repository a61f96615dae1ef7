//! Field State Store
//!
//! Per-field value, touched flag and last validation error, keyed by field name.

use hashlink::LinkedHashMap;

use super::field::FieldConfig;
use super::schema::{ValidationReport, ValidationSchema};
use super::value::{FieldValue, FieldValues};

/// Bound state of one field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldState {
    pub value: FieldValue,
    /// Set once the user has left the field or tried to submit
    pub touched: bool,
    pub error: Option<String>,
}

impl FieldState {
    fn new(value: FieldValue) -> Self {
        Self {
            value,
            touched: false,
            error: None,
        }
    }

    /// Error to show; hidden until the field is touched
    pub fn visible_error(&self) -> Option<&str> {
        if self.touched { self.error.as_deref() } else { None }
    }
}

/// Ordered store of field states
#[derive(Debug, Clone, Default)]
pub struct FieldStore {
    fields: LinkedHashMap<String, FieldState>,
}

impl FieldStore {
    /// Seed the store with kind defaults, overridden by caller-supplied initial values
    pub fn new(fields: &[FieldConfig], initial: &FieldValues) -> Self {
        let mut store = LinkedHashMap::new();
        for field in fields {
            if !store.contains_key(&field.name) {
                store.insert(field.name.clone(), FieldState::new(field.initial_value()));
            }
        }
        for (name, value) in initial {
            match store.get_mut(name) {
                Some(state) => state.value = value.clone(),
                None => {
                    store.insert(name.clone(), FieldState::new(value.clone()));
                }
            }
        }
        Self { fields: store }
    }

    pub fn get(&self, name: &str) -> Option<&FieldState> {
        self.fields.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name).map(|state| &state.value)
    }

    /// Store a new value, adding the field if it was unknown
    pub fn set_value(&mut self, name: &str, value: FieldValue) {
        match self.fields.get_mut(name) {
            Some(state) => state.value = value,
            None => {
                self.fields.insert(name.to_string(), FieldState::new(value));
            }
        }
    }

    pub fn touch(&mut self, name: &str) {
        if let Some(state) = self.fields.get_mut(name) {
            state.touched = true;
        }
    }

    pub fn touch_all(&mut self) {
        for state in self.fields.values_mut() {
            state.touched = true;
        }
    }

    pub fn set_error(&mut self, name: &str, error: Option<String>) {
        if let Some(state) = self.fields.get_mut(name) {
            state.error = error;
        }
    }

    /// Re-run one field's validator against its current value
    pub fn validate_field(&mut self, schema: &ValidationSchema, name: &str) -> bool {
        let Some(state) = self.fields.get_mut(name) else {
            return true;
        };
        state.error = schema.validate_field(name, &state.value).err();
        state.error.is_none()
    }

    /// Validate every field and record the outcome on each
    pub fn validate_all(&mut self, schema: &ValidationSchema) -> ValidationReport {
        let report = schema.validate(&self.values());
        for (name, state) in self.fields.iter_mut() {
            state.error = report.error(name).map(str::to_string);
        }
        report
    }

    /// No field currently holds an error
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|state| state.error.is_none())
    }

    /// Snapshot of every value in field order
    pub fn values(&self) -> FieldValues {
        self.fields
            .iter()
            .map(|(name, state)| (name.clone(), state.value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::field::FieldKind;
    use crate::form::schema::build_schema;
    use crate::form::value::field_values;

    fn fields() -> Vec<FieldConfig> {
        vec![
            FieldConfig::new("name", FieldKind::Text).required(true),
            FieldConfig::new("terms", FieldKind::Checkbox),
            FieldConfig::new("tags", FieldKind::Select).multiple(true),
            FieldConfig::new("cv", FieldKind::File),
        ]
    }

    #[test]
    fn test_initial_values_merge_over_kind_defaults() {
        let store = FieldStore::new(&fields(), &field_values([("name", "Ada"), ("extra", "x")]));

        assert_eq!(store.value("name"), Some(&FieldValue::Text("Ada".into())));
        assert_eq!(store.value("terms"), Some(&FieldValue::Bool(false)));
        assert_eq!(store.value("tags"), Some(&FieldValue::Many(vec![])));
        assert_eq!(store.value("cv"), Some(&FieldValue::Null));
        assert_eq!(store.value("extra"), Some(&FieldValue::Text("x".into())));
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let fields = fields();
        let schema = build_schema(&fields);
        let mut store = FieldStore::new(&fields, &FieldValues::new());

        assert!(!store.validate_field(&schema, "name"));
        let state = store.get("name").expect("name state");
        assert_eq!(state.error.as_deref(), Some("name is required"));
        assert_eq!(state.visible_error(), None);

        store.touch("name");
        assert_eq!(
            store.get("name").and_then(FieldState::visible_error),
            Some("name is required")
        );
    }

    #[test]
    fn test_validate_all_clears_fixed_errors() {
        let fields = fields();
        let schema = build_schema(&fields);
        let mut store = FieldStore::new(&fields, &FieldValues::new());

        assert!(!store.validate_all(&schema).is_valid());
        assert!(!store.is_valid());

        store.set_value("name", "Grace".into());
        assert!(store.validate_all(&schema).is_valid());
        assert!(store.is_valid());
    }
}
