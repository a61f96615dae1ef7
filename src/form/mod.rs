//! Forms
//!
//! Field configuration, schema compilation, field-state store and the submission controller.

mod controller;
mod field;
mod schema;
mod store;
mod value;

pub use controller::{FormController, InputEvent, SubmitHandler, SubmitOutcome};
pub use field::{
    ChoiceOption, CustomRule, FieldConfig, FieldKind, OptionValue, Pattern, ValidationRule, Verdict,
};
pub use schema::{
    FieldSchema, Measure, SchemaBuilder, Shape, ValidationReport, ValidationSchema, build_schema,
};
pub use store::{FieldState, FieldStore};
pub use value::{FieldValue, FieldValues, FileHandle, field_values};
