//! Composite Components
//!
//! Components assembled from primitives and bound to form state.

pub mod form;
pub mod form_field;

pub use form::{Form, FormLayout, FormProps, ImagePosition, RenderFieldFn, RenderSubmitFn, SubmitButtonState};
pub use form_field::FormField;
