//! Form Controller
//!
//! Shared handle over one form's field store. Converts host input events into field
//! values, validates on change and blur, and runs submissions behind a `submitting`
//! flag that is always cleared once the handler's outcome is known.

use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use tracing::{debug, info, warn};

use super::field::{FieldConfig, FieldKind};
use super::schema::{ValidationReport, ValidationSchema, build_schema};
use super::store::{FieldState, FieldStore};
use super::value::{FieldValue, FieldValues, FileHandle};

/// Stored submit handler
pub type SubmitHandler = Rc<dyn Fn(FieldValues) -> LocalBoxFuture<'static, anyhow::Result<()>>>;

/// Raw input from a rendered control
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Typed text (inputs, textareas, radio choice)
    Text(String),
    /// Checkbox toggled
    Checked(bool),
    /// Selected option values
    Selected(Vec<String>),
    /// Files chosen in a picker
    Files(Vec<FileHandle>),
}

/// Result of a submit trigger
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Handler ran and resolved
    Submitted,
    /// At least one field failed; handler not called
    Invalid(ValidationReport),
    /// Ignored: loading, disabled, or a submission is already outstanding
    Blocked,
}

struct FormInner {
    fields: Vec<FieldConfig>,
    schema: ValidationSchema,
    store: FieldStore,
    submitting: bool,
    loading: bool,
    disabled: bool,
    on_submit: Option<SubmitHandler>,
}

/// Clears the `submitting` flag however the submission ends
struct SubmittingGuard {
    inner: Rc<RefCell<FormInner>>,
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        match self.inner.try_borrow_mut() {
            Ok(mut inner) => inner.submitting = false,
            Err(_) => warn!("Form state busy; submitting flag not cleared"),
        }
    }
}

/// Cloneable handle to one form's state
#[derive(Clone)]
pub struct FormController {
    inner: Rc<RefCell<FormInner>>,
}

impl FormController {
    /// Create a controller whose schema is compiled from `fields`
    pub fn new(fields: Vec<FieldConfig>, initial: &FieldValues) -> Self {
        let schema = build_schema(&fields);
        Self::with_schema(fields, initial, schema)
    }

    /// Create a controller with an explicit schema; `fields` only drive rendering
    pub fn with_schema(fields: Vec<FieldConfig>, initial: &FieldValues, schema: ValidationSchema) -> Self {
        let store = FieldStore::new(&fields, initial);
        Self {
            inner: Rc::new(RefCell::new(FormInner {
                fields,
                schema,
                store,
                submitting: false,
                loading: false,
                disabled: false,
                on_submit: None,
            })),
        }
    }

    /// Caller-controlled loading flag; blocks submission while set
    pub fn set_loading(&self, loading: bool) {
        self.inner.borrow_mut().loading = loading;
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.inner.borrow_mut().disabled = disabled;
    }

    pub fn is_loading(&self) -> bool {
        self.inner.borrow().loading
    }

    pub fn is_disabled(&self) -> bool {
        self.inner.borrow().disabled
    }

    pub fn is_submitting(&self) -> bool {
        self.inner.borrow().submitting
    }

    /// No field currently holds an error
    pub fn is_valid(&self) -> bool {
        self.inner.borrow().store.is_valid()
    }

    pub fn fields(&self) -> Vec<FieldConfig> {
        self.inner.borrow().fields.clone()
    }

    pub fn field_state(&self, name: &str) -> Option<FieldState> {
        self.inner.borrow().store.get(name).cloned()
    }

    pub fn value(&self, name: &str) -> Option<FieldValue> {
        self.inner.borrow().store.value(name).cloned()
    }

    pub fn values(&self) -> FieldValues {
        self.inner.borrow().store.values()
    }

    /// Set a value directly and re-validate that field
    pub fn set_value(&self, name: &str, value: FieldValue) {
        let mut inner = self.inner.borrow_mut();
        let inner = &mut *inner;
        inner.store.set_value(name, value);
        inner.store.validate_field(&inner.schema, name);
    }

    /// Apply an input event from the control bound to `name`
    pub fn handle_input(&self, name: &str, event: InputEvent) {
        let value = {
            let inner = self.inner.borrow();
            if inner.loading || inner.disabled {
                debug!(field = %name, "Input ignored while form is inactive");
                return;
            }
            match inner.fields.iter().find(|field| field.name == name) {
                Some(field) if field.disabled => {
                    debug!(field = %name, "Input ignored for disabled field");
                    return;
                }
                Some(field) => event_value(field.kind, field.multiple, event),
                None => event_value(FieldKind::Text, false, event),
            }
        };
        self.set_value(name, value);
    }

    /// Mark the field touched and validate it
    pub fn blur(&self, name: &str) {
        let mut inner = self.inner.borrow_mut();
        let inner = &mut *inner;
        inner.store.touch(name);
        inner.store.validate_field(&inner.schema, name);
    }

    /// Register the handler used by [`FormController::trigger_submit`]
    pub fn on_submit<F, Fut>(&self, handler: F)
    where
        F: Fn(FieldValues) -> Fut + 'static,
        Fut: Future<Output = anyhow::Result<()>> + 'static,
    {
        let handler: SubmitHandler = Rc::new(move |values| handler(values).boxed_local());
        self.inner.borrow_mut().on_submit = Some(handler);
    }

    /// Submit with the registered handler
    pub async fn trigger_submit(&self) -> anyhow::Result<SubmitOutcome> {
        let handler = self.inner.borrow().on_submit.clone();
        match handler {
            Some(handler) => self.submit(move |values| handler(values)).await,
            None => {
                warn!("Submit triggered without a handler");
                Ok(SubmitOutcome::Blocked)
            }
        }
    }

    /// Validate every field and, if all pass, hand the values to `handler`.
    ///
    /// Handler errors are returned unchanged. The `submitting` flag is cleared when the
    /// handler resolves, fails, or this future is dropped.
    pub async fn submit<F, Fut>(&self, handler: F) -> anyhow::Result<SubmitOutcome>
    where
        F: FnOnce(FieldValues) -> Fut,
        Fut: Future<Output = anyhow::Result<()>>,
    {
        let values = {
            let mut inner = self.inner.borrow_mut();
            let inner = &mut *inner;
            if inner.submitting || inner.loading || inner.disabled {
                debug!(
                    submitting = inner.submitting,
                    loading = inner.loading,
                    disabled = inner.disabled,
                    "Submit ignored"
                );
                return Ok(SubmitOutcome::Blocked);
            }

            inner.store.touch_all();
            let report = inner.store.validate_all(&inner.schema);
            if !report.is_valid() {
                info!(errors = report.len(), "Form submission rejected");
                return Ok(SubmitOutcome::Invalid(report));
            }

            inner.submitting = true;
            inner.store.values()
        };
        let _guard = SubmittingGuard {
            inner: Rc::clone(&self.inner),
        };

        info!(fields = values.len(), "Submitting form");
        match handler(values).await {
            Ok(()) => {
                info!("Form submitted");
                Ok(SubmitOutcome::Submitted)
            }
            Err(err) => {
                warn!(error = %err, "Form submit handler failed");
                Err(err)
            }
        }
    }
}

impl fmt::Debug for FormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(inner) => f
                .debug_struct("FormController")
                .field("fields", &inner.fields.len())
                .field("submitting", &inner.submitting)
                .field("loading", &inner.loading)
                .field("disabled", &inner.disabled)
                .finish(),
            Err(_) => f.write_str("FormController(<borrowed>)"),
        }
    }
}

fn event_value(kind: FieldKind, multiple: bool, event: InputEvent) -> FieldValue {
    match event {
        InputEvent::Text(text) if kind == FieldKind::Number => match text.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => FieldValue::Number(number),
            _ => FieldValue::Text(text),
        },
        InputEvent::Text(text) => FieldValue::Text(text),
        InputEvent::Checked(checked) => FieldValue::Bool(checked),
        InputEvent::Selected(items) if multiple => FieldValue::Many(items),
        InputEvent::Selected(items) => items.into_iter().next().map(FieldValue::Text).unwrap_or_default(),
        // Only the first file's handle is kept
        InputEvent::Files(files) => files.into_iter().next().map(FieldValue::File).unwrap_or_default(),
    }
}
