//! Primitive Components
//!
//! Basic building blocks like buttons, cards and form controls.

pub mod button;
pub mod card;
pub mod checkbox;
pub mod file_picker;
pub mod radio_group;
pub mod select;
pub mod text_input;

pub use button::{Button, ButtonConfig, ButtonShape, ButtonSize, ButtonVariant};
pub use card::{Card, CardVariant};
pub use checkbox::Checkbox;
pub use file_picker::FilePicker;
pub use radio_group::RadioGroup;
pub use select::Select;
pub use text_input::TextInput;
