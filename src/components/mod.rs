//! Components - Reusable UI Components
//!
//! Pure view components: configuration in, [`View`](crate::view::View) out.

pub mod carousel;
pub mod composite;
pub mod layout;
pub mod primitives;
pub mod sections;
pub mod style;
