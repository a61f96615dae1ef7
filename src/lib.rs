//! Landing Kit
//!
//! Data-driven building blocks for marketing and landing pages: a section renderer that
//! dispatches tagged configuration records, a form whose validation schema is compiled
//! from field configuration, a sticky navigation bar driven by scroll position, and the
//! configuration bridge for an external carousel engine.
//!
//! Components render to a host-agnostic [`view::View`] tree.

pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod form;
pub mod host;
pub mod i18n;
pub mod logging;
pub mod nav;
pub mod view;

pub use error::{Error, Result};
