//! Sticky Navigation
//!
//! Scroll-driven state for the sticky navigation bar and the controller that binds it
//! to a host [`Document`](crate::host::Document).

mod scroll;
mod sticky_nav;

pub use scroll::{FrameGate, NavScrollState, ScrollTracker};
pub use sticky_nav::StickyNav;
