//! Layout Components
//!
//! Page chrome that sits outside the section flow.

pub mod footer;
pub mod sticky_nav;

pub use footer::{Footer, FooterColumn, SocialLink};
pub use sticky_nav::{NavLink, StickyNavProps, StickyNavView};
