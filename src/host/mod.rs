//! Host Page Model
//!
//! The parts of the embedding page that components observe or mutate: the scroll
//! position, scroll listeners, the animation-frame queue and the body overflow style.

mod document;
mod scroll_lock;

pub use document::{Document, FrameId, ListenerId};
pub use scroll_lock::ScrollLock;
