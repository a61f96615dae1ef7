//! Document
//!
//! A single-threaded stand-in for the host page. Hosts drive it by calling
//! [`Document::scroll_to`] and [`Document::run_frame`]; components register listeners
//! and frame callbacks on it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use ahash::AHashMap;
use tracing::{debug, trace};

/// Registered scroll listener handle
pub type ListenerId = u64;
/// Pending animation-frame handle
pub type FrameId = u64;

type ScrollCallback = Rc<dyn Fn(&Document)>;
type FrameCallback = Box<dyn FnOnce(&Document)>;

struct ScrollListener {
    callback: ScrollCallback,
    /// Passive listeners never block scrolling
    passive: bool,
}

#[derive(Default)]
struct DocumentInner {
    /// Vertical scroll offset in pixels
    scroll_y: f64,
    listeners: AHashMap<ListenerId, ScrollListener>,
    /// Callbacks for the next frame, in request order
    frames: Vec<(FrameId, FrameCallback)>,
    next_id: u64,
    /// Inline `overflow` style of the body element
    body_overflow: String,
    /// Number of live scroll locks
    lock_depth: usize,
    /// Overflow value to restore when the last lock is released
    saved_overflow: Option<String>,
}

impl DocumentInner {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Shared handle to the host page
#[derive(Clone, Default)]
pub struct Document {
    inner: Rc<RefCell<DocumentInner>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page already scrolled to `scroll_y`
    pub fn with_scroll(scroll_y: f64) -> Self {
        let document = Self::new();
        document.inner.borrow_mut().scroll_y = scroll_y;
        document
    }

    pub fn scroll_y(&self) -> f64 {
        self.inner.borrow().scroll_y
    }

    /// Register a scroll listener
    pub fn add_scroll_listener(
        &self,
        passive: bool,
        callback: impl Fn(&Document) + 'static,
    ) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        inner.listeners.insert(
            id,
            ScrollListener {
                callback: Rc::new(callback),
                passive,
            },
        );
        debug!(listener = id, passive, "Scroll listener registered");
        id
    }

    /// Remove a scroll listener; returns whether it was registered
    pub fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        let removed = self.inner.borrow_mut().listeners.remove(&id).is_some();
        if removed {
            debug!(listener = id, "Scroll listener removed");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Whether a registered listener is passive
    pub fn is_passive(&self, id: ListenerId) -> Option<bool> {
        self.inner.borrow().listeners.get(&id).map(|l| l.passive)
    }

    /// Move the viewport and dispatch a scroll event to every listener
    pub fn scroll_to(&self, scroll_y: f64) {
        let callbacks = {
            let mut inner = self.inner.borrow_mut();
            inner.scroll_y = scroll_y;
            let mut listeners: Vec<_> = inner
                .listeners
                .iter()
                .map(|(id, listener)| (*id, Rc::clone(&listener.callback)))
                .collect();
            listeners.sort_unstable_by_key(|(id, _)| *id);
            listeners
        };

        trace!(scroll_y, listeners = callbacks.len(), "Dispatching scroll event");
        for (_, callback) in callbacks {
            callback(self);
        }
    }

    /// Schedule a callback for the next frame
    pub fn request_frame(&self, callback: impl FnOnce(&Document) + 'static) -> FrameId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id();
        inner.frames.push((id, Box::new(callback)));
        id
    }

    /// Cancel a pending frame callback; returns whether it was still pending
    pub fn cancel_frame(&self, id: FrameId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.frames.len();
        inner.frames.retain(|(frame, _)| *frame != id);
        inner.frames.len() != before
    }

    pub fn pending_frames(&self) -> usize {
        self.inner.borrow().frames.len()
    }

    /// Run the callbacks queued before this frame started; returns how many ran.
    /// Callbacks requested while the frame runs wait for the next one.
    pub fn run_frame(&self) -> usize {
        let frames = std::mem::take(&mut self.inner.borrow_mut().frames);
        let count = frames.len();
        for (_, callback) in frames {
            callback(self);
        }
        count
    }

    /// Current inline `overflow` style of the body; empty when unset
    pub fn body_overflow(&self) -> String {
        self.inner.borrow().body_overflow.clone()
    }

    pub fn set_body_overflow(&self, overflow: impl Into<String>) {
        self.inner.borrow_mut().body_overflow = overflow.into();
    }

    pub fn scroll_lock_depth(&self) -> usize {
        self.inner.borrow().lock_depth
    }

    pub(super) fn push_scroll_lock(&self, overflow: &str) -> usize {
        let mut inner = self.inner.borrow_mut();
        if inner.lock_depth == 0 {
            inner.saved_overflow = Some(std::mem::replace(
                &mut inner.body_overflow,
                overflow.to_string(),
            ));
        }
        inner.lock_depth += 1;
        inner.lock_depth
    }

    pub(super) fn pop_scroll_lock(&self) -> usize {
        let mut inner = self.inner.borrow_mut();
        inner.lock_depth = inner.lock_depth.saturating_sub(1);
        if inner.lock_depth == 0
            && let Some(saved) = inner.saved_overflow.take()
        {
            inner.body_overflow = saved;
        }
        inner.lock_depth
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Document")
            .field("scroll_y", &inner.scroll_y)
            .field("listeners", &inner.listeners.len())
            .field("pending_frames", &inner.frames.len())
            .field("body_overflow", &inner.body_overflow)
            .field("lock_depth", &inner.lock_depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_scroll_dispatches_to_listeners_until_removed() {
        let document = Document::new();
        let calls = Rc::new(Cell::new(0));
        let seen = Rc::clone(&calls);
        let id = document.add_scroll_listener(true, move |doc| {
            assert_eq!(doc.scroll_y(), 40.0);
            seen.set(seen.get() + 1);
        });

        assert_eq!(document.is_passive(id), Some(true));
        document.scroll_to(40.0);
        assert_eq!(calls.get(), 1);

        assert!(document.remove_scroll_listener(id));
        assert!(!document.remove_scroll_listener(id));
        document.scroll_to(40.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_listener_may_touch_document_during_dispatch() {
        let document = Document::new();
        document.add_scroll_listener(true, |doc| {
            doc.request_frame(|_| {});
        });
        document.scroll_to(10.0);
        assert_eq!(document.pending_frames(), 1);
    }

    #[test]
    fn test_frames_run_once_and_can_be_cancelled() {
        let document = Document::new();
        let ran = Rc::new(Cell::new(0));

        let first = Rc::clone(&ran);
        document.request_frame(move |_| first.set(first.get() + 1));
        let second = Rc::clone(&ran);
        let cancelled = document.request_frame(move |_| second.set(second.get() + 10));

        assert!(document.cancel_frame(cancelled));
        assert_eq!(document.run_frame(), 1);
        assert_eq!(ran.get(), 1);
        assert_eq!(document.run_frame(), 0);
    }

    #[test]
    fn test_frame_requested_during_frame_waits() {
        let document = Document::new();
        document.request_frame(|doc| {
            doc.request_frame(|_| {});
        });
        assert_eq!(document.run_frame(), 1);
        assert_eq!(document.pending_frames(), 1);
    }
}
