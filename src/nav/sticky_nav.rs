//! Sticky Navigation Controller
//!
//! Binds a [`ScrollTracker`] to a [`Document`]. Scroll events are coalesced so that at
//! most one state check is pending per frame. The mobile menu holds the body scroll lock
//! while open. Everything registered on the document is removed on unmount or drop.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, info};

use super::{FrameGate, NavScrollState, ScrollTracker};
use crate::components::layout::{StickyNavProps, StickyNavView};
use crate::host::{Document, FrameId, ListenerId, ScrollLock};

type ChangeListener = Rc<dyn Fn(NavScrollState)>;

struct NavInner {
    tracker: ScrollTracker,
    gate: FrameGate,
    pending_frame: Option<FrameId>,
    listener: Option<ListenerId>,
    menu_open: bool,
    lock: Option<ScrollLock>,
    on_change: Option<ChangeListener>,
}

/// A mounted sticky navigation bar
pub struct StickyNav {
    document: Document,
    inner: Rc<RefCell<NavInner>>,
    mounted: bool,
}

impl StickyNav {
    /// Mount against `document`. Non-sticky bars register nothing and stay `unscrolled`.
    pub fn mount(document: &Document, props: &StickyNavProps) -> Self {
        let mut tracker = ScrollTracker::new(props.scroll_offset, props.sticky);
        tracker.reset(document.scroll_y());

        let inner = Rc::new(RefCell::new(NavInner {
            tracker,
            gate: FrameGate::default(),
            pending_frame: None,
            listener: None,
            menu_open: false,
            lock: None,
            on_change: None,
        }));

        if props.sticky {
            let weak = Rc::downgrade(&inner);
            let id = document.add_scroll_listener(true, move |doc| on_scroll(&weak, doc));
            inner.borrow_mut().listener = Some(id);
        }

        info!(
            sticky = props.sticky,
            scroll_offset = props.scroll_offset,
            "Sticky nav mounted"
        );

        Self {
            document: document.clone(),
            inner,
            mounted: true,
        }
    }

    /// Called after every state transition
    pub fn on_change(&self, listener: impl Fn(NavScrollState) + 'static) {
        self.inner.borrow_mut().on_change = Some(Rc::new(listener));
    }

    pub fn state(&self) -> NavScrollState {
        self.inner.borrow().tracker.state()
    }

    pub fn is_scrolled(&self) -> bool {
        self.state().is_scrolled
    }

    /// Number of state transitions since mount
    pub fn transitions(&self) -> u32 {
        self.inner.borrow().tracker.transitions()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_menu_open(&self) -> bool {
        self.inner.borrow().menu_open
    }

    pub fn open_menu(&self) {
        let mut inner = self.inner.borrow_mut();
        if !self.mounted || inner.menu_open {
            return;
        }
        inner.menu_open = true;
        inner.lock = Some(ScrollLock::acquire(&self.document));
    }

    pub fn close_menu(&self) {
        let lock = {
            let mut inner = self.inner.borrow_mut();
            inner.menu_open = false;
            inner.lock.take()
        };
        drop(lock);
    }

    pub fn toggle_menu(&self) {
        if self.is_menu_open() {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Markup for the current scroll and menu state
    pub fn view(&self, props: StickyNavProps) -> StickyNavView {
        StickyNavView::new(props)
            .scrolled(self.is_scrolled())
            .menu_open(self.is_menu_open())
    }

    /// Remove the listener, cancel any pending check and release the scroll lock
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;

        let (listener, frame, lock) = {
            let mut inner = self.inner.borrow_mut();
            inner.gate.close();
            inner.menu_open = false;
            (inner.listener.take(), inner.pending_frame.take(), inner.lock.take())
        };
        if let Some(id) = listener {
            self.document.remove_scroll_listener(id);
        }
        if let Some(id) = frame {
            self.document.cancel_frame(id);
        }
        drop(lock);
        debug!("Sticky nav unmounted");
    }
}

fn on_scroll(inner: &Weak<RefCell<NavInner>>, document: &Document) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut state = inner.borrow_mut();
    if !state.gate.try_open() {
        return;
    }
    let weak = Rc::downgrade(&inner);
    state.pending_frame = Some(document.request_frame(move |doc| on_frame(&weak, doc)));
}

fn on_frame(inner: &Weak<RefCell<NavInner>>, document: &Document) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let changed = {
        let mut state = inner.borrow_mut();
        state.gate.close();
        state.pending_frame = None;
        if state.tracker.update(document.scroll_y()) {
            Some((state.tracker.state(), state.on_change.clone()))
        } else {
            None
        }
    };

    if let Some((nav_state, listener)) = changed {
        debug!(is_scrolled = nav_state.is_scrolled, "Sticky nav scroll state changed");
        if let Some(listener) = listener {
            listener(nav_state);
        }
    }
}

impl Drop for StickyNav {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for StickyNav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("StickyNav")
            .field("state", &inner.tracker.state())
            .field("menu_open", &inner.menu_open)
            .field("mounted", &self.mounted)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn props(sticky: bool, scroll_offset: f64) -> StickyNavProps {
        StickyNavProps {
            sticky,
            scroll_offset,
            ..Default::default()
        }
    }

    #[test]
    fn test_scroll_bursts_coalesce_into_one_check() {
        let document = Document::new();
        let nav = StickyNav::mount(&document, &props(true, 0.0));

        document.scroll_to(10.0);
        document.scroll_to(20.0);
        document.scroll_to(30.0);
        assert_eq!(document.pending_frames(), 1);
        assert!(!nav.is_scrolled());

        document.run_frame();
        assert!(nav.is_scrolled());
        assert_eq!(nav.transitions(), 1);
    }

    #[test]
    fn test_initial_state_from_current_offset() {
        let document = Document::with_scroll(250.0);
        let nav = StickyNav::mount(&document, &props(true, 100.0));
        assert!(nav.is_scrolled());
        assert_eq!(nav.transitions(), 0);
    }

    #[test]
    fn test_static_nav_registers_nothing() {
        let document = Document::with_scroll(500.0);
        let nav = StickyNav::mount(&document, &props(false, 0.0));
        assert_eq!(document.listener_count(), 0);

        document.scroll_to(900.0);
        assert_eq!(document.pending_frames(), 0);
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_change_listener_fires_per_transition() {
        let document = Document::new();
        let nav = StickyNav::mount(&document, &props(true, 50.0));
        let changes = Rc::new(Cell::new(0));
        let seen = Rc::clone(&changes);
        nav.on_change(move |_| seen.set(seen.get() + 1));

        for y in [60.0, 80.0, 10.0] {
            document.scroll_to(y);
            document.run_frame();
        }
        assert_eq!(changes.get(), 2);
    }

    #[test]
    fn test_menu_holds_scroll_lock() {
        let document = Document::new();
        let nav = StickyNav::mount(&document, &props(true, 0.0));

        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert_eq!(document.body_overflow(), "hidden");

        nav.toggle_menu();
        assert_eq!(document.body_overflow(), "");
        assert_eq!(document.scroll_lock_depth(), 0);
    }

    #[test]
    fn test_unmount_cleans_up_everything() {
        let document = Document::new();
        let mut nav = StickyNav::mount(&document, &props(true, 0.0));
        nav.open_menu();
        document.scroll_to(40.0);
        assert_eq!(document.pending_frames(), 1);

        nav.unmount();
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.pending_frames(), 0);
        assert_eq!(document.body_overflow(), "");
        assert!(!nav.is_menu_open());

        nav.open_menu();
        assert_eq!(document.scroll_lock_depth(), 0);
    }

    #[test]
    fn test_drop_releases_lock_and_listener() {
        let document = Document::new();
        {
            let nav = StickyNav::mount(&document, &props(true, 0.0));
            nav.open_menu();
        }
        assert_eq!(document.listener_count(), 0);
        assert_eq!(document.body_overflow(), "");
    }
}
