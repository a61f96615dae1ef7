//! Scroll State Machine

/// Whether the page has scrolled past the navigation's threshold
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavScrollState {
    pub is_scrolled: bool,
}

/// Allows at most one pending frame check at a time
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Claim the gate; `false` when a check is already scheduled
    pub fn try_open(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// The scheduled check ran or was cancelled
    pub fn close(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Two-state threshold machine: `unscrolled` until the offset exceeds the threshold
#[derive(Debug)]
pub struct ScrollTracker {
    threshold: f64,
    enabled: bool,
    state: NavScrollState,
    transitions: u32,
}

impl ScrollTracker {
    /// A disabled tracker stays `unscrolled` forever
    pub fn new(threshold: f64, enabled: bool) -> Self {
        Self {
            threshold,
            enabled,
            state: NavScrollState::default(),
            transitions: 0,
        }
    }

    /// Take the initial state from the current offset without counting a transition
    pub fn reset(&mut self, scroll_y: f64) {
        self.state.is_scrolled = self.enabled && scroll_y > self.threshold;
    }

    /// Returns `true` only when the state actually changed
    pub fn update(&mut self, scroll_y: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let scrolled = scroll_y > self.threshold;
        if scrolled == self.state.is_scrolled {
            return false;
        }
        self.state.is_scrolled = scrolled;
        self.transitions += 1;
        true
    }

    pub fn state(&self) -> NavScrollState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of state changes since creation
    pub fn transitions(&self) -> u32 {
        self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut tracker = ScrollTracker::new(100.0, true);
        assert!(!tracker.update(100.0));
        assert!(tracker.update(100.5));
        assert!(tracker.state().is_scrolled);
        assert!(!tracker.update(300.0));
        assert!(tracker.update(0.0));
        assert_eq!(tracker.transitions(), 2);
    }

    #[test]
    fn test_disabled_tracker_never_scrolls() {
        let mut tracker = ScrollTracker::new(0.0, false);
        tracker.reset(500.0);
        assert!(!tracker.update(500.0));
        assert_eq!(tracker.state(), NavScrollState { is_scrolled: false });
    }

    #[test]
    fn test_reset_does_not_count() {
        let mut tracker = ScrollTracker::new(0.0, true);
        tracker.reset(20.0);
        assert!(tracker.state().is_scrolled);
        assert_eq!(tracker.transitions(), 0);
    }

    #[test]
    fn test_gate_admits_one_pending_check() {
        let mut gate = FrameGate::default();
        assert!(gate.try_open());
        assert!(!gate.try_open());
        gate.close();
        assert!(gate.try_open());
    }
}
