//! Body Scroll Lock

use tracing::debug;

use super::Document;
use crate::constants::SCROLL_LOCK_OVERFLOW;

/// Holds the page's body scroll lock while alive.
///
/// Locks nest: the body overflow is set on the first acquisition and the previous value
/// comes back when the last guard drops.
#[must_use = "the lock is released as soon as the guard is dropped"]
#[derive(Debug)]
pub struct ScrollLock {
    document: Document,
}

impl ScrollLock {
    pub fn acquire(document: &Document) -> Self {
        let depth = document.push_scroll_lock(SCROLL_LOCK_OVERFLOW);
        debug!(depth, "Body scroll locked");
        Self {
            document: document.clone(),
        }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let depth = self.document.pop_scroll_lock();
        debug!(depth, "Body scroll lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lock_restores_previous_overflow() {
        let document = Document::new();
        document.set_body_overflow("auto");

        let lock = ScrollLock::acquire(&document);
        assert_eq!(document.body_overflow(), "hidden");
        drop(lock);
        assert_eq!(document.body_overflow(), "auto");
    }

    #[test]
    fn test_nested_locks_release_on_last_drop() {
        let document = Document::new();
        let outer = ScrollLock::acquire(&document);
        let inner = ScrollLock::acquire(&document);
        assert_eq!(document.scroll_lock_depth(), 2);

        drop(outer);
        assert_eq!(document.body_overflow(), "hidden");
        drop(inner);
        assert_eq!(document.body_overflow(), "");
        assert_eq!(document.scroll_lock_depth(), 0);
    }
}
