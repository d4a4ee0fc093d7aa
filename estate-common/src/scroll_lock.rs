//! Page scroll lock shared by every modal on the page
//!
//! Scrolling is a page-wide flag, so two open lightboxes must not fight over
//! it. The registry counts outstanding guards and only touches the surface on
//! the first acquire and the last release.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::debug;

/// Whatever actually toggles page scrolling (the document body in a browser).
pub trait ScrollSurface {
    fn set_scroll_enabled(&mut self, enabled: bool);
}

struct RegistryInner {
    holders: usize,
    surface: Box<dyn ScrollSurface>,
}

/// Reference-counted owner of the page scroll surface.
///
/// Cloning shares the same count.
#[derive(Clone)]
pub struct ScrollLockRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl ScrollLockRegistry {
    pub fn new(surface: impl ScrollSurface + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(RegistryInner {
                holders: 0,
                surface: Box::new(surface),
            })),
        }
    }

    /// Disable page scrolling until the returned guard is dropped.
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut inner = self.inner.borrow_mut();
        inner.holders += 1;
        if inner.holders == 1 {
            debug!("Locking page scroll");
            inner.surface.set_scroll_enabled(false);
        }
        ScrollLockGuard {
            registry: self.clone(),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.inner.borrow().holders > 0
    }

    pub fn holders(&self) -> usize {
        self.inner.borrow().holders
    }

    fn release(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.holders = inner.holders.saturating_sub(1);
        if inner.holders == 0 {
            debug!("Unlocking page scroll");
            inner.surface.set_scroll_enabled(true);
        }
    }
}

impl fmt::Debug for ScrollLockRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockRegistry")
            .field("holders", &self.holders())
            .finish()
    }
}

impl PartialEq for ScrollLockRegistry {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// One outstanding scroll lock. Released exactly once, on drop.
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollLockGuard {
    registry: ScrollLockRegistry,
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard").finish_non_exhaustive()
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.registry.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct RecordingSurface {
        calls: Rc<RefCell<Vec<bool>>>,
    }

    impl ScrollSurface for RecordingSurface {
        fn set_scroll_enabled(&mut self, enabled: bool) {
            self.calls.borrow_mut().push(enabled);
        }
    }

    #[test]
    fn test_single_guard_locks_and_releases_once() {
        let surface = RecordingSurface::default();
        let registry = ScrollLockRegistry::new(surface.clone());

        let guard = registry.acquire();
        assert!(registry.is_locked());
        drop(guard);

        assert!(!registry.is_locked());
        assert_eq!(*surface.calls.borrow(), vec![false, true]);
    }

    #[test]
    fn test_nested_guards_keep_scroll_locked() {
        let surface = RecordingSurface::default();
        let registry = ScrollLockRegistry::new(surface.clone());

        let first = registry.acquire();
        let second = registry.clone().acquire();
        assert_eq!(registry.holders(), 2);

        drop(first);
        assert!(registry.is_locked());
        assert_eq!(*surface.calls.borrow(), vec![false]);

        drop(second);
        assert!(!registry.is_locked());
        assert_eq!(*surface.calls.borrow(), vec![false, true]);
    }

    #[test]
    fn test_relock_after_release() {
        let surface = RecordingSurface::default();
        let registry = ScrollLockRegistry::new(surface.clone());

        drop(registry.acquire());
        drop(registry.acquire());
        assert_eq!(*surface.calls.borrow(), vec![false, true, false, true]);
    }
}
