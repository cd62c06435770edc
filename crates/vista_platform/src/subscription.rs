//! Listener subscription handles

use std::fmt;

/// Handle to a registered listener
///
/// Owns the release function bound at registration time. The release
/// function runs at most once: on the first call to [`Subscription::release`]
/// or when the handle is dropped, whichever comes first.
#[must_use = "dropping a Subscription releases the listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a subscription with the given release function
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release
    pub fn empty() -> Self {
        Self { release: None }
    }

    /// Release the listener
    ///
    /// Calling this on an already released (or empty) handle does nothing.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    /// Whether the listener is still registered through this handle
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting() -> (Rc<Cell<u32>>, Subscription) {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        (count, Subscription::new(move || c.set(c.get() + 1)))
    }

    #[test]
    fn test_release_runs_once() {
        let (count, mut sub) = counting();
        assert!(sub.is_active());
        sub.release();
        sub.release();
        assert!(!sub.is_active());
        drop(sub);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_releases() {
        let (count, sub) = counting();
        drop(sub);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_empty_is_inert() {
        let mut sub = Subscription::empty();
        assert!(!sub.is_active());
        sub.release();
    }
}
