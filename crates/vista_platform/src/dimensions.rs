//! Viewport dimensions and the change notification channel

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

use crate::subscription::Subscription;

new_key_type! {
    /// Identifier of a registered dimension listener
    pub struct ListenerId;
}

/// Visible drawing area size in device-independent (logical) units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportDimensions {
    pub width: f64,
    pub height: f64,
}

impl ViewportDimensions {
    /// Create dimensions, clamping negative values to zero
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Convert a physical pixel size into logical units
    ///
    /// Non-positive or non-finite scale factors are treated as 1.0.
    pub fn from_physical(width: u32, height: u32, scale_factor: f64) -> Self {
        let scale = if scale_factor.is_finite() && scale_factor > 0.0 {
            scale_factor
        } else {
            1.0
        };
        Self::new(width as f64 / scale, height as f64 / scale)
    }
}

impl From<(f64, f64)> for ViewportDimensions {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

type Listener = Rc<RefCell<Box<dyn FnMut(ViewportDimensions)>>>;

struct Channel {
    current: ViewportDimensions,
    listeners: SlotMap<ListenerId, Listener>,
    /// Registration order; slot reuse makes slotmap iteration order unreliable
    order: Vec<ListenerId>,
}

impl Channel {
    /// Unregister a listener, handing it back to the caller
    ///
    /// The listener must be dropped after the channel borrow ends: its
    /// closure may own subscriptions on this same channel.
    fn remove(&mut self, id: ListenerId) -> Option<Listener> {
        let listener = self.listeners.remove(id)?;
        self.order.retain(|other| *other != id);
        Some(listener)
    }
}

/// Push-based channel carrying viewport dimension changes
///
/// Holds the current dimensions and the set of registered listeners.
/// Cloning yields another handle to the same channel. The channel lives on
/// the UI thread and is not `Send`.
///
/// ```ignore
/// let dims = Dimensions::new(ViewportDimensions::new(375.0, 812.0));
/// let sub = dims.add_listener(|d| println!("{}x{}", d.width, d.height));
/// dims.set(ViewportDimensions::new(812.0, 375.0));
/// drop(sub);
/// ```
#[derive(Clone)]
pub struct Dimensions {
    inner: Rc<RefCell<Channel>>,
}

impl Dimensions {
    /// Create a channel with initial dimensions
    pub fn new(initial: ViewportDimensions) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Channel {
                current: initial,
                listeners: SlotMap::with_key(),
                order: Vec::new(),
            })),
        }
    }

    /// Current dimensions
    pub fn get(&self) -> ViewportDimensions {
        self.inner.borrow().current
    }

    /// Register a listener invoked with every subsequent change
    ///
    /// The listener stays registered until the returned handle is released
    /// or dropped.
    pub fn add_listener<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(ViewportDimensions) + 'static,
    {
        let id = {
            let mut channel = self.inner.borrow_mut();
            let id = channel
                .listeners
                .insert(Rc::new(RefCell::new(Box::new(listener))));
            channel.order.push(id);
            id
        };
        tracing::trace!(?id, "dimension listener registered");

        let channel: Weak<RefCell<Channel>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(channel) = channel.upgrade() {
                let removed = channel.borrow_mut().remove(id);
                if removed.is_some() {
                    tracing::trace!(?id, "dimension listener released");
                }
                drop(removed);
            }
        })
    }

    /// Store new dimensions and notify listeners
    ///
    /// Listeners registered at the time of the call are invoked in
    /// registration order. A listener released by an earlier listener
    /// during the same dispatch is skipped.
    pub fn set(&self, dimensions: ViewportDimensions) {
        let pending: Vec<(ListenerId, Listener)> = {
            let mut channel = self.inner.borrow_mut();
            channel.current = dimensions;
            channel
                .order
                .iter()
                .filter_map(|id| channel.listeners.get(*id).map(|l| (*id, Rc::clone(l))))
                .collect()
        };

        tracing::trace!(
            width = dimensions.width,
            height = dimensions.height,
            listeners = pending.len(),
            "dispatching dimension change"
        );

        for (id, listener) in pending {
            if !self.inner.borrow().listeners.contains_key(id) {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut listener) => (*listener)(dimensions),
                Err(_) => {
                    // Listener is on the stack already (set() called from inside it)
                    tracing::warn!(?id, "skipping re-entrant dimension notification");
                }
            }
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl fmt::Debug for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = self.inner.borrow();
        f.debug_struct("Dimensions")
            .field("current", &channel.current)
            .field("listeners", &channel.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn record(dims: &Dimensions) -> (Rc<RefCell<Vec<ViewportDimensions>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = dims.add_listener(move |d| sink.borrow_mut().push(d));
        (seen, sub)
    }

    #[test]
    fn test_new_clamps_negative() {
        let d = ViewportDimensions::new(-10.0, 20.0);
        assert_eq!(d.width, 0.0);
        assert_eq!(d.height, 20.0);
    }

    #[test]
    fn test_from_physical() {
        let d = ViewportDimensions::from_physical(1125, 2436, 3.0);
        assert_eq!(d, ViewportDimensions::new(375.0, 812.0));

        // 1080px Android panel at 420dpi
        let d = ViewportDimensions::from_physical(1080, 2400, 2.625);
        assert_eq!(d.width.to_string(), "411.42857142857144");

        let d = ViewportDimensions::from_physical(800, 600, 0.0);
        assert_eq!(d, ViewportDimensions::new(800.0, 600.0));
        let d = ViewportDimensions::from_physical(800, 600, f64::NAN);
        assert_eq!(d, ViewportDimensions::new(800.0, 600.0));
    }

    #[test]
    fn test_set_updates_current() {
        let dims = Dimensions::new(ViewportDimensions::new(375.0, 812.0));
        dims.set(ViewportDimensions::new(812.0, 375.0));
        assert_eq!(dims.get(), ViewportDimensions::new(812.0, 375.0));
    }

    #[test]
    fn test_listeners_receive_changes_in_order() {
        let dims = Dimensions::new(ViewportDimensions::default());
        let (seen, _sub) = record(&dims);

        let sizes: [(f64, f64); 4] = [(1.0, 2.0), (3.0, 4.0), (3.0, 4.0), (5.0, 6.0)];
        for size in sizes {
            dims.set(size.into());
        }

        let expected: Vec<ViewportDimensions> = sizes.iter().map(|s| (*s).into()).collect();
        assert_eq!(*seen.borrow(), expected);
    }

    #[test]
    fn test_listeners_called_in_registration_order() {
        let dims = Dimensions::new(ViewportDimensions::default());
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = {
            let order = Rc::clone(&order);
            dims.add_listener(move |_| order.borrow_mut().push("first"))
        };
        let second = {
            let order = Rc::clone(&order);
            dims.add_listener(move |_| order.borrow_mut().push("second"))
        };
        // Release and re-register so the freed slot gets reused
        drop(first);
        let third = {
            let order = Rc::clone(&order);
            dims.add_listener(move |_| order.borrow_mut().push("third"))
        };

        dims.set(ViewportDimensions::new(1.0, 1.0));
        assert_eq!(*order.borrow(), vec!["second", "third"]);
        drop((second, third));
    }

    #[test]
    fn test_released_listener_not_called() {
        let dims = Dimensions::new(ViewportDimensions::default());
        let (seen, mut sub) = record(&dims);
        assert_eq!(dims.listener_count(), 1);

        sub.release();
        assert_eq!(dims.listener_count(), 0);

        dims.set(ViewportDimensions::new(10.0, 10.0));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_listener_released_mid_dispatch_is_skipped() {
        let dims = Dimensions::new(ViewportDimensions::default());
        let victim_calls = Rc::new(Cell::new(0));
        let victim_slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let _killer = {
            let slot = Rc::clone(&victim_slot);
            dims.add_listener(move |_| {
                if let Some(mut sub) = slot.borrow_mut().take() {
                    sub.release();
                }
            })
        };
        let victim = {
            let calls = Rc::clone(&victim_calls);
            dims.add_listener(move |_| calls.set(calls.get() + 1))
        };
        *victim_slot.borrow_mut() = Some(victim);

        dims.set(ViewportDimensions::new(1.0, 1.0));
        assert_eq!(victim_calls.get(), 0);
        assert_eq!(dims.listener_count(), 1);
    }

    #[test]
    fn test_release_after_channel_dropped() {
        let dims = Dimensions::new(ViewportDimensions::default());
        let mut sub = dims.add_listener(|_| {});
        drop(dims);
        sub.release();
        assert!(!sub.is_active());
    }

    #[test]
    fn test_release_listener_owning_sibling_subscription() {
        let dims = Dimensions::new(ViewportDimensions::default());
        let inner = dims.add_listener(|_| {});
        let mut outer = dims.add_listener(move |_| {
            let _keep = &inner;
        });
        assert_eq!(dims.listener_count(), 2);

        outer.release();
        assert_eq!(dims.listener_count(), 0);
    }

    #[test]
    fn test_drop_listener_owning_sibling_subscription() {
        let dims = Dimensions::new(ViewportDimensions::default());
        let inner = dims.add_listener(|_| {});
        let outer = dims.add_listener(move |_| {
            let _keep = &inner;
        });

        drop(outer);
        assert_eq!(dims.listener_count(), 0);
    }

    #[test]
    fn test_drop_channel_with_nested_subscriptions() {
        let dims = Dimensions::new(ViewportDimensions::default());
        let inner = dims.add_listener(|_| {});
        let mut outer = dims.add_listener(move |_| {
            let _keep = &inner;
        });

        drop(dims);
        outer.release();
        assert!(!outer.is_active());
    }
}
