//! The screen component
//!
//! A [`Screen`] keeps the latest viewport dimensions reported by its host and
//! renders them, together with static text and the platform name, into a
//! [`Node`] tree.
//!
//! Lifecycle:
//!
//! ```text
//! Inactive --activate()--> Active --deactivate()/drop--> Inactive
//! ```
//!
//! Activation queries the host for the current dimensions and subscribes to
//! changes. Deactivation marks the screen inactive first and then releases
//! the subscription, so a notification still in flight is ignored.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use vista_platform::{HostServices, PlatformOs, Result, Subscription, ViewportDimensions};

use crate::view::{self, Node};

/// Callback receiving each freshly rendered view
pub type UpdateCallback = Box<dyn FnMut(&Node)>;

/// Screen lifecycle phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Inactive,
    Active,
}

#[derive(Default)]
struct ScreenState {
    phase: Phase,
    dimensions: Option<ViewportDimensions>,
    on_update: Option<UpdateCallback>,
}

/// State shared between the screen and its host listener
struct Shared<H> {
    host: H,
    state: RefCell<ScreenState>,
}

impl<H: HostServices> Shared<H> {
    fn apply(&self, dimensions: ViewportDimensions) {
        {
            let mut state = self.state.borrow_mut();
            if state.phase != Phase::Active {
                tracing::trace!("ignoring dimension change on inactive screen");
                return;
            }
            state.dimensions = Some(dimensions);
        }
        tracing::trace!(
            width = dimensions.width,
            height = dimensions.height,
            "screen dimensions updated"
        );
        self.notify();
    }

    fn render(&self) -> Option<Node> {
        let dimensions = self.state.borrow().dimensions?;
        Some(view::screen(self.host.platform(), dimensions))
    }

    fn notify(&self) {
        // Taken out while running so the callback can call back into the screen
        let Some(mut callback) = self.state.borrow_mut().on_update.take() else {
            return;
        };
        if let Some(node) = self.render() {
            callback(&node);
        }
        let mut state = self.state.borrow_mut();
        if state.on_update.is_none() {
            state.on_update = Some(callback);
        }
    }
}

/// Screen showing the platform name and live viewport size
pub struct Screen<H: HostServices + 'static> {
    shared: Rc<Shared<H>>,
    subscription: Option<Subscription>,
}

impl<H: HostServices + 'static> Screen<H> {
    /// Create an inactive screen bound to a host
    pub fn new(host: H) -> Self {
        Self {
            shared: Rc::new(Shared {
                host,
                state: RefCell::new(ScreenState::default()),
            }),
            subscription: None,
        }
    }

    /// Create a screen and activate it
    pub fn mount(host: H) -> Result<Self> {
        let mut screen = Self::new(host);
        screen.activate()?;
        Ok(screen)
    }

    /// Register the view-update callback, replacing any previous one
    ///
    /// The callback runs after activation and after every accepted change.
    pub fn on_update<F>(&mut self, callback: F)
    where
        F: FnMut(&Node) + 'static,
    {
        self.shared.state.borrow_mut().on_update = Some(Box::new(callback));
    }

    /// Read the initial dimensions and subscribe to changes
    ///
    /// Does nothing if the screen is already active. If the host refuses the
    /// subscription the error is returned and the screen stays inactive.
    pub fn activate(&mut self) -> Result<()> {
        if self.is_active() {
            return Ok(());
        }

        let initial = self.shared.host.dimensions();
        {
            let mut state = self.shared.state.borrow_mut();
            state.phase = Phase::Active;
            state.dimensions = Some(initial);
        }

        let listener: Weak<Shared<H>> = Rc::downgrade(&self.shared);
        let subscription = self.shared.host.subscribe(Box::new(move |dimensions| {
            if let Some(shared) = listener.upgrade() {
                shared.apply(dimensions);
            }
        }));

        match subscription {
            Ok(subscription) => self.subscription = Some(subscription),
            Err(err) => {
                let mut state = self.shared.state.borrow_mut();
                state.phase = Phase::Inactive;
                state.dimensions = None;
                tracing::warn!("screen activation failed: {}", err);
                return Err(err);
            }
        }

        tracing::debug!(
            platform = %self.shared.host.platform(),
            width = initial.width,
            height = initial.height,
            "screen activated"
        );
        self.shared.notify();
        Ok(())
    }

    /// Handle a dimension change from the host
    ///
    /// Replaces the stored dimensions unconditionally and re-renders.
    /// Ignored while inactive.
    pub fn on_dimensions_changed(&self, dimensions: ViewportDimensions) {
        self.shared.apply(dimensions);
    }

    /// Release the subscription and discard the stored dimensions
    ///
    /// Safe to call any number of times, including when activation never
    /// happened or failed.
    pub fn deactivate(&mut self) {
        let was_active = {
            let mut state = self.shared.state.borrow_mut();
            let was_active = state.phase == Phase::Active;
            state.phase = Phase::Inactive;
            state.dimensions = None;
            was_active
        };

        if let Some(mut subscription) = self.subscription.take() {
            subscription.release();
        }

        if was_active {
            tracing::debug!("screen deactivated");
        }
    }

    /// Render the current state, or `None` while inactive
    pub fn render(&self) -> Option<Node> {
        self.shared.render()
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.shared.state.borrow().phase
    }

    /// Whether the screen holds state and a live subscription
    pub fn is_active(&self) -> bool {
        self.phase() == Phase::Active
    }

    /// Stored dimensions, `None` while inactive
    pub fn dimensions(&self) -> Option<ViewportDimensions> {
        self.shared.state.borrow().dimensions
    }

    /// Platform identifier reported by the host
    pub fn platform(&self) -> PlatformOs {
        self.shared.host.platform()
    }

    /// The host this screen is bound to
    pub fn host(&self) -> &H {
        &self.shared.host
    }
}

impl<H: HostServices + 'static> Drop for Screen<H> {
    fn drop(&mut self) {
        self.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vista_platform::Host;

    fn host() -> Host {
        Host::new(PlatformOs::Ios, ViewportDimensions::new(375.0, 812.0))
    }

    #[test]
    fn test_new_screen_is_inactive() {
        let screen = Screen::new(host());
        assert_eq!(screen.phase(), Phase::Inactive);
        assert_eq!(screen.platform(), PlatformOs::Ios);
        assert!(screen.render().is_none());
        assert_eq!(screen.host().dimensions_channel().listener_count(), 0);
    }

    #[test]
    fn test_activate_subscribes_once() {
        let mut screen = Screen::new(host());
        screen.activate().unwrap();
        screen.activate().unwrap();
        assert!(screen.is_active());
        assert_eq!(screen.host().dimensions_channel().listener_count(), 1);
    }

    #[test]
    fn test_direct_change_updates_state() {
        let screen = Screen::mount(host()).unwrap();
        screen.on_dimensions_changed(ViewportDimensions::new(812.0, 375.0));
        assert_eq!(screen.dimensions(), Some(ViewportDimensions::new(812.0, 375.0)));
    }

    #[test]
    fn test_direct_change_ignored_when_inactive() {
        let screen = Screen::new(host());
        screen.on_dimensions_changed(ViewportDimensions::new(1.0, 1.0));
        assert!(screen.dimensions().is_none());
    }

    #[test]
    fn test_reactivate_requeries_host() {
        let host = host();
        let mut screen = Screen::mount(host.clone()).unwrap();
        screen.deactivate();

        host.dimensions_channel().set(ViewportDimensions::new(1024.0, 768.0));
        assert!(screen.dimensions().is_none());

        screen.activate().unwrap();
        assert_eq!(screen.dimensions(), Some(ViewportDimensions::new(1024.0, 768.0)));
    }

    #[test]
    fn test_callback_may_reenter_screen() {
        let host = host();
        let screen = Rc::new(RefCell::new(Screen::new(host.clone())));
        let seen = Rc::new(RefCell::new(Vec::new()));

        {
            let sink = Rc::clone(&seen);
            let weak = Rc::downgrade(&screen);
            screen.borrow_mut().on_update(move |_| {
                // Reading state from inside the callback must not panic
                if let Some(screen) = weak.upgrade() {
                    if let Ok(screen) = screen.try_borrow() {
                        sink.borrow_mut().push(screen.dimensions());
                    }
                }
            });
        }
        screen.borrow_mut().activate().unwrap();
        host.dimensions_channel().set(ViewportDimensions::new(500.0, 500.0));

        assert_eq!(
            seen.borrow().last().copied().flatten(),
            Some(ViewportDimensions::new(500.0, 500.0))
        );
    }
}
