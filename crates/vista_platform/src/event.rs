//! Event loop and platform events

use crate::error::PlatformError;
use crate::window::Window;

/// Event loop abstraction
///
/// Backends implement this trait to drive the application on the UI thread.
pub trait EventLoop {
    /// The window type for this event loop
    type Window: Window;

    /// Run the event loop
    ///
    /// Blocks until the application exits. The handler is called for each
    /// event and returns a [`ControlFlow`] saying whether to keep running.
    fn run<F>(self, handler: F) -> Result<(), PlatformError>
    where
        F: FnMut(Event, &Self::Window) -> ControlFlow + 'static;
}

/// Control flow after handling an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ControlFlow {
    /// Continue running the event loop
    #[default]
    Continue,
    /// Exit the event loop
    Exit,
}

/// Platform events
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Window-related event
    Window(WindowEvent),
    /// Application lifecycle event
    Lifecycle(LifecycleEvent),
    /// Time to present a frame
    Frame,
}

/// Window events
#[derive(Clone, Debug, PartialEq)]
pub enum WindowEvent {
    /// Window was resized or the device rotated
    Resized {
        /// New width in physical pixels
        width: u32,
        /// New height in physical pixels
        height: u32,
    },
    /// Window close was requested
    CloseRequested,
    /// Window gained or lost focus
    Focused(bool),
    /// Display scale factor changed
    ScaleFactorChanged {
        /// New scale factor
        scale_factor: f64,
    },
}

impl WindowEvent {
    /// Whether the event may change the logical viewport size
    pub fn affects_viewport(&self) -> bool {
        matches!(
            self,
            WindowEvent::Resized { .. } | WindowEvent::ScaleFactorChanged { .. }
        )
    }
}

/// Application lifecycle events
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Application resumed (window available)
    Resumed,
    /// Application suspended (went to background)
    Suspended,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_flow_default() {
        assert_eq!(ControlFlow::default(), ControlFlow::Continue);
    }

    #[test]
    fn test_viewport_events() {
        assert!(WindowEvent::Resized { width: 1, height: 1 }.affects_viewport());
        assert!(WindowEvent::ScaleFactorChanged { scale_factor: 2.0 }.affects_viewport());
        assert!(!WindowEvent::Focused(true).affects_viewport());
        assert!(!WindowEvent::CloseRequested.affects_viewport());
    }
}
