//! Vista Desktop Platform
//!
//! Windowing for macOS, Windows, and Linux using winit.
//!
//! This crate implements the `vista_platform` backend traits for desktop
//! platforms. Window resizes and scale factor changes arrive as
//! [`WindowEvent`](vista_platform::WindowEvent)s, which the application
//! forwards into its host's dimension channel.
//!
//! # Example
//!
//! ```ignore
//! use vista_platform::prelude::*;
//! use vista_platform_desktop::DesktopPlatform;
//!
//! fn main() -> Result<()> {
//!     let platform = DesktopPlatform::new()?;
//!     let event_loop = platform.create_event_loop(WindowConfig::default())?;
//!
//!     event_loop.run(|event, window| {
//!         match event {
//!             Event::Window(WindowEvent::Resized { .. }) => {
//!                 let size = window.viewport();
//!                 // Publish size
//!             }
//!             Event::Window(WindowEvent::CloseRequested) => {
//!                 return ControlFlow::Exit;
//!             }
//!             _ => {}
//!         }
//!         ControlFlow::Continue
//!     })
//! }
//! ```

pub mod event_loop;
pub mod window;

pub use event_loop::DesktopEventLoop;
pub use window::DesktopWindow;

use vista_platform::{Platform, PlatformError, PlatformOs, WindowConfig};

/// Desktop platform implementation
///
/// Provides windowing for macOS, Windows, and Linux.
pub struct DesktopPlatform;

impl Platform for DesktopPlatform {
    type Window = DesktopWindow;
    type EventLoop = DesktopEventLoop;

    fn new() -> Result<Self, PlatformError> {
        let os = PlatformOs::current();
        if os.is_mobile() {
            return Err(PlatformError::Unsupported(format!(
                "desktop windowing on {os}"
            )));
        }
        Ok(Self)
    }

    fn create_event_loop(&self, config: WindowConfig) -> Result<Self::EventLoop, PlatformError> {
        DesktopEventLoop::new(config)
    }
}
