//! Vista Platform Layer
//!
//! Host platform services for Vista UI components: the current viewport
//! dimensions, a notification channel for dimension changes, and the
//! identifier of the running operating system.
//!
//! # Architecture
//!
//! - [`HostServices`] - what a component may ask of its host
//! - [`Dimensions`] - the in-process change notification channel
//! - [`Subscription`] - RAII handle releasing a listener exactly once
//! - [`Platform`], [`Window`], [`EventLoop`] - windowing backend traits
//!
//! # Backends
//!
//! - `vista_platform_desktop` - macOS, Windows and Linux using winit
//!
//! # Example
//!
//! ```ignore
//! use vista_platform::prelude::*;
//!
//! let host = Host::new(PlatformOs::Ios, ViewportDimensions::new(375.0, 812.0));
//! let _sub = host.subscribe(Box::new(|dims| {
//!     println!("now {}x{}", dims.width, dims.height);
//! }))?;
//! host.dimensions_channel().set(ViewportDimensions::new(812.0, 375.0));
//! ```

mod dimensions;
mod error;
mod event;
mod host;
mod os;
mod platform;
mod subscription;
mod window;

pub use dimensions::{Dimensions, ListenerId, ViewportDimensions};
pub use error::{PlatformError, Result};
pub use event::{ControlFlow, Event, EventLoop, LifecycleEvent, WindowEvent};
pub use host::{DimensionsHandler, Host, HostServices};
pub use os::PlatformOs;
pub use platform::Platform;
pub use subscription::Subscription;
pub use window::{Window, WindowConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dimensions::{Dimensions, ViewportDimensions};
    pub use crate::error::{PlatformError, Result};
    pub use crate::event::{ControlFlow, Event, EventLoop, LifecycleEvent, WindowEvent};
    pub use crate::host::{Host, HostServices};
    pub use crate::os::PlatformOs;
    pub use crate::platform::Platform;
    pub use crate::subscription::Subscription;
    pub use crate::window::{Window, WindowConfig};
}
