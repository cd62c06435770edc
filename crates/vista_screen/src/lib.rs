//! Vista Screen
//!
//! The single screen of the Vista app: a header, a welcome message, the
//! running platform's name and the live viewport size.
//!
//! Rendering is a pure function ([`view::screen`]) of the platform and the
//! stored dimensions. [`Screen`] owns the subscription that keeps those
//! dimensions current and reports every re-render to one registered
//! callback.
//!
//! ```ignore
//! use vista_platform::{Host, PlatformOs, ViewportDimensions};
//! use vista_screen::prelude::*;
//!
//! let host = Host::new(PlatformOs::Ios, ViewportDimensions::new(375.0, 812.0));
//! let mut screen = Screen::new(host.clone());
//! screen.on_update(|node| println!("{}", node.to_text()));
//! screen.activate()?;
//!
//! // Rotation
//! host.dimensions_channel().set(ViewportDimensions::new(812.0, 375.0));
//! ```

pub mod screen;
pub mod style;
pub mod view;


pub use screen::{Phase, Screen, UpdateCallback};
pub use view::Node;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::screen::{Phase, Screen};
    pub use crate::style::{BoxStyle, Color, TextStyle};
    pub use crate::view::Node;
}
