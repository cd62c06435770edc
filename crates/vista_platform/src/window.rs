//! Window abstraction and configuration

use crate::dimensions::ViewportDimensions;

/// Window configuration
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Initial width in logical pixels
    pub width: u32,
    /// Initial height in logical pixels
    pub height: u32,
    /// Whether the window can be resized
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Cross Platform App".to_string(),
            // Portrait phone-sized window
            width: 375,
            height: 812,
            resizable: true,
        }
    }
}

impl WindowConfig {
    /// Create a new window configuration with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the window title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the window size
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set whether the window is resizable
    pub fn resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

/// Window abstraction trait
///
/// Implemented by backend window types.
pub trait Window {
    /// Window size in physical pixels
    fn size(&self) -> (u32, u32);

    /// Display scale factor (DPI scaling)
    fn scale_factor(&self) -> f64;

    /// Set the window title
    fn set_title(&self, title: &str);

    /// Request a redraw
    fn request_redraw(&self);

    /// Viewport size in logical units
    fn viewport(&self) -> ViewportDimensions {
        let (width, height) = self.size();
        ViewportDimensions::from_physical(width, height, self.scale_factor())
    }
}
