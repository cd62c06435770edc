//! Colors, text and box styles, and the screen's style constants

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color with components in 0.0..=1.0
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from a `0xRRGGBB` literal
    pub const fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Back to a `0xRRGGBB` value, ignoring alpha
    pub fn to_hex(&self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Styles
// ─────────────────────────────────────────────────────────────────────────────

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
}

/// Styling for a run of text
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub size: f32,
    pub weight: FontWeight,
    pub align: TextAlign,
    pub margin_bottom: f32,
}

impl TextStyle {
    pub const DEFAULT: TextStyle = TextStyle {
        color: Color::BLACK,
        size: 14.0,
        weight: FontWeight::Normal,
        align: TextAlign::Start,
        margin_bottom: 0.0,
    };
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Styling for a container box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStyle {
    pub background: Color,
    pub padding: f32,
    /// Flex grow factor; 0 means size to content
    pub flex: f32,
    /// Fixed width in logical units
    pub width: Option<f64>,
    pub center_items: bool,
    pub center_content: bool,
}

impl BoxStyle {
    pub const DEFAULT: BoxStyle = BoxStyle {
        background: Color::TRANSPARENT,
        padding: 0.0,
        flex: 0.0,
        width: None,
        center_items: false,
        center_content: false,
    };

    /// Same style with a fixed width
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Screen styles
// ─────────────────────────────────────────────────────────────────────────────

pub const CONTAINER: BoxStyle = BoxStyle {
    background: Color::from_hex(0xF5F5F5),
    flex: 1.0,
    center_items: true,
    ..BoxStyle::DEFAULT
};

pub const HEADER: BoxStyle = BoxStyle {
    background: Color::from_hex(0x2196F3),
    padding: 20.0,
    center_items: true,
    center_content: true,
    ..BoxStyle::DEFAULT
};

pub const HEADER_TEXT: TextStyle = TextStyle {
    color: Color::WHITE,
    size: 24.0,
    weight: FontWeight::Bold,
    ..TextStyle::DEFAULT
};

pub const CONTENT: BoxStyle = BoxStyle {
    padding: 20.0,
    flex: 1.0,
    center_items: true,
    center_content: true,
    ..BoxStyle::DEFAULT
};

pub const WELCOME_TEXT: TextStyle = TextStyle {
    size: 18.0,
    margin_bottom: 20.0,
    align: TextAlign::Center,
    ..TextStyle::DEFAULT
};

pub const PLATFORM_TEXT: TextStyle = TextStyle {
    color: Color::from_hex(0x666666),
    size: 16.0,
    margin_bottom: 10.0,
    ..TextStyle::DEFAULT
};

pub const DIMENSIONS_TEXT: TextStyle = TextStyle {
    color: Color::from_hex(0x888888),
    size: 14.0,
    align: TextAlign::Center,
    ..TextStyle::DEFAULT
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(Color::from_hex(0x2196F3).to_hex(), 0x2196F3);
        assert_eq!(Color::WHITE.to_hex(), 0xFFFFFF);
    }

    #[test]
    fn test_screen_palette() {
        assert_eq!(CONTAINER.background.to_hex(), 0xF5F5F5);
        assert_eq!(HEADER.background.to_hex(), 0x2196F3);
        assert_eq!(HEADER_TEXT.weight, FontWeight::Bold);
        assert_eq!(PLATFORM_TEXT.color.to_hex(), 0x666666);
        assert!(DIMENSIONS_TEXT.size < PLATFORM_TEXT.size);
    }
}
