//! View tree produced by rendering the screen

use vista_platform::{PlatformOs, ViewportDimensions};

use crate::style::{self, BoxStyle, TextStyle};

pub const HEADER_TITLE: &str = "Cross Platform App";
pub const WELCOME_MESSAGE: &str = "Welcome to our my cross-platform app!";

/// A node in the rendered view tree
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Container laying out its children in a column
    View { style: BoxStyle, children: Vec<Node> },
    /// Text; may span several lines separated by `'\n'`
    Text { content: String, style: TextStyle },
}

impl Node {
    pub fn view(style: BoxStyle, children: Vec<Node>) -> Self {
        Node::View { style, children }
    }

    pub fn text(content: impl Into<String>, style: TextStyle) -> Self {
        Node::Text {
            content: content.into(),
            style,
        }
    }

    /// All text lines in document order
    pub fn text_lines(&self) -> Vec<&str> {
        let mut lines = Vec::new();
        self.collect_lines(&mut lines);
        lines
    }

    fn collect_lines<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::View { children, .. } => {
                for child in children {
                    child.collect_lines(out);
                }
            }
            Node::Text { content, .. } => out.extend(content.split('\n')),
        }
    }

    /// Text content joined with newlines
    pub fn to_text(&self) -> String {
        self.text_lines().join("\n")
    }

    /// Depth-first search for the first text node containing `needle`
    pub fn find_text(&self, needle: &str) -> Option<&Node> {
        match self {
            Node::View { children, .. } => children.iter().find_map(|c| c.find_text(needle)),
            Node::Text { content, .. } if content.contains(needle) => Some(self),
            Node::Text { .. } => None,
        }
    }
}

/// Format a logical size the way it appears on screen (`375`, `412.5`)
pub fn format_units(value: f64) -> String {
    if value == 0.0 {
        // Avoid printing "-0"
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Render the screen for a platform and viewport
///
/// Pure: equal inputs always produce equal trees.
pub fn screen(platform: PlatformOs, dimensions: ViewportDimensions) -> Node {
    let header = Node::view(
        style::HEADER.with_width(dimensions.width),
        vec![Node::text(HEADER_TITLE, style::HEADER_TEXT)],
    );

    let content = Node::view(
        style::CONTENT.with_width(dimensions.width),
        vec![
            Node::text(WELCOME_MESSAGE, style::WELCOME_TEXT),
            Node::text(format!("Current Platform: {platform}"), style::PLATFORM_TEXT),
            Node::text(
                format!(
                    "Screen Width: {}px\nScreen Height: {}px",
                    format_units(dimensions.width),
                    format_units(dimensions.height)
                ),
                style::DIMENSIONS_TEXT,
            ),
        ],
    );

    Node::view(style::CONTAINER, vec![header, content])
}
