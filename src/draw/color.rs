//! RGBA color for path fills.

use serde::{Deserialize, Serialize};

/// RGBA color with components in the 0.0 - 1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component
    pub r: f64,
    /// Green component
    pub g: f64,
    /// Blue component
    pub b: f64,
    /// Alpha (opacity) component
    pub a: f64,
}

/// Default ink fill.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

impl Color {
    /// Formats the color as a CSS `rgba(...)` string for host renderers.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({},{},{},{})",
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            self.a.clamp(0.0, 1.0)
        )
    }
}
