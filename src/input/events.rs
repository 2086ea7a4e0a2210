//! Generic pointer event types for cross-host compatibility.
//!
//! Hosts map their native pointer events to these types; the engine never
//! sees backend-specific event structures. The types also derive serde so
//! recorded traces can be replayed headlessly.

use serde::{Deserialize, Serialize};

/// Bitmask bit for the primary button in [`PointerEvent::buttons`].
pub const PRIMARY_BUTTON: u32 = 1;

/// Bitmask value reported when only the stylus barrel (side) button is held.
pub const BARREL_BUTTON: u32 = 32;

/// Input device class reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerType {
    /// Mouse or generic pointing device
    #[default]
    Mouse,
    /// Stylus / pen input (may report the barrel button)
    Pen,
    /// Direct touch contact
    Touch,
}

/// Fallback coordinates for touch-style events that carry a contact list
/// instead of primary client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    /// Contact X in client coordinates
    pub client_x: f64,
    /// Contact Y in client coordinates
    pub client_y: f64,
}

/// A raw pointer event in device (client) coordinates.
///
/// Coordinates are optional: some devices deliver only a touch list, and a
/// degenerate event may carry neither. The point sampler decides what to do
/// in each case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    /// Device class that produced the event
    #[serde(default)]
    pub pointer_type: PointerType,
    /// Currently pressed buttons as a bitmask (1 = primary, 32 = barrel)
    #[serde(default)]
    pub buttons: u32,
    /// Primary pointer X in client coordinates
    #[serde(default)]
    pub client_x: Option<f64>,
    /// Primary pointer Y in client coordinates
    #[serde(default)]
    pub client_y: Option<f64>,
    /// Touch contacts; the first is used as a coordinate fallback
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
}

impl PointerEvent {
    /// A mouse event at the given client position.
    pub fn mouse(client_x: f64, client_y: f64, buttons: u32) -> Self {
        Self {
            pointer_type: PointerType::Mouse,
            buttons,
            client_x: Some(client_x),
            client_y: Some(client_y),
            touches: Vec::new(),
        }
    }

    /// A stylus event at the given client position.
    pub fn pen(client_x: f64, client_y: f64, buttons: u32) -> Self {
        Self {
            pointer_type: PointerType::Pen,
            ..Self::mouse(client_x, client_y, buttons)
        }
    }

    /// An event with no usable coordinate source at all.
    pub fn without_coordinates() -> Self {
        Self {
            pointer_type: PointerType::Mouse,
            buttons: 0,
            client_x: None,
            client_y: None,
            touches: Vec::new(),
        }
    }
}
