//! Pointer input handling and the editing-mode state machine.
//!
//! This module translates host pointer events into drawing and erasing
//! actions. It holds the editing mode, the stylus auto-erase override, and
//! the gesture dispatch state machine.

pub mod events;
pub mod mode;
pub mod sampler;
pub mod state;

// Re-export commonly used types at module level
pub use events::{BARREL_BUTTON, PRIMARY_BUTTON, PointerEvent, PointerType, TouchPoint};
pub use mode::EditingMode;
pub use state::{GestureState, InkState};
