//! Per-gesture accumulators.
//!
//! A session exists only between a gesture-start and a gesture-end event; the
//! mode controller constructs one on pointer-down and drops it on
//! pointer-up/leave, so there is never more than one live buffer per kind.

pub mod erase;
pub mod stroke;

pub use erase::{EraseOptions, EraseSession};
pub use stroke::StrokeSession;
