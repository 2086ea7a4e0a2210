//! Freehand ink capture/erase engine.
//!
//! Captures raw pointer events into smoothed vector strokes and erases
//! strokes by proximity hit-testing. Rendering, toolbar highlighting, and
//! confirmation dialogs are supplied by the host through small collaborator
//! traits, so the engine itself is backend-agnostic and unit-testable.

pub mod config;
pub mod draw;
pub mod input;
pub mod session;
pub mod ui;
pub mod util;

pub use config::Config;
