//! Vector stroke primitives: outline generation, path data, and surfaces.
//!
//! This module defines the drawing side of the engine:
//! - [`OutlineGenerator`]: turns a raw input polyline into a closed outline ring
//! - path data codec: outline ring to/from an SVG-style path description
//! - [`RenderSurface`]: the host's path store, with an in-memory implementation
//!   ([`VectorSurface`]) used by tests and the replay binary

pub mod color;
pub mod outline;
pub mod path;
pub mod surface;

// Re-export commonly used types at module level
pub use color::{BLACK, Color};
pub use outline::{OutlineGenerator, OutlineOptions, PressureOutline};
pub use path::PathDataError;
pub use surface::{PathId, PathPrimitive, RenderSurface, VectorSurface};
