//! Small geometry helpers shared by the sampler and sessions.

/// Bounding rectangle of the drawing surface in device (client) coordinates.
///
/// Mirrors what the host reports for the surface element; the sampler uses
/// `left`/`top` to translate pointer events into surface-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    /// Left edge in client coordinates
    pub left: f64,
    /// Top edge in client coordinates
    pub top: f64,
    /// Surface width in client units
    pub width: f64,
    /// Surface height in client units
    pub height: f64,
}

impl SurfaceRect {
    /// Creates a surface rectangle from its client-space bounds.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rectangle anchored at the client origin.
    ///
    /// Useful for hosts (and traces) that already deliver surface-local
    /// coordinates, where no translation is needed.
    pub fn at_origin(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}
