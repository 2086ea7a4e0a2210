//! Converts raw pointer events into surface-local points.

use crate::input::events::PointerEvent;
use crate::util::SurfaceRect;
use kurbo::Point;

/// Computes the surface-local position of a pointer event.
///
/// Coordinates come from the primary pointer, falling back to the first touch
/// contact for touch-style events. When neither source is present the result
/// has NaN coordinates - callers must not assume validity.
///
/// # Arguments
/// * `event` - Raw pointer event in client coordinates
/// * `rect` - Current bounding rectangle of the drawing surface
pub fn sample_point(event: &PointerEvent, rect: &SurfaceRect) -> Point {
    let client_x = event
        .client_x
        .or_else(|| event.touches.first().map(|t| t.client_x));
    let client_y = event
        .client_y
        .or_else(|| event.touches.first().map(|t| t.client_y));

    match (client_x, client_y) {
        (Some(x), Some(y)) => Point::new(x - rect.left, y - rect.top),
        _ => Point::new(f64::NAN, f64::NAN),
    }
}

/// Like [`sample_point`], but `None` when no coordinate source exists.
///
/// The dispatch layer drops such samples instead of feeding NaN into the
/// sessions; the gesture itself stays alive.
pub fn try_sample_point(event: &PointerEvent, rect: &SurfaceRect) -> Option<Point> {
    let point = sample_point(event, rect);
    if point.x.is_nan() || point.y.is_nan() {
        None
    } else {
        Some(point)
    }
}
