//! Path description codec and boundary-proximity queries.
//!
//! Outline rings are persisted as SVG-style path data (the opaque `d`
//! description the host renderer consumes). Hit-testing parses the data back
//! into a [`BezPath`] and measures distance to the boundary.

use kurbo::{BezPath, ParamCurveNearest, Point};
use std::fmt::Write;
use thiserror::Error;

/// Accuracy for nearest-point-on-segment queries, in surface units.
const NEAREST_ACCURACY: f64 = 1e-3;

/// Errors from parsing stored path data.
#[derive(Debug, Error)]
pub enum PathDataError {
    /// The stored description was empty
    #[error("path data is empty")]
    Empty,
    /// The stored description was not valid path data
    #[error("failed to parse path data: {0}")]
    Parse(String),
}

/// Converts an outline ring into a closed path description.
///
/// Each ring point becomes the control point of a quadratic segment ending at
/// the midpoint to the next ring point, which smooths the polygonal ring into
/// a closed curve. Rings with fewer than three points fall back to straight
/// segments.
pub fn outline_to_path_data(ring: &[[f64; 2]]) -> String {
    let mut d = String::new();
    let Some(&[x0, y0]) = ring.first() else {
        return d;
    };

    let _ = write!(d, "M{x0:.2} {y0:.2}");
    if ring.len() < 3 {
        for &[x, y] in &ring[1..] {
            let _ = write!(d, " L{x:.2} {y:.2}");
        }
    } else {
        for (i, &[cx, cy]) in ring.iter().enumerate() {
            let [nx, ny] = ring[(i + 1) % ring.len()];
            let (mx, my) = ((cx + nx) / 2.0, (cy + ny) / 2.0);
            let _ = write!(d, " Q{cx:.2} {cy:.2} {mx:.2} {my:.2}");
        }
    }
    d.push_str(" Z");
    d
}

/// Parses stored path data back into a testable geometry.
pub fn path_from_data(data: &str) -> Result<BezPath, PathDataError> {
    let trimmed = data.trim();
    if trimmed.is_empty() {
        return Err(PathDataError::Empty);
    }
    BezPath::from_svg(trimmed).map_err(|err| PathDataError::Parse(err.to_string()))
}

/// Distance from `point` to the nearest point on the path's boundary.
///
/// This measures proximity to the outline curve itself, not containment in
/// its fill; a point deep inside a large outline is far from the boundary.
/// Returns infinity for a path with no segments.
pub fn distance_to_path(path: &BezPath, point: Point) -> f64 {
    let mut best = f64::INFINITY;
    for seg in path.segments() {
        let nearest = seg.nearest(point, NEAREST_ACCURACY);
        best = best.min(nearest.distance_sq);
    }
    best.sqrt()
}
