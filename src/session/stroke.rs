//! Stroke capture session.

use crate::draw::color::BLACK;
use crate::draw::outline::{OutlineGenerator, OutlineOptions};
use crate::draw::path;
use crate::draw::surface::{PathId, RenderSurface};
use kurbo::Point;

/// Accumulates input points for one drawing gesture and keeps a single path
/// primitive on the surface in sync with them.
///
/// Every sample appends to the buffer with no deduplication or distance
/// threshold, and the outline is recomputed over the *entire* buffer. The
/// recompute-from-scratch policy keeps the rendered shape consistent with the
/// full buffer at O(n) outline work per sample; n is bounded by gesture
/// length and the generator is linear, so the cost stays human-input-sized.
#[derive(Debug)]
pub struct StrokeSession {
    points: Vec<[f64; 2]>,
    path: Option<PathId>,
    options: OutlineOptions,
}

impl StrokeSession {
    /// Starts a session at the gesture's first point. Nothing is rendered
    /// until the first [`extend`](Self::extend).
    pub fn start(point: Point, options: OutlineOptions) -> Self {
        Self {
            points: vec![[point.x, point.y]],
            path: None,
            options,
        }
    }

    /// Appends a sample and re-renders the stroke.
    ///
    /// Creates the session's primitive (black fill) on first call, then
    /// updates its geometry in place on every subsequent one.
    pub fn extend<S: RenderSurface + ?Sized>(
        &mut self,
        point: Point,
        surface: &mut S,
        generator: &dyn OutlineGenerator,
    ) {
        self.points.push([point.x, point.y]);

        let ring = generator.outline(&self.points, &self.options);
        let data = path::outline_to_path_data(&ring);

        match self.path {
            Some(id) => surface.set_path_data(id, data),
            None => self.path = Some(surface.append_path(BLACK, data)),
        }
    }

    /// Number of captured input samples.
    pub fn sample_count(&self) -> usize {
        self.points.len()
    }

    /// The primitive this session renders into, once one exists.
    pub fn path(&self) -> Option<PathId> {
        self.path
    }

    /// Ends the gesture, detaching the session from its primitive.
    ///
    /// The primitive itself stays on the surface; ending a stroke never
    /// deletes anything.
    pub fn end(self) -> Option<PathId> {
        self.path
    }
}
