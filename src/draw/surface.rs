//! Render-surface abstraction and the in-memory vector surface.
//!
//! The engine never talks to a concrete renderer. It appends, updates, and
//! removes path primitives through [`RenderSurface`], and asks the surface
//! whether a coordinate lies near a primitive's stroke boundary. This keeps
//! the erase geometry independent of any rendering backend and unit-testable
//! with an in-memory surface.

use super::color::Color;
use super::path;
use kurbo::{BezPath, Point};

/// Identity of a persisted path primitive, issued by the surface on append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathId(u64);

/// The host's path store.
///
/// Primitives are insertion-ordered. Both writers go through this trait: the
/// stroke session appends and updates, the erase session removes.
pub trait RenderSurface {
    /// Appends a primitive and returns its identity.
    fn append_path(&mut self, fill: Color, data: String) -> PathId;

    /// Replaces the path data of an existing primitive in place.
    ///
    /// Unknown ids are ignored (the primitive may have been erased while a
    /// stale handle was held).
    fn set_path_data(&mut self, id: PathId, data: String);

    /// Removes a primitive by identity. Unknown ids are a no-op.
    fn remove_path(&mut self, id: PathId);

    /// Snapshot of all current primitive ids, in insertion order.
    ///
    /// The returned list is stable under subsequent removals, which is what
    /// lets the erase pass iterate safely while it deletes.
    fn path_ids(&self) -> Vec<PathId>;

    /// Number of primitives currently on the surface.
    fn path_count(&self) -> usize;

    /// Stroke-membership test: whether `(x, y)` lies on or near the boundary
    /// of the primitive's outline.
    ///
    /// This is a boundary-proximity query, not a fill test. Primitives with
    /// missing or malformed geometry are never a hit.
    fn hit_stroke(&self, id: PathId, x: f64, y: f64) -> bool;
}

/// A persisted, renderable vector outline.
#[derive(Debug, Clone)]
pub struct PathPrimitive {
    id: PathId,
    fill: Color,
    data: String,
    /// Parsed geometry; `None` when the stored data failed to parse
    geometry: Option<BezPath>,
}

impl PathPrimitive {
    /// The primitive's identity on its surface.
    pub fn id(&self) -> PathId {
        self.id
    }

    /// The fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// The opaque path description.
    pub fn data(&self) -> &str {
        &self.data
    }
}

/// In-memory render surface backed by parsed path geometry.
///
/// Geometry is parsed once per append/update and cached; a primitive whose
/// data fails to parse stays on the surface but is skipped by hit tests.
#[derive(Debug, Default)]
pub struct VectorSurface {
    paths: Vec<PathPrimitive>,
    next_id: u64,
    stroke_tolerance: f64,
}

/// Default hit tolerance: half of a one-unit hairline stroke, matching how a
/// browser's `isPointInStroke` treats the boundary of a path.
const DEFAULT_STROKE_TOLERANCE: f64 = 0.5;

impl VectorSurface {
    /// Creates an empty surface with the default stroke tolerance.
    pub fn new() -> Self {
        Self {
            paths: Vec::new(),
            next_id: 0,
            stroke_tolerance: DEFAULT_STROKE_TOLERANCE,
        }
    }

    /// Creates an empty surface with a custom boundary hit tolerance.
    pub fn with_stroke_tolerance(tolerance: f64) -> Self {
        Self {
            stroke_tolerance: tolerance.max(0.0),
            ..Self::new()
        }
    }

    /// Iterates the surface's primitives in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &PathPrimitive> {
        self.paths.iter()
    }

    fn parse_geometry(id: PathId, data: &str) -> Option<BezPath> {
        match path::path_from_data(data) {
            Ok(geometry) => Some(geometry),
            Err(err) => {
                log::debug!("path {id:?} has unusable geometry: {err}");
                None
            }
        }
    }
}

impl RenderSurface for VectorSurface {
    fn append_path(&mut self, fill: Color, data: String) -> PathId {
        let id = PathId(self.next_id);
        self.next_id += 1;
        let geometry = Self::parse_geometry(id, &data);
        self.paths.push(PathPrimitive {
            id,
            fill,
            data,
            geometry,
        });
        id
    }

    fn set_path_data(&mut self, id: PathId, data: String) {
        let Some(primitive) = self.paths.iter_mut().find(|p| p.id == id) else {
            log::warn!("update for unknown path {id:?} ignored");
            return;
        };
        primitive.geometry = Self::parse_geometry(id, &data);
        primitive.data = data;
    }

    fn remove_path(&mut self, id: PathId) {
        self.paths.retain(|p| p.id != id);
    }

    fn path_ids(&self) -> Vec<PathId> {
        self.paths.iter().map(|p| p.id).collect()
    }

    fn path_count(&self) -> usize {
        self.paths.len()
    }

    fn hit_stroke(&self, id: PathId, x: f64, y: f64) -> bool {
        let Some(primitive) = self.paths.iter().find(|p| p.id == id) else {
            return false;
        };
        let Some(geometry) = &primitive.geometry else {
            return false;
        };
        path::distance_to_path(geometry, Point::new(x, y)) <= self.stroke_tolerance
    }
}
