//! Erase session: cursor-trail accumulation and proximity hit-testing.
//!
//! The geometric core of the engine. Each cursor sample is hit-tested against
//! every persisted primitive with a sampled ring of test positions, and fast
//! cursor motion is densified by interpolating intermediate samples so thin
//! strokes cannot slip between two consecutive pointer events.

use crate::draw::surface::RenderSurface;
use kurbo::Point;
use std::f64::consts::PI;

/// Angular step between ring test positions (8 per revolution).
const RING_ANGLE_STEP: f64 = PI / 4.0;

/// Radial step between test rings.
const RING_RADIUS_STEP: f64 = 2.0;

/// Eraser geometry settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EraseOptions {
    /// Hit-test ring radius in surface units
    pub radius: f64,
    /// Step distance above which intermediate samples are synthesized
    pub interpolate_above: f64,
    /// Approximate spacing between synthesized samples
    ///
    /// Must stay denser than `radius`, otherwise fast motion can skip thin
    /// strokes entirely.
    pub sample_spacing: f64,
}

impl Default for EraseOptions {
    fn default() -> Self {
        Self {
            radius: 5.0,
            interpolate_above: 20.0,
            sample_spacing: 10.0,
        }
    }
}

/// Accumulates the cursor trail for one erase gesture and removes every
/// primitive the trail passes near.
#[derive(Debug)]
pub struct EraseSession {
    trail: Vec<Point>,
    last_point: Option<Point>,
    options: EraseOptions,
}

impl EraseSession {
    /// Starts an erase gesture and immediately hit-tests the start point.
    pub fn start<S: RenderSurface + ?Sized>(
        point: Point,
        options: EraseOptions,
        surface: &mut S,
    ) -> Self {
        let session = Self {
            trail: vec![point],
            last_point: Some(point),
            options,
        };
        session.erase_at_point(point, surface);
        session
    }

    /// Extends the trail to `point`, erasing along the way.
    ///
    /// When the step from the previous sample exceeds
    /// `options.interpolate_above`, `ceil(d / sample_spacing) - 1` evenly
    /// spaced points strictly between the two positions are synthesized and
    /// hit-tested in order before the final point itself.
    pub fn extend<S: RenderSurface + ?Sized>(&mut self, point: Point, surface: &mut S) {
        let Some(last) = self.last_point else {
            // Defensive: no previous sample, treat this as the trail start.
            self.last_point = Some(point);
            self.erase_at_point(point, surface);
            return;
        };

        let distance = last.distance(point);
        if distance > self.options.interpolate_above {
            let steps = (distance / self.options.sample_spacing).ceil() as usize;
            for i in 1..steps {
                let t = i as f64 / steps as f64;
                let interpolated = last.lerp(point, t);
                self.erase_at_point(interpolated, surface);
                self.trail.push(interpolated);
            }
        }

        self.erase_at_point(point, surface);
        self.trail.push(point);
        self.last_point = Some(point);
    }

    /// The points visited so far, including synthesized ones.
    pub fn trail(&self) -> &[Point] {
        &self.trail
    }

    /// The most recent sample, used to interpolate the next segment.
    pub fn last_point(&self) -> Option<Point> {
        self.last_point
    }

    /// Ends the gesture, discarding the trail.
    pub fn end(self) {}

    /// Hit-tests every primitive around a single cursor sample and removes
    /// the ones whose stroke boundary passes near it.
    ///
    /// Test positions form rings around `point`: radii 0, 2, ... below the
    /// eraser radius, with 8 angular positions each. A primitive is removed
    /// on its first hit and not tested further; primitives without usable
    /// geometry never match. The id snapshot is taken before any removal, so
    /// removing one primitive neither skips nor duplicates the others.
    ///
    /// Returns the number of primitives removed.
    pub fn erase_at_point<S: RenderSurface + ?Sized>(&self, point: Point, surface: &mut S) -> usize {
        let ids = surface.path_ids();
        let mut removed = 0;

        'paths: for id in ids {
            let mut r = 0.0;
            while r < self.options.radius {
                let mut angle = 0.0;
                while angle < 2.0 * PI {
                    let test_x = point.x + angle.cos() * r;
                    let test_y = point.y + angle.sin() * r;
                    if surface.hit_stroke(id, test_x, test_y) {
                        surface.remove_path(id);
                        removed += 1;
                        continue 'paths;
                    }
                    angle += RING_ANGLE_STEP;
                }
                r += RING_RADIUS_STEP;
            }
        }

        if removed > 0 {
            log::debug!(
                "erased {removed} path(s) at ({:.1}, {:.1})",
                point.x,
                point.y
            );
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use crate::draw::surface::VectorSurface;

    fn start_empty(x: f64, y: f64) -> (EraseSession, VectorSurface) {
        let mut surface = VectorSurface::new();
        let session = EraseSession::start(Point::new(x, y), EraseOptions::default(), &mut surface);
        (session, surface)
    }

    #[test]
    fn fast_motion_interpolates_nine_points_over_distance_100() {
        let (mut session, mut surface) = start_empty(0.0, 0.0);
        assert_eq!(session.trail().len(), 1);

        session.extend(Point::new(100.0, 0.0), &mut surface);

        // ceil(100 / 10) - 1 = 9 interpolated points, then the final one.
        assert_eq!(session.trail().len(), 1 + 9 + 1);
        for (i, p) in session.trail()[1..10].iter().enumerate() {
            assert!((p.x - 10.0 * (i + 1) as f64).abs() < 1e-9);
            assert_eq!(p.y, 0.0);
        }
        assert_eq!(session.last_point(), Some(Point::new(100.0, 0.0)));
    }

    #[test]
    fn slow_motion_is_not_interpolated() {
        let (mut session, mut surface) = start_empty(0.0, 0.0);
        session.extend(Point::new(15.0, 0.0), &mut surface);
        assert_eq!(session.trail().len(), 2);

        // Exactly at the threshold: still no interpolation.
        session.extend(Point::new(35.0, 0.0), &mut surface);
        assert_eq!(session.trail().len(), 3);
    }

    #[test]
    fn start_erases_immediately() {
        let mut surface = VectorSurface::new();
        surface.append_path(BLACK, "M-10 -0.5 L10 -0.5 L10 0.5 L-10 0.5 Z".to_string());

        let _session =
            EraseSession::start(Point::new(0.0, 0.0), EraseOptions::default(), &mut surface);
        assert_eq!(surface.path_count(), 0);
    }

    #[test]
    fn distant_primitives_survive_a_sample() {
        let mut surface = VectorSurface::new();
        surface.append_path(BLACK, "M100 100 L120 100 L120 120 L100 120 Z".to_string());

        let session =
            EraseSession::start(Point::new(0.0, 0.0), EraseOptions::default(), &mut surface);
        assert_eq!(surface.path_count(), 1);

        // Ring samples reach at most radius 4 + tolerance; 20 units away
        // stays untouched.
        let removed = session.erase_at_point(Point::new(80.0, 100.0), &mut surface);
        assert_eq!(removed, 0);
        assert_eq!(surface.path_count(), 1);
    }

    #[test]
    fn one_sample_can_remove_several_primitives() {
        let mut surface = VectorSurface::new();
        // Two thin bars crossing the origin, one horizontal, one vertical.
        surface.append_path(BLACK, "M-10 -0.5 L10 -0.5 L10 0.5 L-10 0.5 Z".to_string());
        surface.append_path(BLACK, "M-0.5 -10 L0.5 -10 L0.5 10 L-0.5 10 Z".to_string());
        // And one far away that must survive.
        surface.append_path(BLACK, "M200 200 L210 200 L210 210 Z".to_string());

        let session = EraseSession {
            trail: Vec::new(),
            last_point: None,
            options: EraseOptions::default(),
        };
        let removed = session.erase_at_point(Point::new(0.0, 0.0), &mut surface);
        assert_eq!(removed, 2);
        assert_eq!(surface.path_count(), 1);
    }

    #[test]
    fn malformed_primitives_are_skipped() {
        let mut surface = VectorSurface::new();
        surface.append_path(BLACK, "garbage".to_string());

        let session =
            EraseSession::start(Point::new(0.0, 0.0), EraseOptions::default(), &mut surface);
        let removed = session.erase_at_point(Point::new(0.0, 0.0), &mut surface);
        assert_eq!(removed, 0);
        assert_eq!(surface.path_count(), 1);
    }

    #[test]
    fn extend_without_last_point_restarts_the_trail() {
        let mut surface = VectorSurface::new();
        let mut session = EraseSession {
            trail: Vec::new(),
            last_point: None,
            options: EraseOptions::default(),
        };

        session.extend(Point::new(5.0, 5.0), &mut surface);
        assert_eq!(session.last_point(), Some(Point::new(5.0, 5.0)));
        // The defensive branch only re-seeds the anchor point.
        assert!(session.trail().is_empty());
    }
}
