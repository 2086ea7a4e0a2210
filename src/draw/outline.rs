//! Stroke outline generation.
//!
//! The engine never draws polylines directly: every captured stroke is turned
//! into a closed, pressure-shaped outline ring and rendered as a filled path.
//! The algorithm that produces the ring is a swappable capability behind the
//! [`OutlineGenerator`] trait; [`PressureOutline`] is the built-in generator.

use kurbo::{Point, Vec2};
use std::f64::consts::PI;

/// Options controlling outline shape.
///
/// The defaults match the engine's fixed stroke configuration:
/// size=4, thinning=0.6, smoothing=0.5, streamline=0.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineOptions {
    /// Base stroke diameter in surface units
    pub size: f64,
    /// How strongly travel speed thins the stroke (0.0 = constant width)
    pub thinning: f64,
    /// How much width changes are softened between samples (0.0 - 1.0)
    pub smoothing: f64,
    /// Input smoothing: how far each sample is pulled toward its predecessor
    pub streamline: f64,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        Self {
            size: 4.0,
            thinning: 0.6,
            smoothing: 0.5,
            streamline: 0.5,
        }
    }
}

/// Computes the closed outer ring of an inked shape from raw input points.
///
/// Implementations must be pure and deterministic: the same input polyline
/// and options always produce the same ring. The engine recomputes the ring
/// over the *entire* accumulated buffer on every sample, so generators should
/// be linear in the input length.
pub trait OutlineGenerator {
    /// Returns the outline ring as `[x, y]` pairs, in boundary order.
    ///
    /// An empty input yields an empty ring. A single input point yields a
    /// degenerate dot ring (single-point strokes are valid).
    fn outline(&self, points: &[[f64; 2]], options: &OutlineOptions) -> Vec<[f64; 2]>;
}

/// Built-in outline generator.
///
/// A simplified pressure-simulating generator: input points are streamlined
/// toward their predecessors, per-point stroke radius is thinned by travel
/// speed, and the ring is built from perpendicular offsets with round caps at
/// both ends. Hosts that want a specific smoothing algorithm can swap in
/// their own [`OutlineGenerator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct PressureOutline;

/// Number of points used to approximate each round cap.
const CAP_STEPS: usize = 4;
/// Number of points in a degenerate single-point dot ring.
const DOT_STEPS: usize = 8;

impl OutlineGenerator for PressureOutline {
    fn outline(&self, points: &[[f64; 2]], options: &OutlineOptions) -> Vec<[f64; 2]> {
        if points.is_empty() {
            return Vec::new();
        }

        let streamline = options.streamline.clamp(0.0, 0.95);
        let size = options.size.max(0.1);
        let half = size / 2.0;

        // Streamline pass: pull each raw sample toward the previous smoothed
        // one, and collapse samples that barely move (zero-length segments
        // have no usable direction).
        let mut smoothed: Vec<Point> = Vec::with_capacity(points.len());
        for &[x, y] in points {
            let raw = Point::new(x, y);
            let next = match smoothed.last() {
                Some(&prev) => prev.lerp(raw, 1.0 - streamline),
                None => raw,
            };
            if smoothed.last().is_none_or(|&prev| prev.distance(next) > 1e-6) {
                smoothed.push(next);
            }
        }

        if smoothed.len() < 2 {
            return dot_ring(smoothed[0], half);
        }

        // Per-point radius: fast travel thins the stroke, smoothing softens
        // radius steps between consecutive samples.
        let thinning = options.thinning.clamp(0.0, 1.0);
        let soften = 1.0 - options.smoothing.clamp(0.0, 1.0) * 0.5;
        let mut radii = Vec::with_capacity(smoothed.len());
        radii.push(half);
        for i in 1..smoothed.len() {
            let rate = (smoothed[i].distance(smoothed[i - 1]) / size).min(1.0);
            let target = (half * (1.0 - thinning * rate)).max(half * 0.1);
            let prev: f64 = radii[i - 1];
            radii.push(prev + (target - prev) * soften);
        }

        // Perpendicular offsets on both sides of the spine.
        let mut left: Vec<Point> = Vec::with_capacity(smoothed.len());
        let mut right: Vec<Point> = Vec::with_capacity(smoothed.len());
        for i in 0..smoothed.len() {
            let ahead = smoothed[(i + 1).min(smoothed.len() - 1)];
            let behind = smoothed[i.saturating_sub(1)];
            let v = ahead - behind;
            let len = v.hypot();
            if len < 1e-6 {
                continue;
            }
            let normal = Vec2::new(-v.y, v.x) / len;
            left.push(smoothed[i] + normal * radii[i]);
            right.push(smoothed[i] - normal * radii[i]);
        }

        if left.is_empty() {
            return dot_ring(smoothed[0], half);
        }

        // Ring: left side forward, round end cap, right side backward, round
        // start cap. Cap arcs sweep half a revolution through the stroke tip
        // (end) and tail (start) respectively.
        let first = smoothed[0];
        let last = smoothed[smoothed.len() - 1];
        let r_first = radii[0];
        let r_last = radii[radii.len() - 1];

        let mut ring: Vec<Point> = Vec::with_capacity(left.len() * 2 + CAP_STEPS * 2);
        ring.extend(left.iter().copied());
        ring.extend(cap_arc(last, r_last, (ring[ring.len() - 1] - last).atan2()));
        ring.extend(right.iter().rev().copied());
        ring.extend(cap_arc(first, r_first, (right[0] - first).atan2()));

        ring.into_iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Intermediate points of a half-revolution arc starting at `from` radians.
///
/// The arc's endpoints are already on the ring (the last side point before
/// the cap and the first side point after it), so only the interior samples
/// are emitted.
fn cap_arc(center: Point, radius: f64, from: f64) -> Vec<Point> {
    (1..CAP_STEPS)
        .map(|k| {
            let angle = from - PI * k as f64 / CAP_STEPS as f64;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

/// Degenerate outline for a stationary stroke: a small circle around the point.
fn dot_ring(center: Point, radius: f64) -> Vec<[f64; 2]> {
    (0..DOT_STEPS)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / DOT_STEPS as f64;
            let p = center + Vec2::new(angle.cos(), angle.sin()) * radius;
            [p.x, p.y]
        })
        .collect()
}
