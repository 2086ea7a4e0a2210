//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Stroke outline settings.
///
/// Controls the shape of captured ink. These map directly onto the outline
/// generator's options.
#[derive(Debug, Serialize, Deserialize)]
pub struct StrokeSettings {
    /// Base stroke diameter in surface units (valid range: 0.5 - 64.0)
    #[serde(default = "default_size")]
    pub size: f64,

    /// How strongly travel speed thins the stroke (valid range: 0.0 - 1.0)
    #[serde(default = "default_thinning")]
    pub thinning: f64,

    /// How much width changes are softened between samples (valid range: 0.0 - 1.0)
    #[serde(default = "default_smoothing")]
    pub smoothing: f64,

    /// Input smoothing: how far each sample is pulled toward its predecessor
    /// (valid range: 0.0 - 0.95; higher values lag the cursor noticeably)
    #[serde(default = "default_streamline")]
    pub streamline: f64,
}

impl Default for StrokeSettings {
    fn default() -> Self {
        Self {
            size: default_size(),
            thinning: default_thinning(),
            smoothing: default_smoothing(),
            streamline: default_streamline(),
        }
    }
}

/// Eraser geometry settings.
///
/// The eraser removes a stroke when any of a small ring of test positions
/// around the cursor lands on the stroke's boundary.
#[derive(Debug, Serialize, Deserialize)]
pub struct EraserSettings {
    /// Hit-test ring radius in surface units (valid range: 1.0 - 64.0)
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Cursor step distance above which intermediate samples are synthesized
    /// (valid range: 1.0 - 256.0)
    #[serde(default = "default_interpolate_above")]
    pub interpolate_above: f64,

    /// Approximate spacing between synthesized samples (valid range: 1.0 - 64.0)
    /// Keep this below the interpolation threshold, or fast motion can skip
    /// thin strokes entirely
    #[serde(default = "default_sample_spacing")]
    pub sample_spacing: f64,
}

impl Default for EraserSettings {
    fn default() -> Self {
        Self {
            radius: default_radius(),
            interpolate_above: default_interpolate_above(),
            sample_spacing: default_sample_spacing(),
        }
    }
}

fn default_size() -> f64 {
    4.0
}

fn default_thinning() -> f64 {
    0.6
}

fn default_smoothing() -> f64 {
    0.5
}

fn default_streamline() -> f64 {
    0.5
}

fn default_radius() -> f64 {
    5.0
}

fn default_interpolate_above() -> f64 {
    20.0
}

fn default_sample_spacing() -> f64 {
    10.0
}
