//! Configuration file support for inkboard.
//!
//! Handles loading and validating user settings from the configuration file
//! located at `~/.config/inkboard/config.toml`. Settings cover the stroke
//! outline shape and the eraser geometry.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{EraserSettings, StrokeSettings};

use crate::draw::outline::OutlineOptions;
use crate::session::erase::EraseOptions;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in
/// the config file.
///
/// # Example TOML
/// ```toml
/// [stroke]
/// size = 4.0
/// thinning = 0.6
/// smoothing = 0.5
/// streamline = 0.5
///
/// [eraser]
/// radius = 5.0
/// interpolate_above = 20.0
/// sample_spacing = 10.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Stroke outline shape
    #[serde(default)]
    pub stroke: StrokeSettings,

    /// Eraser geometry
    #[serde(default)]
    pub eraser: EraserSettings,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged, so a bad config never produces degenerate geometry.
    fn validate_and_clamp(&mut self) {
        if !(0.5..=64.0).contains(&self.stroke.size) {
            log::warn!(
                "Invalid stroke size {:.1}, clamping to 0.5-64.0 range",
                self.stroke.size
            );
            self.stroke.size = self.stroke.size.clamp(0.5, 64.0);
        }

        if !(0.0..=1.0).contains(&self.stroke.thinning) {
            log::warn!(
                "Invalid stroke thinning {:.2}, clamping to 0.0-1.0 range",
                self.stroke.thinning
            );
            self.stroke.thinning = self.stroke.thinning.clamp(0.0, 1.0);
        }

        if !(0.0..=1.0).contains(&self.stroke.smoothing) {
            log::warn!(
                "Invalid stroke smoothing {:.2}, clamping to 0.0-1.0 range",
                self.stroke.smoothing
            );
            self.stroke.smoothing = self.stroke.smoothing.clamp(0.0, 1.0);
        }

        if !(0.0..=0.95).contains(&self.stroke.streamline) {
            log::warn!(
                "Invalid stroke streamline {:.2}, clamping to 0.0-0.95 range",
                self.stroke.streamline
            );
            self.stroke.streamline = self.stroke.streamline.clamp(0.0, 0.95);
        }

        if !(1.0..=64.0).contains(&self.eraser.radius) {
            log::warn!(
                "Invalid eraser radius {:.1}, clamping to 1.0-64.0 range",
                self.eraser.radius
            );
            self.eraser.radius = self.eraser.radius.clamp(1.0, 64.0);
        }

        if !(1.0..=256.0).contains(&self.eraser.interpolate_above) {
            log::warn!(
                "Invalid eraser interpolate_above {:.1}, clamping to 1.0-256.0 range",
                self.eraser.interpolate_above
            );
            self.eraser.interpolate_above = self.eraser.interpolate_above.clamp(1.0, 256.0);
        }

        if !(1.0..=64.0).contains(&self.eraser.sample_spacing) {
            log::warn!(
                "Invalid eraser sample_spacing {:.1}, clamping to 1.0-64.0 range",
                self.eraser.sample_spacing
            );
            self.eraser.sample_spacing = self.eraser.sample_spacing.clamp(1.0, 64.0);
        }

        // Spacing wider than the threshold would defeat interpolation.
        if self.eraser.sample_spacing > self.eraser.interpolate_above {
            log::warn!(
                "Eraser sample_spacing {:.1} exceeds interpolate_above {:.1}; \
                 reducing spacing to match",
                self.eraser.sample_spacing,
                self.eraser.interpolate_above
            );
            self.eraser.sample_spacing = self.eraser.interpolate_above;
        }
    }

    /// Loads configuration from the default location.
    ///
    /// Falls back to defaults when no config file exists.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No config file found, using defaults");
                let mut config = Self::default();
                config.validate_and_clamp();
                Ok(config)
            }
        }
    }

    /// Loads and validates configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate_and_clamp();
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// The default config file location, if a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inkboard").join("config.toml"))
    }

    /// The stroke settings as outline generator options.
    pub fn stroke_options(&self) -> OutlineOptions {
        OutlineOptions {
            size: self.stroke.size,
            thinning: self.stroke.thinning,
            smoothing: self.stroke.smoothing,
            streamline: self.stroke.streamline,
        }
    }

    /// The eraser settings as erase session options.
    pub fn erase_options(&self) -> EraseOptions {
        EraseOptions {
            radius: self.eraser.radius,
            interpolate_above: self.eraser.interpolate_above,
            sample_spacing: self.eraser.sample_spacing,
        }
    }
}
