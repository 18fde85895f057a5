//! Shared configuration types and defaults.
//!
//! This crate defines the flat parameter set that drives the torus renderer.
//! It is pure data with no I/O, so it can be used from the core renderer, the
//! terminal front end, benches, and tests alike.
//!
//! # Parameters
//!
//! | Field | Default | Description |
//! |-------|---------|-------------|
//! | `width` | 80 | Output grid width in characters |
//! | `height` | 22 | Output grid height in rows |
//! | `r1` | 1.0 | Tube radius |
//! | `r2` | 2.0 | Distance from torus center to tube center |
//! | `k1` | 30.0 | Projection scale constant |
//! | `k2` | 5.0 | Viewer distance along the projection axis |
//! | `a_step` | 0.04 | Per-frame increment of rotation angle A (radians) |
//! | `b_step` | 0.02 | Per-frame increment of rotation angle B (radians) |
//! | `theta_step` | 0.07 | Sampling resolution over the tube circle (radians) |
//! | `phi_step` | 0.02 | Sampling resolution around the torus axis (radians) |
//! | `shading` | `.,-~:;=!*#$@` | Luminance palette, darkest to brightest |
//!
//! # Example
//!
//! ```
//! use tui_donut_types::RenderConfig;
//!
//! let cfg = RenderConfig::default();
//! assert_eq!(cfg.width, 80);
//! assert_eq!(cfg.height, 22);
//! assert!(cfg.validate().is_ok());
//! ```

use thiserror::Error;

/// Default luminance palette, darkest to brightest.
pub const DEFAULT_SHADING: &str = ".,-~:;=!*#$@";

/// Default frame count for benchmark runs.
pub const DEFAULT_BENCH_FRAMES: usize = 500;

/// Immutable per-run render parameters.
///
/// The benchmark flag and frame count are deliberately not part of this
/// struct; they belong to the CLI layer, which selects the operating mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output grid width in characters.
    pub width: usize,
    /// Output grid height in rows.
    pub height: usize,
    /// Tube radius.
    pub r1: f64,
    /// Distance from torus center to tube center (`r2 > r1` for a donut).
    pub r2: f64,
    /// Projection scale constant.
    pub k1: f64,
    /// Viewer distance along the projection axis.
    pub k2: f64,
    /// Per-frame increment of rotation angle A, in radians.
    pub a_step: f64,
    /// Per-frame increment of rotation angle B, in radians.
    pub b_step: f64,
    /// Angular sampling step over the tube circle, in radians.
    pub theta_step: f64,
    /// Angular sampling step around the torus axis, in radians.
    pub phi_step: f64,
    /// Luminance palette, darkest to brightest. Must be non-empty.
    pub shading: Vec<char>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 22,
            r1: 1.0,
            r2: 2.0,
            k1: 30.0,
            k2: 5.0,
            a_step: 0.04,
            b_step: 0.02,
            theta_step: 0.07,
            phi_step: 0.02,
            shading: DEFAULT_SHADING.chars().collect(),
        }
    }
}

impl RenderConfig {
    /// Check the caller contract the renderer relies on.
    ///
    /// The renderer itself never panics on a bad configuration, but an
    /// invalid one produces an empty or degenerate image, so front ends
    /// should reject it up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.r1 > 0.0) || !(self.r2 > 0.0) {
            return Err(ConfigError::NonPositive("r1/r2"));
        }
        if !(self.k1 > 0.0) {
            return Err(ConfigError::NonPositive("k1"));
        }
        // Every sampled depth satisfies z + k2 >= k2 - (r1 + r2); the
        // projection divides by that quantity.
        if !(self.k2 > self.r1 + self.r2) {
            return Err(ConfigError::ViewerInsideSurface {
                k2: self.k2,
                depth_range: self.r1 + self.r2,
            });
        }
        if !(self.theta_step > 0.0) || !(self.phi_step > 0.0) {
            return Err(ConfigError::NonPositive("theta_step/phi_step"));
        }
        if self.shading.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}

/// Rejected configuration, reported before any rendering happens.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("output grid must be non-empty, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("{0} must be positive and finite")]
    NonPositive(&'static str),

    #[error("k2 ({k2}) must exceed the surface depth range ({depth_range})")]
    ViewerInsideSurface { k2: f64, depth_range: f64 },

    #[error("shading palette must contain at least one character")]
    EmptyPalette,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(RenderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_grid() {
        let cfg = RenderConfig {
            width: 0,
            ..RenderConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::EmptyGrid { .. })));
    }

    #[test]
    fn rejects_empty_palette() {
        let cfg = RenderConfig {
            shading: Vec::new(),
            ..RenderConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyPalette));
    }

    #[test]
    fn rejects_viewer_inside_surface() {
        let cfg = RenderConfig {
            k2: 2.5,
            ..RenderConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ViewerInsideSurface { .. })
        ));
    }

    #[test]
    fn rejects_nan_steps() {
        let cfg = RenderConfig {
            theta_step: f64::NAN,
            ..RenderConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
