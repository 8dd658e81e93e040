// File: crates/heatmap-core/src/style.rs
// Summary: Font size presets passed into each render call instead of a process-wide rc state.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// Point sizes for the three text roles.
/// - `small`: tick labels, legend ticks, colour legend label
/// - `medium`: axis titles
/// - `large`: figure title
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
}

impl Default for FontSizes {
    fn default() -> Self { Self::small() }
}

impl FontSizes {
    pub const fn small() -> Self { Self { small: 16.0, medium: 18.0, large: 20.0 } }
    pub const fn big() -> Self { Self { small: 22.0, medium: 24.0, large: 26.0 } }

    /// Resolve a named preset (`"small"` or `"big"`), letting explicit sizes win.
    pub fn from_style(style: &str, small: Option<f32>, medium: Option<f32>, large: Option<f32>) -> HeatmapResult<Self> {
        let base = match style.to_ascii_lowercase().as_str() {
            "small" => Self::small(),
            "big" => Self::big(),
            _ => return Err(HeatmapError::UnknownStyle(style.to_string())),
        };
        let sizes = Self {
            small: small.unwrap_or(base.small),
            medium: medium.unwrap_or(base.medium),
            large: large.unwrap_or(base.large),
        };
        for (name, v) in [("small", sizes.small), ("medium", sizes.medium), ("large", sizes.large)] {
            if !v.is_finite() || v <= 0.0 {
                return Err(HeatmapError::InvalidOption { name: "font size", reason: format!("{name} must be positive, got {v}") });
            }
        }
        Ok(sizes)
    }

    /// Convert a point size to pixels at `dpi`.
    #[inline]
    pub fn px(points: f32, dpi: f32) -> f32 { points * dpi / 72.0 }
}
