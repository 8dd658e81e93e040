// File: crates/heatmap-core/src/options.rs
// Summary: Keyword-style heatmap configuration with defaults, serde support and validation.

use serde::{Deserialize, Serialize};

use crate::colorbar::ColorbarTicks;
use crate::colormap::Colormap;
use crate::error::{HeatmapError, HeatmapResult};

/// Text shown next to the colour legend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorbarLabel {
    /// Use the plotted column name.
    #[default]
    Column,
    Text(String),
    /// Draw the legend without a label.
    Suppressed,
}

impl ColorbarLabel {
    pub fn resolve(&self, column: &str) -> Option<String> {
        match self {
            ColorbarLabel::Column => Some(column.to_string()),
            ColorbarLabel::Text(s) => Some(s.clone()),
            ColorbarLabel::Suppressed => None,
        }
    }
}

/// Every knob of a heatmap call; all fields have defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapOptions {
    /// Value for unobserved cells; defaults to the smallest scaled observation.
    pub fill_value: Option<f64>,
    pub y_ticks: usize,
    pub x_ticks: usize,
    pub colorbar_label: ColorbarLabel,
    /// Multiplier applied to every value before anything else.
    pub scaling: f64,
    pub vmin: Option<f64>,
    pub vmax: Option<f64>,
    pub with_colorbar: bool,
    pub colorbar_ticks: ColorbarTicks,
    /// Dates along x and hours along y when true.
    pub transpose: bool,
    pub colormap: Colormap,
    pub title: Option<String>,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            fill_value: None,
            y_ticks: 10,
            x_ticks: 8,
            colorbar_label: ColorbarLabel::Column,
            scaling: 1.0,
            vmin: None,
            vmax: None,
            with_colorbar: true,
            colorbar_ticks: ColorbarTicks::Auto,
            transpose: true,
            colormap: Colormap::Jet,
            title: None,
        }
    }
}

impl HeatmapOptions {
    pub fn validate(&self) -> HeatmapResult<()> {
        if self.y_ticks == 0 {
            return Err(HeatmapError::InvalidTickCount { axis: "y", count: 0 });
        }
        if self.x_ticks == 0 {
            return Err(HeatmapError::InvalidTickCount { axis: "x", count: 0 });
        }
        if let ColorbarTicks::Max(0) = self.colorbar_ticks {
            return Err(HeatmapError::InvalidTickCount { axis: "colorbar", count: 0 });
        }
        if !self.scaling.is_finite() {
            return Err(invalid("scaling", self.scaling));
        }
        for (name, v) in [("fill_value", self.fill_value), ("vmin", self.vmin), ("vmax", self.vmax)] {
            if let Some(v) = v.filter(|v| !v.is_finite()) {
                return Err(invalid(name, v));
            }
        }
        if let (Some(vmin), Some(vmax)) = (self.vmin, self.vmax) {
            if vmin > vmax {
                return Err(HeatmapError::InvalidBounds { vmin, vmax });
            }
        }
        Ok(())
    }
}

fn invalid(name: &'static str, v: f64) -> HeatmapError {
    HeatmapError::InvalidOption { name, reason: format!("must be finite, got {v}") }
}
