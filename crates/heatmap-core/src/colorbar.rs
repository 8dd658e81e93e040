// File: crates/heatmap-core/src/colorbar.rs
// Summary: Colour legend model: orientation, label and bounded nice-number ticks.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};
use crate::grid::DisplayBounds;
use crate::scale::{auto_bins, format_significant, format_tick_value, max_n_ticks};

/// Legend tick policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorbarTicks {
    /// Bin count follows the legend length.
    #[default]
    Auto,
    /// At most this many bins; the outermost ticks are pruned.
    Max(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Pixel spacing the automatic policy aims for between legend labels.
pub const AUTO_TICK_SPACING_PX: f32 = 90.0;
const AUTO_MIN_BINS: usize = 2;
const AUTO_MAX_BINS: usize = 9;

#[derive(Clone, Debug, PartialEq)]
pub struct ColorbarTick {
    pub value: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Colorbar {
    pub label: Option<String>,
    pub orientation: Orientation,
    pub policy: ColorbarTicks,
}

impl Colorbar {
    pub fn new(label: Option<String>, orientation: Orientation, policy: ColorbarTicks) -> HeatmapResult<Self> {
        if let ColorbarTicks::Max(0) = policy {
            return Err(HeatmapError::InvalidTickCount { axis: "colorbar", count: 0 });
        }
        Ok(Self { label, orientation, policy })
    }

    /// Ticks for a legend `length_px` long spanning `bounds`.
    pub fn ticks(&self, bounds: &DisplayBounds, length_px: f32) -> Vec<ColorbarTick> {
        colorbar_ticks(bounds, self.policy, length_px)
    }
}

pub fn colorbar_ticks(bounds: &DisplayBounds, policy: ColorbarTicks, length_px: f32) -> Vec<ColorbarTick> {
    let values = match policy {
        ColorbarTicks::Auto => {
            let bins = auto_bins(length_px, AUTO_TICK_SPACING_PX, AUTO_MIN_BINS, AUTO_MAX_BINS);
            max_n_ticks(bounds.vmin, bounds.vmax, bins, false)
        }
        ColorbarTicks::Max(n) => max_n_ticks(bounds.vmin, bounds.vmax, n, true),
    };
    let step = match values.as_slice() {
        [a, b, ..] => b - a,
        [single] => return vec![ColorbarTick { value: *single, label: format_significant(*single) }],
        [] => return Vec::new(),
    };
    values
        .into_iter()
        .map(|value| ColorbarTick { value, label: format_tick_value(value, step) })
        .collect()
}
