// File: crates/heatmap-core/src/layout.rs
// Summary: Splits the figure into plot area and legend strip, reserving room for text.
// Notes:
// - Text extents are estimated from character counts so layout stays
//   independent of installed fonts (and testable without a canvas).

use crate::colorbar::Orientation;
use crate::geometry::RectI32;
use crate::style::FontSizes;
use crate::types::Insets;

/// Tick mark length in pixels.
pub const TICK_LEN: f32 = 6.0;
/// Average glyph advance as a fraction of the font size.
const CHAR_WIDTH: f32 = 0.62;

/// Legend space requirements.
#[derive(Clone, Copy, Debug)]
pub struct LegendSpace {
    pub orientation: Orientation,
    pub has_label: bool,
    /// Longest tick label, in characters.
    pub tick_chars: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct LayoutInput {
    pub width: i32,
    pub height: i32,
    pub dpi: f32,
    pub insets: Insets,
    pub fonts: FontSizes,
    /// x ticks and title above the plot instead of below.
    pub x_axis_top: bool,
    pub has_title: bool,
    /// Longest y tick label, in characters.
    pub y_label_chars: usize,
    pub legend: Option<LegendSpace>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeatmapLayout {
    pub figure: RectI32,
    pub plot: RectI32,
    pub legend: Option<RectI32>,
}

impl HeatmapLayout {
    pub fn compute(input: &LayoutInput) -> Self {
        let small = FontSizes::px(input.fonts.small, input.dpi);
        let medium = FontSizes::px(input.fonts.medium, input.dpi);
        let large = FontSizes::px(input.fonts.large, input.dpi);
        let w = input.width as f32;
        let h = input.height as f32;

        let x_axis_band = TICK_LEN + small * 1.4 + medium * 1.6;
        let mut top = input.insets.top as f32;
        if input.has_title {
            top += large * 1.6;
        }
        let mut bottom = h - input.insets.bottom as f32;
        if input.x_axis_top {
            top += x_axis_band;
        } else {
            bottom -= x_axis_band;
        }
        let left = input.insets.left as f32 + medium * 1.6 + input.y_label_chars as f32 * small * CHAR_WIDTH + TICK_LEN + 4.0;
        let mut right = w - input.insets.right as f32;

        let mut legend = None;
        if let Some(space) = input.legend {
            let label_band = if space.has_label { small * 1.6 } else { 0.0 };
            let gap = small;
            match space.orientation {
                Orientation::Horizontal => {
                    let thick = (h * 0.04).max(12.0);
                    bottom -= gap + thick + TICK_LEN + small * 1.4 + label_band;
                    legend = Some((gap, thick));
                }
                Orientation::Vertical => {
                    let thick = (w * 0.04).max(12.0);
                    let tick_band = TICK_LEN + 4.0 + space.tick_chars as f32 * small * CHAR_WIDTH;
                    right -= gap + thick + tick_band + label_band;
                    legend = Some((gap, thick));
                }
            }
        }

        let plot = RectI32::from_ltrb(left.round() as i32, top.round() as i32, right.round() as i32, bottom.round() as i32);
        let legend = match (legend, input.legend.map(|l| l.orientation)) {
            (Some((gap, thick)), Some(Orientation::Horizontal)) => {
                let t = plot.bottom + gap.round() as i32;
                Some(RectI32::from_ltrb(plot.left, t, plot.right, t + thick.round() as i32))
            }
            (Some((gap, thick)), Some(Orientation::Vertical)) => {
                let l = plot.right + gap.round() as i32;
                Some(RectI32::from_ltrb(l, plot.top, l + thick.round() as i32, plot.bottom))
            }
            _ => None,
        };

        Self { figure: RectI32::from_ltwh(0, 0, input.width, input.height), plot, legend }
    }

    /// Plot and legend have positive area, fit inside the figure and do not overlap.
    pub fn is_valid(&self) -> bool {
        if self.plot.is_empty() || !self.figure.contains_rect(&self.plot) {
            return false;
        }
        match self.legend {
            Some(l) => !l.is_empty() && self.figure.contains_rect(&l) && !l.intersects(&self.plot),
            None => true,
        }
    }
}
