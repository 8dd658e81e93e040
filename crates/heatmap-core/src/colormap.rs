// File: crates/heatmap-core/src/colormap.rs
// Summary: Piecewise-linear colormaps (jet, viridis, greys) sampled on a normalised value.

use serde::{Deserialize, Serialize};
use skia_safe as skia;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Colormap {
    #[default]
    Jet,
    Viridis,
    Greys,
}

// (position, value) anchors per channel, values in 0..=1
const JET_R: &[(f64, f64)] = &[(0.0, 0.0), (0.35, 0.0), (0.66, 1.0), (0.89, 1.0), (1.0, 0.5)];
const JET_G: &[(f64, f64)] = &[(0.0, 0.0), (0.125, 0.0), (0.375, 1.0), (0.64, 1.0), (0.91, 0.0), (1.0, 0.0)];
const JET_B: &[(f64, f64)] = &[(0.0, 0.5), (0.11, 1.0), (0.34, 1.0), (0.65, 0.0), (1.0, 0.0)];

const VIRIDIS: &[(f64, [u8; 3])] = &[
    (0.0, [68, 1, 84]),
    (0.125, [71, 44, 122]),
    (0.25, [59, 81, 139]),
    (0.375, [44, 113, 142]),
    (0.5, [33, 144, 141]),
    (0.625, [39, 173, 129]),
    (0.75, [92, 200, 99]),
    (0.875, [170, 220, 50]),
    (1.0, [253, 231, 37]),
];

impl Colormap {
    pub fn name(self) -> &'static str {
        match self {
            Colormap::Jet => "jet",
            Colormap::Viridis => "viridis",
            Colormap::Greys => "greys",
        }
    }

    /// Colour for `t` in `[0, 1]`; out-of-range input is clamped.
    pub fn sample(self, t: f64) -> skia::Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Colormap::Jet => skia::Color::from_rgb(
                channel(interp(JET_R, t)),
                channel(interp(JET_G, t)),
                channel(interp(JET_B, t)),
            ),
            Colormap::Viridis => {
                let i = VIRIDIS.iter().position(|&(p, _)| p >= t).unwrap_or(VIRIDIS.len() - 1).max(1);
                let (p0, c0) = VIRIDIS[i - 1];
                let (p1, c1) = VIRIDIS[i];
                let f = (t - p0) / (p1 - p0);
                let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
                skia::Color::from_rgb(mix(c0[0], c1[0]), mix(c0[1], c1[1]), mix(c0[2], c1[2]))
            }
            Colormap::Greys => {
                let v = channel(1.0 - t);
                skia::Color::from_rgb(v, v, v)
            }
        }
    }
}

fn interp(anchors: &[(f64, f64)], t: f64) -> f64 {
    for w in anchors.windows(2) {
        let ((x0, y0), (x1, y1)) = (w[0], w[1]);
        if t <= x1 {
            return y0 + (y1 - y0) * (t - x0) / (x1 - x0);
        }
    }
    anchors.last().map(|a| a.1).unwrap_or(0.0)
}

#[inline]
fn channel(v: f64) -> u8 { (v.clamp(0.0, 1.0) * 255.0).round() as u8 }
