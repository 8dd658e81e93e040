// File: crates/heatmap-core/src/scale.rs
// Summary: Value-to-colour normalisation, cell index to pixel mapping, and nice-number legend ticks.

/// Cell index along an axis (edges are integers, cell `i` spans `[i, i+1)`).
pub type Logical = f64;
/// Data value (after scaling).
pub type Value = f64;

/// Maps data values onto `[0, 1]` for colormap lookup, clipped at the bounds.
#[derive(Clone, Copy, Debug)]
pub struct ColorScale {
    pub vmin: Value,
    pub vmax: Value,
}

impl ColorScale {
    pub fn new(vmin: Value, vmax: Value) -> Self {
        let mut s = Self { vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn normalize(&self, v: Value) -> f64 {
        if v.is_nan() { return 0.0; }
        ((v - self.vmin) / (self.vmax - self.vmin)).clamp(0.0, 1.0)
    }
}

/// Linear map from cell edges to pixels. `reversed` puts index 0 at the far end.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub start_px: f32,
    pub end_px: f32,
    pub cells: usize,
}

impl IndexScale {
    pub fn new(start_px: f32, end_px: f32, cells: usize) -> Self {
        Self { start_px, end_px, cells: cells.max(1) }
    }

    #[inline]
    pub fn cell_px(&self) -> f32 { (self.end_px - self.start_px) / self.cells as f32 }

    #[inline]
    pub fn to_px(&self, x: Logical) -> f32 { self.start_px + x as f32 * self.cell_px() }

    #[inline]
    pub fn from_px(&self, px: f32) -> Logical { ((px - self.start_px) / self.cell_px()) as f64 }
}

/// Steps accepted by the max-N locator, per decade.
const NICE_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];

/// Nice-number ticks covering `[vmin, vmax]` with at most `nbins` intervals.
///
/// The outermost ticks may land outside the range; `prune_edges` drops the
/// first and last before clipping to the range. When no step fits (one bin
/// across zero), a pruned locator takes the smallest step leaving at most
/// `nbins + 1` interior ticks, so the range edges never come back as ticks.
pub fn max_n_ticks(vmin: Value, vmax: Value, nbins: usize, prune_edges: bool) -> Vec<Value> {
    if nbins == 0 || !vmin.is_finite() || !vmax.is_finite() { return Vec::new(); }
    let span = vmax - vmin;
    if span.abs() < 1e-12 { return vec![vmin]; }

    let raw = span / nbins as f64;
    let decade = 10f64.powf(raw.log10().floor());
    let fitted = find_step(vmin, vmax, decade, nbins)
        // pruning removes both outer ticks, so two extra intervals still fit
        .or_else(|| prune_edges.then(|| find_step(vmin, vmax, decade, nbins + 2)).flatten());
    let Some((step, lo, hi)) = fitted else {
        return if prune_edges { Vec::new() } else { vec![vmin, vmax] };
    };

    let mut ticks: Vec<Value> = (lo..=hi).map(|i| clean(i as f64 * step, step)).collect();
    if prune_edges && ticks.len() >= 2 {
        ticks.remove(0);
        ticks.pop();
    }
    let eps = step * 1e-9;
    ticks.retain(|&t| t >= vmin - eps && t <= vmax + eps);
    ticks
}

/// Smallest nice step, starting at `decade`, whose covering ticks span at most
/// `intervals` steps. Returns the step and the outer tick indices.
fn find_step(vmin: Value, vmax: Value, decade: Value, intervals: usize) -> Option<(Value, i64, i64)> {
    (0..4).flat_map(|k| NICE_STEPS.map(|s| s * decade * 10f64.powi(k))).find_map(|step| {
        let lo = (vmin / step).floor();
        let hi = (vmax / step).ceil();
        (hi - lo <= intervals as f64 + 1e-9).then_some((step, lo as i64, hi as i64))
    })
}

/// Number of legend bins that fit `length_px` at roughly `spacing_px` per label.
pub fn auto_bins(length_px: f32, spacing_px: f32, min_bins: usize, max_bins: usize) -> usize {
    if !length_px.is_finite() || length_px <= 0.0 || spacing_px <= 0.0 {
        return min_bins;
    }
    ((length_px / spacing_px).floor() as usize).clamp(min_bins, max_bins)
}

/// Format a tick value with just enough decimals for `step`.
pub fn format_tick_value(v: Value, step: Value) -> String {
    let decimals = decimals_for(step);
    let s = format!("{:.*}", decimals, v);
    // avoid "-0" / "-0.0"
    if s.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') { s.trim_start_matches('-').to_string() } else { s }
}

/// Format a lone value to at most six significant digits, without trailing zeros.
pub fn format_significant(v: Value) -> String {
    if v == 0.0 || !v.is_finite() { return format_tick_value(v, 1.0); }
    let exp = v.abs().log10().floor() as i32;
    let s = format_tick_value(v, 10f64.powi(exp - 5));
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.').to_string() } else { s }
}

fn decimals_for(step: Value) -> usize {
    if !step.is_finite() || step <= 0.0 { return 0; }
    (0..=8).find(|&d| {
        let scaled = step * 10f64.powi(d as i32);
        (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
    }).unwrap_or(8)
}

#[inline]
fn clean(v: Value, step: Value) -> Value {
    let r = (v / step).round() * step;
    if r == 0.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_clips_to_unit_range() {
        let s = ColorScale::new(10.0, 20.0);
        assert_relative_eq!(s.normalize(15.0), 0.5);
        assert_eq!(s.normalize(-5.0), 0.0);
        assert_eq!(s.normalize(99.0), 1.0);
    }

    #[test]
    fn degenerate_span_widens() {
        let s = ColorScale::new(3.0, 3.0);
        assert_eq!(s.vmax, 4.0);
        assert_eq!(s.normalize(3.0), 0.0);
    }

    #[test]
    fn index_scale_round_trips() {
        let s = IndexScale::new(100.0, 340.0, 24);
        assert_relative_eq!(s.cell_px(), 10.0);
        assert_relative_eq!(s.to_px(3.0), 130.0);
        assert_relative_eq!(s.from_px(130.0), 3.0);
    }

    #[test]
    fn max_n_ticks_unpruned_covers_range() {
        assert_eq!(max_n_ticks(0.0, 10.0, 5, false), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn max_n_ticks_prunes_edges() {
        assert_eq!(max_n_ticks(0.0, 10.0, 5, true), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn max_n_ticks_uses_two_and_a_half_steps() {
        assert_eq!(max_n_ticks(0.0, 10.0, 4, false), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn max_n_ticks_single_bin_across_zero_keeps_interior() {
        assert_eq!(max_n_ticks(-1.0, 1.0, 1, true), vec![0.0]);
        assert_eq!(max_n_ticks(-3.0, 7.0, 1, true), vec![0.0]);
        assert_eq!(max_n_ticks(-1.0, 1.0, 1, false), vec![-1.0, 1.0]);
    }

    #[test]
    fn significant_formatting_trims_noise() {
        assert_eq!(format_significant(0.1 + 0.2), "0.3");
        assert_eq!(format_significant(3.5), "3.5");
        assert_eq!(format_significant(-12345.0), "-12345");
        assert_eq!(format_significant(0.0), "0");
    }

    #[test]
    fn tick_formatting_follows_step() {
        assert_eq!(format_tick_value(7.5, 2.5), "7.5");
        assert_eq!(format_tick_value(4.0, 2.0), "4");
        assert_eq!(format_tick_value(-0.0, 0.1), "0.0");
        assert_eq!(format_tick_value(0.25, 0.05), "0.25");
    }

    #[test]
    fn auto_bins_clamps() {
        assert_eq!(auto_bins(800.0, 80.0, 2, 9), 9);
        assert_eq!(auto_bins(100.0, 80.0, 2, 9), 2);
        assert_eq!(auto_bins(0.0, 80.0, 2, 9), 2);
    }
}
