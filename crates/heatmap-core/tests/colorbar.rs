// File: crates/heatmap-core/tests/colorbar.rs
// Purpose: Legend tick policies and orientation wiring.

use heatmap_core::colorbar::colorbar_ticks;
use heatmap_core::{Colorbar, ColorbarTicks, DisplayBounds, HeatmapError, Orientation};

fn values(bounds: DisplayBounds, policy: ColorbarTicks, len: f32) -> Vec<f64> {
    colorbar_ticks(&bounds, policy, len).into_iter().map(|t| t.value).collect()
}

#[test]
fn bounded_policy_prunes_edges() {
    let b = DisplayBounds::new(0.0, 10.0).unwrap();
    assert_eq!(values(b, ColorbarTicks::Max(5), 500.0), vec![2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn bounded_policy_stays_inside_range() {
    let b = DisplayBounds::new(13.7, 88.2).unwrap();
    for n in 1..12 {
        let v = values(b, ColorbarTicks::Max(n), 500.0);
        assert!(v.iter().all(|&x| x > 13.7 && x < 88.2), "n={n}: {v:?}");
        assert!(v.len() <= n + 1, "n={n}: {v:?}");
    }
}

#[test]
fn auto_policy_scales_with_length() {
    let b = DisplayBounds::new(0.0, 100.0).unwrap();
    let short = values(b, ColorbarTicks::Auto, 200.0);
    let long = values(b, ColorbarTicks::Auto, 900.0);
    assert!(short.len() < long.len(), "{short:?} vs {long:?}");
    assert_eq!(long.first(), Some(&0.0));
    assert_eq!(long.last(), Some(&100.0));
}

#[test]
fn labels_drop_math_markup() {
    let b = DisplayBounds::new(0.0, 1.0).unwrap();
    let ticks = colorbar_ticks(&b, ColorbarTicks::Max(4), 400.0);
    let labels: Vec<_> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0.25", "0.50", "0.75"]);
    assert!(labels.iter().all(|l| !l.contains('$')));
}

#[test]
fn degenerate_range_single_tick() {
    let b = DisplayBounds::new(3.5, 3.5).unwrap();
    let ticks = colorbar_ticks(&b, ColorbarTicks::Auto, 400.0);
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].label, "3.5");
}

#[test]
fn single_bin_across_zero_drops_edges() {
    for (lo, hi) in [(-1.0, 1.0), (-3.0, 7.0)] {
        let b = DisplayBounds::new(lo, hi).unwrap();
        let v = values(b, ColorbarTicks::Max(1), 500.0);
        assert_eq!(v, vec![0.0], "[{lo}, {hi}]");
        assert!(v.iter().all(|&x| x > lo && x < hi), "[{lo}, {hi}]: {v:?}");
    }
}

#[test]
fn bounded_policy_across_zero_stays_inside_range() {
    let b = DisplayBounds::new(-3.0, 7.0).unwrap();
    for n in 1..12 {
        let v = values(b, ColorbarTicks::Max(n), 500.0);
        assert!(!v.is_empty(), "n={n}");
        assert!(v.iter().all(|&x| x > -3.0 && x < 7.0), "n={n}: {v:?}");
        assert!(v.len() <= n + 1, "n={n}: {v:?}");
    }
}

#[test]
fn single_tick_label_is_rounded() {
    let b = DisplayBounds::new(0.1 + 0.2, 0.1 + 0.2).unwrap();
    let ticks = colorbar_ticks(&b, ColorbarTicks::Auto, 400.0);
    assert_eq!(ticks.len(), 1);
    assert_eq!(ticks[0].label, "0.3");
}

#[test]
fn zero_max_ticks_rejected() {
    let err = Colorbar::new(None, Orientation::Vertical, ColorbarTicks::Max(0)).unwrap_err();
    assert_eq!(err, HeatmapError::InvalidTickCount { axis: "colorbar", count: 0 });
}
