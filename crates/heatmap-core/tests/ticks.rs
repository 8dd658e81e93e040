// File: crates/heatmap-core/tests/ticks.rs
// Purpose: Axis tick subset selection and label formatting.

use chrono::{NaiveDate, NaiveTime};
use heatmap_core::axis::format_label;
use heatmap_core::{select_ticks, AxisKind, AxisLabels, HeatmapError, HeatmapOptions, HeatmapPlot, TimeSeries};

fn dates(n: u32) -> AxisLabels {
    AxisLabels::Dates((0..n).map(|i| NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(i as u64)).collect())
}

fn hours() -> AxisLabels {
    AxisLabels::Times((0..24).map(|h| NaiveTime::from_hms_opt(h, 0, 0).unwrap()).collect())
}

#[test]
fn more_ticks_than_labels_gives_one_per_label() {
    let sel = select_ticks(&dates(5), 100).unwrap();
    assert_eq!(sel.kind, AxisKind::Date);
    assert_eq!(sel.positions(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn integer_step_spacing() {
    // 24 / 10 = 2 -> 0, 2, ..., 18; the tail goes unlabelled
    let sel = select_ticks(&hours(), 10).unwrap();
    assert_eq!(sel.positions(), vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);
    assert_eq!(sel.ticks[3].label, "6");
}

#[test]
fn never_exceeds_requested_count() {
    for n in 1..40 {
        for req in 1..45 {
            let sel = select_ticks(&dates(n), req).unwrap();
            assert!(sel.len() <= req.min(n as usize), "n={n} req={req} got {}", sel.len());
            assert!(!sel.is_empty());
            let pos = sel.positions();
            assert!(pos.windows(2).all(|w| w[0] < w[1]));
            assert!(pos.iter().all(|&p| p < n as usize));
        }
    }
}

#[test]
fn single_label_gives_single_tick() {
    let sel = select_ticks(&dates(1), 8).unwrap();
    assert_eq!(sel.positions(), vec![0]);
}

#[test]
fn zero_ticks_rejected() {
    let err = select_ticks(&hours(), 0).unwrap_err();
    assert_eq!(err, HeatmapError::InvalidTickCount { axis: "time-of-day", count: 0 });
}

#[test]
fn label_formats() {
    let d = AxisLabels::Dates(vec![NaiveDate::from_ymd_opt(2021, 3, 9).unwrap()]);
    assert_eq!(format_label(&d, 0), "03-21");
    let t = AxisLabels::Times(vec![NaiveTime::from_hms_opt(17, 45, 0).unwrap()]);
    assert_eq!(format_label(&t, 0), "17");
}

#[test]
fn plot_applies_tick_counts_after_transpose() {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let points = (0..5u64)
        .flat_map(|d| (0..24).map(move |h| ((start + chrono::Days::new(d)).and_hms_opt(h, 0, 0).unwrap(), h as f64)))
        .collect();
    let series = TimeSeries::from_values("t", points).unwrap();

    let opts = HeatmapOptions { y_ticks: 100, transpose: false, ..Default::default() };
    let plot = HeatmapPlot::from_series(&series, &opts).unwrap();
    assert_eq!(plot.y_axis.ticks.kind, AxisKind::Date);
    assert_eq!(plot.y_axis.ticks.positions(), vec![0, 1, 2, 3, 4]);
    assert_eq!(plot.y_axis.title, "day");
    assert_eq!(plot.x_axis.title, "hour");

    let plot = HeatmapPlot::from_series(&series, &HeatmapOptions::default()).unwrap();
    assert_eq!(plot.x_axis.ticks.kind, AxisKind::Date);
    assert_eq!(plot.y_axis.ticks.len(), 10);
}
