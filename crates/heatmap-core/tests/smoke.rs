// File: crates/heatmap-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests writing PNGs in both orientations.

use chrono::NaiveDate;
use heatmap_core::{ColorbarTicks, HeatmapOptions, HeatmapPlot, RenderOptions, TimeFrame};

fn frame() -> TimeFrame {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let index: Vec<_> = (0..24 * 14).map(|h| start + chrono::TimeDelta::hours(h)).collect();
    let load = index
        .iter()
        .enumerate()
        .map(|(i, _)| if i % 37 == 5 { None } else { Some(((i % 24) as f64 / 24.0 * std::f64::consts::TAU).sin() * 40.0 + 60.0) })
        .collect();
    TimeFrame::new(index).unwrap().with_column("load_kw", load).unwrap()
}

#[test]
fn render_smoke_png() {
    let plot = HeatmapPlot::from_frame(&frame(), "load_kw", &HeatmapOptions::default()).expect("plot");
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/heatmap_smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    plot.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn render_untransposed_with_title_bytes() {
    let opts = HeatmapOptions {
        transpose: false,
        title: Some("Load".into()),
        colorbar_ticks: ColorbarTicks::Max(4),
        scaling: 0.001,
        ..Default::default()
    };
    let plot = HeatmapPlot::from_frame(&frame(), "load_kw", &opts).expect("plot");
    let bytes = plot.render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn unknown_column_is_lookup_failure() {
    let err = HeatmapPlot::from_frame(&frame(), "temperature", &HeatmapOptions::default()).unwrap_err();
    assert_eq!(err, heatmap_core::HeatmapError::UnknownColumn("temperature".into()));
}

#[test]
fn tiny_figure_fails_to_render() {
    let plot = HeatmapPlot::from_frame(&frame(), "load_kw", &HeatmapOptions::default()).unwrap();
    let opts = RenderOptions { width: 60, height: 60, ..Default::default() };
    assert!(plot.render_to_png_bytes(&opts).is_err());
}
