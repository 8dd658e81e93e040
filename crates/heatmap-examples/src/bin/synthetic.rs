// File: crates/heatmap-examples/src/bin/synthetic.rs
// Summary: Minimal example that renders three weeks of synthetic hourly demand to PNG.

use chrono::{NaiveDate, TimeDelta};
use heatmap_core::{ColorbarLabel, ColorbarTicks, FontSizes, HeatmapOptions, HeatmapPlot, RenderOptions, TimeSeries};

fn main() {
    let _ = heatmap_core::telemetry::init_default_tracing();

    // Daily cycle plus a weekend dip; every 50th hour is missing
    let start = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let points = (0..24 * 21)
        .map(|i: i64| {
            let hour = (i % 24) as f64;
            let weekend = matches!((i / 24) % 7, 5 | 6);
            let v = 400.0 + 250.0 * (-(hour - 14.0).powi(2) / 18.0).exp() - if weekend { 120.0 } else { 0.0 };
            (start + TimeDelta::hours(i), (i % 50 != 7).then_some(v))
        })
        .collect();
    let series = TimeSeries::new("demand_kw", points).expect("ordered timestamps");

    let opts = HeatmapOptions {
        scaling: 0.001,
        colorbar_label: ColorbarLabel::Text("demand [MW]".into()),
        colorbar_ticks: ColorbarTicks::Max(5),
        title: Some("Synthetic demand".into()),
        ..Default::default()
    };
    let plot = HeatmapPlot::from_series(&series, &opts).expect("build heatmap");

    let render = RenderOptions { fonts: FontSizes::big(), ..Default::default() };
    let out = std::path::PathBuf::from("target/out/example_synthetic.png");
    plot.render_to_png(&render, &out).expect("render to png");
    println!("Wrote {}", out.display());
}
