// File: crates/heatmap-core/tests/options.rs
// Purpose: Option defaults, JSON configuration and validation.

use heatmap_core::{ColorbarLabel, ColorbarTicks, Colormap, HeatmapError, HeatmapOptions};

#[test]
fn defaults_match_documented_surface() {
    let o = HeatmapOptions::default();
    assert_eq!((o.y_ticks, o.x_ticks), (10, 8));
    assert_eq!(o.scaling, 1.0);
    assert!(o.with_colorbar && o.transpose);
    assert_eq!(o.colorbar_label, ColorbarLabel::Column);
    assert_eq!(o.colorbar_ticks, ColorbarTicks::Auto);
    assert_eq!(o.colormap, Colormap::Jet);
    assert!(o.validate().is_ok());
}

#[test]
fn partial_json_keeps_defaults() {
    let o: HeatmapOptions = serde_json::from_str(
        r#"{ "scaling": 0.001, "colorbar_label": { "text": "MW" }, "colorbar_ticks": { "max": 5 }, "transpose": false }"#,
    )
    .unwrap();
    assert_eq!(o.scaling, 0.001);
    assert_eq!(o.colorbar_label, ColorbarLabel::Text("MW".into()));
    assert_eq!(o.colorbar_ticks, ColorbarTicks::Max(5));
    assert!(!o.transpose);
    assert_eq!(o.y_ticks, 10);
}

#[test]
fn suppressed_label_resolves_to_none() {
    let o: HeatmapOptions = serde_json::from_str(r#"{ "colorbar_label": "suppressed", "colormap": "viridis" }"#).unwrap();
    assert_eq!(o.colorbar_label.resolve("load"), None);
    assert_eq!(ColorbarLabel::Column.resolve("load").as_deref(), Some("load"));
    assert_eq!(o.colormap, Colormap::Viridis);
}

#[test]
fn validation_failures() {
    let zero_y = HeatmapOptions { y_ticks: 0, ..Default::default() };
    assert_eq!(zero_y.validate().unwrap_err(), HeatmapError::InvalidTickCount { axis: "y", count: 0 });

    let zero_cb = HeatmapOptions { colorbar_ticks: ColorbarTicks::Max(0), ..Default::default() };
    assert!(matches!(zero_cb.validate(), Err(HeatmapError::InvalidTickCount { axis: "colorbar", .. })));

    let inverted = HeatmapOptions { vmin: Some(2.0), vmax: Some(1.0), ..Default::default() };
    assert!(matches!(inverted.validate(), Err(HeatmapError::InvalidBounds { .. })));

    let nan_fill = HeatmapOptions { fill_value: Some(f64::NAN), ..Default::default() };
    assert!(matches!(nan_fill.validate(), Err(HeatmapError::InvalidOption { name: "fill_value", .. })));
}
