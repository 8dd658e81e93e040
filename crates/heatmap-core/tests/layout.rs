// File: crates/heatmap-core/tests/layout.rs
// Purpose: Figure layout keeps plot and legend inside the figure without overlap.

use heatmap_core::colorbar::Orientation;
use heatmap_core::layout::{HeatmapLayout, LayoutInput, LegendSpace};
use heatmap_core::types::Insets;
use heatmap_core::FontSizes;

fn input(x_axis_top: bool, legend: Option<Orientation>, fonts: FontSizes) -> LayoutInput {
    LayoutInput {
        width: 1000,
        height: 1000,
        dpi: 100.0,
        insets: Insets::default(),
        fonts,
        x_axis_top,
        has_title: true,
        y_label_chars: 2,
        legend: legend.map(|orientation| LegendSpace { orientation, has_label: true, tick_chars: 6 }),
    }
}

#[test]
fn horizontal_legend_sits_below_plot() {
    let l = HeatmapLayout::compute(&input(true, Some(Orientation::Horizontal), FontSizes::small()));
    assert!(l.is_valid(), "{l:?}");
    let legend = l.legend.unwrap();
    assert!(legend.top > l.plot.bottom);
    assert_eq!((legend.left, legend.right), (l.plot.left, l.plot.right));
}

#[test]
fn vertical_legend_sits_right_of_plot() {
    let l = HeatmapLayout::compute(&input(false, Some(Orientation::Vertical), FontSizes::big()));
    assert!(l.is_valid(), "{l:?}");
    let legend = l.legend.unwrap();
    assert!(legend.left > l.plot.right);
    assert_eq!((legend.top, legend.bottom), (l.plot.top, l.plot.bottom));
}

#[test]
fn bigger_fonts_shrink_plot() {
    let small = HeatmapLayout::compute(&input(true, None, FontSizes::small()));
    let big = HeatmapLayout::compute(&input(true, None, FontSizes::big()));
    assert!(small.legend.is_none());
    assert!(big.plot.height() < small.plot.height());
    assert!(big.plot.width() < small.plot.width());
}

#[test]
fn tiny_figure_is_invalid() {
    let mut i = input(true, Some(Orientation::Horizontal), FontSizes::big());
    i.width = 80;
    i.height = 80;
    assert!(!HeatmapLayout::compute(&i).is_valid());
}
