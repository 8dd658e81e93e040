// File: crates/heatmap-core/src/lib.rs
// Summary: Core library entry point; pivots time series into calendar grids and renders heatmaps.

pub mod axis;
pub mod colorbar;
pub mod colormap;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod heatmap;
pub mod layout;
pub mod options;
pub mod resample;
pub mod scale;
pub mod series;
pub mod style;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod types;

pub use axis::{select_ticks, Axis, AxisKind, Tick, TickSelection};
pub use colorbar::{Colorbar, ColorbarTicks, Orientation};
pub use colormap::Colormap;
pub use error::{HeatmapError, HeatmapResult};
pub use grid::{AxisLabels, DisplayBounds, FilledGrid, Grid, HeatmapGrid, HeatmapGridBuilder, RawGrid};
pub use heatmap::{HeatmapPlot, RenderOptions};
pub use options::{ColorbarLabel, HeatmapOptions};
pub use series::{TimeFrame, TimeSeries};
pub use style::FontSizes;
pub use text::TextShaper;
pub use theme::Theme;
