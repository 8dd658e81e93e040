// File: crates/heatmap-core/src/error.rs
// Summary: Typed errors for series construction, grid pivoting, tick selection and options.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

pub type HeatmapResult<T> = Result<T, HeatmapError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HeatmapError {
    #[error("series is empty; bounds and fill value are undefined")]
    EmptySeries,

    #[error("no distinct {axis} values to form a grid axis")]
    DegenerateAxis { axis: &'static str },

    #[error("invalid tick count {count} for {axis} axis; must be at least 1")]
    InvalidTickCount { axis: &'static str, count: usize },

    #[error("column '{0}' not found")]
    UnknownColumn(String),

    #[error("column '{name}' has {got} values, index has {want}")]
    ColumnLength { name: String, got: usize, want: usize },

    #[error("timestamp at position {position} precedes its predecessor")]
    UnorderedIndex { position: usize },

    #[error("duplicate entries for {date} {time}; cannot pivot")]
    DuplicateCell { date: NaiveDate, time: NaiveTime },

    #[error("series has no observed values; pass explicit fill value and bounds")]
    NoObservedValues,

    #[error("invalid bounds: vmin {vmin} exceeds vmax {vmax}")]
    InvalidBounds { vmin: f64, vmax: f64 },

    #[error("invalid option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    #[error("unknown font style '{0}'; expected \"small\" or \"big\"")]
    UnknownStyle(String),
}
