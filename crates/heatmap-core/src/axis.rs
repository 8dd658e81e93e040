// File: crates/heatmap-core/src/axis.rs
// Summary: Axis model for the heatmap: tick subset selection and date/hour label formatting.

use chrono::Timelike;

use crate::error::{HeatmapError, HeatmapResult};
use crate::grid::AxisLabels;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    Date,
    TimeOfDay,
}

impl AxisKind {
    pub fn of(labels: &AxisLabels) -> Self {
        match labels {
            AxisLabels::Dates(_) => AxisKind::Date,
            AxisLabels::Times(_) => AxisKind::TimeOfDay,
        }
    }

    /// Default axis title.
    pub fn title(self) -> &'static str {
        match self {
            AxisKind::Date => "day",
            AxisKind::TimeOfDay => "hour",
        }
    }
}

/// Which edge of the plot an axis is drawn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Top,
    Bottom,
    Left,
}

/// A labelled mark at a cell index along an axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tick {
    pub position: usize,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickSelection {
    pub kind: AxisKind,
    pub ticks: Vec<Tick>,
}

impl TickSelection {
    pub fn len(&self) -> usize { self.ticks.len() }
    pub fn is_empty(&self) -> bool { self.ticks.is_empty() }
    pub fn positions(&self) -> Vec<usize> { self.ticks.iter().map(|t| t.position).collect() }
}

/// Pick up to `requested` evenly spaced ticks from `labels`.
///
/// The step is `n / min(requested, n)` with integer division, so the tail of
/// a long axis may go unlabelled. At most `min(requested, n)` ticks come back.
pub fn select_ticks(labels: &AxisLabels, requested: usize) -> HeatmapResult<TickSelection> {
    let kind = AxisKind::of(labels);
    if requested == 0 {
        return Err(HeatmapError::InvalidTickCount { axis: labels.kind_name(), count: requested });
    }
    let n = labels.len();
    if n == 0 {
        return Err(HeatmapError::DegenerateAxis { axis: labels.kind_name() });
    }
    let effective = requested.min(n);
    let step = (n / effective).max(1);
    let ticks = (0..n)
        .step_by(step)
        .take(effective)
        .map(|position| Tick { position, label: format_label(labels, position) })
        .collect::<Vec<_>>();
    tracing::debug!(axis = labels.kind_name(), labels = n, requested, step, ticks = ticks.len(), "selected axis ticks");
    Ok(TickSelection { kind, ticks })
}

/// Dates render as month-year (`01-20`), times of day as the bare hour (`7`).
pub fn format_label(labels: &AxisLabels, position: usize) -> String {
    match labels {
        AxisLabels::Dates(d) => d.get(position).map(|d| d.format("%m-%y").to_string()).unwrap_or_default(),
        AxisLabels::Times(t) => t.get(position).map(|t| t.hour().to_string()).unwrap_or_default(),
    }
}

/// Axis ready for drawing: title, side and the chosen ticks.
#[derive(Clone, Debug)]
pub struct Axis {
    pub title: String,
    pub side: AxisSide,
    pub ticks: TickSelection,
    /// Number of cells along the axis.
    pub cells: usize,
}

impl Axis {
    pub fn new(labels: &AxisLabels, side: AxisSide, requested_ticks: usize) -> HeatmapResult<Self> {
        let ticks = select_ticks(labels, requested_ticks)?;
        Ok(Self { title: ticks.kind.title().to_string(), side, ticks, cells: labels.len() })
    }
}
