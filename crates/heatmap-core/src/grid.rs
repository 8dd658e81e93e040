// File: crates/heatmap-core/src/grid.rs
// Summary: Calendar grid model and the pivot that turns a time series into day x time-of-day cells.

use std::collections::BTreeSet;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};
use crate::series::TimeSeries;

/// Ordered labels along one grid axis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisLabels {
    Dates(Vec<NaiveDate>),
    Times(Vec<NaiveTime>),
}

impl AxisLabels {
    pub fn len(&self) -> usize {
        match self {
            AxisLabels::Dates(d) => d.len(),
            AxisLabels::Times(t) => t.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn kind_name(&self) -> &'static str {
        match self {
            AxisLabels::Dates(_) => "date",
            AxisLabels::Times(_) => "time-of-day",
        }
    }
}

/// Row-major 2-D grid with labelled axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    rows: AxisLabels,
    cols: AxisLabels,
    cells: Vec<T>,
}

/// Pivot output before filling; `None` marks an unobserved cell.
pub type RawGrid = Grid<Option<f64>>;
/// Grid with every cell populated.
pub type FilledGrid = Grid<f64>;

impl<T: Copy> Grid<T> {
    pub fn rows(&self) -> &AxisLabels { &self.rows }
    pub fn cols(&self) -> &AxisLabels { &self.cols }
    pub fn cells(&self) -> &[T] { &self.cells }

    /// (row count, column count)
    pub fn shape(&self) -> (usize, usize) { (self.rows.len(), self.cols.len()) }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        let (nr, nc) = self.shape();
        if row >= nr || col >= nc { return None; }
        Some(self.cells[row * nc + col])
    }

    /// Swap row and column roles. Values keep their (date, time) association.
    pub fn transpose(&self) -> Self {
        let (nr, nc) = self.shape();
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..nc {
            for r in 0..nr {
                cells.push(self.cells[r * nc + c]);
            }
        }
        Self { rows: self.cols.clone(), cols: self.rows.clone(), cells }
    }
}

impl RawGrid {
    pub fn missing_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Substitute `value` for every missing cell.
    pub fn fill(&self, value: f64) -> FilledGrid {
        Grid {
            rows: self.rows.clone(),
            cols: self.cols.clone(),
            cells: self.cells.iter().map(|c| c.unwrap_or(value)).collect(),
        }
    }
}

impl From<FilledGrid> for RawGrid {
    fn from(g: FilledGrid) -> Self {
        Grid { rows: g.rows, cols: g.cols, cells: g.cells.into_iter().map(Some).collect() }
    }
}

/// Colour-mapping range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayBounds {
    pub vmin: f64,
    pub vmax: f64,
}

impl DisplayBounds {
    pub fn new(vmin: f64, vmax: f64) -> HeatmapResult<Self> {
        if vmin.is_nan() || vmax.is_nan() || vmin > vmax {
            return Err(HeatmapError::InvalidBounds { vmin, vmax });
        }
        Ok(Self { vmin, vmax })
    }

    pub fn span(&self) -> f64 { self.vmax - self.vmin }
}

/// Result of a pivot: filled grid plus the bounds and fill actually used.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatmapGrid {
    pub grid: FilledGrid,
    pub bounds: DisplayBounds,
    pub fill_value: f64,
    /// Number of cells that received `fill_value`.
    pub filled_cells: usize,
    pub transposed: bool,
}

/// Pivots a time series into a calendar grid.
///
/// Values are scaled first; bounds and the default fill value come from the
/// scaled, unfilled values so the fill never skews the colour range.
#[derive(Clone, Copy, Debug)]
pub struct HeatmapGridBuilder {
    scaling: f64,
    fill_value: Option<f64>,
    vmin: Option<f64>,
    vmax: Option<f64>,
    transpose: bool,
}

impl Default for HeatmapGridBuilder {
    fn default() -> Self {
        Self { scaling: 1.0, fill_value: None, vmin: None, vmax: None, transpose: true }
    }
}

impl HeatmapGridBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn scaling(mut self, factor: f64) -> Self { self.scaling = factor; self }
    pub fn fill_value(mut self, value: Option<f64>) -> Self { self.fill_value = value; self }
    pub fn vmin(mut self, vmin: Option<f64>) -> Self { self.vmin = vmin; self }
    pub fn vmax(mut self, vmax: Option<f64>) -> Self { self.vmax = vmax; self }
    /// When set (default), rows are times of day and columns are dates.
    pub fn transpose(mut self, transpose: bool) -> Self { self.transpose = transpose; self }

    /// Pivot into dates x times of day, without scaling, filling or transposing.
    pub fn pivot(series: &TimeSeries) -> HeatmapResult<RawGrid> {
        if series.is_empty() {
            return Err(HeatmapError::EmptySeries);
        }
        let dates: Vec<NaiveDate> = series.points().iter().map(|(t, _)| t.date()).collect::<BTreeSet<_>>().into_iter().collect();
        let times: Vec<NaiveTime> = series.points().iter().map(|(t, _)| t.time()).collect::<BTreeSet<_>>().into_iter().collect();
        // unreachable after the EmptySeries check: any point yields a date and a time
        if dates.is_empty() {
            return Err(HeatmapError::DegenerateAxis { axis: "date" });
        }
        if times.is_empty() {
            return Err(HeatmapError::DegenerateAxis { axis: "time-of-day" });
        }

        let nc = times.len();
        let mut cells = vec![None; dates.len() * nc];
        let mut seen = vec![false; cells.len()];
        for &(t, v) in series.points() {
            let (date, time) = (t.date(), t.time());
            // both searches hit: labels were collected from these points
            let r = dates.binary_search(&date).unwrap_or_else(|i| i);
            let c = times.binary_search(&time).unwrap_or_else(|i| i);
            let idx = r * nc + c;
            if seen[idx] {
                return Err(HeatmapError::DuplicateCell { date, time });
            }
            seen[idx] = true;
            cells[idx] = v.filter(|x| !x.is_nan());
        }
        Ok(Grid { rows: AxisLabels::Dates(dates), cols: AxisLabels::Times(times), cells })
    }

    pub fn build(&self, series: &TimeSeries) -> HeatmapResult<HeatmapGrid> {
        if series.is_empty() {
            return Err(HeatmapError::EmptySeries);
        }
        if !self.scaling.is_finite() {
            return Err(HeatmapError::InvalidOption { name: "scaling", reason: format!("must be finite, got {}", self.scaling) });
        }

        let scaled = series.scaled(self.scaling);
        let raw = Self::pivot(&scaled)?;

        let observed = scaled.observed_range();
        let need_observed = self.fill_value.is_none() || self.vmin.is_none() || self.vmax.is_none();
        if need_observed && observed.is_none() {
            return Err(HeatmapError::NoObservedValues);
        }
        let (lo, hi) = observed.unwrap_or((f64::NAN, f64::NAN));
        let bounds = DisplayBounds::new(self.vmin.unwrap_or(lo), self.vmax.unwrap_or(hi))?;
        let fill_value = self.fill_value.unwrap_or(lo);

        let filled_cells = raw.missing_count();
        let mut grid = raw.fill(fill_value);
        if self.transpose {
            grid = grid.transpose();
        }

        tracing::debug!(
            series = series.name(),
            rows = grid.shape().0,
            cols = grid.shape().1,
            filled_cells,
            vmin = bounds.vmin,
            vmax = bounds.vmax,
            "pivoted heatmap grid"
        );
        Ok(HeatmapGrid { grid, bounds, fill_value, filled_cells, transposed: self.transpose })
    }
}
