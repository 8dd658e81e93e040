// File: crates/heatmap-core/src/series.rs
// Summary: Time-indexed series and multi-column frames feeding the heatmap pivot.
// Notes:
// - Values are `Option<f64>`; `None` marks an absent sample and survives until
//   the grid fill step.
// - Timestamps are naive (wall-clock) so the date/time-of-day split is exact.

use chrono::NaiveDateTime;

use crate::error::{HeatmapError, HeatmapResult};

/// Ordered `(timestamp, value)` samples for one named quantity.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeSeries {
    name: String,
    points: Vec<(NaiveDateTime, Option<f64>)>,
}

impl TimeSeries {
    /// Build a series, rejecting timestamps that go backwards.
    /// Repeated timestamps are accepted here; the pivot decides whether they collide.
    pub fn new(name: impl Into<String>, points: Vec<(NaiveDateTime, Option<f64>)>) -> HeatmapResult<Self> {
        if let Some(position) = first_unordered(points.iter().map(|(t, _)| t)) {
            return Err(HeatmapError::UnorderedIndex { position });
        }
        Ok(Self { name: name.into(), points })
    }

    /// Convenience for fully observed data.
    pub fn from_values(name: impl Into<String>, values: Vec<(NaiveDateTime, f64)>) -> HeatmapResult<Self> {
        Self::new(name, values.into_iter().map(|(t, v)| (t, Some(v))).collect())
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[(NaiveDateTime, Option<f64>)] { &self.points }

    /// Present values in index order. NaN counts as absent.
    pub fn observed(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().filter_map(|&(_, v)| v.filter(|x| !x.is_nan()))
    }

    /// Minimum and maximum of the present values, if any.
    pub fn observed_range(&self) -> Option<(f64, f64)> {
        self.observed().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Multiply every present value by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let points = self.points.iter().map(|&(t, v)| (t, v.map(|x| x * factor))).collect();
        Self { name: self.name.clone(), points }
    }

    pub(crate) fn from_parts_unchecked(name: String, points: Vec<(NaiveDateTime, Option<f64>)>) -> Self {
        Self { name, points }
    }
}

/// A shared timestamp index with one or more named value columns.
#[derive(Clone, Debug, Default)]
pub struct TimeFrame {
    index: Vec<NaiveDateTime>,
    columns: Vec<(String, Vec<Option<f64>>)>,
}

impl TimeFrame {
    pub fn new(index: Vec<NaiveDateTime>) -> HeatmapResult<Self> {
        if let Some(position) = first_unordered(index.iter()) {
            return Err(HeatmapError::UnorderedIndex { position });
        }
        Ok(Self { index, columns: Vec::new() })
    }

    /// Attach a column; a column with the same name is replaced.
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<Option<f64>>) -> HeatmapResult<Self> {
        let name = name.into();
        if values.len() != self.index.len() {
            return Err(HeatmapError::ColumnLength { name, got: values.len(), want: self.index.len() });
        }
        match self.columns.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = values,
            None => self.columns.push((name, values)),
        }
        Ok(self)
    }

    pub fn len(&self) -> usize { self.index.len() }
    pub fn is_empty(&self) -> bool { self.index.is_empty() }
    pub fn index(&self) -> &[NaiveDateTime] { &self.index }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }

    /// Select one column as a series.
    pub fn column(&self, name: &str) -> HeatmapResult<TimeSeries> {
        let (_, values) = self
            .columns
            .iter()
            .find(|(n, _)| n == name)
            .ok_or_else(|| HeatmapError::UnknownColumn(name.to_string()))?;
        let points = self.index.iter().copied().zip(values.iter().copied()).collect();
        // index order was validated on construction
        Ok(TimeSeries::from_parts_unchecked(name.to_string(), points))
    }
}

fn first_unordered<'a>(mut stamps: impl Iterator<Item = &'a NaiveDateTime>) -> Option<usize> {
    let mut prev = stamps.next()?;
    for (i, t) in stamps.enumerate() {
        if t < prev { return Some(i + 1); }
        prev = t;
    }
    None
}
