// File: crates/heatmap-core/src/resample.rs
// Summary: Fixed-width bucket averaging and bounded forward fill for raw time series.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::{HeatmapError, HeatmapResult};
use crate::series::TimeSeries;

impl TimeSeries {
    /// Average present values into buckets of width `bucket`.
    ///
    /// Buckets are anchored at midnight of the first sample's day, so any width
    /// that divides a day lines up with the time-of-day grid columns. Every
    /// bucket between the first and last sample is emitted; buckets without a
    /// present value carry `None`.
    pub fn resample_mean(&self, bucket: TimeDelta) -> HeatmapResult<TimeSeries> {
        let width = bucket.num_milliseconds();
        if width <= 0 {
            return Err(HeatmapError::InvalidOption { name: "bucket", reason: format!("width must be positive, got {bucket}") });
        }
        let (first, last) = match (self.points().first(), self.points().last()) {
            (Some(f), Some(l)) => (f.0, l.0),
            _ => return Ok(self.clone()),
        };
        let origin = first.date().and_time(NaiveTime::MIN);
        let slot = |t: NaiveDateTime| ((t - origin).num_milliseconds() / width) as usize;
        let (lo, hi) = (slot(first), slot(last));

        // (sum, count) per bucket
        let mut acc = vec![(0.0f64, 0usize); hi - lo + 1];
        for &(t, v) in self.points() {
            if let Some(x) = v.filter(|x| !x.is_nan()) {
                let cell = &mut acc[slot(t) - lo];
                cell.0 += x;
                cell.1 += 1;
            }
        }

        let points = acc
            .into_iter()
            .enumerate()
            .map(|(i, (sum, n))| {
                let start = origin + TimeDelta::milliseconds(width * (lo + i) as i64);
                (start, (n > 0).then(|| sum / n as f64))
            })
            .collect();
        Ok(TimeSeries::from_parts_unchecked(self.name().to_string(), points))
    }

    /// Replace absent values with the last present one, at most `limit`
    /// consecutive times (`None` pads without a cap). Leading gaps stay absent.
    pub fn forward_fill(&self, limit: Option<usize>) -> TimeSeries {
        let mut last = None;
        let mut run = 0usize;
        let points = self
            .points()
            .iter()
            .map(|&(t, v)| match v.filter(|x| !x.is_nan()) {
                Some(x) => {
                    last = Some(x);
                    run = 0;
                    (t, Some(x))
                }
                None => {
                    run += 1;
                    let within = limit.map_or(true, |l| run <= l);
                    (t, if within { last } else { None })
                }
            })
            .collect();
        TimeSeries::from_parts_unchecked(self.name().to_string(), points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2021, 6, 1).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn hourly_mean_anchored_at_midnight() {
        let s = TimeSeries::from_values("p", vec![(at(1, 10), 2.0), (at(1, 50), 4.0), (at(3, 5), 9.0)]).unwrap();
        let r = s.resample_mean(TimeDelta::hours(1)).unwrap();
        assert_eq!(r.points(), &[(at(1, 0), Some(3.0)), (at(2, 0), None), (at(3, 0), Some(9.0))]);
    }

    #[test]
    fn zero_bucket_rejected() {
        let s = TimeSeries::from_values("p", vec![(at(0, 0), 1.0)]).unwrap();
        assert!(matches!(s.resample_mean(TimeDelta::zero()), Err(HeatmapError::InvalidOption { name: "bucket", .. })));
    }

    #[test]
    fn forward_fill_respects_limit() {
        let s = TimeSeries::new("p", vec![(at(0, 0), None), (at(1, 0), Some(1.0)), (at(2, 0), None), (at(3, 0), None), (at(4, 0), Some(5.0))]).unwrap();
        let values: Vec<_> = s.forward_fill(Some(1)).points().iter().map(|p| p.1).collect();
        assert_eq!(values, vec![None, Some(1.0), Some(1.0), None, Some(5.0)]);
        let unbounded: Vec<_> = s.forward_fill(None).points().iter().map(|p| p.1).collect();
        assert_eq!(unbounded, vec![None, Some(1.0), Some(1.0), Some(1.0), Some(5.0)]);
    }
}
