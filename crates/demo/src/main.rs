// File: crates/demo/src/main.rs
// Summary: Demo loads a timestamped CSV, optionally resamples, and renders one column as a heatmap PNG.
//
// Usage: heatmap-demo <file.csv> <column> [options.json]
//            [--bucket-minutes N] [--pad N] [--style small|big] [--theme NAME]

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, TimeDelta};
use heatmap_core::{theme, FontSizes, HeatmapOptions, HeatmapPlot, RenderOptions, TimeFrame};
use std::path::{Path, PathBuf};

struct Args {
    input: PathBuf,
    column: String,
    options: Option<PathBuf>,
    bucket_minutes: Option<i64>,
    pad: Option<usize>,
    style: String,
    theme: String,
}

fn main() -> Result<()> {
    let _ = heatmap_core::telemetry::init_default_tracing();
    let args = parse_args(std::env::args().skip(1))?;

    let opts = match &args.options {
        Some(p) => {
            let raw = std::fs::read_to_string(p).with_context(|| format!("reading options {}", p.display()))?;
            serde_json::from_str::<HeatmapOptions>(&raw).with_context(|| format!("parsing options {}", p.display()))?
        }
        None => HeatmapOptions::default(),
    };

    let frame = load_csv(&args.input).with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    tracing::info!(rows = frame.len(), columns = ?frame.column_names().collect::<Vec<_>>(), "loaded frame");
    if frame.is_empty() {
        anyhow::bail!("no rows loaded; check headers/delimiter");
    }

    let mut series = frame.column(&args.column)?;
    if let Some(m) = args.bucket_minutes {
        series = series.resample_mean(TimeDelta::minutes(m))?;
        tracing::info!(bucket_minutes = m, buckets = series.len(), "resampled");
    }
    if args.pad.is_some() || args.bucket_minutes.is_some() {
        series = series.forward_fill(args.pad);
    }

    let plot = HeatmapPlot::from_series(&series, &opts)?;
    tracing::info!(
        rows = plot.data.grid.shape().0,
        cols = plot.data.grid.shape().1,
        filled = plot.data.filled_cells,
        vmin = plot.data.bounds.vmin,
        vmax = plot.data.bounds.vmax,
        "built heatmap"
    );

    let render = RenderOptions {
        fonts: FontSizes::from_style(&args.style, None, None, None)?,
        theme: theme::find(&args.theme),
        ..Default::default()
    };
    let out = out_name(&args.input, &args.column);
    plot.render_to_png(&render, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut positional = Vec::new();
    let mut args = Args {
        input: PathBuf::new(),
        column: String::new(),
        options: None,
        bucket_minutes: None,
        pad: None,
        style: "small".to_string(),
        theme: "light".to_string(),
    };
    while let Some(a) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value"));
        match a.as_str() {
            "--bucket-minutes" => args.bucket_minutes = Some(value("--bucket-minutes")?.parse().context("--bucket-minutes")?),
            "--pad" => args.pad = Some(value("--pad")?.parse().context("--pad")?),
            "--style" => args.style = value("--style")?,
            "--theme" => args.theme = value("--theme")?,
            _ => positional.push(a),
        }
    }
    let mut positional = positional.into_iter();
    args.input = positional.next().map(PathBuf::from).context("missing <file.csv>")?;
    args.column = positional.next().context("missing <column>")?;
    args.options = positional.next().map(PathBuf::from);
    Ok(args)
}

/// Produce output file name like target/out/heatmap_<stem>_<column>.png
fn out_name(input: &Path, column: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("series");
    let column: String = column.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect();
    PathBuf::from("target/out").join(format!("heatmap_{stem}_{column}.png"))
}

/// Load a CSV with one timestamp column and any number of numeric columns.
fn load_csv(path: &Path) -> Result<TimeFrame> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect::<Vec<_>>();
    let time_names = ["date_time", "datetime", "timestamp", "time", "date"];
    let i_time = headers
        .iter()
        .position(|h| time_names.contains(&h.to_lowercase().as_str()))
        .context("no timestamp column (date_time/datetime/timestamp/time/date)")?;

    let mut index = Vec::new();
    let mut columns: Vec<Vec<Option<f64>>> = vec![Vec::new(); headers.len()];
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw = rec.get(i_time).unwrap_or_default();
        let t = parse_timestamp(raw).with_context(|| format!("row {}: bad timestamp '{raw}'", line + 2))?;
        index.push(t);
        for (i, col) in columns.iter_mut().enumerate() {
            if i != i_time {
                col.push(rec.get(i).and_then(|s| s.parse::<f64>().ok()).filter(|v| !v.is_nan()));
            }
        }
    }

    let mut frame = TimeFrame::new(index)?;
    for (i, (name, values)) in headers.into_iter().zip(columns).enumerate() {
        if i != i_time {
            frame = frame.with_column(name, values)?;
        }
    }
    Ok(frame)
}

fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y/%m/%d %H:%M"];
    if let Some(t) = FORMATS.iter().find_map(|f| NaiveDateTime::parse_from_str(s, f).ok()) {
        return Some(t);
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.naive_local());
    }
    // epoch ms or seconds
    let n = s.parse::<i64>().ok()?;
    let secs = if n > 10_i64.pow(12) { n / 1000 } else { n };
    DateTime::from_timestamp(secs, 0).map(|t| t.naive_utc())
}
