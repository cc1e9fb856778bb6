// File: crates/demo/src/lib.rs
// Summary: CSV loading and hover simulation used by the stream-demo binary.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use stream_core::{ChartContext, Point, RenderOptions, Row, SeriesCatalog, SeriesId};

/// Parse the `Date` column. Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS` and `YYYY-MM` (first of the month).
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(t);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0);
    }
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").ok()?.and_hms_opt(0, 0, 0)
}

/// Load rows from a CSV with a `Date` column plus one numeric column per series.
/// Empty or unparsable cells are left missing; rows with a bad date are skipped.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    debug!("headers: {headers:?}");
    let i_date = headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case("date"))
        .with_context(|| format!("{} has no Date column", path.display()))?;

    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let Some(date) = rec.get(i_date).and_then(parse_date) else {
            warn!("row {}: unparsable date {:?}, skipped", line + 1, rec.get(i_date));
            continue;
        };
        let mut row = Row::new(date);
        for (i, cell) in rec.iter().enumerate() {
            if i == i_date || cell.is_empty() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(v) => row.set(headers[i].as_str(), v),
                Err(_) => warn!("row {}: {:?} in column {} is not a number", line + 1, cell, headers[i]),
            }
        }
        out.push(row);
    }
    Ok(out)
}

/// Column names in `rows` that the catalog does not know; they are ignored by rendering.
pub fn unknown_columns(rows: &[Row], catalog: &SeriesCatalog) -> Vec<String> {
    let mut names: Vec<String> = rows
        .iter()
        .flat_map(|r| r.values.keys())
        .filter(|k| catalog.id_of(k).is_none())
        .cloned()
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Container position at the middle row of `series`, halfway through its thickness.
pub fn hover_point(ctx: &ChartContext, opts: &RenderOptions, series: SeriesId) -> Option<Point> {
    let layer = ctx.layers.get(series.index())?;
    let row = ctx.dataset.len().checked_sub(1)? / 2;
    let date = *ctx.dataset.dates.get(row)?;
    let mid = (layer.baseline(row) + layer.top(row)) / 2.0;
    Some(Point::new(opts.insets.left + ctx.x.map(date), opts.insets.top + ctx.y.map(mid)))
}

/// Resolve path, trying the .csv/.cvs swap if needed. Returns (actual_path, used_alt).
pub fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    match p.extension()?.to_string_lossy().to_lowercase().as_str() {
        "cvs" => alt.set_extension("csv"),
        "csv" => alt.set_extension("cvs"),
        _ => return None,
    };
    Some(alt)
}
