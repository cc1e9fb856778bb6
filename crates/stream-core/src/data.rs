// File: crates/stream-core/src/data.rs
// Summary: Input rows and their projection onto the series catalog.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::catalog::{SeriesCatalog, SeriesId};

/// One time bucket: a timestamp plus a value per named series.
/// Names outside the catalog are carried but never drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub date: NaiveDateTime,
    pub values: BTreeMap<String, f64>,
}

impl Row {
    pub fn new(date: NaiveDateTime) -> Self {
        Self { date, values: BTreeMap::new() }
    }

    /// Row stamped at midnight of `date`.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN))
    }

    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.values.insert(name.into(), value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// Value for `name`; missing and non-finite values read as zero.
    pub fn value_or_zero(&self, name: &str) -> f64 {
        match self.values.get(name) {
            Some(v) if v.is_finite() => *v,
            _ => 0.0,
        }
    }
}

/// Rows projected onto exactly the catalog keys, column-major.
/// Invariant: `values[s].len() == dates.len()` for every series `s`.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub dates: Vec<NaiveDateTime>,
    values: Vec<Vec<f64>>,
}

impl Dataset {
    pub fn project(rows: &[Row], catalog: &SeriesCatalog) -> Self {
        let dates = rows.iter().map(|r| r.date).collect();
        let values = catalog
            .names()
            .map(|name| rows.iter().map(|r| r.value_or_zero(name)).collect())
            .collect();
        Self { dates, values }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn series_count(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self, id: SeriesId) -> &[f64] {
        &self.values[id.index()]
    }

    pub fn columns(&self) -> &[Vec<f64>] {
        &self.values
    }

    /// `(date, value)` pairs of one series in row order.
    pub fn series_points(&self, id: SeriesId) -> impl Iterator<Item = (NaiveDateTime, f64)> + '_ {
        self.dates.iter().copied().zip(self.values(id).iter().copied())
    }

    /// Earliest and latest timestamp; `None` when empty.
    pub fn date_extent(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let min = self.dates.iter().min()?;
        let max = self.dates.iter().max()?;
        Some((*min, *max))
    }

    pub fn max_value(&self, id: SeriesId) -> Option<f64> {
        self.values(id).iter().copied().reduce(f64::max)
    }
}
