// File: crates/stream-render-skia/tests/common.rs
// Purpose: Shared fixtures for the raster tests (five flat series over three months).

use chrono::NaiveDate;
use stream_core::{Row, SeriesCatalog};

pub fn flat_rows() -> Vec<Row> {
    let catalog = SeriesCatalog::default();
    (1..=3)
        .map(|m| {
            catalog
                .names()
                .fold(Row::on(NaiveDate::from_ymd_opt(2024, m, 1).unwrap()), |r, n| r.with(n, 10.0))
        })
        .collect()
}
