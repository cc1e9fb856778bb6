// File: crates/stream-core/src/error.rs
// Summary: Error type for catalog and colour construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("series catalog must contain at least one series")]
    EmptyCatalog,

    #[error("duplicate series name in catalog: {0}")]
    DuplicateSeries(String),

    #[error("invalid colour literal: {0:?}")]
    InvalidColor(String),

    #[error("unknown series: {0}")]
    UnknownSeries(String),
}

pub type Result<T> = std::result::Result<T, StreamError>;
