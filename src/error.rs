use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("grid is empty")]
    EmptyGrid,

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("no start position 'S' in grid")]
    MissingStart,

    #[error("second start position 'S' at ({row}, {col})")]
    MultipleStarts { row: usize, col: usize },

    #[error("target {target} is a multiple of the period {period}; no step below it lines up with a sample")]
    UnsampleableTarget { target: u64, period: u64 },

    #[error("quadratic extrapolation needs three samples, found {found}")]
    InsufficientSamples { found: usize },

    #[error("extrapolated value overflows i64")]
    Overflow,

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
