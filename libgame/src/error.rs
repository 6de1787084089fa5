use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("seed has {rows} rows, expected {height}")]
    SeedRowCount { rows: usize, height: usize },

    #[error("seed row {row} has {len} cells, expected {width}")]
    SeedRowLength { row: usize, len: usize, width: usize },

    #[error("position ({x}, {y}) is outside the {width}x{height} board")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// The output target refused text before anything was written.
    #[error("invalid output target: {0}")]
    InvalidArgument(String),

    #[error("couldn't write board")]
    Write(#[from] io::Error),
}
