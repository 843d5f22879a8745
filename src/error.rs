//! Error types for the satlens library

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, cleaning or reporting school data
#[derive(Debug, Error)]
pub enum SatError {
    #[error("Data file not found: {0:?}")]
    FileNotFound(PathBuf),

    #[error("Column '{0}' not found in dataset")]
    ColumnMissing(String),

    #[error("Missing value for '{column}' at row {row}")]
    MissingValue { row: usize, column: String },

    #[error("Invalid number '{value}' for '{column}' at row {row}")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SatError>;
