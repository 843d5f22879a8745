//! Delimited file loading into an untyped table

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;

use crate::error::{Result, SatError};

lazy_static! {
    /// Field values treated as missing, in addition to empty fields
    static ref NA_TOKENS: HashSet<&'static str> = [
        "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "NULL", "null", "None", "#N/A",
        "<NA>", "#NA", "-1.#IND", "1.#IND", "1.#QNAN", "-1.#QNAN", "#N/A N/A",
    ]
    .into_iter()
    .collect();
}

/// One data row; `index` is its position in the source file and survives cleaning
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub index: usize,
    pub values: Vec<Option<String>>,
}

impl RawRow {
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(Option::is_none)
    }
}

/// Header plus rows, exactly as read from disk
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
    /// Per column: every value was present and a whole number when the file was read
    pub integer_columns: Vec<bool>,
}

fn is_integer(value: &Option<String>) -> bool {
    value
        .as_deref()
        .is_some_and(|v| v.trim().parse::<i64>().is_ok())
}

impl RawTable {
    /// Builds a table and infers which columns hold only whole numbers.
    pub fn new(headers: Vec<String>, rows: Vec<RawRow>) -> Self {
        let integer_columns = (0..headers.len())
            .map(|col| {
                !rows.is_empty()
                    && rows
                        .iter()
                        .all(|row| row.values.get(col).is_some_and(is_integer))
            })
            .collect();
        Self {
            headers,
            rows,
            integer_columns,
        }
    }

    pub fn is_integer_column(&self, col: usize) -> bool {
        self.integer_columns.get(col).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SatError::ColumnMissing(name.to_string()))
    }

    /// Number of missing values per column, in header order.
    pub fn null_counts(&self) -> Vec<(String, usize)> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, name)| {
                let count = self
                    .rows
                    .iter()
                    .filter(|row| row.values.get(col).is_none_or(Option::is_none))
                    .count();
                (name.clone(), count)
            })
            .collect()
    }
}

/// Only exact NA tokens are missing; surrounding whitespace is kept as part of the value.
fn parse_field(raw: &str) -> Option<String> {
    if raw.is_empty() || NA_TOKENS.contains(raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Loads the schools file at `path` using a comma delimiter.
pub fn load_schools_data<P: AsRef<Path>>(path: P) -> Result<RawTable> {
    load_delimited(path, b',')
}

/// Loads a delimited file with a header row; short rows are padded with missing values.
pub fn load_delimited<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<RawTable> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SatError::FileNotFound(path.to_path_buf()),
        _ => SatError::Io(e),
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let mut values: Vec<Option<String>> = record.iter().map(parse_field).collect();
        values.resize(headers.len(), None);
        rows.push(RawRow { index, values });
    }

    debug!(
        "Loaded {} rows x {} columns from {:?}",
        rows.len(),
        headers.len(),
        path
    );
    Ok(RawTable::new(headers, rows))
}
