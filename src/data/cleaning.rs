//! Missing-value removal and the derived total SAT column

use log::debug;

use crate::core::{IntegerScores, School};
use crate::data::loader::{RawRow, RawTable};
use crate::error::{Result, SatError};

pub const SCHOOL_NAME: &str = "school_name";
pub const BOROUGH: &str = "borough";
pub const AVERAGE_MATH: &str = "average_math";
pub const AVERAGE_READING: &str = "average_reading";
pub const AVERAGE_WRITING: &str = "average_writing";

/// Drops every row holding at least one missing value.
///
/// Row indices and the column types inferred at load time are kept.
pub fn clean_data(table: &RawTable) -> RawTable {
    let rows: Vec<RawRow> = table
        .rows
        .iter()
        .filter(|row| !row.has_missing())
        .cloned()
        .collect();

    debug!("Dropped {} rows with missing values", table.len() - rows.len());
    RawTable {
        headers: table.headers.clone(),
        rows,
        integer_columns: table.integer_columns.clone(),
    }
}

/// Minimum math score for the "best math" selection.
pub fn get_math_threshold(percentage: f64, max_score: u32) -> f64 {
    f64::from(max_score) * percentage
}

struct Columns {
    name: usize,
    borough: usize,
    math: usize,
    reading: usize,
    writing: usize,
}

impl Columns {
    fn resolve(table: &RawTable) -> Result<Self> {
        Ok(Self {
            name: table.column_index(SCHOOL_NAME)?,
            borough: table.column_index(BOROUGH)?,
            math: table.column_index(AVERAGE_MATH)?,
            reading: table.column_index(AVERAGE_READING)?,
            writing: table.column_index(AVERAGE_WRITING)?,
        })
    }
}

fn text<'a>(row: &'a RawRow, col: usize, name: &str) -> Result<&'a str> {
    row.values
        .get(col)
        .and_then(|v| v.as_deref())
        .ok_or_else(|| SatError::MissingValue {
            row: row.index,
            column: name.to_string(),
        })
}

fn number(row: &RawRow, col: usize, name: &str) -> Result<f64> {
    let value = text(row, col, name)?;
    value.trim().parse().map_err(|_| SatError::InvalidNumber {
        row: row.index,
        column: name.to_string(),
        value: value.to_string(),
    })
}

/// Builds typed schools with `total_sat = math + reading + writing`.
///
/// Expects a cleaned table; a missing required field is reported as an error.
/// Section columns read as whole numbers are flagged so reports keep them integral.
pub fn calculate_total_sat(table: &RawTable) -> Result<Vec<School>> {
    let cols = Columns::resolve(table)?;
    let integer_scores = IntegerScores {
        math: table.is_integer_column(cols.math),
        reading: table.is_integer_column(cols.reading),
        writing: table.is_integer_column(cols.writing),
    };

    table
        .rows
        .iter()
        .map(|row| {
            Ok(School::new(
                row.index,
                text(row, cols.name, SCHOOL_NAME)?,
                text(row, cols.borough, BOROUGH)?,
                number(row, cols.math, AVERAGE_MATH)?,
                number(row, cols.reading, AVERAGE_READING)?,
                number(row, cols.writing, AVERAGE_WRITING)?,
            )
            .with_integer_scores(integer_scores))
        })
        .collect()
}
