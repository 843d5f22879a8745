//! Output format modules for result tables

pub mod csv;
pub mod json;
pub mod markdown;

use anyhow::{Context, Result};
use log::info;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::analysis::{BoroughStats, MathRanking, TotalRanking};
use crate::config::ReportFormat;

/// A single table value
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Number(f64),
    Empty,
}

impl Cell {
    /// A score cell, integral when its source column held whole numbers.
    pub fn score(value: f64, integer: bool) -> Self {
        if integer && value.fract() == 0.0 {
            Cell::Integer(value as i64)
        } else {
            Cell::Number(value)
        }
    }

    /// Text form used by delimited and markdown output. Floats always carry a decimal point.
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Integer(n) => n.to_string(),
            Cell::Number(x) => format!("{:?}", x),
            Cell::Empty => String::new(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Cell::Text(s) => serde_json::Value::from(s.as_str()),
            Cell::Integer(n) => serde_json::Value::from(*n),
            Cell::Number(x) => serde_json::Value::from(*x),
            Cell::Empty => serde_json::Value::Null,
        }
    }
}

/// One output row: the index value followed by the column values
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub index: Cell,
    pub cells: Vec<Cell>,
}

/// A result table that can be written by any [`ReportFormatter`]
pub trait ReportTable {
    /// Name of the index column; empty for a plain row index.
    fn index_name(&self) -> &str;
    fn columns(&self) -> &[&'static str];
    fn records(&self) -> Vec<Record>;
}

impl ReportTable for Vec<MathRanking> {
    fn index_name(&self) -> &str {
        ""
    }

    fn columns(&self) -> &[&'static str] {
        &["school_name", "average_math"]
    }

    fn records(&self) -> Vec<Record> {
        self.iter()
            .map(|r| Record {
                index: Cell::Integer(r.index as i64),
                cells: vec![
                    Cell::Text(r.school_name.clone()),
                    Cell::score(r.average_math, r.integer),
                ],
            })
            .collect()
    }
}

impl ReportTable for Vec<TotalRanking> {
    fn index_name(&self) -> &str {
        ""
    }

    fn columns(&self) -> &[&'static str] {
        &["school_name", "total_SAT"]
    }

    fn records(&self) -> Vec<Record> {
        self.iter()
            .map(|r| Record {
                index: Cell::Integer(r.index as i64),
                cells: vec![
                    Cell::Text(r.school_name.clone()),
                    Cell::score(r.total_sat, r.integer),
                ],
            })
            .collect()
    }
}

impl ReportTable for Vec<BoroughStats> {
    fn index_name(&self) -> &str {
        "borough"
    }

    fn columns(&self) -> &[&'static str] {
        &["num_schools", "average_SAT", "std_SAT"]
    }

    fn records(&self) -> Vec<Record> {
        self.iter()
            .map(|b| Record {
                index: Cell::Text(b.borough.clone()),
                cells: vec![
                    Cell::Integer(b.num_schools as i64),
                    Cell::Number(b.average_sat),
                    b.std_sat.map_or(Cell::Empty, Cell::Number),
                ],
            })
            .collect()
    }
}

pub trait ReportFormatter {
    fn write_table(
        &mut self,
        output: &mut dyn Write,
        title: &str,
        table: &dyn ReportTable,
    ) -> Result<()>;
}

pub fn create_formatter(format: ReportFormat) -> Box<dyn ReportFormatter> {
    match format {
        ReportFormat::Csv => Box::new(csv::CsvFormatter),
        ReportFormat::Json => Box::new(json::JsonFormatter::new()),
        ReportFormat::Markdown => Box::new(markdown::MarkdownFormatter),
    }
}

/// Writes `table` to `<output_dir>/<filename>.<ext>`, creating the directory if needed.
pub fn save_analysis_results(
    table: &dyn ReportTable,
    filename: &str,
    output_dir: &Path,
    format: ReportFormat,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create report directory: {:?}", output_dir))?;

    let path = output_dir.join(format!("{}.{}", filename, format.extension()));
    let file = File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
    let mut writer = BufWriter::new(file);

    create_formatter(format).write_table(&mut writer, filename, table)?;
    writer.flush()?;

    info!("Results saved to: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn stats() -> Vec<BoroughStats> {
        vec![
            BoroughStats {
                borough: "Manhattan".to_string(),
                num_schools: 89,
                average_sat: 1340.13,
                std_sat: Some(230.29),
            },
            BoroughStats {
                borough: "Staten Island".to_string(),
                num_schools: 1,
                average_sat: 1439.0,
                std_sat: None,
            },
        ]
    }

    #[test]
    fn test_cell_render() {
        assert_eq!(Cell::Number(2144.0).render(), "2144.0");
        assert_eq!(Cell::Number(7.07).render(), "7.07");
        assert_eq!(Cell::Integer(3).render(), "3");
        assert_eq!(Cell::score(2144.0, true).render(), "2144");
        assert_eq!(Cell::score(2144.0, false).render(), "2144.0");
        assert_eq!(Cell::Empty.render(), "");
    }

    #[test]
    fn test_save_creates_directory() -> Result<()> {
        let dir = TempDir::new()?;
        let out = dir.path().join("outputs/reports");

        let path = save_analysis_results(&stats(), "borough_stats", &out, ReportFormat::Csv)?;

        assert_eq!(path, out.join("borough_stats.csv"));
        let content = fs::read_to_string(path)?;
        assert_eq!(
            content,
            "borough,num_schools,average_SAT,std_SAT\n\
             Manhattan,89,1340.13,230.29\n\
             Staten Island,1,1439.0,\n"
        );
        Ok(())
    }

    #[test]
    fn test_extension_follows_format() -> Result<()> {
        let dir = TempDir::new()?;
        let json = save_analysis_results(&stats(), "s", dir.path(), ReportFormat::Json)?;
        let md = save_analysis_results(&stats(), "s", dir.path(), ReportFormat::Markdown)?;
        assert_eq!(json.extension().unwrap(), "json");
        assert_eq!(md.extension().unwrap(), "md");
        Ok(())
    }
}
