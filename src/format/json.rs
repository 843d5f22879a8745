//! JSON output format for result tables

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

use super::{ReportFormatter, ReportTable};

#[derive(Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct TableDocument<'a> {
    title: &'a str,
    generated_at: String,
    index: &'a str,
    rows: Vec<Map<String, Value>>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn write_table(
        &mut self,
        output: &mut dyn Write,
        title: &str,
        table: &dyn ReportTable,
    ) -> Result<()> {
        let index_key = match table.index_name() {
            "" => "index",
            name => name,
        };

        let rows = table
            .records()
            .into_iter()
            .map(|record| {
                let mut row = Map::new();
                row.insert(index_key.to_string(), record.index.to_json());
                for (column, cell) in table.columns().iter().zip(&record.cells) {
                    row.insert(column.to_string(), cell.to_json());
                }
                row
            })
            .collect();

        let doc = TableDocument {
            title,
            generated_at: chrono::Utc::now().to_rfc3339(),
            index: index_key,
            rows,
        };

        serde_json::to_writer_pretty(&mut *output, &doc)?;
        writeln!(output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{BoroughStats, TotalRanking};

    #[test]
    fn test_json_rows() {
        let rows = vec![TotalRanking {
            index: 88,
            school_name: "Stuyvesant High School".to_string(),
            total_sat: 2144.0,
            integer: true,
        }];

        let mut output = Vec::new();
        JsonFormatter::new()
            .write_table(&mut output, "top_10_schools", &rows)
            .unwrap();

        let doc: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(doc["title"], "top_10_schools");
        assert_eq!(doc["index"], "index");
        assert_eq!(doc["rows"][0]["index"], 88);
        assert_eq!(doc["rows"][0]["school_name"], "Stuyvesant High School");
        assert_eq!(doc["rows"][0]["total_SAT"], 2144);
        assert!(doc["rows"][0]["total_SAT"].is_i64());
    }

    #[test]
    fn test_missing_std_is_null() {
        let stats = vec![BoroughStats {
            borough: "Staten Island".to_string(),
            num_schools: 1,
            average_sat: 1439.0,
            std_sat: None,
        }];

        let mut output = Vec::new();
        JsonFormatter::new()
            .write_table(&mut output, "borough_stats", &stats)
            .unwrap();

        let doc: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(doc["rows"][0]["borough"], "Staten Island");
        assert!(doc["rows"][0]["std_SAT"].is_null());
    }
}
