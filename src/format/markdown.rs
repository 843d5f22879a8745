//! Markdown output format for result tables

use anyhow::Result;
use std::io::Write;

use super::{ReportFormatter, ReportTable};

pub struct MarkdownFormatter;

fn escape(cell: &str) -> String {
    cell.replace('|', "\\|")
}

impl ReportFormatter for MarkdownFormatter {
    fn write_table(
        &mut self,
        output: &mut dyn Write,
        title: &str,
        table: &dyn ReportTable,
    ) -> Result<()> {
        writeln!(output, "# {}", title)?;
        writeln!(output)?;
        writeln!(
            output,
            "*Generated at {}*",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(output)?;

        let mut header = vec![table.index_name()];
        header.extend(table.columns().iter().copied());
        writeln!(output, "| {} |", header.join(" | "))?;
        writeln!(
            output,
            "|{}|",
            header.iter().map(|_| "---").collect::<Vec<_>>().join("|")
        )?;

        for record in table.records() {
            let mut cells = vec![escape(&record.index.render())];
            cells.extend(record.cells.iter().map(|c| escape(&c.render())));
            writeln!(output, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}
