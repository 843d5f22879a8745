//! Delimited output format for result tables

use anyhow::Result;
use std::io::Write;

use super::{ReportFormatter, ReportTable};

pub struct CsvFormatter;

impl ReportFormatter for CsvFormatter {
    fn write_table(
        &mut self,
        output: &mut dyn Write,
        _title: &str,
        table: &dyn ReportTable,
    ) -> Result<()> {
        let mut writer = ::csv::Writer::from_writer(output);

        let mut header = vec![table.index_name()];
        header.extend(table.columns().iter().copied());
        writer.write_record(&header)?;

        for record in table.records() {
            let mut fields = vec![record.index.render()];
            fields.extend(record.cells.iter().map(|c| c.render()));
            writer.write_record(&fields)?;
        }

        writer.flush()?;
        Ok(())
    }
}
