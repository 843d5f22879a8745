//! Missing values per column

use anyhow::{Result, bail};
use plotters::prelude::*;
use std::path::Path;

use super::{ChartOptions, ensure_parent};
use crate::data::RawTable;

/// Renders a bar chart with the number of missing values in each column of `table`.
pub fn plot_null_values(table: &RawTable, output_path: &Path, options: &ChartOptions) -> Result<()> {
    let counts = table.null_counts();
    if counts.is_empty() {
        bail!("Table has no columns to plot");
    }
    let columns = counts.len() as u32;
    let y_max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0) as u32;

    ensure_parent(output_path)?;
    let root = SVGBackend::new(output_path, options.size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Number of NaNs per Column", options.font(18.0))
        .margin(options.px(10))
        .x_label_area_size(options.px(60))
        .y_label_area_size(options.px(55))
        .build_cartesian_2d((0u32..columns).into_segmented(), 0u32..y_max + 1)?;

    let label = |v: &SegmentValue<u32>| match v {
        SegmentValue::CenterOf(i) => counts
            .get(*i as usize)
            .map(|(name, _)| name.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(counts.len())
        .x_label_formatter(&label)
        .x_desc("Column")
        .y_desc("Number of NaNs")
        .label_style(options.font(11.0))
        .axis_desc_style(options.font(13.0))
        .draw()?;

    let data = || counts.iter().enumerate().map(|(i, (_, c))| (i as u32, *c as u32));
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLUE.mix(0.5).filled())
            .margin(options.px(8))
            .data(data()),
    )?;
    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BLACK.stroke_width(1))
            .margin(options.px(8))
            .data(data()),
    )?;

    root.present()?;
    Ok(())
}
