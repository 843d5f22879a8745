//! Score distribution histograms

use anyhow::{Result, bail};
use plotters::prelude::*;
use std::path::Path;

use super::{ChartOptions, ensure_parent};

/// One histogram bar covering `[start, end)`; the last bin also includes `end`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// Splits the range of `values` into `bins` equal-width bins.
///
/// When every value is equal the range is widened by 0.5 on each side.
pub fn histogram_bins(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || bins == 0 {
        return Vec::new();
    }

    let mut lo = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }

    let width = (hi - lo) / bins as f64;
    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            start: lo + width * i as f64,
            end: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count: 0,
        })
        .collect();

    for v in finite {
        let slot = (((v - lo) / width) as usize).min(bins - 1);
        result[slot].count += 1;
    }
    result
}

/// Renders a histogram of `values` to `output_path`.
pub fn plot_score_distribution(
    values: &[f64],
    title: &str,
    xlabel: &str,
    output_path: &Path,
    options: &ChartOptions,
) -> Result<()> {
    let bins = histogram_bins(values, options.bins);
    let (Some(first), Some(last)) = (bins.first(), bins.last()) else {
        bail!("No values to plot for '{}'", title);
    };
    let y_max = bins.iter().map(|b| b.count).max().unwrap_or(0) as u32;

    ensure_parent(output_path)?;
    let root = SVGBackend::new(output_path, options.size).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, options.font(18.0))
        .margin(options.px(10))
        .x_label_area_size(options.px(45))
        .y_label_area_size(options.px(55))
        .build_cartesian_2d(first.start..last.end, 0u32..y_max + 1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(xlabel)
        .y_desc("Frequency")
        .label_style(options.font(11.0))
        .axis_desc_style(options.font(13.0))
        .draw()?;

    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.start, 0), (b.end, b.count as u32)], BLUE.mix(0.7).filled())
    }))?;
    chart.draw_series(bins.iter().map(|b| {
        Rectangle::new([(b.start, 0), (b.end, b.count as u32)], BLACK.stroke_width(1))
    }))?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_bins_cover_range() {
        let values = [300.0, 350.0, 400.0, 450.0, 500.0];
        let bins = histogram_bins(&values, 4);

        assert_eq!(bins.len(), 4);
        assert_eq!(bins[0].start, 300.0);
        assert_eq!(bins[3].end, 500.0);
        let counts: Vec<usize> = bins.iter().map(|b| b.count).collect();
        // Max lands in the closed last bin
        assert_eq!(counts, vec![1, 1, 1, 2]);
    }

    #[test]
    fn test_bins_constant_values() {
        let bins = histogram_bins(&[500.0, 500.0, 500.0], 2);
        assert_eq!(bins[0].start, 499.5);
        assert_eq!(bins[1].end, 500.5);
        assert_eq!(bins[0].count + bins[1].count, 3);
    }

    #[test]
    fn test_bins_empty() {
        assert!(histogram_bins(&[], 30).is_empty());
        assert!(histogram_bins(&[f64::NAN], 30).is_empty());
    }

    #[test]
    fn test_plot_writes_svg() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("figures/math.svg");
        let options = ChartOptions {
            size: (400, 300),
            bins: 5,
            scale: 1.0,
        };

        plot_score_distribution(
            &[320.0, 410.0, 455.5, 600.0, 754.0],
            "Distribution of Average Math Scores",
            "Average Math Score",
            &path,
            &options,
        )?;

        let svg = fs::read_to_string(&path)?;
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Frequency"));
        Ok(())
    }

    #[test]
    fn test_plot_rejects_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.svg");
        assert!(plot_score_distribution(&[], "t", "x", &path, &ChartOptions::default()).is_err());
        assert!(!path.exists());
    }
}
