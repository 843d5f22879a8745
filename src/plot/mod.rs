//! Chart rendering (SVG via plotters)

pub mod histogram;
pub mod nulls;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::SatConfig;

pub use histogram::{HistogramBin, histogram_bins, plot_score_distribution};
pub use nulls::plot_null_values;

/// Pixel size and styling shared by every chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    pub size: (u32, u32),
    pub bins: usize,
    /// Font and margin multiplier; 1.0 at 100 dpi
    pub scale: f64,
}

impl ChartOptions {
    pub fn from_config(config: &SatConfig) -> Self {
        Self {
            size: config.figure_pixels(),
            bins: config.histogram_bins,
            scale: f64::from(config.dpi) / 100.0,
        }
    }

    fn font(&self, points: f64) -> (&'static str, f64) {
        ("sans-serif", points * self.scale)
    }

    fn px(&self, base: u32) -> u32 {
        (f64::from(base) * self.scale).round() as u32
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::from_config(&SatConfig::default())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create figure directory: {:?}", parent))?;
    }
    Ok(())
}
