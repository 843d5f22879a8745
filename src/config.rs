use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name looked up in the working directory by [`SatConfig::load_from_file`]
pub const CONFIG_FILE_NAME: &str = "satlens.toml";

/// Output format for result tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
    Markdown,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
        }
    }
}

/// Main configuration for satlens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SatConfig {
    /// Path to the delimited schools file
    pub data_path: PathBuf,
    /// Directory receiving rendered charts
    pub figures_dir: PathBuf,
    /// Directory receiving result tables
    pub reports_dir: PathBuf,
    /// Fraction of the maximum section score a school needs to count as a best math school
    pub math_threshold_percentage: f64,
    /// Maximum possible score of one SAT section
    pub max_section_score: u32,
    /// Number of schools kept in the total SAT ranking
    pub top_n: usize,
    /// Number of histogram bins
    pub histogram_bins: usize,
    /// Figure size in inches (width, height)
    pub figure_size: (f64, f64),
    /// Dots per inch used to turn `figure_size` into pixels
    pub dpi: u32,
    /// Field delimiter of the input file
    pub delimiter: char,
    /// Output format for result tables (CSV, JSON, Markdown)
    pub report_format: ReportFormat,
    /// Render charts
    pub plots: bool,
    /// Enable debug logging
    pub verbose: bool,
}

impl SatConfig {
    /// Validates the configuration, ensuring the data file exists and parameters are in range.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.data_path.exists() {
            anyhow::bail!("Data file does not exist: {:?}", self.data_path);
        }
        if !(self.math_threshold_percentage > 0.0 && self.math_threshold_percentage <= 1.0) {
            anyhow::bail!(
                "Math threshold percentage must be in (0, 1], got {}",
                self.math_threshold_percentage
            );
        }
        if self.top_n == 0 {
            anyhow::bail!("top_n must be at least 1");
        }
        if self.histogram_bins == 0 {
            anyhow::bail!("histogram_bins must be at least 1");
        }
        if self.figure_size.0 <= 0.0 || self.figure_size.1 <= 0.0 || self.dpi == 0 {
            anyhow::bail!(
                "Figure size and DPI must be positive, got {:?} at {} dpi",
                self.figure_size,
                self.dpi
            );
        }
        if !self.delimiter.is_ascii() {
            anyhow::bail!("Delimiter must be a single ASCII character");
        }
        Ok(())
    }

    /// Attempts to load configuration from `satlens.toml` in the current directory.
    pub fn load_from_file() -> Option<Self> {
        std::fs::read_to_string(CONFIG_FILE_NAME)
            .ok()
            .and_then(|content| toml::from_str(&content).ok())
    }

    /// Chart dimensions in pixels.
    pub fn figure_pixels(&self) -> (u32, u32) {
        let dpi = f64::from(self.dpi);
        (
            (self.figure_size.0 * dpi).round() as u32,
            (self.figure_size.1 * dpi).round() as u32,
        )
    }
}

impl Default for SatConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/raw/schools.csv"),
            figures_dir: PathBuf::from("outputs/figures"),
            reports_dir: PathBuf::from("outputs/reports"),
            math_threshold_percentage: 0.8,
            max_section_score: 800,
            top_n: 10,
            histogram_bins: 30,
            figure_size: (10.0, 6.0),
            dpi: 300,
            delimiter: ',',
            report_format: ReportFormat::Csv,
            plots: true,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let config = SatConfig {
            data_path: PathBuf::from("non_existent_path_xyz_123.csv"),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_rejects_bad_threshold() -> anyhow::Result<()> {
        let file = tempfile::NamedTempFile::new()?;
        let mut config = SatConfig {
            data_path: file.path().to_path_buf(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.math_threshold_percentage = 1.5;
        assert!(config.validate().is_err());

        config.math_threshold_percentage = 0.8;
        config.top_n = 0;
        assert!(config.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SatConfig = toml::from_str("top_n = 5\nreport_format = \"Json\"").unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.histogram_bins, 30);
        assert_eq!(config.max_section_score, 800);
    }

    #[test]
    fn test_figure_pixels() {
        let config = SatConfig::default();
        assert_eq!(config.figure_pixels(), (3000, 1800));
    }
}
