//! Core types shared across satlens modules

use std::fmt;
use std::path::PathBuf;

use crate::analysis::{BoroughStats, MathRanking, TotalRanking};

/// Which section score columns were read as whole numbers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerScores {
    pub math: bool,
    pub reading: bool,
    pub writing: bool,
}

impl IntegerScores {
    pub const ALL: Self = Self {
        math: true,
        reading: true,
        writing: true,
    };

    /// The total is whole only when every section is.
    pub fn total(&self) -> bool {
        self.math && self.reading && self.writing
    }
}

/// A cleaned school row with its derived total SAT score
#[derive(Debug, Clone, PartialEq)]
pub struct School {
    /// Position of the row in the source file
    pub index: usize,
    pub school_name: String,
    pub borough: String,
    pub average_math: f64,
    pub average_reading: f64,
    pub average_writing: f64,
    pub total_sat: f64,
    pub integer_scores: IntegerScores,
}

impl School {
    pub fn new(
        index: usize,
        school_name: impl Into<String>,
        borough: impl Into<String>,
        average_math: f64,
        average_reading: f64,
        average_writing: f64,
    ) -> Self {
        Self {
            index,
            school_name: school_name.into(),
            borough: borough.into(),
            average_math,
            average_reading,
            average_writing,
            total_sat: average_math + average_reading + average_writing,
            integer_scores: IntegerScores::default(),
        }
    }

    pub fn with_integer_scores(mut self, integer_scores: IntegerScores) -> Self {
        self.integer_scores = integer_scores;
        self
    }
}

/// Events emitted while the pipeline runs
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// Rows read from the data file
    Loaded(usize),
    /// Rows kept and dropped by cleaning
    Cleaned { kept: usize, dropped: usize },
    /// A chart has been written
    FigureWritten(PathBuf),
    /// A result table has been written
    ReportWritten(PathBuf),
    /// Pipeline complete with message
    Complete(String),
    /// Error occurred
    Error(String),
}

/// Everything one pipeline run produces
#[derive(Debug, Clone, Default)]
pub struct AnalysisReport {
    pub rows_loaded: usize,
    pub rows_cleaned: usize,
    pub math_threshold: f64,
    pub best_math: Vec<MathRanking>,
    pub top_schools: Vec<TotalRanking>,
    pub borough_stats: Vec<BoroughStats>,
    pub largest_std_borough: Option<BoroughStats>,
    pub figures: Vec<PathBuf>,
    pub reports: Vec<PathBuf>,
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "School SAT Analysis")?;
        writeln!(f, "===================")?;
        writeln!(
            f,
            "Schools:             {} loaded, {} after cleaning",
            self.rows_loaded, self.rows_cleaned
        )?;
        writeln!(
            f,
            "Best math schools:   {} at or above {:.1}",
            self.best_math.len(),
            self.math_threshold
        )?;

        if !self.top_schools.is_empty() {
            writeln!(f)?;
            writeln!(f, "Top {} schools by total SAT:", self.top_schools.len())?;
            for (rank, s) in self.top_schools.iter().enumerate() {
                writeln!(f, "  {:>2}. {} ({})", rank + 1, s.school_name, s.total_sat)?;
            }
        }

        if !self.borough_stats.is_empty() {
            writeln!(f)?;
            writeln!(f, "{:<16} {:>8} {:>12} {:>10}", "Borough", "Schools", "Average SAT", "Std SAT")?;
            for b in &self.borough_stats {
                writeln!(
                    f,
                    "{:<16} {:>8} {:>12.2} {:>10}",
                    b.borough,
                    b.num_schools,
                    b.average_sat,
                    b.std_sat.map_or_else(|| "-".to_string(), |s| format!("{:.2}", s))
                )?;
            }
        }

        if let Some(b) = &self.largest_std_borough {
            writeln!(f)?;
            writeln!(f, "Largest spread:      {}", b.borough)?;
        }

        Ok(())
    }
}
