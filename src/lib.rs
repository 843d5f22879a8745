pub mod analysis;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod format;
pub mod plot;
pub mod runner;

// Re-export key items for convenience
pub use analysis::{BoroughStats, MathRanking, TotalRanking};
pub use config::{ReportFormat, SatConfig};
pub use crate::core::{AnalysisReport, IntegerScores, PipelineEvent, School};
pub use error::SatError;
pub use runner::{run, run_pipeline};
