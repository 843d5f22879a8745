use anyhow::Result;
use clap::{Parser, ValueEnum};
use satlens::{ReportFormat, SatConfig, run};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliReportFormat {
    Csv,
    Json,
    Md,
}

impl From<CliReportFormat> for ReportFormat {
    fn from(f: CliReportFormat) -> Self {
        match f {
            CliReportFormat::Csv => ReportFormat::Csv,
            CliReportFormat::Json => ReportFormat::Json,
            CliReportFormat::Md => ReportFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Rankings and borough statistics for school SAT results", long_about = None)]
struct Args {
    /// Schools data file (delimited, with header row)
    data: Option<PathBuf>,

    /// Directory for rendered charts
    #[arg(long)]
    figures_dir: Option<PathBuf>,

    /// Directory for result tables
    #[arg(long)]
    reports_dir: Option<PathBuf>,

    /// Result table format
    #[arg(short, long, value_enum)]
    format: Option<CliReportFormat>,

    /// Fraction of the maximum section score needed for the best math list (e.g. 0.8)
    #[arg(long)]
    threshold: Option<f64>,

    /// Maximum score of one SAT section
    #[arg(long)]
    max_score: Option<u32>,

    /// Number of schools in the total SAT ranking
    #[arg(short = 'n', long)]
    top: Option<usize>,

    /// Number of histogram bins
    #[arg(long)]
    bins: Option<usize>,

    /// Input field delimiter
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Skip chart rendering
    #[arg(long)]
    no_plots: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = SatConfig::load_from_file().unwrap_or_default();

    // 2. Override with CLI args
    if let Some(p) = args.data {
        config.data_path = p;
    }
    if let Some(d) = args.figures_dir {
        config.figures_dir = d;
    }
    if let Some(d) = args.reports_dir {
        config.reports_dir = d;
    }
    if let Some(f) = args.format {
        config.report_format = f.into();
    }
    if let Some(t) = args.threshold {
        config.math_threshold_percentage = t;
    }
    if let Some(m) = args.max_score {
        config.max_section_score = m;
    }
    if let Some(n) = args.top {
        config.top_n = n;
    }
    if let Some(b) = args.bins {
        config.histogram_bins = b;
    }
    if let Some(d) = args.delimiter {
        config.delimiter = d;
    }
    if args.no_plots {
        config.plots = false;
    }
    if args.verbose {
        config.verbose = true;
    }

    let level = if config.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let report = run(config)?;
    println!("{}", report);

    Ok(())
}
