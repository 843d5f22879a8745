use crate::analysis::{
    get_best_math_schools, get_borough_stats, get_largest_std_borough,
    get_top_schools_by_total_sat,
};
use crate::config::SatConfig;
use crate::core::{AnalysisReport, PipelineEvent};
use crate::data::{calculate_total_sat, clean_data, get_math_threshold, load_delimited};
use crate::format::{ReportTable, save_analysis_results};
use crate::plot::{ChartOptions, plot_null_values, plot_score_distribution};
use anyhow::{Context, Result, anyhow};
use crossbeam_channel::Sender;
use log::{debug, error, info, warn};

/// Main entry point in CLI mode.
///
/// Runs the pipeline on a worker thread and logs its progress events on the calling thread.
pub fn run(config: SatConfig) -> Result<AnalysisReport> {
    let (tx, rx) = crossbeam_channel::unbounded();

    let config_clone = config.clone();
    let handle = std::thread::spawn(move || {
        let result = run_pipeline(&config_clone, Some(tx.clone()));
        if let Err(ref e) = result {
            let _ = tx.send(PipelineEvent::Error(format!("{:#}", e)));
        }
        result
    });

    for event in rx {
        match event {
            PipelineEvent::Loaded(n) => info!("Loaded {} schools from {:?}", n, config.data_path),
            PipelineEvent::Cleaned { kept, dropped } => {
                info!("Kept {} schools, dropped {} with missing values", kept, dropped)
            }
            PipelineEvent::FigureWritten(p) => info!("Figure saved to: {}", p.display()),
            PipelineEvent::ReportWritten(p) => debug!("Report written: {}", p.display()),
            PipelineEvent::Complete(msg) => info!("{}", msg),
            PipelineEvent::Error(e) => error!("{}", e),
        }
    }

    handle
        .join()
        .map_err(|_| anyhow!("Analysis thread panicked"))?
}

/// Load, clean, analyse and report, in that order.
pub fn run_pipeline(
    config: &SatConfig,
    tx: Option<Sender<PipelineEvent>>,
) -> Result<AnalysisReport> {
    let notify = |e: PipelineEvent| {
        if let Some(ref tx) = tx {
            let _ = tx.send(e);
        }
    };

    config.validate()?;

    // 1. Load
    let raw = load_delimited(&config.data_path, config.delimiter as u8)
        .with_context(|| format!("Failed to load {:?}", config.data_path))?;
    notify(PipelineEvent::Loaded(raw.len()));

    let mut report = AnalysisReport {
        rows_loaded: raw.len(),
        ..Default::default()
    };
    let options = ChartOptions::from_config(config);

    if config.plots {
        let path = config.figures_dir.join("null_values.svg");
        plot_null_values(&raw, &path, &options)?;
        notify(PipelineEvent::FigureWritten(path.clone()));
        report.figures.push(path);
    }

    // 2. Clean and derive totals
    let cleaned = clean_data(&raw);
    notify(PipelineEvent::Cleaned {
        kept: cleaned.len(),
        dropped: raw.len() - cleaned.len(),
    });
    let schools = calculate_total_sat(&cleaned)?;
    report.rows_cleaned = schools.len();

    if config.plots {
        if schools.is_empty() {
            warn!("No schools left after cleaning, skipping score histograms");
        } else {
            let charts = [
                (
                    "math_distribution.svg",
                    "Distribution of Average Math Scores",
                    "Average Math Score",
                    schools.iter().map(|s| s.average_math).collect::<Vec<_>>(),
                ),
                (
                    "total_sat_distribution.svg",
                    "Distribution of Total SAT Scores",
                    "Total SAT Score",
                    schools.iter().map(|s| s.total_sat).collect(),
                ),
            ];
            for (file, title, xlabel, values) in charts {
                let path = config.figures_dir.join(file);
                plot_score_distribution(&values, title, xlabel, &path, &options)?;
                notify(PipelineEvent::FigureWritten(path.clone()));
                report.figures.push(path);
            }
        }
    }

    // 3. Analyse
    report.math_threshold =
        get_math_threshold(config.math_threshold_percentage, config.max_section_score);
    report.best_math = get_best_math_schools(&schools, report.math_threshold);
    report.top_schools = get_top_schools_by_total_sat(&schools, config.top_n);
    report.borough_stats = get_borough_stats(&schools);
    report.largest_std_borough = get_largest_std_borough(&schools);
    debug!(
        "{} schools at or above {}, {} boroughs",
        report.best_math.len(),
        report.math_threshold,
        report.borough_stats.len()
    );

    // 4. Save result tables
    let largest: Vec<_> = report.largest_std_borough.iter().cloned().collect();
    let top_name = format!("top_{}_schools", config.top_n);
    let tables: [(&str, &dyn ReportTable); 4] = [
        ("best_math_schools", &report.best_math),
        (top_name.as_str(), &report.top_schools),
        ("borough_stats", &report.borough_stats),
        ("largest_std_borough", &largest),
    ];

    let mut written = Vec::with_capacity(tables.len());
    for (name, table) in tables {
        let path = save_analysis_results(table, name, &config.reports_dir, config.report_format)?;
        notify(PipelineEvent::ReportWritten(path.clone()));
        written.push(path);
    }
    report.reports = written;

    notify(PipelineEvent::Complete(format!(
        "Analysis complete: {} figures, {} reports",
        report.figures.len(),
        report.reports.len()
    )));
    Ok(report)
}
