//! Top-level run used by the binary: pick a page source, run the pipeline,
//! log the outcome and map it to an exit code.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::config::RunConfig;
use crate::fetch::{HttpFetcher, LocalPages, PageSource};
use crate::models::YearSet;
use crate::pipeline::{Pipeline, RunReport, YearStatus};
use crate::report::report_header;

/// Run the analysis end to end.
///
/// Returns `Ok(false)` when the run finished but no spreadsheet was written,
/// and `Err` for anything that stopped the run from starting.
pub fn run(config: RunConfig, local_dir: Option<&Path>, print_json: bool) -> Result<bool> {
    config.validate().context("Invalid configuration")?;
    info!("Starting CVPR Conference contributor analysis...");

    let source: Box<dyn PageSource> = match local_dir {
        Some(dir) => {
            if !dir.exists() {
                anyhow::bail!("Local directory does not exist: {}", dir.display());
            }
            info!("Using local files from: {}", dir.display());
            Box::new(LocalPages::new(dir))
        }
        None => Box::new(
            HttpFetcher::new(config.request_timeout, &config.user_agent)
                .context("Failed to build HTTP client")?,
        ),
    };

    let years = config.years.clone();
    let pipeline = Pipeline::new(source, config);
    let report = pipeline.run();

    log_summary(&report, &years);

    if print_json {
        let json = serde_json::to_string_pretty(&report.rows).context("Failed to serialize rows")?;
        println!("{}", json);
    }

    match &report.written {
        Ok(path) => {
            info!("Analysis complete!");
            info!("Results saved to: {}", path.display());
            Ok(true)
        }
        Err(e) => {
            error!("Failed to save results to Excel: {}", e);
            Ok(false)
        }
    }
}

/// Exit code for a finished run. Errors that escaped `run` are logged as critical.
pub fn exit_code(result: Result<bool>) -> ExitCode {
    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(severity = "critical", "Critical error in main function: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn log_summary(report: &RunReport, years: &YearSet) {
    for outcome in &report.outcomes {
        match &outcome.status {
            YearStatus::Collected => info!(
                "CVPR {}: {} papers ({} skipped), {} authors, {} authorships",
                outcome.year, outcome.papers, outcome.skipped, outcome.authors, outcome.occurrences
            ),
            YearStatus::NoPapers => warn!(
                "CVPR {}: page had {} entries but no usable papers",
                outcome.year, outcome.entries_found
            ),
            YearStatus::FetchFailed(reason) => warn!("CVPR {}: not collected ({})", outcome.year, reason),
        }
    }

    if report.rows.is_empty() {
        return;
    }
    info!("{}", report_header(years).join(" | "));
    for row in &report.rows {
        let counts: Vec<String> = row.counts.iter().map(|(_, c)| c.to_string()).collect();
        info!("{} | {} | {}", row.author, counts.join(" | "), row.total);
    }
}
