//! The full run: fetch, extract and tally each year in turn, then rank the
//! accumulated table and write the report.

use std::path::PathBuf;
use std::thread;

use serde::Serialize;
use tracing::{error, info};

use crate::aggregate::aggregate;
use crate::config::RunConfig;
use crate::error::ReportError;
use crate::extract::extract_papers;
use crate::fetch::PageSource;
use crate::models::{ContributionTable, RankedRow};
use crate::rank::rank;
use crate::report::write_report;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YearStatus {
    /// At least one paper was extracted and tallied
    Collected,
    /// The page was fetched but yielded no papers
    NoPapers,
    /// The page could not be fetched; the year contributes nothing
    FetchFailed(String),
}

/// What happened to one requested year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearOutcome {
    pub year: i32,
    pub status: YearStatus,
    pub entries_found: usize,
    pub papers: usize,
    pub skipped: usize,
    /// Distinct authors in this year's tally
    pub authors: usize,
    /// Author occurrences in this year's tally
    pub occurrences: u64,
}

impl YearOutcome {
    fn failed(year: i32, reason: String) -> Self {
        Self {
            year,
            status: YearStatus::FetchFailed(reason),
            entries_found: 0,
            papers: 0,
            skipped: 0,
            authors: 0,
            occurrences: 0,
        }
    }
}

/// The table after every year has been processed
#[derive(Debug, Clone)]
pub struct Collection {
    pub table: ContributionTable,
    pub outcomes: Vec<YearOutcome>,
}

#[derive(Debug)]
pub struct RunReport {
    pub outcomes: Vec<YearOutcome>,
    /// Distinct authors across all requested years
    pub authors: usize,
    pub rows: Vec<RankedRow>,
    /// Where the spreadsheet went, or why it was not written
    pub written: Result<PathBuf, ReportError>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.written.is_ok()
    }
}

pub struct Pipeline<S> {
    source: S,
    config: RunConfig,
}

impl<S: PageSource> Pipeline<S> {
    pub fn new(source: S, config: RunConfig) -> Self {
        Self { source, config }
    }

    /// Process every requested year in ascending order.
    ///
    /// A year that fails to fetch contributes nothing and the run moves on
    /// to the next one. Fetches are spaced by the configured courtesy delay.
    pub fn collect(&self) -> Collection {
        info!(
            "Getting top {} contributors for years {:?}",
            self.config.top_n,
            self.config.years.as_slice()
        );

        let mut table = ContributionTable::new();
        let mut outcomes = Vec::with_capacity(self.config.years.len());

        for (i, year) in self.config.years.iter().enumerate() {
            if i > 0 && !self.config.courtesy_delay.is_zero() {
                thread::sleep(self.config.courtesy_delay);
            }
            outcomes.push(self.process_year(year, &mut table));
        }

        Collection { table, outcomes }
    }

    fn process_year(&self, year: i32, table: &mut ContributionTable) -> YearOutcome {
        info!("Processing CVPR {} data...", year);
        let url = self.config.url_for(year);

        info!("Fetching URL: {}", url);
        let html = match self.source.fetch(&url) {
            Ok(html) => {
                info!("Successfully fetched {}", url);
                html
            }
            Err(e) => {
                error!("Failed to get HTML content for CVPR {}: {}", year, e);
                return YearOutcome::failed(year, e.to_string());
            }
        };

        let extraction = extract_papers(&html, year);
        let tally = aggregate(&extraction.papers, year);
        info!("Found {} unique authors for CVPR {}", tally.authors(), year);

        let status = if extraction.papers.is_empty() {
            YearStatus::NoPapers
        } else {
            YearStatus::Collected
        };
        let outcome = YearOutcome {
            year,
            status,
            entries_found: extraction.entries_found,
            papers: extraction.papers.len(),
            skipped: extraction.skipped.len(),
            authors: tally.authors(),
            occurrences: tally.occurrences(),
        };

        table.merge(tally);
        outcome
    }

    /// Collect, rank and write the spreadsheet.
    pub fn run(&self) -> RunReport {
        let Collection { table, outcomes } = self.collect();

        let rows = rank(&table, &self.config.years, self.config.top_n);
        if rows.is_empty() {
            error!("No top contributors found across {} authors", table.len());
        } else {
            info!("Successfully identified top {} contributors", rows.len());
        }

        let output_path = self.config.output_path.clone();
        let written = write_report(&rows, &self.config.years, &output_path).map(|()| output_path);

        RunReport {
            outcomes,
            authors: table.len(),
            rows,
            written,
        }
    }
}
