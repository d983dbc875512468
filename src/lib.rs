pub mod aggregate;
pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod models;
pub mod observability;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod utils;

// Re-export commonly used items
pub use aggregate::{aggregate, merge};
pub use config::{resolve_output_path, RunConfig};
pub use error::{ConfigError, FetchError, ObservabilityError, ReportError};
pub use extract::{extract_papers, split_authors, ExtractionReport, SkipReason, SkippedEntry};
pub use fetch::{HttpFetcher, LocalPages, PageSource};
pub use models::{ContributionTable, Paper, RankedRow, YearSet, YearTally};
pub use observability::Observability;
pub use pipeline::{Collection, Pipeline, RunReport, YearOutcome, YearStatus};
pub use rank::rank;
pub use report::{report_header, write_report};
pub use utils::{make_conference_slug, parse_conference_slug, proceedings_url};
