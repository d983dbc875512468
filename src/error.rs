use std::path::PathBuf;

use thiserror::Error;

/// Failure to obtain a page. Never fatal: the affected year counts as empty.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not read local copy of {url} at {}: {source}", path.display())]
    Local {
        url: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to persist the ranked rows.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no rows to write")]
    NoRows,
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one year must be requested")]
    NoYears,
    #[error("year {0} is outside the supported range 1983..=2100")]
    YearOutOfRange(i32),
    #[error("url template {0:?} has no {{year}} placeholder")]
    MissingYearPlaceholder(String),
    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

#[derive(Error, Debug)]
pub enum ObservabilityError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open log file: {0}")]
    Appender(#[from] tracing_appender::rolling::InitError),
}
