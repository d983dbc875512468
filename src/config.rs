use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::fetch::{BROWSER_USER_AGENT, DEFAULT_TIMEOUT};
use crate::models::YearSet;
use crate::report::DEFAULT_REPORT_FILE;
use crate::utils::conference::{
    is_supported_year, proceedings_url, DEFAULT_URL_TEMPLATE, YEAR_PLACEHOLDER,
};

pub const DEFAULT_YEARS: [i32; 3] = [2022, 2023, 2024];
pub const DEFAULT_TOP_N: usize = 3;
pub const DEFAULT_COURTESY_DELAY: Duration = Duration::from_secs(2);
pub const DEFAULT_LOG_DIR: &str = "docs/logs";

/// Settings for one run of the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub years: YearSet,
    pub top_n: usize,
    /// Proceedings page URL with a `{year}` placeholder
    pub url_template: String,
    /// Pause between consecutive page fetches
    pub courtesy_delay: Duration,
    pub request_timeout: Duration,
    pub user_agent: String,
    pub output_path: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            years: YearSet::new(DEFAULT_YEARS),
            top_n: DEFAULT_TOP_N,
            url_template: DEFAULT_URL_TEMPLATE.to_string(),
            courtesy_delay: DEFAULT_COURTESY_DELAY,
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: BROWSER_USER_AGENT.to_string(),
            output_path: PathBuf::from(DEFAULT_REPORT_FILE),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.years.is_empty() {
            return Err(ConfigError::NoYears);
        }
        if let Some(year) = self.years.iter().find(|&y| !is_supported_year(y)) {
            return Err(ConfigError::YearOutOfRange(year));
        }
        if !self.url_template.contains(YEAR_PLACEHOLDER) {
            return Err(ConfigError::MissingYearPlaceholder(self.url_template.clone()));
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    pub fn url_for(&self, year: i32) -> String {
        proceedings_url(&self.url_template, year)
    }
}

/// Place `file_name` under `output_dir` when one is given
pub fn resolve_output_path(output_dir: Option<&Path>, file_name: &str) -> PathBuf {
    match output_dir {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}
