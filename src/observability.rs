//! Run-scoped logging: one timestamped log file plus the console.
//!
//! The subscriber is installed as the default for the current thread only
//! and is torn down when the [`Observability`] value is finished or
//! dropped, which also closes the log file.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;
use tracing::subscriber::DefaultGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ObservabilityError;

pub const LOG_FILE_PREFIX: &str = "cvpr_scraper";
const LOG_FILE_EXTENSION: &str = "log";

pub struct Observability {
    log_path: PathBuf,
    _guard: DefaultGuard,
}

impl Observability {
    /// Create `log_dir` if needed, open this run's log file and start
    /// sending events to it and to stderr.
    pub fn init(log_dir: &Path) -> Result<Self, ObservabilityError> {
        std::fs::create_dir_all(log_dir).map_err(|source| ObservabilityError::CreateDir {
            path: log_dir.to_path_buf(),
            source,
        })?;

        let stem = log_file_stem(Local::now().naive_local());
        let appender = RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(stem.clone())
            .filename_suffix(LOG_FILE_EXTENSION)
            .build(log_dir)?;
        let log_path = log_dir.join(format!("{}.{}", stem, LOG_FILE_EXTENSION));

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(appender),
            );
        let guard = tracing::subscriber::set_default(subscriber);

        info!("Logging initialized. Log file: {}", log_path.display());
        Ok(Self {
            log_path,
            _guard: guard,
        })
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Flush and close the log file
    pub fn finish(self) {
        info!("Log file saved to: {}", self.log_path.display());
    }
}

/// `cvpr_scraper_YYYYmmdd_HHMMSS`
pub fn log_file_stem(at: NaiveDateTime) -> String {
    format!("{}_{}", LOG_FILE_PREFIX, at.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_log_file_stem() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 5, 3)
            .unwrap();
        assert_eq!(log_file_stem(at), "cvpr_scraper_20261018_090503");
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("docs").join("logs");

        let observability = Observability::init(&log_dir).unwrap();
        let log_path = observability.log_path().to_path_buf();
        tracing::error!("observability test marker");
        observability.finish();

        assert!(log_path.starts_with(&log_dir));
        assert_eq!(log_path.extension().and_then(|e| e.to_str()), Some("log"));
        let contents = std::fs::read_to_string(&log_path).unwrap();
        assert!(contents.contains("observability test marker"));
    }
}
