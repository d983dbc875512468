//! Page sources: the live proceedings site or a local mirror of it.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use tracing::debug;

use crate::error::FetchError;

/// Sent with every request; the proceedings host rejects obvious bots
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.6367.118 Safari/537.36";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can turn a URL into page text.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

impl<T: PageSource + ?Sized> PageSource for Box<T> {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTP client: one GET per call, bounded by a timeout.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(DEFAULT_TIMEOUT, BROWSER_USER_AGENT)
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })
    }
}

/// Serves pages from a local mirror instead of the network.
///
/// `https://host/a/b?q` is looked up at `<root>/host/a/b`, with `index.html`
/// appended when the last path segment has no extension.
pub struct LocalPages {
    root: PathBuf,
}

impl LocalPages {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, url: &str) -> PathBuf {
        let without_protocol = url
            .trim_start_matches("http://")
            .trim_start_matches("https://");
        let without_query = without_protocol
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let (domain, path) = without_query.split_once('/').unwrap_or((without_query, ""));

        // Allow the root to already point at the domain directory
        let base = if self.root.ends_with(domain) {
            self.root.clone()
        } else {
            self.root.join(domain)
        };

        let mut full_path = base.join(path);
        let last_segment = path.rsplit('/').next().unwrap_or_default();
        if last_segment.is_empty() || !last_segment.contains('.') {
            full_path = full_path.join("index.html");
        }
        full_path
    }
}

impl PageSource for LocalPages {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let path = self.path_for(url);
        debug!("Reading local file: {}", path.display());
        std::fs::read_to_string(&path).map_err(|source| FetchError::Local {
            url: url.to_string(),
            path,
            source,
        })
    }
}
