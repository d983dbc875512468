#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use std::time::{Duration, Instant};

use cvpr_contributors::{FetchError, PageSource, RunConfig, YearSet};

pub const TEST_URL_TEMPLATE: &str = "https://proceedings.test/CVPR{year}?day=all";

/// In-memory page source with scripted responses, recording every request
#[derive(Default)]
pub struct ScriptedPages {
    pages: HashMap<String, Result<String, u16>>,
    requests: RefCell<Vec<String>>,
    request_times: RefCell<Vec<Instant>>,
}

impl ScriptedPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, year: i32, html: impl Into<String>) -> Self {
        self.pages.insert(url_for(year), Ok(html.into()));
        self
    }

    pub fn status(mut self, year: i32, status: u16) -> Self {
        self.pages.insert(url_for(year), Err(status));
        self
    }

    /// The scripted page for `year`, or an empty string
    pub fn html(&self, year: i32) -> String {
        match self.pages.get(&url_for(year)) {
            Some(Ok(html)) => html.clone(),
            _ => String::new(),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    /// When each request arrived, in request order
    pub fn request_times(&self) -> Vec<Instant> {
        self.request_times.borrow().clone()
    }
}

impl PageSource for ScriptedPages {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        self.request_times.borrow_mut().push(Instant::now());
        match self.pages.get(url) {
            Some(Ok(html)) => Ok(html.clone()),
            Some(Err(status)) => Err(FetchError::Status {
                url: url.to_string(),
                status: *status,
            }),
            None => Err(FetchError::Local {
                url: url.to_string(),
                path: "unscripted".into(),
                source: std::io::Error::new(std::io::ErrorKind::TimedOut, "simulated timeout"),
            }),
        }
    }
}

pub fn url_for(year: i32) -> String {
    TEST_URL_TEMPLATE.replace("{year}", &year.to_string())
}

/// Build a proceedings listing page from (title, authors) pairs
pub fn listing(entries: &[(&str, &[&str])]) -> String {
    let mut body = String::new();
    for (i, (title, authors)) in entries.iter().enumerate() {
        body.push_str(&format!(
            "<dt class=\"ptitle\"><br><a href=\"/content/paper_{i}.html\">{title}</a></dt>\n<dd>\n"
        ));
        let links: Vec<String> = authors
            .iter()
            .map(|a| format!("<form action=\"/search\" method=\"post\"><a href=\"#\">{a}</a></form>"))
            .collect();
        body.push_str(&links.join(",\n"));
        body.push_str("\n</dd>\n<dd>[<a href=\"/paper.pdf\">pdf</a>]</dd>\n");
    }
    format!("<html><body><div id=\"content\"><dl>\n{body}</dl></div></body></html>")
}

pub fn test_config(years: &[i32], top_n: usize, output_path: &Path) -> RunConfig {
    RunConfig {
        years: YearSet::from(years),
        top_n,
        url_template: TEST_URL_TEMPLATE.to_string(),
        courtesy_delay: Duration::ZERO,
        output_path: output_path.to_path_buf(),
        ..RunConfig::default()
    }
}
