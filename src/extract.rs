//! Paper extraction from a proceedings listing page.
//!
//! The listing is a definition list: every paper title is a `dt.ptitle`
//! and its authors are the text of the next `dd` in document order,
//! separated by commas.

use scraper::{Html, Selector};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::models::Paper;

/// Title entries and candidate author blocks, matched in document order
const ENTRY_SELECTOR: &str = "dt.ptitle, dd";

/// Why an entry produced no paper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No `dd` follows the title anywhere in the page
    NoAuthorsBlock,
    /// The authors block holds no names once split and trimmed
    EmptyAuthors,
    EmptyTitle,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            SkipReason::NoAuthorsBlock => "no authors block",
            SkipReason::EmptyAuthors => "empty authors block",
            SkipReason::EmptyTitle => "empty title",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// Position among the title entries on the page, from 0
    pub index: usize,
    pub title: String,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipCounts {
    pub no_authors_block: usize,
    pub empty_authors: usize,
    pub empty_title: usize,
}

/// Everything extracted from one year's page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionReport {
    pub year: i32,
    /// Title entries located on the page, whether or not they parsed
    pub entries_found: usize,
    pub papers: Vec<Paper>,
    pub skipped: Vec<SkippedEntry>,
}

impl ExtractionReport {
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            entries_found: 0,
            papers: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn skip_counts(&self) -> SkipCounts {
        let mut counts = SkipCounts::default();
        for entry in &self.skipped {
            match entry.reason {
                SkipReason::NoAuthorsBlock => counts.no_authors_block += 1,
                SkipReason::EmptyAuthors => counts.empty_authors += 1,
                SkipReason::EmptyTitle => counts.empty_title += 1,
            }
        }
        counts
    }
}

/// Split an authors block on commas, trimming each name.
///
/// Order and duplicates are preserved; pieces that are empty after
/// trimming (trailing or doubled commas) are dropped.
pub fn split_authors(block: &str) -> Vec<String> {
    block
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// Extract every paper on a proceedings page for `year`.
///
/// Entries that cannot be turned into a paper are recorded in
/// [`ExtractionReport::skipped`] and never stop the rest of the page.
pub fn extract_papers(html: &str, year: i32) -> ExtractionReport {
    let mut report = ExtractionReport::empty(year);

    if html.trim().is_empty() {
        warn!("No HTML content to parse for year {}", year);
        return report;
    }

    let selector = match Selector::parse(ENTRY_SELECTOR) {
        Ok(selector) => selector,
        Err(e) => {
            error!("Invalid entry selector {:?}: {}", ENTRY_SELECTOR, e);
            return report;
        }
    };

    let document = Html::parse_document(html);

    // (is_title, text) for every matched element, in document order
    let blocks: Vec<(bool, String)> = document
        .select(&selector)
        .map(|element| {
            let is_title = element.value().name() == "dt";
            (is_title, element.text().collect::<String>())
        })
        .collect();

    let titles: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, (is_title, _))| *is_title)
        .map(|(pos, _)| pos)
        .collect();

    report.entries_found = titles.len();
    info!("Found {} paper entries for year {}", titles.len(), year);

    for (index, &pos) in titles.iter().enumerate() {
        let title = blocks[pos].1.trim().to_string();
        let authors_block = blocks[pos + 1..]
            .iter()
            .find(|(is_title, _)| !*is_title)
            .map(|(_, text)| text.as_str());

        match parse_entry(&title, authors_block) {
            Ok(paper) => report.papers.push(paper),
            Err(reason) => {
                warn!("Skipping paper {} for year {} ({}): {:?}", index, year, reason, title);
                report.skipped.push(SkippedEntry { index, title, reason });
            }
        }
    }

    info!(
        "Successfully extracted data for {} papers for year {}",
        report.papers.len(),
        year
    );
    report
}

fn parse_entry(title: &str, authors_block: Option<&str>) -> Result<Paper, SkipReason> {
    if title.is_empty() {
        return Err(SkipReason::EmptyTitle);
    }
    let block = authors_block.ok_or(SkipReason::NoAuthorsBlock)?;
    let authors = split_authors(block);
    if authors.is_empty() {
        return Err(SkipReason::EmptyAuthors);
    }
    Ok(Paper::new(title, authors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> String {
        format!("<html><body><div id=\"content\"><dl>{}</dl></div></body></html>", body)
    }

    #[test]
    fn test_two_entries() {
        let html = page(
            r#"<dt class="ptitle"><br><a href="/a.html">Paper A</a></dt>
               <dd>Jane Doe, John Smith</dd>
               <dt class="ptitle"><br><a href="/b.html">Paper B</a></dt>
               <dd>Jane Doe</dd>"#,
        );
        let report = extract_papers(&html, 2023);

        assert_eq!(report.year, 2023);
        assert_eq!(report.entries_found, 2);
        assert_eq!(
            report.papers,
            vec![
                Paper::new("Paper A", vec!["Jane Doe".into(), "John Smith".into()]),
                Paper::new("Paper B", vec!["Jane Doe".into()]),
            ]
        );
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_authors_inside_form_markup() {
        let html = page(
            r##"<dt class="ptitle"><br><a href="/x.html">Deep Things</a></dt>
               <dd>
                 <form id="form-1" action="/search" method="post">
                   <input type="hidden" name="query_author" value="Ada Lovelace">
                   <a href="#" onclick="document.getElementById('form-1').submit();">Ada Lovelace</a>,
                 </form>
                 <form id="form-2" action="/search" method="post">
                   <a href="#">Alan Turing</a>
                 </form>
               </dd>
               <dd>[<a href="/x.pdf">pdf</a>]</dd>"##,
        );
        let report = extract_papers(&html, 2024);
        assert_eq!(
            report.papers,
            vec![Paper::new("Deep Things", vec!["Ada Lovelace".into(), "Alan Turing".into()])]
        );
    }

    #[test]
    fn test_duplicate_authors_kept() {
        let html = page(r#"<dt class="ptitle">Echo</dt><dd>A, B, A</dd>"#);
        let report = extract_papers(&html, 2022);
        assert_eq!(report.papers[0].authors, vec!["A", "B", "A"]);
    }

    #[test]
    fn test_missing_authors_block_skipped() {
        let html = page(
            r#"<dt class="ptitle">Has Authors</dt><dd>A</dd>
               <dt class="ptitle">Orphan</dt>"#,
        );
        let report = extract_papers(&html, 2022);
        assert_eq!(report.entries_found, 2);
        assert_eq!(report.papers.len(), 1);
        assert_eq!(
            report.skipped,
            vec![SkippedEntry {
                index: 1,
                title: "Orphan".into(),
                reason: SkipReason::NoAuthorsBlock,
            }]
        );
    }

    #[test]
    fn test_bad_entry_does_not_stop_page() {
        let html = page(
            r#"<dt class="ptitle">First</dt><dd> , </dd>
               <dt class="ptitle">   </dt><dd>B</dd>
               <dt class="ptitle">Third</dt><dd>C</dd>"#,
        );
        let report = extract_papers(&html, 2022);
        assert_eq!(report.papers, vec![Paper::new("Third", vec!["C".into()])]);

        let counts = report.skip_counts();
        assert_eq!(counts.empty_authors, 1);
        assert_eq!(counts.empty_title, 1);
        assert_eq!(counts.no_authors_block, 0);
    }

    #[test]
    fn test_non_title_dt_ignored() {
        let html = page(r#"<dt>Day 1</dt><dt class="ptitle">Real</dt><dd>A</dd>"#);
        let report = extract_papers(&html, 2022);
        assert_eq!(report.entries_found, 1);
        assert_eq!(report.papers[0].title, "Real");
    }

    #[test]
    fn test_empty_page() {
        assert_eq!(extract_papers("", 2023), ExtractionReport::empty(2023));
        assert_eq!(extract_papers("  \n ", 2023), ExtractionReport::empty(2023));
    }

    #[test]
    fn test_page_without_entries() {
        let report = extract_papers("<html><body><p>Not found</p></body></html>", 2023);
        assert_eq!(report.entries_found, 0);
        assert!(report.papers.is_empty());
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let html = page(
            r#"<dt class="ptitle">P</dt><dd>A, B</dd>
               <dt class="ptitle">Q</dt><dd>B, C</dd>"#,
        );
        assert_eq!(extract_papers(&html, 2022), extract_papers(&html, 2022));
    }

    #[test]
    fn test_split_authors() {
        assert_eq!(split_authors(" Jane Doe ,John Smith,"), vec!["Jane Doe", "John Smith"]);
        assert!(split_authors(" , ").is_empty());
    }
}
