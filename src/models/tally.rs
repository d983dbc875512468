use std::collections::BTreeMap;

use serde::Serialize;

/// Author occurrence counts for a single conference year.
///
/// Keys are author strings exactly as extracted; no case folding or
/// identity resolution is applied, so "J. Doe" and "Jane Doe" stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearTally {
    year: i32,
    counts: BTreeMap<String, u32>,
}

impl YearTally {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            counts: BTreeMap::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Count one more occurrence of `author`
    pub fn record(&mut self, author: &str) {
        match self.counts.get_mut(author) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(author.to_string(), 1);
            }
        }
    }

    pub fn count(&self, author: &str) -> u32 {
        self.counts.get(author).copied().unwrap_or(0)
    }

    /// Number of distinct authors seen this year
    pub fn authors(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts, i.e. the number of author occurrences recorded
    pub fn occurrences(&self) -> u64 {
        self.counts.values().map(|&c| u64::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(author, &count)| (author.as_str(), count))
    }

    /// Highest counts first, ties by author name
    pub fn top(&self, n: usize) -> Vec<(&str, u32)> {
        let mut entries: Vec<(&str, u32)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries.truncate(n);
        entries
    }
}

/// Multi-year author -> (year -> count) table built up over one run.
///
/// A missing (author, year) pair means zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributionTable {
    authors: BTreeMap<String, BTreeMap<i32, u32>>,
}

impl ContributionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a year's tally into the table.
    ///
    /// Authors are created on first appearance. Merging two tallies for the
    /// same year adds their counts together.
    pub fn merge(&mut self, tally: YearTally) {
        let year = tally.year;
        for (author, count) in tally.counts {
            *self
                .authors
                .entry(author)
                .or_default()
                .entry(year)
                .or_insert(0) += count;
        }
    }

    pub fn count(&self, author: &str, year: i32) -> u32 {
        self.authors
            .get(author)
            .and_then(|years| years.get(&year))
            .copied()
            .unwrap_or(0)
    }

    pub fn contains(&self, author: &str) -> bool {
        self.authors.contains_key(author)
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<i32, u32>)> {
        self.authors
            .iter()
            .map(|(author, years)| (author.as_str(), years))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(year: i32, authors: &[&str]) -> YearTally {
        let mut tally = YearTally::new(year);
        for author in authors {
            tally.record(author);
        }
        tally
    }

    #[test]
    fn test_record_counts_every_occurrence() {
        let t = tally(2023, &["Jane Doe", "John Smith", "Jane Doe"]);
        assert_eq!(t.count("Jane Doe"), 2);
        assert_eq!(t.count("John Smith"), 1);
        assert_eq!(t.count("Nobody"), 0);
        assert_eq!(t.authors(), 2);
        assert_eq!(t.occurrences(), 3);
    }

    #[test]
    fn test_keys_are_exact() {
        let t = tally(2023, &["Jane Doe", "jane doe", "J. Doe"]);
        assert_eq!(t.authors(), 3);
    }

    #[test]
    fn test_top_orders_by_count_then_name() {
        let t = tally(2022, &["B", "A", "C", "C"]);
        assert_eq!(t.top(2), vec![("C", 2), ("A", 1)]);
        assert_eq!(t.top(10).len(), 3);
    }

    #[test]
    fn test_merge_creates_and_fills_authors() {
        let mut table = ContributionTable::new();
        table.merge(tally(2022, &["X", "X", "Y"]));
        table.merge(tally(2024, &["X", "Z"]));

        assert_eq!(table.len(), 3);
        assert_eq!(table.count("X", 2022), 2);
        assert_eq!(table.count("X", 2024), 1);
        assert_eq!(table.count("X", 2023), 0);
        assert_eq!(table.count("Z", 2022), 0);
        assert!(table.contains("Y"));
        assert!(!table.contains("W"));
    }

    #[test]
    fn test_merge_same_year_sums() {
        let mut table = ContributionTable::new();
        table.merge(tally(2023, &["X"]));
        table.merge(tally(2023, &["X", "X"]));
        assert_eq!(table.count("X", 2023), 3);
    }

    #[test]
    fn test_merge_empty_tally_adds_nothing() {
        let mut table = ContributionTable::new();
        table.merge(YearTally::new(2023));
        assert!(table.is_empty());
    }
}
