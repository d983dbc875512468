use crate::models::{ContributionTable, Paper, YearTally};

/// Count author occurrences across one year's papers.
///
/// Every occurrence counts, so an author listed twice on one paper is
/// counted twice.
pub fn aggregate(papers: &[Paper], year: i32) -> YearTally {
    let mut tally = YearTally::new(year);
    for paper in papers {
        for author in &paper.authors {
            tally.record(author);
        }
    }
    tally
}

/// Fold `tally` into `table` and hand the table back
pub fn merge(mut table: ContributionTable, tally: YearTally) -> ContributionTable {
    table.merge(tally);
    table
}
