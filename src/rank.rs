use crate::models::{ContributionTable, RankedRow, YearSet};

/// Select the `top_n` authors by total contributions over `years`.
///
/// Counts for years outside `years` are ignored, and authors with nothing
/// in the requested years are not ranked at all. Rows are ordered by total
/// descending; equal totals are ordered by author name ascending.
pub fn rank(table: &ContributionTable, years: &YearSet, top_n: usize) -> Vec<RankedRow> {
    let mut rows: Vec<RankedRow> = table
        .iter()
        .filter_map(|(author, by_year)| {
            let counts: Vec<(i32, u32)> = years
                .iter()
                .map(|year| (year, by_year.get(&year).copied().unwrap_or(0)))
                .collect();
            let total: u32 = counts.iter().map(|&(_, count)| count).sum();

            (total > 0).then(|| RankedRow {
                author: author.to_string(),
                counts,
                total,
            })
        })
        .collect();

    rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.author.cmp(&b.author)));
    rows.truncate(top_n);
    rows
}
