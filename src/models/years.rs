use serde::Serialize;

/// Requested conference years, ascending and deduplicated.
///
/// This is the only source of column order for ranked rows and the
/// spreadsheet, so map iteration order never leaks into the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct YearSet(Vec<i32>);

impl YearSet {
    pub fn new(years: impl IntoIterator<Item = i32>) -> Self {
        let mut years: Vec<i32> = years.into_iter().collect();
        years.sort_unstable();
        years.dedup();
        Self(years)
    }

    pub fn contains(&self, year: i32) -> bool {
        self.0.binary_search(&year).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[i32]> for YearSet {
    fn from(years: &[i32]) -> Self {
        Self::new(years.iter().copied())
    }
}
