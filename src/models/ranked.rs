use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// One output record: an author, their per-year counts and the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedRow {
    pub author: String,
    /// (year, count) for every requested year, ascending, zero-filled
    pub counts: Vec<(i32, u32)>,
    pub total: u32,
}

impl RankedRow {
    pub fn count(&self, year: i32) -> u32 {
        self.counts
            .iter()
            .find(|(y, _)| *y == year)
            .map(|&(_, count)| count)
            .unwrap_or(0)
    }
}

// Serialized as a flat record matching the spreadsheet columns:
// {"Author": .., "2022": .., "2023": .., "Total": ..}
impl Serialize for RankedRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.counts.len() + 2))?;
        map.serialize_entry("Author", &self.author)?;
        for (year, count) in &self.counts {
            map.serialize_entry(&year.to_string(), count)?;
        }
        map.serialize_entry("Total", &self.total)?;
        map.end()
    }
}
