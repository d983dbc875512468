use serde::Serialize;

/// One proceedings entry as listed on the conference page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paper {
    pub title: String,
    /// Authors in listed order; duplicates are kept as they appear
    pub authors: Vec<String>,
}

impl Paper {
    pub fn new(title: impl Into<String>, authors: Vec<String>) -> Self {
        Self {
            title: title.into(),
            authors,
        }
    }
}
