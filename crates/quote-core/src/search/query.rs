//! Search query.

use serde::{Deserialize, Serialize};

/// Queries shorter than this (after trimming) produce no results.
pub const MIN_QUERY_LEN: usize = 2;

/// A text query against the catalog.
///
/// Matching is plain case-insensitive substring matching on the trimmed
/// query; no character in the query has special meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    /// Query as typed.
    pub raw: String,
    /// Minimum trimmed length required to search.
    pub min_len: usize,
}

impl SearchQuery {
    /// Create a query with the default minimum length.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            min_len: MIN_QUERY_LEN,
        }
    }

    /// Set the minimum query length.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// The trimmed query.
    pub fn trimmed(&self) -> &str {
        self.raw.trim()
    }

    /// Lowercased trimmed query used for matching.
    pub fn needle(&self) -> String {
        self.trimmed().to_lowercase()
    }

    /// Whether the query is long enough to run.
    pub fn is_searchable(&self) -> bool {
        self.trimmed().chars().count() >= self.min_len
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_queries_not_searchable() {
        assert!(!SearchQuery::new("").is_searchable());
        assert!(!SearchQuery::new("a").is_searchable());
        assert!(!SearchQuery::new("  a  ").is_searchable());
        assert!(SearchQuery::new("ab").is_searchable());
    }

    #[test]
    fn test_needle_is_trimmed_lowercase() {
        assert_eq!(SearchQuery::new("  A10-X ").needle(), "a10-x");
    }

    #[test]
    fn test_custom_min_len() {
        let query = SearchQuery::new("abc").with_min_len(4);
        assert!(!query.is_searchable());
    }
}
