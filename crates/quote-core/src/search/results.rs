//! Search results.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Ranked products for one query.
///
/// Results are a snapshot: a new query or a catalog reload produces a new
/// value rather than updating this one.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchResults {
    /// Trimmed query that produced these results.
    pub query: String,
    /// Matching products, best first.
    pub items: Vec<Product>,
}

impl SearchResults {
    pub fn new(query: impl Into<String>, items: Vec<Product>) -> Self {
        Self {
            query: query.into(),
            items,
        }
    }

    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
