//! Search ranking.
//!
//! Products that pass the substring filter are ordered by a chain of
//! tie-break predicates:
//!
//! 1. exact code match
//! 2. code starts with the query
//! 3. code matches but the description does not
//! 4. code, ascending, ignoring case
//!
//! Codes are unique in a catalog, so the order is total.

use std::cmp::Ordering;

use crate::catalog::{Catalog, Product};
use crate::search::{Match, SearchQuery, SearchResults};

/// Sort key for one matched product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankKey {
    pub exact: bool,
    pub prefix: bool,
    pub code_only: bool,
    pub code: String,
}

impl RankKey {
    pub fn new(product: &Product, needle: &str, hit: Match) -> Self {
        let code = product.code.key();
        Self {
            exact: code == needle,
            prefix: code.starts_with(needle),
            code_only: hit.code_only(),
            code: code.to_string(),
        }
    }
}

impl Ord for RankKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // `true` ranks first for every predicate.
        other
            .exact
            .cmp(&self.exact)
            .then_with(|| other.prefix.cmp(&self.prefix))
            .then_with(|| other.code_only.cmp(&self.code_only))
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl PartialOrd for RankKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Filter and rank the catalog for a query.
///
/// Returns empty results when the query is too short or the catalog is
/// empty.
pub fn rank(query: &SearchQuery, catalog: &Catalog) -> SearchResults {
    if !query.is_searchable() {
        return SearchResults::empty(query.trimmed());
    }

    let needle = query.needle();
    let mut hits: Vec<(RankKey, &Product)> = catalog
        .iter()
        .filter_map(|product| {
            let hit = Match::of(product, &needle);
            hit.is_hit()
                .then(|| (RankKey::new(product, &needle, hit), product))
        })
        .collect();

    hits.sort_by(|a, b| a.0.cmp(&b.0));

    tracing::debug!(query = %needle, hits = hits.len(), "Ranked search results");

    SearchResults::new(
        query.trimmed(),
        hits.into_iter().map(|(_, p)| p.clone()).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_products(vec![
            Product::new("ZA10", "Panel light", "1.00"),
            Product::new("A10-X", "Downlight", "2.00"),
            Product::new("B5", "Fits the A10 housing", "3.00"),
            Product::new("A10", "Base A10 model", "4.00"),
            Product::new("XA10", "A10 spare", "5.00"),
            Product::new("C7", "Unrelated", "6.00"),
        ])
    }

    fn codes(results: &SearchResults) -> Vec<&str> {
        results.items.iter().map(|p| p.code.as_str()).collect()
    }

    #[test]
    fn test_short_query_returns_nothing() {
        let catalog = catalog();
        assert!(rank(&SearchQuery::new("A"), &catalog).is_empty());
        assert!(rank(&SearchQuery::new(" "), &catalog).is_empty());
    }

    #[test]
    fn test_ranking_order() {
        let results = rank(&SearchQuery::new("a10"), &catalog());
        // exact, prefix, code-only, then the rest alphabetically
        assert_eq!(codes(&results), vec!["A10", "A10-X", "ZA10", "B5", "XA10"]);
    }

    #[test]
    fn test_exact_code_first_any_case() {
        let catalog = catalog();
        for product in catalog.iter() {
            let query = SearchQuery::new(product.code.as_str().to_lowercase());
            let results = rank(&query, &catalog);
            assert_eq!(results.items[0].code, product.code);

            let query = SearchQuery::new(product.code.as_str().to_uppercase());
            let results = rank(&query, &catalog);
            assert_eq!(results.items[0].code, product.code);
        }
    }

    #[test]
    fn test_order_is_antisymmetric_and_transitive() {
        let catalog = catalog();
        let needle = "a10";
        let keys: Vec<RankKey> = catalog
            .iter()
            .map(|p| RankKey::new(p, needle, Match::of(p, needle)))
            .collect();

        for a in &keys {
            for b in &keys {
                assert_eq!(a.cmp(b), b.cmp(a).reverse());
                if a.code != b.code {
                    assert_ne!(a.cmp(b), Ordering::Equal);
                }
                for c in &keys {
                    if a < b && b < c {
                        assert!(a < c);
                    }
                }
            }
        }
    }

    #[test]
    fn test_regex_characters_are_literal() {
        let catalog = Catalog::from_products(vec![
            Product::new("A.B", "dotted", "1.00"),
            Product::new("AXB", "plain", "1.00"),
        ]);
        let results = rank(&SearchQuery::new("a.b"), &catalog);
        assert_eq!(codes(&results), vec!["A.B"]);
    }

    #[test]
    fn test_empty_catalog() {
        let results = rank(&SearchQuery::new("a10"), &Catalog::default());
        assert!(results.is_empty());
    }
}
