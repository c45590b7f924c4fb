//! Substring match filter.

use crate::catalog::{Catalog, Product};
use crate::search::{SearchQuery, SearchResults};

/// Where a query matched a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Match {
    /// Lowercase code contains the query.
    pub code: bool,
    /// Lowercase description contains the query.
    pub description: bool,
}

impl Match {
    /// Match a lowercased needle against a product.
    pub fn of(product: &Product, needle: &str) -> Self {
        Self {
            code: product.code.key().contains(needle),
            description: product.description_key().contains(needle),
        }
    }

    /// Whether the product passes the filter.
    pub fn is_hit(&self) -> bool {
        self.code || self.description
    }

    /// Only the code matched, so it is the more specific hit.
    pub fn code_only(&self) -> bool {
        self.code && !self.description
    }
}

/// Products matching the query, in catalog order.
///
/// Returns empty results when the query is too short.
pub fn filter(query: &SearchQuery, catalog: &Catalog) -> SearchResults {
    if !query.is_searchable() {
        return SearchResults::empty(query.trimmed());
    }

    let needle = query.needle();
    let items = catalog
        .iter()
        .filter(|product| Match::of(product, &needle).is_hit())
        .cloned()
        .collect();
    SearchResults::new(query.trimmed(), items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_and_description() {
        let product = Product::new("DL-A10", "A10 housing downlight", "1.00");
        let m = Match::of(&product, "a10");
        assert!(m.code && m.description);
        assert!(!m.code_only());
    }

    #[test]
    fn test_no_hit() {
        let product = Product::new("DL-A10", "Downlight", "1.00");
        assert!(!Match::of(&product, "panel").is_hit());
    }

    #[test]
    fn test_special_characters_are_literal() {
        let product = Product::new("AB", "Bulb (E27) x", "1.00");
        assert!(!Match::of(&product, "a.").is_hit());
        assert!(Match::of(&product, "(e27)").is_hit());
        assert!(!Match::of(&product, ".*").is_hit());
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let catalog = Catalog::from_products(vec![
            Product::new("ZZ-LED", "LED strip", "1.00"),
            Product::new("B5", "Bulb", "2.00"),
            Product::new("LED-1", "Bulb", "3.00"),
        ]);
        let results = filter(&SearchQuery::new("led"), &catalog);
        let codes: Vec<&str> = results.items.iter().map(|p| p.code.as_str()).collect();
        assert_eq!(codes, vec!["ZZ-LED", "LED-1"]);
        assert!(filter(&SearchQuery::new("l"), &catalog).is_empty());
    }
}
