//! In-memory product catalog.

use crate::catalog::Product;
use crate::error::QuoteError;
use std::collections::HashMap;
use std::path::Path;

/// The full product list, loaded once and replaced wholesale on reload.
///
/// Load order is preserved; lookups by code ignore case.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from a product list.
    ///
    /// Entries with an empty code are dropped. When a code appears more
    /// than once (ignoring case) the first occurrence wins.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::default();

        for product in products {
            if product.code.is_empty() {
                tracing::warn!("Dropping catalog entry with empty code");
                continue;
            }
            if catalog.index.contains_key(product.code.key()) {
                tracing::warn!(code = %product.code, "Dropping duplicate catalog code");
                continue;
            }
            catalog
                .index
                .insert(product.code.key().to_string(), catalog.products.len());
            catalog.products.push(product);
        }

        catalog
    }

    /// Parse a catalog from a JSON array of `{code, description, dealerPrice}`.
    pub fn from_json_str(json: &str) -> Result<Self, QuoteError> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| QuoteError::DataLoad(e.to_string()))?;
        Ok(Self::from_products(products))
    }

    /// Load a catalog file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, QuoteError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| QuoteError::DataLoad(format!("{}: {}", path.display(), e)))?;
        let catalog = Self::from_json_str(&content)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Find a product by code, ignoring case.
    pub fn get(&self, code: &str) -> Option<&Product> {
        self.index
            .get(&code.trim().to_lowercase())
            .and_then(|&i| self.products.get(i))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Products in load order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_products(vec![
            Product::new("A10-X", "Panel Light 1 year warranty", "450.00"),
            Product::new("B20", "Bulb", "80.00"),
        ])
    }

    #[test]
    fn test_lookup_ignores_case() {
        let catalog = sample();
        assert_eq!(catalog.get("a10-x").unwrap().code.as_str(), "A10-X");
        assert!(catalog.contains("b20"));
        assert!(!catalog.contains("C30"));
    }

    #[test]
    fn test_duplicates_keep_first() {
        let catalog = Catalog::from_products(vec![
            Product::new("A1", "first", "1.00"),
            Product::new("a1", "second", "2.00"),
            Product::new("", "no code", "3.00"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("A1").unwrap().description, "first");
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {"code": "A10-X", "description": "Panel", "dealerPrice": "450.00"},
            {"code": "B20", "description": "Bulb", "dealerPrice": "80.00"}
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1].code.as_str(), "B20");
    }

    #[test]
    fn test_bad_json_is_data_load_error() {
        let err = Catalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, QuoteError::DataLoad(_)));
    }

    #[test]
    fn test_missing_file_is_data_load_error() {
        let err = Catalog::load("/nonexistent/data.json").unwrap_err();
        assert!(matches!(err, QuoteError::DataLoad(_)));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json_str("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
