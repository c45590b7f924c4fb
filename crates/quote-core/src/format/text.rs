//! Plain-text export of quotes and search results.
//!
//! Layout (each block separated by a blank line):
//!
//! ```text
//! ACME (Dealer's Price)
//! ========
//!
//! 5 PCS
//! A10-X-DL
//! Recessed Downlight (1yr warranty)
//! ₱450.00/pc
//!
//! Prices subject to change. ... Price valid as of March 5, 2025.
//! ```

use chrono::NaiveDate;

use crate::catalog::Product;
use crate::format::normalize_description;
use crate::money::{format_price, Currency};
use crate::session::QuoteLineItem;

/// Rule printed under the header line.
pub const HEADER_RULE: &str = "========";

/// Footer text placed before the date.
pub const DEFAULT_DISCLAIMER: &str = "Prices subject to change. Stocks subject to availability. VAT inclusive. Warranty as specified. Price valid as of";

/// Format a date as `Month D, YYYY`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Renders export text.
#[derive(Debug, Clone)]
pub struct TextFormatter {
    currency: Currency,
    disclaimer: String,
}

impl TextFormatter {
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
        }
    }

    /// Replace the footer disclaimer.
    pub fn with_disclaimer(mut self, disclaimer: impl Into<String>) -> Self {
        self.disclaimer = disclaimer.into();
        self
    }

    pub fn header(&self, company: &str) -> String {
        format!("{} (Dealer's Price)\n{}\n\n", company, HEADER_RULE)
    }

    pub fn footer(&self, date: NaiveDate) -> String {
        format!("{} {}.", self.disclaimer, format_long_date(date))
    }

    /// Render quote lines.
    pub fn render_quote(&self, company: &str, items: &[QuoteLineItem], date: NaiveDate) -> String {
        let mut out = self.header(company);
        let mut last_code: Option<&str> = None;
        let mut description = String::new();

        for item in items {
            // Lines of one product share a description.
            if last_code != Some(item.product.code.key()) {
                description = normalize_description(&item.product.description);
                last_code = Some(item.product.code.key());
            }
            if let Some(qty) = item.qty {
                out.push_str(&format!("{} PCS\n", qty));
            }
            out.push_str(&item.code_label());
            out.push('\n');
            out.push_str(&description);
            out.push('\n');
            out.push_str(&format_price(item.product.dealer_price.as_str(), self.currency));
            out.push_str("\n\n");
        }

        out.push_str(&self.footer(date));
        out
    }

    /// Render search results.
    pub fn render_search(&self, company: &str, products: &[Product], date: NaiveDate) -> String {
        let mut out = self.header(company);

        for product in products {
            out.push_str(product.code.as_str());
            out.push('\n');
            out.push_str(&normalize_description(&product.description));
            out.push('\n');
            out.push_str(&format_price(product.dealer_price.as_str(), self.currency));
            out.push_str("\n\n");
        }

        out.push_str(&self.footer(date));
        out
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Variant;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    #[test]
    fn test_long_date() {
        assert_eq!(format_long_date(date()), "March 5, 2025");
        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(format_long_date(date), "December 25, 2024");
    }

    #[test]
    fn test_quote_golden_output() {
        let product = Product::new("A10-X", "Recessed Downlight Daylight/Cool White 1 year warranty", "450.00");
        let items = vec![
            QuoteLineItem {
                product: product.clone(),
                variant: Some(Variant::Dl),
                qty: Some(5),
            },
            QuoteLineItem {
                product: Product::new("B2", "Bulb", "80.00"),
                variant: None,
                qty: None,
            },
        ];

        let text = TextFormatter::default().render_quote("ACME", &items, date());
        let expected = "ACME (Dealer's Price)\n\
========\n\
\n\
5 PCS\n\
A10-X-DL\n\
Recessed Downlight (1yr warranty)\n\
₱450.00/pc\n\
\n\
B2\n\
Bulb (1yr warranty)\n\
₱80.00/pc\n\
\n\
Prices subject to change. Stocks subject to availability. VAT inclusive. Warranty as specified. Price valid as of March 5, 2025.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_search_golden_output() {
        let products = vec![Product::new("LP-1", "LED Panel", "1,200.00")];
        let text = TextFormatter::default().render_search("ACME", &products, date());
        assert_eq!(
            text,
            "ACME (Dealer's Price)\n========\n\nLP-1\nLED Panel (1yr warranty)\n₱1,200.00/pc\n\nPrices subject to change. Stocks subject to availability. VAT inclusive. Warranty as specified. Price valid as of March 5, 2025."
        );
    }

    #[test]
    fn test_empty_results_only_header_and_footer() {
        let text = TextFormatter::new(Currency::USD)
            .with_disclaimer("Valid as of")
            .render_search("ACME", &[], date());
        assert_eq!(text, "ACME (Dealer's Price)\n========\n\nValid as of March 5, 2025.");
    }
}
