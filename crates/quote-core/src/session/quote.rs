//! Quote line items.

use crate::catalog::{Catalog, Product};
use crate::selection::{Selection, Variant};
use serde::{Deserialize, Serialize};

/// One line of a finished quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteLineItem {
    pub product: Product,
    /// Variant quoted on this line, if the item was broken down by finish.
    pub variant: Option<Variant>,
    /// Quantity for the variant.
    pub qty: Option<u32>,
}

impl QuoteLineItem {
    /// Code with the variant suffix, e.g. `A10-X-DL`.
    pub fn code_label(&self) -> String {
        match self.variant {
            Some(variant) => format!("{}{}", self.product.code, variant.code_suffix()),
            None => self.product.code.to_string(),
        }
    }
}

/// Expand a selection into quote lines, in selection order.
///
/// Each variant with a quantity becomes its own line. A code with no
/// quantities yields one plain line. Codes missing from the catalog are
/// skipped.
pub fn build_quote_items(selection: &Selection, catalog: &Catalog) -> Vec<QuoteLineItem> {
    let mut items = Vec::new();

    for entry in selection.entries() {
        let Some(product) = catalog.get(entry.code.as_str()) else {
            tracing::debug!(code = %entry.code, "Selected code not in catalog, skipping");
            continue;
        };

        if entry.variants.is_empty() {
            items.push(QuoteLineItem {
                product: product.clone(),
                variant: None,
                qty: None,
            });
            continue;
        }

        for (variant, qty) in entry.variants.present() {
            items.push(QuoteLineItem {
                product: product.clone(),
                variant: Some(variant),
                qty: Some(qty),
            });
        }
    }

    items
}
