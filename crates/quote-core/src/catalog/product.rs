//! Product type.

use crate::ids::ProductCode;
use crate::money::DealerPrice;
use serde::{Deserialize, Deserializer, Serialize};

/// A product in the price list.
///
/// Products are immutable once loaded; a catalog update replaces the whole
/// list rather than editing entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product code (unique, case-insensitive).
    pub code: ProductCode,
    /// Free-text description, usually ending with finish and warranty text.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Dealer price as shown in the price list.
    pub dealer_price: DealerPrice,
}

impl Product {
    pub fn new(
        code: impl Into<ProductCode>,
        description: impl Into<String>,
        dealer_price: impl Into<DealerPrice>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            dealer_price: dealer_price.into(),
        }
    }

    /// Lowercased description, used by the search filter.
    pub fn description_key(&self) -> String {
        self.description.to_lowercase()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
