//! Quote error types.

use thiserror::Error;

/// Errors that can occur while building a quote.
///
/// None of these are fatal: the caller reports them and the session stays
/// in the state it was in before the failed action.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// User input rejected (e.g. empty company name).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Selection already holds the maximum number of distinct codes.
    #[error("Maximum {max} items can be selected for a quote")]
    Capacity { max: usize },

    /// Catalog could not be loaded or parsed.
    #[error("Failed to load product data: {0}")]
    DataLoad(String),

    /// Export text could not be written to the clipboard.
    #[error("Failed to copy to clipboard: {0}")]
    Clipboard(String),

    /// Code is not part of the current selection.
    #[error("Item not selected: {0}")]
    NotSelected(String),

    /// Variant quantities were set while the session runs in simple mode.
    #[error("Variant quantities are disabled in simple selection mode")]
    VariantsDisabled,

    /// Action not allowed in the current session state.
    #[error("Cannot {action} while {from}")]
    InvalidTransition { from: String, action: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for QuoteError {
    fn from(e: serde_json::Error) -> Self {
        QuoteError::Serialization(e.to_string())
    }
}
