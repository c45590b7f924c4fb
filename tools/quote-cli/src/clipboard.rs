//! System clipboard sink for export text.

use arboard::Clipboard;
use quote_core::QuoteError;

/// Write text to the system clipboard.
pub fn copy_text(text: &str) -> Result<(), QuoteError> {
    let mut clipboard = Clipboard::new().map_err(|e| QuoteError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| QuoteError::Clipboard(e.to_string()))
}
