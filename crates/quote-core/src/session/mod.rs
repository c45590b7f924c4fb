//! Quote session module.
//!
//! Contains the session state machine and quote line construction.

mod flow;
mod quote;

pub use flow::{QuoteSession, SessionState, ViewMode};
pub use quote::{build_quote_items, QuoteLineItem};
