//! Search module.
//!
//! Substring filtering and ranking of catalog products.

mod filter;
mod query;
mod rank;
mod results;

pub use filter::{filter, Match};
pub use query::{SearchQuery, MIN_QUERY_LEN};
pub use rank::{rank, RankKey};
pub use results::SearchResults;
