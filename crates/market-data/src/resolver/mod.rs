//! Symbol resolution for market data providers.
//!
//! Callers pass one ticker; each provider gets its own rewritten copy.
//!
//! ```text
//!            ".N225"
//!               |
//!      +--------+---------+
//!      v                  v
//!   GOOGLE              YAHOO
//! index table       "." -> "^" marker,
//! lookup            class suffix cut
//!      |                  |
//! "INDEXNIKKEI:NI225"  "^N225"
//! ```

mod index_symbols;
mod rules_resolver;

pub use index_symbols::{
    google_index_symbol, GOOGLE_INDEX_SYMBOLS, INDEX_PREFIX, YAHOO_INDEX_MARKER,
};
pub use rules_resolver::adapt;
