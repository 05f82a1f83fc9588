//! Stock quote collection with normalized field names.
//!
//! Fetches current quotes from Yahoo Finance and Google Finance, and daily
//! history from Yahoo Finance, mapping each provider's terse field codes
//! onto one stable vocabulary.
//!
//! # Architecture
//!
//! ```text
//!   symbol, start?, end?
//!            |
//!            v
//!   +------------------+
//!   |  QuoteCollector  |  (validates bounds, picks snapshot vs. history)
//!   +------------------+
//!            |
//!            v
//!   +------------------+
//!   |     Resolver     |  (per-provider symbol syntax)
//!   +------------------+
//!            |
//!            v
//!   +------------------+     +------------------+
//!   |    Providers     | --> |    HttpClient    |  (blocking GET)
//!   +------------------+     +------------------+
//!            |
//!            v
//!   +------------------+
//!   |  Field tables    |  (short code -> normalized name)
//!   +------------------+
//!            |
//!            v
//!   +------------------+
//!   | NormalizedRecord |  (+ source, source_url)
//!   +------------------+
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stockquote_market_data::{Endpoints, QuoteCollector, ReqwestHttpClient};
//!
//! let collector = QuoteCollector::new(Arc::new(ReqwestHttpClient::default()), &Endpoints::default());
//! let records = collector.collect("GOOG", Some("20100101".into()), Some("20100105".into()))?;
//! ```

pub mod collector;
pub mod dates;
pub mod errors;
pub mod fields;
pub mod format;
pub mod http;
pub mod models;
pub mod provider;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testing;

pub use collector::QuoteCollector;
pub use dates::parse_date;
pub use errors::MarketDataError;
pub use format::{csv_columns, write_records, OutputFormat};
pub use http::{decode_body, HttpClient, HttpClientConfig, ReqwestHttpClient};
pub use models::{
    DateInput, DateRange, NormalizedRecord, ProviderId, DATE_KEY, SOURCE_KEY, SOURCE_URL_KEY,
    SYMBOL_KEY,
};
pub use provider::google::GoogleProvider;
pub use provider::yahoo::YahooProvider;
pub use provider::{Endpoints, HistoryProvider, SnapshotProvider};
pub use resolver::adapt;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MarketDataError>;
