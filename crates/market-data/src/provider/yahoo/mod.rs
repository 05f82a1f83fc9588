//! Yahoo Finance provider.
//!
//! Two CSV endpoints are used:
//! - `quotes.csv` for snapshots: one headerless line whose columns follow
//!   the `f=` codes of the request, in order
//! - `table.csv` for daily history (see [`history`])

mod history;

use std::sync::Arc;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, trace};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::fields;
use crate::http::{decode_body, HttpClient};
use crate::models::{NormalizedRecord, ProviderId};
use crate::provider::{SnapshotProvider, YAHOO_HISTORY_URL, YAHOO_QUOTE_URL};
use crate::resolver::adapt;

const PROVIDER: ProviderId = ProviderId::Yahoo;

/// What Yahoo sends for a field it has no value for.
pub const NULL_SENTINEL: &str = "N/A";

/// Yahoo Finance snapshot and history provider.
pub struct YahooProvider {
    http: Arc<dyn HttpClient>,
    quote_url: String,
    history_url: String,
}

impl YahooProvider {
    /// Create a provider talking to the public endpoints.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_urls(http, YAHOO_QUOTE_URL, YAHOO_HISTORY_URL)
    }

    pub fn with_base_urls(
        http: Arc<dyn HttpClient>,
        quote_url: impl Into<String>,
        history_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            quote_url: quote_url.into(),
            history_url: history_url.into(),
        }
    }

    /// The `f=` parameter: every known code, in table order.
    fn requested_codes() -> String {
        fields::codes(PROVIDER).collect()
    }

    /// Parse the one-line snapshot body into a normalized record (without
    /// provenance). `N/A` columns are left out entirely.
    pub(crate) fn parse_snapshot(text: &str) -> Result<NormalizedRecord, MarketDataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.trim().as_bytes());

        let row = reader
            .records()
            .next()
            .ok_or_else(|| MarketDataError::parse(PROVIDER.as_str(), "empty response"))?
            .map_err(|e| MarketDataError::parse(PROVIDER.as_str(), e.to_string()))?;

        let codes: Vec<&str> = fields::codes(PROVIDER).collect();
        if row.len() != codes.len() {
            return Err(MarketDataError::parse(
                PROVIDER.as_str(),
                format!("expected {} columns, got {}", codes.len(), row.len()),
            ));
        }

        let mut record = NormalizedRecord::new();
        for (code, value) in codes.iter().zip(row.iter()) {
            if value == NULL_SENTINEL {
                trace!("Yahoo: no value for {}", code);
                continue;
            }
            record.insert(fields::normalize(PROVIDER, code), value);
        }
        Ok(record)
    }
}

impl SnapshotProvider for YahooProvider {
    fn id(&self) -> ProviderId {
        PROVIDER
    }

    fn snapshot_url(&self, symbol: &str) -> String {
        let adapted = adapt(symbol, PROVIDER);
        format!(
            "{}?s={}&f={}&e=.csv",
            self.quote_url,
            encode(&adapted),
            Self::requested_codes()
        )
    }

    fn fetch_snapshot(&self, symbol: &str) -> Result<NormalizedRecord, MarketDataError> {
        let url = self.snapshot_url(symbol);
        let body = self.http.fetch(&url)?;
        let record = Self::parse_snapshot(&decode_body(&body))?;

        debug!("Yahoo: {} fields for {}", record.len(), symbol);
        Ok(record.with_provenance(PROVIDER, &url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SOURCE_KEY, SOURCE_URL_KEY};
    use crate::testing::StubHttpClient;

    const GOOG_LINE: &str = "615.99,-1.79,2051456,2745380,\"NasdaqNM\",200.1B,172.91,N/A,N/A,N/A,29.76,670.25,473.02,615.70,607.10,20.70,1.21,5.51,3.56,1.30\r\n";

    #[test]
    fn test_requested_codes_follow_dictionary() {
        let expected: String = fields::YAHOO_FIELDS.iter().map(|(c, _)| *c).collect();
        assert_eq!(YahooProvider::requested_codes(), expected);
    }

    #[test]
    fn test_parse_positional_columns() {
        let record = YahooProvider::parse_snapshot(GOOG_LINE).unwrap();
        assert_eq!(record.get("price_last"), Some("615.99"));
        assert_eq!(record.get("change"), Some("-1.79"));
        assert_eq!(record.get("stock_exchange"), Some("NasdaqNM"));
        assert_eq!(record.get("market_cap"), Some("200.1B"));
        assert_eq!(record.get("short_ratio"), Some("1.30"));
    }

    #[test]
    fn test_parse_drops_null_sentinel() {
        let record = YahooProvider::parse_snapshot(GOOG_LINE).unwrap();
        assert!(!record.contains_key("ebitda"));
        assert!(!record.contains_key("dividend_per_share"));
        assert!(!record.contains_key("dividend_yield"));
        assert_eq!(record.len(), fields::YAHOO_FIELDS.len() - 3);
    }

    #[test]
    fn test_parse_keeps_empty_values() {
        let line = "1,2,3,4,\"\",6,7,8,9,10,11,12,13,14,15,16,17,18,19,20";
        let record = YahooProvider::parse_snapshot(line).unwrap();
        assert_eq!(record.get("stock_exchange"), Some(""));
    }

    #[test]
    fn test_parse_rejects_wrong_column_count() {
        let err = YahooProvider::parse_snapshot("615.99,-1.79").unwrap_err();
        assert!(matches!(err, MarketDataError::Parse { .. }));

        let err = YahooProvider::parse_snapshot("   ").unwrap_err();
        assert!(matches!(err, MarketDataError::Parse { .. }));
    }

    #[test]
    fn test_snapshot_url() {
        let provider = YahooProvider::new(Arc::new(StubHttpClient::new()));
        assert_eq!(
            provider.snapshot_url("BRK.B"),
            "http://download.finance.yahoo.com/d/quotes.csv?s=BRK&f=l1c1va2xj1b4j4dyekjm3m4rr5p5p6s7&e=.csv"
        );
        assert_eq!(
            provider.snapshot_url(".N225"),
            "http://download.finance.yahoo.com/d/quotes.csv?s=%5EN225&f=l1c1va2xj1b4j4dyekjm3m4rr5p5p6s7&e=.csv"
        );
    }

    #[test]
    fn test_fetch_snapshot_adds_provenance() {
        let http = Arc::new(StubHttpClient::new().route("s=GOOG", GOOG_LINE));
        let provider = YahooProvider::new(http.clone());

        let record = provider.fetch_snapshot("GOOG").unwrap();
        let url = provider.snapshot_url("GOOG");
        assert_eq!(record.get(SOURCE_KEY), Some("Yahoo Finance"));
        assert_eq!(record.get(SOURCE_URL_KEY), Some(url.as_str()));
        assert_eq!(http.requests(), vec![url]);
    }

    #[test]
    fn test_fetch_snapshot_network_error() {
        let provider = YahooProvider::new(Arc::new(StubHttpClient::new()));
        let err = provider.fetch_snapshot("GOOG").unwrap_err();
        assert!(matches!(err, MarketDataError::Network { .. }));
    }
}
