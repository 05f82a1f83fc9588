//! Yahoo Finance daily history (`table.csv`).
//!
//! The query encodes each bound as day / zero-based month / year:
//!
//! ```text
//! table.csv?s=GOOG&d=0&e=5&f=2010&g=d&a=0&b=1&c=2010&ignore=.csv
//!              end: d=month-1 e=day f=year   start: a, b, c
//! ```
//!
//! The body is CSV with a header row (`Date,Open,High,Low,Close,Volume,Adj
//! Close`) and one row per trading day, newest first. Column names are used
//! as keys directly; they are already readable.

use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder, Trim};
use tracing::debug;
use urlencoding::encode;

use super::{YahooProvider, PROVIDER};
use crate::errors::MarketDataError;
use crate::http::decode_body;
use crate::models::{DateRange, NormalizedRecord, ProviderId, DATE_KEY, SYMBOL_KEY};
use crate::provider::HistoryProvider;

/// `a`/`b`/`c` style query pairs for one bound.
fn date_params(date: NaiveDate, month: &str, day: &str, year: &str) -> String {
    format!(
        "{}={}&{}={}&{}={}",
        month,
        date.month0(),
        day,
        date.day(),
        year,
        date.year()
    )
}

impl YahooProvider {
    /// The exact URL a history request would use. The symbol is sent
    /// without adaptation.
    pub fn history_url(&self, symbol: &str, range: DateRange) -> String {
        format!(
            "{}?s={}&{}&g=d&{}&ignore=.csv",
            self.history_url,
            encode(symbol),
            date_params(range.end, "d", "e", "f"),
            date_params(range.start, "a", "b", "c"),
        )
    }

    /// Parse a history body. Every row gets `symbol` and provenance; row
    /// order is kept as received.
    pub(crate) fn parse_series(
        text: &str,
        symbol: &str,
        url: &str,
    ) -> Result<Vec<NormalizedRecord>, MarketDataError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| MarketDataError::parse(PROVIDER.as_str(), e.to_string()))?
            .clone();

        if !headers.iter().any(|h| h == DATE_KEY) {
            return Err(MarketDataError::parse(
                PROVIDER.as_str(),
                format!("history header has no {} column", DATE_KEY),
            ));
        }

        reader
            .records()
            .map(|row| {
                let row =
                    row.map_err(|e| MarketDataError::parse(PROVIDER.as_str(), e.to_string()))?;
                let mut record: NormalizedRecord = headers
                    .iter()
                    .zip(row.iter())
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .collect();
                record.insert(SYMBOL_KEY, symbol);
                Ok(record.with_provenance(PROVIDER, url))
            })
            .collect()
    }
}

impl HistoryProvider for YahooProvider {
    fn id(&self) -> ProviderId {
        PROVIDER
    }

    fn fetch_series(
        &self,
        symbol: &str,
        range: DateRange,
    ) -> Result<Vec<NormalizedRecord>, MarketDataError> {
        let url = self.history_url(symbol, range);
        let body = self.http.fetch(&url)?;
        let records = Self::parse_series(&decode_body(&body), symbol, &url)?;

        debug!(
            "Yahoo: {} history rows for {} ({} to {})",
            records.len(),
            symbol,
            range.start,
            range.end
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::{SOURCE_KEY, SOURCE_URL_KEY};
    use crate::testing::StubHttpClient;

    const GOOG_HISTORY: &str = "Date,Open,High,Low,Close,Volume,Adj Close
2010-01-05,627.18,627.84,621.54,623.99,3004700,623.99
2010-01-04,626.95,629.51,624.24,626.75,1956200,626.75
";

    fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
        )
    }

    #[test]
    fn test_history_url_zero_based_months() {
        let provider = YahooProvider::new(Arc::new(StubHttpClient::new()));
        assert_eq!(
            provider.history_url("GOOG", range((2010, 1, 1), (2010, 12, 31))),
            "http://ichart.yahoo.com/table.csv?s=GOOG&d=11&e=31&f=2010&g=d&a=0&b=1&c=2010&ignore=.csv"
        );
    }

    #[test]
    fn test_history_url_uses_raw_symbol() {
        let provider = YahooProvider::new(Arc::new(StubHttpClient::new()));
        let url = provider.history_url("BRK.B", range((2010, 1, 1), (2010, 1, 5)));
        assert!(url.contains("?s=BRK.B&"));
    }

    #[test]
    fn test_parse_series_keeps_order_and_columns() {
        let records = YahooProvider::parse_series(GOOG_HISTORY, "GOOG", "http://x.test").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get(DATE_KEY), Some("2010-01-05"));
        assert_eq!(records[1].get(DATE_KEY), Some("2010-01-04"));
        assert_eq!(records[1].get("Adj Close"), Some("626.75"));
        assert_eq!(records[1].get("Volume"), Some("1956200"));

        for record in &records {
            assert_eq!(record.get(SYMBOL_KEY), Some("GOOG"));
            assert_eq!(record.get(SOURCE_KEY), Some("Yahoo Finance"));
            assert_eq!(record.get(SOURCE_URL_KEY), Some("http://x.test"));
            assert_eq!(record.len(), 10);
        }
    }

    #[test]
    fn test_parse_series_empty_body() {
        let records = YahooProvider::parse_series("\n", "GOOG", "http://x.test").unwrap();
        assert!(records.is_empty());

        let records =
            YahooProvider::parse_series("Date,Open,Close\n", "GOOG", "http://x.test").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_series_requires_date_column() {
        let err = YahooProvider::parse_series("Open,Close\n1,2\n", "GOOG", "http://x.test")
            .unwrap_err();
        assert!(matches!(err, MarketDataError::Parse { .. }));
    }

    #[test]
    fn test_parse_series_rejects_ragged_rows() {
        let err = YahooProvider::parse_series(
            "Date,Open,Close\n2010-01-04,1\n",
            "GOOG",
            "http://x.test",
        )
        .unwrap_err();
        assert!(matches!(err, MarketDataError::Parse { .. }));
    }

    #[test]
    fn test_fetch_series() {
        let http = Arc::new(StubHttpClient::new().route("table.csv?s=GOOG", GOOG_HISTORY));
        let provider = YahooProvider::new(http.clone());
        let range = range((2010, 1, 1), (2010, 1, 5));

        let records = provider.fetch_series("GOOG", range).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0].get(SOURCE_URL_KEY),
            Some(provider.history_url("GOOG", range).as_str())
        );
        assert_eq!(http.requests().len(), 1);
    }

    #[test]
    fn test_fetch_series_inverted_range_passes_through() {
        let http = Arc::new(StubHttpClient::new().route("table.csv", "Date,Open\n"));
        let provider = YahooProvider::new(http.clone());

        let records = provider
            .fetch_series("GOOG", range((2010, 2, 1), (2010, 1, 1)))
            .unwrap();
        assert!(records.is_empty());
        assert!(http.requests()[0].contains("d=0&e=1&f=2010&g=d&a=1&b=1&c=2010"));
    }
}
