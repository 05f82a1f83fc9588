//! Quote collector - the single entry point for a symbol.
//!
//! ```text
//! collect(symbol, start?, end?)
//!     |
//!     +-- both dates   -> Yahoo history          -> [row, row, ...]
//!     +-- no dates     -> Yahoo snapshot, Google -> [yahoo, google]
//!     +-- one date     -> InputValidation (no request sent)
//! ```
//!
//! Requests run one after another on the calling thread. Any failure aborts
//! the whole call for that symbol; calls for different symbols share nothing,
//! so a caller can move on to the next symbol after an error.

use std::sync::Arc;

use log::{debug, info};

use crate::errors::MarketDataError;
use crate::http::HttpClient;
use crate::models::{DateInput, DateRange, NormalizedRecord};
use crate::provider::google::GoogleProvider;
use crate::provider::yahoo::YahooProvider;
use crate::provider::{Endpoints, HistoryProvider, SnapshotProvider};

/// Collects snapshot or historical records for one symbol at a time.
pub struct QuoteCollector {
    /// Snapshot sources in output order.
    snapshot_providers: Vec<Arc<dyn SnapshotProvider>>,
    history_provider: Arc<dyn HistoryProvider>,
}

impl QuoteCollector {
    /// Wire the Yahoo and Google providers over `http`.
    pub fn new(http: Arc<dyn HttpClient>, endpoints: &Endpoints) -> Self {
        let yahoo = Arc::new(YahooProvider::with_base_urls(
            http.clone(),
            endpoints.yahoo_quote.clone(),
            endpoints.yahoo_history.clone(),
        ));
        let google: Arc<dyn SnapshotProvider> = Arc::new(GoogleProvider::with_base_url(
            http,
            endpoints.google_quote.clone(),
        ));
        let yahoo_snapshot: Arc<dyn SnapshotProvider> = yahoo.clone();

        Self::with_providers(vec![yahoo_snapshot, google], yahoo)
    }

    /// Build from explicit providers. Snapshot records are returned in the
    /// order of `snapshot_providers`.
    pub fn with_providers(
        snapshot_providers: Vec<Arc<dyn SnapshotProvider>>,
        history_provider: Arc<dyn HistoryProvider>,
    ) -> Self {
        Self {
            snapshot_providers,
            history_provider,
        }
    }

    /// Collect records for `symbol`.
    ///
    /// With both bounds this is exactly the provider's daily series and no
    /// snapshot is fetched. With neither it is one snapshot per provider:
    /// Yahoo first, then Google. A single bound, an empty symbol or an
    /// unparseable date is rejected before any request is made.
    pub fn collect(
        &self,
        symbol: &str,
        start: Option<DateInput>,
        end: Option<DateInput>,
    ) -> Result<Vec<NormalizedRecord>, MarketDataError> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(MarketDataError::InputValidation(
                "symbol must not be empty".to_string(),
            ));
        }

        match DateRange::from_bounds(start.as_ref(), end.as_ref())? {
            Some(range) => self.collect_series(symbol, range),
            None => self.collect_snapshots(symbol),
        }
    }

    fn collect_series(
        &self,
        symbol: &str,
        range: DateRange,
    ) -> Result<Vec<NormalizedRecord>, MarketDataError> {
        debug!(
            "Collecting {} history from {} ({} to {})",
            symbol,
            self.history_provider.id(),
            range.start,
            range.end
        );
        let records = self.history_provider.fetch_series(symbol, range)?;
        info!("{}: {} historical records", symbol, records.len());
        Ok(records)
    }

    fn collect_snapshots(&self, symbol: &str) -> Result<Vec<NormalizedRecord>, MarketDataError> {
        let mut records = Vec::with_capacity(self.snapshot_providers.len());
        for provider in &self.snapshot_providers {
            debug!("Collecting {} snapshot from {}", symbol, provider.id());
            records.push(provider.fetch_snapshot(symbol)?);
        }
        info!("{}: {} snapshot records", symbol, records.len());
        Ok(records)
    }
}
