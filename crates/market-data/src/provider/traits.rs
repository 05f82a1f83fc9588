//! Provider trait definitions.

use crate::errors::MarketDataError;
use crate::models::{DateRange, NormalizedRecord, ProviderId};

/// A source of current-quote snapshots.
///
/// Implementations adapt the caller symbol themselves, send exactly one
/// request and return a record whose keys are already normalized and which
/// carries `source` and `source_url`.
pub trait SnapshotProvider: Send + Sync {
    /// Which provider this is.
    fn id(&self) -> ProviderId;

    /// The exact URL a snapshot request for `symbol` would use.
    fn snapshot_url(&self, symbol: &str) -> String;

    /// Fetch the latest quote for `symbol`.
    ///
    /// Network and parse failures are returned as-is; there is no retry.
    fn fetch_snapshot(&self, symbol: &str) -> Result<NormalizedRecord, MarketDataError>;
}

/// A source of daily historical prices.
pub trait HistoryProvider: Send + Sync {
    /// Which provider this is.
    fn id(&self) -> ProviderId;

    /// Fetch one record per trading day in `range`, in the order the provider
    /// returns them. Each record carries `symbol`, `Date` and provenance.
    ///
    /// The range is not validated or reordered here.
    fn fetch_series(
        &self,
        symbol: &str,
        range: DateRange,
    ) -> Result<Vec<NormalizedRecord>, MarketDataError>;
}
