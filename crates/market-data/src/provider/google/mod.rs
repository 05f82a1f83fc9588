//! Google Finance snapshot provider.
//!
//! `finance/info?q=<symbol>` answers with a JSON array wrapped in a comment
//! so it cannot be evaluated directly:
//!
//! ```text
//! // [
//! {
//! "id": "694653"
//! ,"t" : "GOOG"
//! ,"l" : "615.99"
//! }
//! ]
//! ```
//!
//! The wrapper lines are dropped, the rest is parsed as a JSON object and
//! every key is passed through the Google field table.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::fields;
use crate::http::{decode_body, HttpClient};
use crate::models::{NormalizedRecord, ProviderId};
use crate::provider::{SnapshotProvider, GOOGLE_QUOTE_URL};
use crate::resolver::adapt;

const PROVIDER: ProviderId = ProviderId::Google;

/// Lines that wrap the JSON payload.
const WRAPPER_LINES: &[&str] = &["// [", "]"];

/// Google Finance snapshot provider.
pub struct GoogleProvider {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl GoogleProvider {
    /// Create a provider talking to the public endpoint.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(http, GOOGLE_QUOTE_URL)
    }

    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Strip the comment wrapper and join what is left.
    fn unwrap_payload(text: &str) -> String {
        let joined: String = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !WRAPPER_LINES.contains(line))
            .collect();

        // Some responses arrive on a single line: `// [ {...} ]`
        match joined.strip_prefix("//") {
            Some(rest) => rest.trim().to_string(),
            None => joined,
        }
    }

    /// Render a JSON scalar the way it appeared on the wire.
    fn value_to_string(value: Value) -> String {
        match value {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// Parse a decoded response body into a normalized record (without
    /// provenance).
    pub(crate) fn parse_snapshot(text: &str) -> Result<NormalizedRecord, MarketDataError> {
        let payload = Self::unwrap_payload(text);
        let value: Value = serde_json::from_str(&payload)
            .map_err(|e| MarketDataError::parse(PROVIDER.as_str(), e.to_string()))?;

        let object = match value {
            Value::Object(map) => map,
            Value::Array(items) => match items.into_iter().next() {
                Some(Value::Object(map)) => map,
                Some(_) => {
                    return Err(MarketDataError::parse(
                        PROVIDER.as_str(),
                        "expected a JSON object inside the array",
                    ))
                }
                None => {
                    return Err(MarketDataError::parse(
                        PROVIDER.as_str(),
                        "empty quote array",
                    ))
                }
            },
            _ => {
                return Err(MarketDataError::parse(
                    PROVIDER.as_str(),
                    "expected a JSON object",
                ))
            }
        };

        Ok(object
            .into_iter()
            .map(|(key, value)| {
                (
                    fields::normalize(PROVIDER, &key).into_owned(),
                    Self::value_to_string(value),
                )
            })
            .collect())
    }
}

impl SnapshotProvider for GoogleProvider {
    fn id(&self) -> ProviderId {
        PROVIDER
    }

    fn snapshot_url(&self, symbol: &str) -> String {
        let adapted = adapt(symbol, PROVIDER);
        format!("{}?q={}", self.base_url, encode(&adapted))
    }

    fn fetch_snapshot(&self, symbol: &str) -> Result<NormalizedRecord, MarketDataError> {
        let url = self.snapshot_url(symbol);
        let body = self.http.fetch(&url)?;
        let record = Self::parse_snapshot(&decode_body(&body))?;

        debug!("Google: {} fields for {}", record.len(), symbol);
        Ok(record.with_provenance(PROVIDER, &url))
    }
}
