//! HTTP transport used by the providers.
//!
//! Providers only see the [`HttpClient`] trait, so tests and alternative
//! transports can stand in for the live services.

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::errors::MarketDataError;

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking GET transport.
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and return the raw body.
    ///
    /// Fails with [`MarketDataError::Network`] when the host cannot be
    /// reached or the request times out, and with [`MarketDataError::Http`]
    /// for any non-2xx status.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, MarketDataError>;
}

/// Settings for [`ReqwestHttpClient`].
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("stockquote/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// [`HttpClient`] backed by reqwest's blocking client. Redirects are followed.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new(config: &HttpClientConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new(&HttpClientConfig::default())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, MarketDataError> {
        debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.error_for_status()?.bytes()?;

        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(body.to_vec())
    }
}

/// Decode a response body as UTF-8, replacing malformed sequences.
///
/// A leading BOM is dropped. A bad byte in, say, a company name must not
/// fail the whole fetch, so this never errors.
pub fn decode_body(body: &[u8]) -> String {
    let body = body.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(body);

    match std::str::from_utf8(body) {
        Ok(s) => s.to_string(),
        Err(e) => {
            warn!(
                "Invalid UTF-8 in response at byte {}; replacing malformed sequences",
                e.valid_up_to()
            );
            String::from_utf8_lossy(body).into_owned()
        }
    }
}
