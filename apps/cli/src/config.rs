use std::time::Duration;

use stockquote_market_data::provider::{GOOGLE_QUOTE_URL, YAHOO_HISTORY_URL, YAHOO_QUOTE_URL};
use stockquote_market_data::{Endpoints, HttpClientConfig};

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

pub struct Config {
    pub request_timeout: Duration,
    pub user_agent: String,
    pub endpoints: Endpoints,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparseable values use defaults.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let timeout_ms: u64 = get("STOCKQUOTE_REQUEST_TIMEOUT_MS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        let user_agent = get("STOCKQUOTE_USER_AGENT")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| HttpClientConfig::default().user_agent);
        let endpoint = |key: &str, default: &str| {
            get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        let endpoints = Endpoints {
            google_quote: endpoint("STOCKQUOTE_GOOGLE_QUOTE_URL", GOOGLE_QUOTE_URL),
            yahoo_quote: endpoint("STOCKQUOTE_YAHOO_QUOTE_URL", YAHOO_QUOTE_URL),
            yahoo_history: endpoint("STOCKQUOTE_YAHOO_HISTORY_URL", YAHOO_HISTORY_URL),
        };
        let log_format = get("STOCKQUOTE_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Self {
            request_timeout: Duration::from_millis(timeout_ms),
            user_agent,
            endpoints,
            log_format,
        }
    }

    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig {
            timeout: self.request_timeout,
            user_agent: self.user_agent.clone(),
        }
    }
}
