//! Error types for the market data crate.
//!
//! Every failure is surfaced to the caller unmodified. There is no retry and
//! no fallback to another provider; a failed fetch aborts the current symbol
//! only, so callers can keep going with the next one.

use thiserror::Error;

/// Errors that can occur while collecting quotes.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider could not be reached (DNS, connect, timeout, broken body).
    #[error("Network error for {url}: {message}")]
    Network {
        /// The request URL
        url: String,
        /// Transport-level description
        message: String,
    },

    /// The provider answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Http {
        /// The response status code
        status: u16,
        /// The request URL
        url: String,
    },

    /// The provider returned JSON or CSV that could not be parsed.
    /// No partial record is ever produced from a malformed body.
    #[error("Parse error: {provider} - {message}")]
    Parse {
        /// The provider whose response failed to parse
        provider: String,
        /// Parser message
        message: String,
    },

    /// A caller-supplied date string could not be understood.
    #[error("Invalid date: {input:?}")]
    DateFormat {
        /// The rejected input
        input: String,
    },

    /// The request itself is invalid (for example only one date bound).
    #[error("Invalid input: {0}")]
    InputValidation(String),
}

impl MarketDataError {
    /// Builds a [`MarketDataError::Parse`] for the given provider id.
    pub fn parse(provider: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            provider: provider.to_string(),
            message: message.into(),
        }
    }

    /// True for failures talking to the remote service.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Http { .. })
    }

    /// True when the caller passed bad arguments. These are raised before
    /// any request is sent.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::DateFormat { .. } | Self::InputValidation(_))
    }
}

impl From<reqwest::Error> for MarketDataError {
    fn from(e: reqwest::Error) -> Self {
        let url = e.url().map(|u| u.to_string()).unwrap_or_default();
        match e.status() {
            Some(status) => Self::Http {
                status: status.as_u16(),
                url,
            },
            None => Self::Network {
                url,
                message: e.to_string(),
            },
        }
    }
}
