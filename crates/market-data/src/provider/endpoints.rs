//! Base URLs for the upstream services.

/// Google Finance snapshot endpoint
pub const GOOGLE_QUOTE_URL: &str = "http://finance.google.com/finance/info";
/// Yahoo Finance CSV snapshot endpoint
pub const YAHOO_QUOTE_URL: &str = "http://download.finance.yahoo.com/d/quotes.csv";
/// Yahoo Finance CSV history endpoint
pub const YAHOO_HISTORY_URL: &str = "http://ichart.yahoo.com/table.csv";

/// Where each request is sent.
///
/// The public services behind the defaults are deprecated upstream, so every
/// base URL can be replaced (a mirror, a proxy, a local fixture server).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Endpoints {
    pub google_quote: String,
    pub yahoo_quote: String,
    pub yahoo_history: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            google_quote: GOOGLE_QUOTE_URL.to_string(),
            yahoo_quote: YAHOO_QUOTE_URL.to_string(),
            yahoo_history: YAHOO_HISTORY_URL.to_string(),
        }
    }
}
