use std::sync::Mutex;

use stockquote_market_data::{HttpClient, MarketDataError};

pub const GOOGLE_GOOG: &str = include_str!("../fixtures/google_goog.txt");
pub const YAHOO_GOOG: &str = include_str!("../fixtures/yahoo_goog.csv");
pub const YAHOO_GOOG_HISTORY: &str = include_str!("../fixtures/yahoo_goog_history.csv");

/// Answers with the first body whose fragment appears in the URL and
/// remembers every URL requested.
#[derive(Default)]
pub struct FixtureHttp {
    routes: Vec<(&'static str, &'static str)>,
    requests: Mutex<Vec<String>>,
}

impl FixtureHttp {
    pub fn new(routes: Vec<(&'static str, &'static str)>) -> Self {
        Self {
            routes,
            requests: Mutex::default(),
        }
    }

    /// Routes for every GOOG fixture.
    pub fn goog() -> Self {
        Self::new(vec![
            ("quotes.csv", YAHOO_GOOG),
            ("finance/info", GOOGLE_GOOG),
            ("table.csv", YAHOO_GOOG_HISTORY),
        ])
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for FixtureHttp {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, MarketDataError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.routes
            .iter()
            .find(|(fragment, _)| url.contains(fragment))
            .map(|(_, body)| body.as_bytes().to_vec())
            .ok_or_else(|| MarketDataError::Http {
                status: 404,
                url: url.to_string(),
            })
    }
}
