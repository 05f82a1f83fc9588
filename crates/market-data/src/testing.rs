//! Canned-response transport for unit tests.

use std::sync::Mutex;

use crate::errors::MarketDataError;
use crate::http::HttpClient;

enum Reply {
    Body(Vec<u8>),
    Status(u16),
}

/// Serves canned bodies for URLs containing a given fragment and records
/// every URL it was asked for. Unmatched URLs fail as network errors.
#[derive(Default)]
pub(crate) struct StubHttpClient {
    routes: Vec<(String, Reply)>,
    requests: Mutex<Vec<String>>,
}

impl StubHttpClient {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, fragment: &str, body: impl Into<Vec<u8>>) -> Self {
        self.routes
            .push((fragment.to_string(), Reply::Body(body.into())));
        self
    }

    pub(crate) fn route_status(mut self, fragment: &str, status: u16) -> Self {
        self.routes.push((fragment.to_string(), Reply::Status(status)));
        self
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for StubHttpClient {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, MarketDataError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self.routes.iter().find(|(fragment, _)| url.contains(fragment)) {
            Some((_, Reply::Body(body))) => Ok(body.clone()),
            Some((_, Reply::Status(status))) => Err(MarketDataError::Http {
                status: *status,
                url: url.to_string(),
            }),
            None => Err(MarketDataError::Network {
                url: url.to_string(),
                message: "no route".to_string(),
            }),
        }
    }
}
