use chrono::NaiveDate;

use crate::dates::parse_date;
use crate::errors::MarketDataError;

/// A date bound as supplied by the caller.
///
/// Text is parsed with [`parse_date`], so `"20100101"`, `"2010-01-01"` and
/// `"Jan 1, 2010"` are all accepted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DateInput {
    Date(NaiveDate),
    Text(String),
}

impl DateInput {
    pub fn resolve(&self) -> Result<NaiveDate, MarketDataError> {
        match self {
            Self::Date(date) => Ok(*date),
            Self::Text(text) => parse_date(text),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Inclusive range for a historical request.
///
/// `start > end` is accepted as-is and handed to the provider.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Resolve optional caller bounds.
    ///
    /// Both absent gives `Ok(None)`; both present are parsed; exactly one is
    /// an [`MarketDataError::InputValidation`]. Nothing here touches the
    /// network, so bad input never costs a request.
    pub fn from_bounds(
        start: Option<&DateInput>,
        end: Option<&DateInput>,
    ) -> Result<Option<Self>, MarketDataError> {
        match (start, end) {
            (None, None) => Ok(None),
            (Some(start), Some(end)) => Ok(Some(Self::new(start.resolve()?, end.resolve()?))),
            (Some(_), None) => Err(MarketDataError::InputValidation(
                "start date given without end date".to_string(),
            )),
            (None, Some(_)) => Err(MarketDataError::InputValidation(
                "end date given without start date".to_string(),
            )),
        }
    }
}
