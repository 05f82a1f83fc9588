//! Market data models
//!
//! - `types` - Provider identifiers
//! - `record` - The normalized record every fetcher produces, plus its reserved keys
//! - `date_range` - Caller date bounds and their validation

mod date_range;
mod record;
mod types;

pub use date_range::{DateInput, DateRange};
pub use record::{NormalizedRecord, DATE_KEY, SOURCE_KEY, SOURCE_URL_KEY, SYMBOL_KEY};
pub use types::ProviderId;
