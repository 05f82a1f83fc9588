//! Quote provider abstractions and implementations.
//!
//! - `traits` - [`SnapshotProvider`] and [`HistoryProvider`]
//! - `endpoints` - Overridable base URLs
//! - `google` - Google Finance near-JSON snapshots
//! - `yahoo` - Yahoo Finance CSV snapshots and daily history
//!
//! Providers receive the caller's symbol and adapt it through the resolver
//! themselves; field codes are mapped through [`crate::fields`].

mod endpoints;
mod traits;

pub mod google;
pub mod yahoo;

pub use endpoints::{Endpoints, GOOGLE_QUOTE_URL, YAHOO_HISTORY_URL, YAHOO_QUOTE_URL};
pub use traits::{HistoryProvider, SnapshotProvider};
