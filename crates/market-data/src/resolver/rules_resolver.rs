//! Rules resolver - deterministic caller symbol to provider symbol rewriting.
//!
//! A new string is derived per provider; the caller's symbol is never
//! modified and unmatched input passes through unchanged.

use crate::models::ProviderId;

use super::index_symbols::{google_index_symbol, INDEX_PREFIX, YAHOO_INDEX_MARKER};

/// Separator between a ticker and its share class or exchange (`BRK.B`).
const CLASS_SEPARATOR: char = '.';

/// Rewrite a caller symbol into the syntax `provider` expects.
///
/// - `GOOGLE`: `.N225` becomes `INDEXNIKKEI:NI225` when the index is known,
///   otherwise the symbol (prefix included) is sent as-is.
/// - `YAHOO`: `.N225` becomes `^N225`; `BRK.B` becomes `BRK`.
pub fn adapt(symbol: &str, provider: ProviderId) -> String {
    match provider {
        ProviderId::Google => adapt_google(symbol),
        ProviderId::Yahoo => adapt_yahoo(symbol),
    }
}

fn adapt_google(symbol: &str) -> String {
    if symbol.starts_with(INDEX_PREFIX) {
        if let Some(mapped) = google_index_symbol(symbol) {
            return mapped.to_string();
        }
    }
    symbol.to_string()
}

fn adapt_yahoo(symbol: &str) -> String {
    if let Some(rest) = symbol.strip_prefix(INDEX_PREFIX) {
        return format!("{}{}", YAHOO_INDEX_MARKER, rest);
    }
    match symbol.split_once(CLASS_SEPARATOR) {
        Some((base, _)) => base.to_string(),
        None => symbol.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_known_index() {
        assert_eq!(adapt(".N225", ProviderId::Google), "INDEXNIKKEI:NI225");
        assert_eq!(adapt(".DJI", ProviderId::Google), "INDEXDJX:.DJI");
    }

    #[test]
    fn test_google_unknown_index_keeps_prefix() {
        assert_eq!(adapt(".XYZ", ProviderId::Google), ".XYZ");
    }

    #[test]
    fn test_google_plain_and_class_symbols_pass_through() {
        assert_eq!(adapt("GOOG", ProviderId::Google), "GOOG");
        assert_eq!(adapt("BRK.B", ProviderId::Google), "BRK.B");
    }

    #[test]
    fn test_yahoo_index_marker() {
        assert_eq!(adapt(".N225", ProviderId::Yahoo), "^N225");
        assert_eq!(adapt(".XYZ", ProviderId::Yahoo), "^XYZ");
    }

    #[test]
    fn test_yahoo_truncates_at_first_separator() {
        assert_eq!(adapt("BRK.B", ProviderId::Yahoo), "BRK");
        assert_eq!(adapt("SHOP.TO.X", ProviderId::Yahoo), "SHOP");
    }

    #[test]
    fn test_yahoo_passes_through() {
        assert_eq!(adapt("GOOG", ProviderId::Yahoo), "GOOG");
        assert_eq!(adapt("", ProviderId::Yahoo), "");
        assert_eq!(adapt("^GSPC", ProviderId::Yahoo), "^GSPC");
    }
}
