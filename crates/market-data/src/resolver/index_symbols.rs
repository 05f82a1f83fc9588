//! Index symbol translations.
//!
//! Callers write indices with a leading `.` (`.N225`, `.DJI`). Google wants
//! its own `EXCHANGE:CODE` form; anything missing from the table is sent
//! unchanged.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Prefix callers use to mark an index symbol.
pub const INDEX_PREFIX: char = '.';

/// Yahoo's own index marker.
pub const YAHOO_INDEX_MARKER: char = '^';

/// Caller index symbol to Google Finance symbol.
pub const GOOGLE_INDEX_SYMBOLS: &[(&str, &str)] = &[
    (".DJI", "INDEXDJX:.DJI"),
    (".INX", "INDEXSP:.INX"),
    (".IXIC", "INDEXNASDAQ:.IXIC"),
    (".N225", "INDEXNIKKEI:NI225"),
    (".FTSE", "INDEXFTSE:UKX"),
    (".GDAXI", "INDEXDB:DAX"),
    (".FCHI", "INDEXEURO:PX1"),
    (".HSI", "INDEXHANGSENG:HSI"),
    (".SSEC", "SHA:000001"),
    (".VIX", "INDEXCBOE:VIX"),
    (".RUT", "INDEXRUSSELL:RUT"),
    (".STOXX50E", "INDEXSTOXX:SX5E"),
];

lazy_static! {
    static ref GOOGLE_INDEX_LOOKUP: HashMap<&'static str, &'static str> =
        GOOGLE_INDEX_SYMBOLS.iter().copied().collect();
}

/// Google symbol for a caller index symbol, if known.
pub fn google_index_symbol(symbol: &str) -> Option<&'static str> {
    GOOGLE_INDEX_LOOKUP.get(symbol).copied()
}
