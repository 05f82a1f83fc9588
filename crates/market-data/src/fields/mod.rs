//! Provider short codes and the normalized names they map to.
//!
//! Each provider has an ordered table. For Yahoo the order matters: the
//! snapshot request asks for the codes in table order and the response
//! columns come back in that same order.
//!
//! Only raw provider codes are valid input to [`normalize`]. Feeding an
//! already-normalized name back in is not supported and yields a fallback
//! key, not the name itself.

use std::borrow::Cow;
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::models::{ProviderId, SOURCE_KEY, SOURCE_URL_KEY};

/// Marker placed between the provider id and the raw code of unmapped keys.
pub const UNKNOWN_MARKER: &str = "_UNKNOWN_";

/// Yahoo `quotes.csv` `f=` codes.
pub const YAHOO_FIELDS: &[(&str, &str)] = &[
    ("l1", "price_last"),
    ("c1", "change"),
    ("v", "volume"),
    ("a2", "avg_daily_volume"),
    ("x", "stock_exchange"),
    ("j1", "market_cap"),
    ("b4", "book_value"),
    ("j4", "ebitda"),
    ("d", "dividend_per_share"),
    ("y", "dividend_yield"),
    ("e", "earnings_per_share"),
    ("k", "52_week_high"),
    ("j", "52_week_low"),
    ("m3", "50day_moving_avg"),
    ("m4", "200day_moving_avg"),
    ("r", "price_earnings_ratio"),
    ("r5", "price_earnings_growth_ratio"),
    ("p5", "price_sales_ratio"),
    ("p6", "price_book_ratio"),
    ("s7", "short_ratio"),
];

/// Google `finance/info` JSON keys.
pub const GOOGLE_FIELDS: &[(&str, &str)] = &[
    ("c", "change"),
    ("cp", "price_close"),
    ("div", "dividend"),
    ("e", "exchange"),
    ("el", "price_last_exchange"),
    ("elt", "price_last_exchange_time"),
    ("l", "price_last"),
    ("lt", "price_last_datetime"),
    ("ltt", "price_last_time"),
    ("t", "symbol"),
    ("name", "company_name"),
];

lazy_static! {
    static ref YAHOO_LOOKUP: HashMap<&'static str, &'static str> =
        YAHOO_FIELDS.iter().copied().collect();
    static ref GOOGLE_LOOKUP: HashMap<&'static str, &'static str> =
        GOOGLE_FIELDS.iter().copied().collect();
}

/// The ordered code table for a provider.
pub fn entries(provider: ProviderId) -> &'static [(&'static str, &'static str)] {
    match provider {
        ProviderId::Google => GOOGLE_FIELDS,
        ProviderId::Yahoo => YAHOO_FIELDS,
    }
}

/// Every known code for a provider, in table order.
pub fn codes(provider: ProviderId) -> impl Iterator<Item = &'static str> {
    entries(provider).iter().map(|(code, _)| *code)
}

fn lookup(provider: ProviderId) -> &'static HashMap<&'static str, &'static str> {
    match provider {
        ProviderId::Google => &GOOGLE_LOOKUP,
        ProviderId::Yahoo => &YAHOO_LOOKUP,
    }
}

/// Map a raw provider code to its normalized name.
///
/// Unknown codes are kept under `<PROVIDER>_UNKNOWN_<code>` so new upstream
/// fields are never dropped and two providers never share a fallback key.
pub fn normalize(provider: ProviderId, raw_key: &str) -> Cow<'static, str> {
    match lookup(provider).get(raw_key) {
        Some(name) => Cow::Borrowed(*name),
        None => Cow::Owned(unknown_key(provider, raw_key)),
    }
}

/// The fallback key used for an unmapped code.
pub fn unknown_key(provider: ProviderId, raw_key: &str) -> String {
    format!("{}{}{}", provider.as_str(), UNKNOWN_MARKER, raw_key)
}

/// Check the static invariants of the tables.
///
/// Returns one message per violation: duplicate codes, two codes mapping to
/// the same name, names shadowing provenance keys, or names that look like
/// fallback keys.
pub fn violations() -> Vec<String> {
    let mut problems = Vec::new();

    for provider in ProviderId::ALL {
        let mut seen_codes = HashSet::new();
        let mut seen_names = HashMap::new();

        for (code, name) in entries(provider) {
            if !seen_codes.insert(*code) {
                problems.push(format!("{}: duplicate code {:?}", provider, code));
            }
            if let Some(other) = seen_names.insert(*name, *code) {
                problems.push(format!(
                    "{}: codes {:?} and {:?} both map to {:?}",
                    provider, other, code, name
                ));
            }
            if *name == SOURCE_KEY || *name == SOURCE_URL_KEY {
                problems.push(format!(
                    "{}: code {:?} shadows provenance key {:?}",
                    provider, code, name
                ));
            }
            if name.contains(UNKNOWN_MARKER) {
                problems.push(format!(
                    "{}: name {:?} collides with the fallback key space",
                    provider, name
                ));
            }
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tables_are_consistent() {
        assert_eq!(violations(), Vec::<String>::new());
    }

    #[test]
    fn test_known_google_codes() {
        for (code, name) in GOOGLE_FIELDS {
            assert_eq!(normalize(ProviderId::Google, code), *name);
        }
        assert_eq!(normalize(ProviderId::Google, "l"), "price_last");
        assert_eq!(normalize(ProviderId::Google, "cp"), "price_close");
    }

    #[test]
    fn test_known_yahoo_codes() {
        for (code, name) in YAHOO_FIELDS {
            assert_eq!(normalize(ProviderId::Yahoo, code), *name);
        }
        assert_eq!(normalize(ProviderId::Yahoo, "l1"), "price_last");
    }

    #[test]
    fn test_unknown_keys_are_provider_scoped() {
        assert_eq!(normalize(ProviderId::Google, "ccol"), "GOOGLE_UNKNOWN_ccol");
        assert_eq!(normalize(ProviderId::Yahoo, "ccol"), "YAHOO_UNKNOWN_ccol");
    }

    #[test]
    fn test_codes_keep_table_order() {
        let codes: String = codes(ProviderId::Yahoo).collect();
        assert_eq!(codes, "l1c1va2xj1b4j4dyekjm3m4rr5p5p6s7");
    }

    #[test]
    fn test_normalized_names_are_not_valid_input() {
        // "price_last" is an output name, not a Google code.
        assert_eq!(
            normalize(ProviderId::Google, "price_last"),
            "GOOGLE_UNKNOWN_price_last"
        );
        let once = normalize(ProviderId::Yahoo, "l1");
        let twice = normalize(ProviderId::Yahoo, &once);
        assert_ne!(once, twice);
    }

    proptest! {
        #[test]
        fn prop_unmapped_keys_never_collide(raw in "[a-z0-9_]{1,8}") {
            for provider in ProviderId::ALL {
                let known = codes(provider).any(|c| c == raw);
                prop_assume!(!known);
            }

            let google = normalize(ProviderId::Google, &raw);
            let yahoo = normalize(ProviderId::Yahoo, &raw);
            prop_assert_ne!(&google, &yahoo);

            for provider in ProviderId::ALL {
                for (_, name) in entries(provider) {
                    prop_assert_ne!(google.as_ref(), *name);
                    prop_assert_ne!(yahoo.as_ref(), *name);
                }
            }
        }
    }
}
