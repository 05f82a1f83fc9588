use std::fmt;

/// The external services quotes are fetched from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ProviderId {
    /// Google Finance `finance/info` (near-JSON snapshot)
    Google,
    /// Yahoo Finance `quotes.csv` snapshot and `table.csv` history
    Yahoo,
}

impl ProviderId {
    /// All known providers.
    pub const ALL: [ProviderId; 2] = [ProviderId::Google, ProviderId::Yahoo];

    /// Stable upper-case identifier, also used as the unknown-key prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "GOOGLE",
            Self::Yahoo => "YAHOO",
        }
    }

    /// Human-readable name stored in a record's `source` field.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Google => "Google Finance",
            Self::Yahoo => "Yahoo Finance",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
