/// Table of top-level domains that commonly sit under a registrable name
///
/// This is a hand-picked approximation, not the public suffix list. A label
/// such as `example` in `example.co.uk` is only found because `co` is listed.
use std::collections::HashSet;

use serde::Deserialize;

const COMMON_TLDS: &[&str] = &[
    // Generic
    "com", "net", "org", "info", "biz",
    // Country code
    "us", "uk", "de", "cn", "jp", "ca", "fr", "au", "br", "kr",
    // Tech/startup favorites
    "io", "ai", "co", "me", "tv",
    // New gTLDs
    "app", "dev", "tech", "shop", "online",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Vec<String>")]
pub struct TldTable {
    entries: HashSet<String>,
}

impl TldTable {
    pub fn new<I, S>(entries: I) -> TldTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        TldTable {
            entries: entries.into_iter().map(|tld| normalize(tld.as_ref())).collect(),
        }
    }

    /// Case-insensitive membership; a leading dot is ignored.
    pub fn contains(&self, tld: &str) -> bool {
        self.entries.contains(&normalize(tld))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize(tld: &str) -> String {
    tld.strip_prefix('.').unwrap_or(tld).to_lowercase()
}

impl Default for TldTable {
    fn default() -> Self {
        TldTable::new(COMMON_TLDS)
    }
}

impl From<Vec<String>> for TldTable {
    fn from(entries: Vec<String>) -> Self {
        TldTable::new(entries)
    }
}
