/// Turning tab URLs into group labels
use url::Url;

use crate::error::GroupingError;
use crate::tld::TldTable;

/// Scheme of the browser's internal pages (`about:blank`, `about:config`, ...)
const INTERNAL_SCHEME: &str = "about";

/// Derives a stable, human-readable group label from a hostname
///
/// Algorithm:
/// 1. Split hostname by "."
/// 2. Fewer than 2 parts → the hostname itself (e.g. "localhost")
/// 3. If the second-to-last part is a known TLD (e.g. "co" in "bbc.co.uk"):
///    → the third-to-last part is the brand
/// 4. Else:
///    → the second-to-last part is the brand
/// 5. Capitalize: first character upper, the rest lower
///
/// Examples:
/// - www.google.com → Google
/// - mail.example.co.uk → Example
/// - news.bbc.co.uk → Bbc
/// - localhost → Localhost
#[derive(Debug, Clone)]
pub struct LabelExtractor {
    tlds: TldTable,
    system_label: String,
}

impl LabelExtractor {
    pub fn new(tlds: TldTable, system_label: impl Into<String>) -> LabelExtractor {
        LabelExtractor {
            tlds,
            system_label: system_label.into(),
        }
    }

    /// Label for a bare hostname. Never fails; irregular input falls back to
    /// the hostname itself.
    pub fn extract_label(&self, hostname: &str) -> String {
        let parts: Vec<&str> = hostname.split('.').collect();

        if parts.len() < 2 {
            return capitalize(hostname);
        }

        let second_to_last = parts[parts.len() - 2];
        let raw = if self.tlds.contains(second_to_last) {
            // "co.uk" has no brand in front of the suffix
            parts
                .len()
                .checked_sub(3)
                .map_or(hostname, |brand| parts[brand])
        } else {
            second_to_last
        };

        capitalize(raw)
    }

    /// Label for a full URL. Internal pages map to the system label without
    /// looking at the hostname.
    pub fn label_for_url(&self, url: &str) -> Result<String, GroupingError> {
        let parsed = Url::parse(url).map_err(|source| GroupingError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        if parsed.scheme() == INTERNAL_SCHEME {
            return Ok(self.system_label.clone());
        }

        Ok(self.extract_label(parsed.host_str().unwrap_or("")))
    }
}

impl Default for LabelExtractor {
    fn default() -> Self {
        LabelExtractor::new(TldTable::default(), crate::config::SYSTEM_TITLE)
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
