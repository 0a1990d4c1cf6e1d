/// Immutable settings the organizer is built from
use serde::Deserialize;

use crate::color::{ColorPalette, GroupColor};
use crate::tld::TldTable;

pub const SYSTEM_TITLE: &str = "System";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrganizerConfig {
    pub tlds: TldTable,
    pub palette: ColorPalette,
    /// Title of the group holding blank and internal pages
    pub system_title: String,
    pub system_color: GroupColor,
    /// URLs a freshly opened tab reports before it navigates anywhere
    pub placeholder_urls: Vec<String>,
}

impl OrganizerConfig {
    /// Missing or empty URLs count as placeholders too.
    pub fn is_placeholder(&self, url: Option<&str>) -> bool {
        match url {
            None | Some("") => true,
            Some(url) => self.placeholder_urls.iter().any(|p| p == url),
        }
    }
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        OrganizerConfig {
            tlds: TldTable::default(),
            palette: ColorPalette::default(),
            system_title: SYSTEM_TITLE.to_string(),
            system_color: GroupColor::Grey,
            placeholder_urls: vec!["about:blank".to_string(), "about:newtab".to_string()],
        }
    }
}
