/// Data structures exchanged with the browser's tabs and tabGroups APIs
use serde::{Deserialize, Serialize};

use crate::color::GroupColor;

pub type TabId = i32;
pub type GroupId = i32;
pub type WindowId = i32;

/// `browser.windows.WINDOW_ID_CURRENT`; the host resolves it to the focused window.
pub const WINDOW_ID_CURRENT: WindowId = -2;

/// `browser.tabGroups.TAB_GROUP_ID_NONE`
pub const GROUP_ID_NONE: GroupId = -1;

/// Index meaning "end of the tab strip" for move calls.
pub const APPEND_INDEX: i32 = -1;

fn no_group() -> GroupId {
    GROUP_ID_NONE
}

/// Information about a browser tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: TabId,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub window_id: WindowId,
    #[serde(default = "no_group")]
    pub group_id: GroupId,
    pub index: i32,
    #[serde(default)]
    pub pinned: bool,
}

impl TabInfo {
    pub fn new(id: TabId, url: &str, title: &str, window_id: WindowId, index: i32) -> TabInfo {
        TabInfo {
            id,
            url: Some(url.to_string()),
            title: Some(title.to_string()),
            window_id,
            group_id: GROUP_ID_NONE,
            index,
            pinned: false,
        }
    }

    pub fn group(&self) -> Option<GroupId> {
        (self.group_id != GROUP_ID_NONE).then_some(self.group_id)
    }

    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// A tab group as reported by `browser.tabGroups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabGroup {
    pub id: GroupId,
    pub window_id: WindowId,
    #[serde(default)]
    pub title: Option<String>,
    pub color: GroupColor,
    #[serde(default)]
    pub collapsed: bool,
}

impl TabGroup {
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// The `changeInfo` argument of `tabs.onUpdated`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabChange {
    #[serde(default)]
    pub url: Option<String>,
}

/// Filter for `tabs.query`; unset fields are left out of the JS object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<WindowId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<bool>,
}

impl TabQuery {
    pub fn unpinned_in(window_id: WindowId) -> TabQuery {
        TabQuery {
            window_id: Some(window_id),
            pinned: Some(false),
            ..TabQuery::default()
        }
    }

    pub fn in_group(group_id: GroupId) -> TabQuery {
        TabQuery {
            group_id: Some(group_id),
            ..TabQuery::default()
        }
    }
}

/// Filter for `tabGroups.query`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<WindowId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl GroupQuery {
    pub fn in_window(window_id: WindowId) -> GroupQuery {
        GroupQuery {
            window_id: Some(window_id),
            title: None,
        }
    }

    pub fn titled(window_id: WindowId, title: &str) -> GroupQuery {
        GroupQuery {
            window_id: Some(window_id),
            title: Some(title.to_string()),
        }
    }
}

/// Properties for `tabGroups.update`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<GroupColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl GroupUpdate {
    pub fn label(title: &str, color: GroupColor) -> GroupUpdate {
        GroupUpdate {
            title: Some(title.to_string()),
            color: Some(color),
            collapsed: None,
        }
    }

    pub fn collapsed(collapsed: bool) -> GroupUpdate {
        GroupUpdate {
            collapsed: Some(collapsed),
            ..GroupUpdate::default()
        }
    }
}
