/// `TabService` backed by the extension's JS bridge to `browser.tabs` / `browser.tabGroups`
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use crate::error::GroupingError;
use crate::service::TabService;
use crate::tab_data::{
    GroupId, GroupQuery, GroupUpdate, TabGroup, TabId, TabInfo, TabQuery, WindowId,
};

// Import JS bridge functions
#[wasm_bindgen(module = "/tabs_bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn currentWindowId() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn queryTabs(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn moveTabs(tab_ids: JsValue, index: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn groupTabs(tab_ids: JsValue, group_id: Option<i32>) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn queryGroups(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateGroup(group_id: i32, update: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn moveGroup(group_id: i32, index: i32) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTabs;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, GroupingError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| GroupingError::Service(format!("Failed to serialize: {:?}", e)))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, GroupingError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| GroupingError::Service(format!("Failed to parse: {:?}", e)))
}

impl TabService for BrowserTabs {
    async fn current_window_id(&self) -> Result<WindowId, GroupingError> {
        let id_js = currentWindowId()
            .await
            .map_err(|e| GroupingError::from_js("windows.getCurrent", e))?;
        from_js(id_js)
    }

    async fn query_tabs(&self, query: &TabQuery) -> Result<Vec<TabInfo>, GroupingError> {
        let tabs_js = queryTabs(to_js(query)?)
            .await
            .map_err(|e| GroupingError::from_js("tabs.query", e))?;
        from_js(tabs_js)
    }

    async fn move_tabs(&self, tab_ids: &[TabId], index: i32) -> Result<(), GroupingError> {
        moveTabs(to_js(tab_ids)?, index)
            .await
            .map_err(|e| GroupingError::from_js("tabs.move", e))?;
        Ok(())
    }

    async fn group_tabs(
        &self,
        tab_ids: &[TabId],
        group_id: Option<GroupId>,
    ) -> Result<GroupId, GroupingError> {
        let group_js = groupTabs(to_js(tab_ids)?, group_id)
            .await
            .map_err(|e| GroupingError::from_js("tabs.group", e))?;
        from_js(group_js)
    }

    async fn query_groups(&self, query: &GroupQuery) -> Result<Vec<TabGroup>, GroupingError> {
        let groups_js = queryGroups(to_js(query)?)
            .await
            .map_err(|e| GroupingError::from_js("tabGroups.query", e))?;
        from_js(groups_js)
    }

    async fn update_group(
        &self,
        group_id: GroupId,
        update: &GroupUpdate,
    ) -> Result<(), GroupingError> {
        updateGroup(group_id, to_js(update)?)
            .await
            .map_err(|e| GroupingError::from_js("tabGroups.update", e))?;
        Ok(())
    }

    async fn move_group(&self, group_id: GroupId, index: i32) -> Result<(), GroupingError> {
        moveGroup(group_id, index)
            .await
            .map_err(|e| GroupingError::from_js("tabGroups.move", e))?;
        Ok(())
    }
}
