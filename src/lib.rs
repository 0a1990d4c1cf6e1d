/// Tab Grouper - browser extension that groups tabs by site
/// Built with Rust + WASM + Yew

pub mod browser;
pub mod bulk;
pub mod color;
pub mod config;
pub mod controller;
pub mod directory;
pub mod domain;
pub mod error;
pub mod message;
pub mod organizer;
pub mod service;
pub mod sorter;
pub mod tab_data;
pub mod tld;
pub mod ui;
pub mod visibility;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, warn};
use wasm_bindgen::prelude::*;

use crate::browser::BrowserTabs;
use crate::config::OrganizerConfig;
use crate::organizer::TabOrganizer;
use crate::tab_data::{TabChange, TabInfo};

thread_local! {
    static ORGANIZER: RefCell<Option<Rc<TabOrganizer<BrowserTabs>>>> = const { RefCell::new(None) };
}

fn organizer() -> Rc<TabOrganizer<BrowserTabs>> {
    ORGANIZER.with(|slot| {
        Rc::clone(
            slot.borrow_mut()
                .get_or_insert_with(|| Rc::new(TabOrganizer::new(BrowserTabs, OrganizerConfig::default()))),
        )
    })
}

fn parse<T: serde::de::DeserializeOwned>(what: &str, value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse {}: {:?}", what, e)))
}

fn report(result: Result<(), error::GroupingError>) -> Result<(), JsValue> {
    result.map_err(|e| {
        error!("{}", e);
        JsValue::from(e)
    })
}

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Replace the organizer with one built from `config`; missing fields keep
/// their defaults, an unreadable object falls back to the defaults entirely.
/// Label locks carry over, so handlers still in flight stay serialized.
#[wasm_bindgen]
pub fn configure(config: JsValue) {
    let config = if config.is_null() || config.is_undefined() {
        OrganizerConfig::default()
    } else {
        parse::<OrganizerConfig>("config", config).unwrap_or_else(|e| {
            warn!("Using default config: {:?}", e);
            OrganizerConfig::default()
        })
    };

    ORGANIZER.with(|slot| {
        let mut slot = slot.borrow_mut();
        let next = match slot.as_deref() {
            Some(current) => current.with_config(BrowserTabs, config),
            None => TabOrganizer::new(BrowserTabs, config),
        };
        *slot = Some(Rc::new(next));
    });
}

// Re-export label extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_label(url: &str) -> Option<String> {
    organizer().labels().label_for_url(url).ok()
}

#[wasm_bindgen]
pub async fn handle_message(message: JsValue) -> Result<(), JsValue> {
    let message: serde_json::Value = match serde_wasm_bindgen::from_value(message) {
        Ok(message) => message,
        Err(e) => {
            warn!("Ignoring unreadable message: {:?}", e);
            return Ok(());
        }
    };
    report(organizer().handle_message(message).await)
}

#[wasm_bindgen]
pub async fn on_tab_created(tab: JsValue) -> Result<(), JsValue> {
    let tab: TabInfo = parse("tab", tab)?;
    report(organizer().on_tab_created(&tab).await)
}

#[wasm_bindgen]
pub async fn on_tab_updated(_tab_id: i32, change_info: JsValue, tab: JsValue) -> Result<(), JsValue> {
    let change: TabChange = parse("changeInfo", change_info)?;
    let tab: TabInfo = parse("tab", tab)?;
    report(organizer().on_tab_updated(&change, &tab).await)
}

#[wasm_bindgen]
pub async fn sort_tabs_in_group(group_id: i32) -> Result<(), JsValue> {
    report(organizer().sort_tabs_in_group(group_id).await)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
