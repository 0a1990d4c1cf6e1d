/// Error type shared by the grouping operations
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GroupingError {
    #[error("Invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A call into the browser's tabs/tabGroups API was rejected.
    #[error("Tab service failed: {0}")]
    Service(String),

    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

impl GroupingError {
    pub fn from_js(context: &str, value: JsValue) -> GroupingError {
        GroupingError::Service(format!("{}: {:?}", context, value))
    }
}

impl From<GroupingError> for JsValue {
    fn from(error: GroupingError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
