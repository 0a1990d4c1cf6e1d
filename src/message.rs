/// Runtime messages sent by the popup, and their dispatch
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::GroupingError;
use crate::organizer::TabOrganizer;
use crate::service::TabService;
use crate::tab_data::WINDOW_ID_CURRENT;

/// Wire shape: `{ "action": "collapseAll", "state": true }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SortGroups,
    SortTabs,
    CollapseAll,
    ExpandAll,
    GroupAll,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::GroupAll,
        Action::SortGroups,
        Action::SortTabs,
        Action::CollapseAll,
        Action::ExpandAll,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::SortGroups => "sortGroups",
            Action::SortTabs => "sortTabs",
            Action::CollapseAll => "collapseAll",
            Action::ExpandAll => "expandAll",
            Action::GroupAll => "groupAll",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|action| action.name() == name)
    }

    pub fn message(self) -> Message {
        let state = match self {
            Action::CollapseAll => Some(true),
            Action::ExpandAll => Some(false),
            _ => None,
        };
        Message {
            action: self.name().to_string(),
            state,
        }
    }
}

impl<S: TabService> TabOrganizer<S> {
    /// Run the action a message names in the current window, resolved to its
    /// real id first. Malformed messages and unknown actions are logged and
    /// ignored without touching the browser.
    pub async fn handle_message(&self, message: serde_json::Value) -> Result<(), GroupingError> {
        let message: Message = match serde_json::from_value(message) {
            Ok(message) => message,
            Err(e) => {
                warn!("{}", GroupingError::InvalidMessage(e.to_string()));
                return Ok(());
            }
        };

        let Some(action) = Action::from_name(&message.action) else {
            warn!("Unknown action: {}", message.action);
            return Ok(());
        };

        let window_id = self.resolve_window(WINDOW_ID_CURRENT).await?;
        info!("Running {} in window {}", action.name(), window_id);
        match action {
            Action::SortGroups => self.sort_groups_alphabetically(window_id).await,
            Action::SortTabs => self.sort_tabs_inside_groups(window_id).await,
            Action::CollapseAll => {
                self.toggle_all_groups(window_id, message.state.unwrap_or(true))
                    .await
            }
            Action::ExpandAll => {
                self.toggle_all_groups(window_id, message.state.unwrap_or(false))
                    .await
            }
            Action::GroupAll => self.group_all_existing_tabs(window_id).await,
        }
    }
}
