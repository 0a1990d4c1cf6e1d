/// One-shot grouping of every tab already open in a window
use std::collections::HashMap;

use log::{info, warn};

use crate::directory::Placement;
use crate::domain::LabelExtractor;
use crate::error::GroupingError;
use crate::organizer::TabOrganizer;
use crate::service::TabService;
use crate::tab_data::{TabInfo, TabQuery, WindowId};

/// Partition tabs by label, in order of each label's first tab.
///
/// Pinned tabs and tabs whose URL does not parse are left out.
pub fn classify_tabs(labels: &LabelExtractor, tabs: &[TabInfo]) -> Vec<(String, Vec<TabInfo>)> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut classified: Vec<(String, Vec<TabInfo>)> = Vec::new();

    for tab in tabs.iter().filter(|tab| !tab.pinned) {
        let label = match labels.label_for_url(tab.url.as_deref().unwrap_or("")) {
            Ok(label) => label,
            Err(e) => {
                warn!("Skipping tab {}: {}", tab.id, e);
                continue;
            }
        };

        match positions.get(&label) {
            Some(&position) => classified[position].1.push(tab.clone()),
            None => {
                positions.insert(label.clone(), classified.len());
                classified.push((label, vec![tab.clone()]));
            }
        }
    }

    classified
}

impl<S: TabService> TabOrganizer<S> {
    /// Group every unpinned tab of the window by label, one membership call per label.
    pub async fn group_all_existing_tabs(&self, window_id: WindowId) -> Result<(), GroupingError> {
        let window_id = self.resolve_window(window_id).await?;
        let tabs = self.service.query_tabs(&TabQuery::unpinned_in(window_id)).await?;
        let classified = classify_tabs(&self.labels, &tabs);

        info!("Grouping {} tab(s) under {} label(s)", tabs.len(), classified.len());

        for (label, members) in &classified {
            self.resolve_group(window_id, label, members, Placement::Keep)
                .await?;
        }
        Ok(())
    }
}
