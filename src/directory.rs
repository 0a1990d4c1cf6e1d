/// Find-or-create of the group that owns a label in a window
use log::debug;

use crate::error::GroupingError;
use crate::organizer::TabOrganizer;
use crate::service::TabService;
use crate::tab_data::{APPEND_INDEX, GroupId, GroupQuery, GroupUpdate, TabId, TabInfo, WindowId};

/// Where a newly created group ends up in the tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Move the new group to the end of the strip
    AppendToEnd,
    /// Leave it wherever the browser created it
    Keep,
}

impl<S: TabService> TabOrganizer<S> {
    /// Put `tabs` into the group titled `label`, creating it if the window
    /// has none. Returns the group id.
    ///
    /// Lookup and creation run under the label's lock, keyed by the concrete
    /// window id. Tabs already in the matched group are not submitted again.
    pub async fn resolve_group(
        &self,
        window_id: WindowId,
        label: &str,
        tabs: &[TabInfo],
        placement: Placement,
    ) -> Result<GroupId, GroupingError> {
        let window_id = self.resolve_window(window_id).await?;
        self.locks
            .run(window_id, label, self.find_or_create(window_id, label, tabs, placement))
            .await
    }

    async fn find_or_create(
        &self,
        window_id: WindowId,
        label: &str,
        tabs: &[TabInfo],
        placement: Placement,
    ) -> Result<GroupId, GroupingError> {
        let existing = self
            .service
            .query_groups(&GroupQuery::titled(window_id, label))
            .await?;

        if let Some(group) = existing.first() {
            let joining: Vec<TabId> = tabs
                .iter()
                .filter(|tab| tab.group() != Some(group.id))
                .map(|tab| tab.id)
                .collect();

            if joining.is_empty() {
                debug!("All tabs already in group {} ({})", group.id, label);
            } else {
                debug!("Adding {} tab(s) to group {} ({})", joining.len(), group.id, label);
                self.service.group_tabs(&joining, Some(group.id)).await?;
            }
            return Ok(group.id);
        }

        let tab_ids: Vec<TabId> = tabs.iter().map(|tab| tab.id).collect();
        let group_id = self.service.group_tabs(&tab_ids, None).await?;
        let color = self.color_for(label);
        debug!("Created group {} ({}, {:?})", group_id, label, color);

        self.service
            .update_group(group_id, &GroupUpdate::label(label, color))
            .await?;

        if placement == Placement::AppendToEnd {
            self.service.move_group(group_id, APPEND_INDEX).await?;
        }

        Ok(group_id)
    }

    /// Route a tab into the reserved system group of its window.
    pub async fn join_system_group(&self, tab: &TabInfo) -> Result<GroupId, GroupingError> {
        let title = self.config.system_title.clone();
        self.resolve_group(tab.window_id, &title, std::slice::from_ref(tab), Placement::Keep)
            .await
    }
}
