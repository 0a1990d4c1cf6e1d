/// Alphabetical ordering of groups and of the tabs inside them
use log::debug;

use crate::error::GroupingError;
use crate::organizer::TabOrganizer;
use crate::service::TabService;
use crate::tab_data::{APPEND_INDEX, GroupId, GroupQuery, TabId, TabQuery, WindowId};

impl<S: TabService> TabOrganizer<S> {
    /// Reorder the window's groups A-Z by title, ignoring case.
    ///
    /// Each group is appended to the end of the strip in sorted order, so the
    /// moves must run one after another.
    pub async fn sort_groups_alphabetically(&self, window_id: WindowId) -> Result<(), GroupingError> {
        let mut groups = self.service.query_groups(&GroupQuery::in_window(window_id)).await?;
        groups.sort_by_cached_key(|group| group.title_or_empty().to_lowercase());

        for group in &groups {
            self.service.move_group(group.id, APPEND_INDEX).await?;
        }

        debug!("Sorted {} group(s)", groups.len());
        Ok(())
    }

    /// Sort the tabs of every group by title, keeping each group where it is.
    pub async fn sort_tabs_inside_groups(&self, window_id: WindowId) -> Result<(), GroupingError> {
        let groups = self.service.query_groups(&GroupQuery::in_window(window_id)).await?;

        for group in &groups {
            let mut tabs = self.service.query_tabs(&TabQuery::in_group(group.id)).await?;
            let Some(boundary) = tabs.first().map(|tab| tab.index) else {
                continue;
            };

            tabs.sort_by(|a, b| a.title_or_empty().cmp(b.title_or_empty()));
            let tab_ids: Vec<TabId> = tabs.iter().map(|tab| tab.id).collect();

            self.service.move_tabs(&tab_ids, boundary).await?;
        }
        Ok(())
    }

    /// Sort one group's tabs by title, ignoring case, moving them one at a
    /// time from the group's leftmost slot.
    pub async fn sort_tabs_in_group(&self, group_id: GroupId) -> Result<(), GroupingError> {
        let mut tabs = self.service.query_tabs(&TabQuery::in_group(group_id)).await?;
        let Some(base_index) = tabs.iter().map(|tab| tab.index).min() else {
            return Ok(());
        };

        tabs.sort_by_cached_key(|tab| tab.title_or_empty().to_lowercase());

        for (offset, tab) in (0..).zip(&tabs) {
            self.service.move_tabs(&[tab.id], base_index + offset).await?;
        }
        Ok(())
    }
}
