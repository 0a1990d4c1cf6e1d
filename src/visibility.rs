/// Collapse or expand every group in a window
use crate::error::GroupingError;
use crate::organizer::TabOrganizer;
use crate::service::TabService;
use crate::tab_data::{GroupQuery, GroupUpdate, WindowId};

impl<S: TabService> TabOrganizer<S> {
    pub async fn toggle_all_groups(&self, window_id: WindowId, collapse: bool) -> Result<(), GroupingError> {
        let groups = self.service.query_groups(&GroupQuery::in_window(window_id)).await?;
        let update = GroupUpdate::collapsed(collapse);

        for group in &groups {
            self.service.update_group(group.id, &update).await?;
        }
        Ok(())
    }
}
