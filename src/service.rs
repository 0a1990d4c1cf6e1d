/// The browser's tab and tab-group API as seen by the organizer
use crate::error::GroupingError;
use crate::tab_data::{
    GroupId, GroupQuery, GroupUpdate, TabGroup, TabId, TabInfo, TabQuery, WindowId,
};

/// Every call is attempted exactly once; failures are returned as
/// `GroupingError::Service` and never retried.
#[allow(async_fn_in_trait)]
pub trait TabService {
    /// Id of the window `WINDOW_ID_CURRENT` stands for right now.
    async fn current_window_id(&self) -> Result<WindowId, GroupingError>;

    /// Tabs matching `query`, in tab-strip order.
    async fn query_tabs(&self, query: &TabQuery) -> Result<Vec<TabInfo>, GroupingError>;

    /// Move `tab_ids` as one block to `index` (`-1` appends).
    async fn move_tabs(&self, tab_ids: &[TabId], index: i32) -> Result<(), GroupingError>;

    /// Add `tab_ids` to `group_id`, or to a new group when `None`.
    async fn group_tabs(
        &self,
        tab_ids: &[TabId],
        group_id: Option<GroupId>,
    ) -> Result<GroupId, GroupingError>;

    async fn query_groups(&self, query: &GroupQuery) -> Result<Vec<TabGroup>, GroupingError>;

    async fn update_group(
        &self,
        group_id: GroupId,
        update: &GroupUpdate,
    ) -> Result<(), GroupingError>;

    /// Move a whole group to `index` (`-1` appends).
    async fn move_group(&self, group_id: GroupId, index: i32) -> Result<(), GroupingError>;
}
