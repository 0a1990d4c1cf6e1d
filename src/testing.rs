/// In-memory stand-in for the browser's tabs/tabGroups API
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use crate::color::GroupColor;
use crate::error::GroupingError;
use crate::service::TabService;
use crate::tab_data::{
    GROUP_ID_NONE, GroupId, GroupQuery, GroupUpdate, TabGroup, TabId, TabInfo, TabQuery,
    WINDOW_ID_CURRENT, WindowId,
};

const CURRENT_WINDOW: WindowId = 1;

/// Unpinned, ungrouped tab in window 1; indexes are assigned by `FakeBrowser::with_tabs`.
pub(crate) fn tab(id: TabId, url: &str, title: &str) -> TabInfo {
    TabInfo::new(id, url, title, CURRENT_WINDOW, 0)
}

pub(crate) fn pinned(id: TabId, url: &str, title: &str) -> TabInfo {
    TabInfo {
        pinned: true,
        ..tab(id, url, title)
    }
}

/// Pending once, so concurrent tasks interleave at every service call.
pub(crate) fn yield_now() -> YieldNow {
    YieldNow(false)
}

pub(crate) struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CurrentWindow,
    QueryTabs(TabQuery),
    MoveTabs(Vec<TabId>, i32),
    GroupTabs(Vec<TabId>, Option<GroupId>),
    QueryGroups(GroupQuery),
    UpdateGroup(GroupId, GroupUpdate),
    MoveGroup(GroupId, i32),
}

#[derive(Default)]
struct FakeState {
    /// Strip order; `index` is recomputed per window after every mutation
    tabs: Vec<TabInfo>,
    /// Creation order
    groups: Vec<TabGroup>,
    calls: Vec<Call>,
    next_group_id: GroupId,
    fail_on: Option<&'static str>,
}

#[derive(Default)]
pub(crate) struct FakeBrowser {
    state: RefCell<FakeState>,
}

impl FakeBrowser {
    pub(crate) fn with_tabs(tabs: Vec<TabInfo>) -> FakeBrowser {
        let browser = FakeBrowser::default();
        {
            let mut state = browser.state.borrow_mut();
            state.tabs = tabs;
            state.next_group_id = 100;
            state.reindex();
        }
        browser
    }

    pub(crate) fn tabs(&self) -> Vec<TabInfo> {
        self.state.borrow().tabs.clone()
    }

    pub(crate) fn tab(&self, id: TabId) -> Option<TabInfo> {
        self.state.borrow().tabs.iter().find(|t| t.id == id).cloned()
    }

    pub(crate) fn groups(&self) -> Vec<TabGroup> {
        self.state.borrow().groups.clone()
    }

    pub(crate) fn group(&self, id: GroupId) -> Option<TabGroup> {
        self.state.borrow().groups.iter().find(|g| g.id == id).cloned()
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    /// Make every call to the named operation fail.
    pub(crate) fn fail_on(&self, operation: &'static str) {
        self.state.borrow_mut().fail_on = Some(operation);
    }

    /// Existing group with the given tabs; returns its id.
    pub(crate) fn add_group(&self, title: &str, tab_ids: &[TabId]) -> GroupId {
        let mut state = self.state.borrow_mut();
        let id = state.create_group(CURRENT_WINDOW);
        if let Some(group) = state.groups.iter_mut().find(|g| g.id == id) {
            group.title = Some(title.to_string());
            group.color = GroupColor::Blue;
        }
        state.join_group(tab_ids, id);
        id
    }

    /// Group titles in the order their tabs appear in the strip.
    pub(crate) fn group_order(&self) -> Vec<String> {
        let state = self.state.borrow();
        let mut seen: Vec<GroupId> = Vec::new();
        for tab in &state.tabs {
            if let Some(id) = tab.group() {
                if !seen.contains(&id) {
                    seen.push(id);
                }
            }
        }
        seen.iter()
            .filter_map(|id| state.groups.iter().find(|g| g.id == *id))
            .map(|g| g.title_or_empty().to_string())
            .collect()
    }

    /// Titles of a group's tabs in strip order.
    pub(crate) fn titles_in(&self, group_id: GroupId) -> Vec<String> {
        self.state
            .borrow()
            .tabs
            .iter()
            .filter(|t| t.group() == Some(group_id))
            .map(|t| t.title_or_empty().to_string())
            .collect()
    }

    async fn enter(&self, operation: &'static str, call: Call) -> Result<(), GroupingError> {
        yield_now().await;
        let mut state = self.state.borrow_mut();
        state.calls.push(call);
        if state.fail_on == Some(operation) {
            return Err(GroupingError::Service(format!("{} rejected", operation)));
        }
        Ok(())
    }
}

fn resolve_window(window_id: WindowId) -> WindowId {
    if window_id == WINDOW_ID_CURRENT {
        CURRENT_WINDOW
    } else {
        window_id
    }
}

impl FakeState {
    fn reindex(&mut self) {
        let mut next: HashMap<WindowId, i32> = HashMap::new();
        for tab in &mut self.tabs {
            let slot = next.entry(tab.window_id).or_insert(0);
            tab.index = *slot;
            *slot += 1;
        }
    }

    fn index_of(&self, id: TabId) -> Option<i32> {
        self.tabs.iter().find(|t| t.id == id).map(|t| t.index)
    }

    fn take_block(&mut self, ids: &[TabId]) -> Vec<TabInfo> {
        let (block, rest): (Vec<TabInfo>, Vec<TabInfo>) =
            self.tabs.drain(..).partition(|t| ids.contains(&t.id));
        self.tabs = rest;
        self.reindex();
        block
    }

    /// Insert `block` so its first tab lands at window index `index` (negative appends).
    fn insert_block(&mut self, window_id: WindowId, index: i32, block: Vec<TabInfo>) {
        let at = if index < 0 {
            None
        } else {
            self.tabs
                .iter()
                .position(|t| t.window_id == window_id && t.index == index)
        };
        let at = at.unwrap_or(self.tabs.len());
        self.tabs.splice(at..at, block);
        self.reindex();
    }

    fn create_group(&mut self, window_id: WindowId) -> GroupId {
        let id = self.next_group_id;
        self.next_group_id += 1;
        self.groups.push(TabGroup {
            id,
            window_id,
            title: None,
            color: GroupColor::Grey,
            collapsed: false,
        });
        id
    }

    /// Tabs join next to the group's current members, like the browser keeps groups contiguous.
    fn join_group(&mut self, tab_ids: &[TabId], group_id: GroupId) {
        let Some(window_id) = self.groups.iter().find(|g| g.id == group_id).map(|g| g.window_id) else {
            return;
        };
        let first_index = tab_ids.iter().filter_map(|id| self.index_of(*id)).min().unwrap_or(-1);

        let mut block = self.take_block(tab_ids);
        for tab in &mut block {
            tab.group_id = group_id;
        }

        let last_member = self
            .tabs
            .iter()
            .filter(|t| t.group() == Some(group_id))
            .map(|t| t.index)
            .max();
        let at = match last_member {
            Some(last) => last + 1,
            None => first_index,
        };
        self.insert_block(window_id, at, block);
        self.prune_groups();
    }

    fn prune_groups(&mut self) {
        let tabs = &self.tabs;
        self.groups
            .retain(|g| tabs.iter().any(|t| t.group_id == g.id));
    }
}

impl TabService for FakeBrowser {
    async fn current_window_id(&self) -> Result<WindowId, GroupingError> {
        self.enter("current_window_id", Call::CurrentWindow).await?;
        Ok(CURRENT_WINDOW)
    }

    async fn query_tabs(&self, query: &TabQuery) -> Result<Vec<TabInfo>, GroupingError> {
        self.enter("query_tabs", Call::QueryTabs(query.clone())).await?;
        let state = self.state.borrow();
        let window = query.window_id.map(resolve_window);
        Ok(state
            .tabs
            .iter()
            .filter(|t| window.is_none_or(|w| t.window_id == w))
            .filter(|t| query.group_id.is_none_or(|g| t.group_id == g))
            .filter(|t| query.pinned.is_none_or(|p| t.pinned == p))
            .cloned()
            .collect())
    }

    async fn move_tabs(&self, tab_ids: &[TabId], index: i32) -> Result<(), GroupingError> {
        self.enter("move_tabs", Call::MoveTabs(tab_ids.to_vec(), index)).await?;
        let mut state = self.state.borrow_mut();
        let Some(window_id) = tab_ids
            .first()
            .and_then(|id| state.tabs.iter().find(|t| t.id == *id))
            .map(|t| t.window_id)
        else {
            return Err(GroupingError::Service("No tab with that id".to_string()));
        };
        let mut block = state.take_block(tab_ids);
        block.sort_by_key(|t| tab_ids.iter().position(|id| *id == t.id));
        state.insert_block(window_id, index, block);
        Ok(())
    }

    async fn group_tabs(
        &self,
        tab_ids: &[TabId],
        group_id: Option<GroupId>,
    ) -> Result<GroupId, GroupingError> {
        self.enter("group_tabs", Call::GroupTabs(tab_ids.to_vec(), group_id)).await?;
        let mut state = self.state.borrow_mut();
        let group_id = match group_id {
            Some(id) if state.groups.iter().any(|g| g.id == id) => id,
            Some(id) => return Err(GroupingError::Service(format!("No group with id: {}", id))),
            None => {
                let window_id = tab_ids
                    .first()
                    .and_then(|id| state.tabs.iter().find(|t| t.id == *id))
                    .map(|t| t.window_id)
                    .ok_or_else(|| GroupingError::Service("No tab with that id".to_string()))?;
                state.create_group(window_id)
            }
        };
        state.join_group(tab_ids, group_id);
        Ok(group_id)
    }

    async fn query_groups(&self, query: &GroupQuery) -> Result<Vec<TabGroup>, GroupingError> {
        self.enter("query_groups", Call::QueryGroups(query.clone())).await?;
        let window = query.window_id.map(resolve_window);
        Ok(self
            .state
            .borrow()
            .groups
            .iter()
            .filter(|g| window.is_none_or(|w| g.window_id == w))
            .filter(|g| query.title.as_ref().is_none_or(|t| g.title.as_ref() == Some(t)))
            .cloned()
            .collect())
    }

    async fn update_group(
        &self,
        group_id: GroupId,
        update: &GroupUpdate,
    ) -> Result<(), GroupingError> {
        self.enter("update_group", Call::UpdateGroup(group_id, update.clone())).await?;
        let mut state = self.state.borrow_mut();
        let group = state
            .groups
            .iter_mut()
            .find(|g| g.id == group_id)
            .ok_or_else(|| GroupingError::Service(format!("No group with id: {}", group_id)))?;
        if let Some(title) = &update.title {
            group.title = Some(title.clone());
        }
        if let Some(color) = update.color {
            group.color = color;
        }
        if let Some(collapsed) = update.collapsed {
            group.collapsed = collapsed;
        }
        Ok(())
    }

    async fn move_group(&self, group_id: GroupId, index: i32) -> Result<(), GroupingError> {
        self.enter("move_group", Call::MoveGroup(group_id, index)).await?;
        let mut state = self.state.borrow_mut();
        let window_id = state
            .groups
            .iter()
            .find(|g| g.id == group_id)
            .map(|g| g.window_id)
            .ok_or_else(|| GroupingError::Service(format!("No group with id: {}", group_id)))?;
        let ids: Vec<TabId> = state
            .tabs
            .iter()
            .filter(|t| t.group_id == group_id)
            .map(|t| t.id)
            .collect();
        let block = state.take_block(&ids);
        state.insert_block(window_id, index, block);
        Ok(())
    }
}

#[test]
fn test_fake_keeps_groups_contiguous() {
    use futures::executor::block_on;

    let browser = FakeBrowser::with_tabs(vec![
        tab(1, "https://a.com", "A"),
        tab(2, "https://b.com", "B"),
        tab(3, "https://a.com/x", "A2"),
    ]);
    let group_id = block_on(browser.group_tabs(&[1], None)).unwrap();
    block_on(browser.group_tabs(&[3], Some(group_id))).unwrap();

    let order: Vec<TabId> = browser.tabs().iter().map(|t| t.id).collect();
    assert_eq!(order, vec![1, 3, 2]);
    assert_eq!(browser.tab(2).unwrap().index, 2);
    assert_eq!(browser.tab(2).unwrap().group_id, GROUP_ID_NONE);
}
