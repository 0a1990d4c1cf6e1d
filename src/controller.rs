/// Automatic grouping driven by `tabs.onCreated` and `tabs.onUpdated`
use log::{debug, warn};

use crate::directory::Placement;
use crate::error::GroupingError;
use crate::organizer::TabOrganizer;
use crate::service::TabService;
use crate::tab_data::{TabChange, TabInfo};

impl<S: TabService> TabOrganizer<S> {
    /// New tabs that have not navigated yet go to the system group.
    pub async fn on_tab_created(&self, tab: &TabInfo) -> Result<(), GroupingError> {
        if tab.pinned || !self.config.is_placeholder(tab.url.as_deref()) {
            return Ok(());
        }

        debug!("Tab {} opened blank, joining {}", tab.id, self.config.system_title);
        self.join_system_group(tab).await?;
        Ok(())
    }

    /// Regroup a tab whose URL changed. Pinned tabs and updates without a
    /// URL are ignored; an unparseable URL is logged and leaves the tab alone.
    pub async fn on_tab_updated(
        &self,
        change: &TabChange,
        tab: &TabInfo,
    ) -> Result<(), GroupingError> {
        let Some(url) = change.url.as_deref() else {
            return Ok(());
        };
        if tab.pinned {
            return Ok(());
        }

        let label = match self.labels.label_for_url(url) {
            Ok(label) => label,
            Err(e) => {
                warn!("Not grouping tab {}: {}", tab.id, e);
                return Ok(());
            }
        };

        debug!("Tab {} navigated to {}, label {}", tab.id, url, label);
        self.resolve_group(tab.window_id, &label, std::slice::from_ref(tab), Placement::AppendToEnd)
            .await?;
        Ok(())
    }
}
