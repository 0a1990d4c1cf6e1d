/// The tab organizer: label extraction plus group bookkeeping over a `TabService`
use std::cell::RefCell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use futures::lock::Mutex;

use crate::color::GroupColor;
use crate::config::OrganizerConfig;
use crate::domain::LabelExtractor;
use crate::error::GroupingError;
use crate::service::TabService;
use crate::tab_data::{WINDOW_ID_CURRENT, WindowId};

pub struct TabOrganizer<S> {
    pub(crate) service: S,
    pub(crate) labels: LabelExtractor,
    pub(crate) config: OrganizerConfig,
    pub(crate) locks: Rc<LabelLocks>,
}

impl<S: TabService> TabOrganizer<S> {
    pub fn new(service: S, config: OrganizerConfig) -> TabOrganizer<S> {
        TabOrganizer {
            service,
            labels: LabelExtractor::new(config.tlds.clone(), config.system_title.clone()),
            config,
            locks: Rc::default(),
        }
    }

    /// Organizer with a new config that keeps serializing against the same
    /// label locks, so handlers still running on `self` stay exclusive.
    pub fn with_config(&self, service: S, config: OrganizerConfig) -> TabOrganizer<S> {
        TabOrganizer {
            locks: Rc::clone(&self.locks),
            ..TabOrganizer::new(service, config)
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn labels(&self) -> &LabelExtractor {
        &self.labels
    }

    /// Concrete id for `window_id`; `WINDOW_ID_CURRENT` is asked of the host.
    /// Locks are keyed by this id, never by the sentinel.
    pub async fn resolve_window(&self, window_id: WindowId) -> Result<WindowId, GroupingError> {
        if window_id == WINDOW_ID_CURRENT {
            self.service.current_window_id().await
        } else {
            Ok(window_id)
        }
    }

    /// Color for a newly created group. The system group is always neutral.
    pub(crate) fn color_for(&self, label: &str) -> GroupColor {
        if label == self.config.system_title {
            self.config.system_color
        } else {
            self.config.palette.pick()
        }
    }
}

type LockKey = (WindowId, String);

/// One async mutex per (window, label), so concurrent events never both
/// observe "no group yet" for the same label.
#[derive(Default)]
pub(crate) struct LabelLocks {
    slots: RefCell<HashMap<LockKey, Rc<Mutex<()>>>>,
}

impl LabelLocks {
    pub(crate) async fn run<F, T>(&self, window_id: WindowId, label: &str, task: F) -> T
    where
        F: Future<Output = T>,
    {
        let key = (window_id, label.to_string());
        let slot = Rc::clone(self.slots.borrow_mut().entry(key.clone()).or_default());

        let result = {
            let _guard = slot.lock().await;
            task.await
        };

        // map + ours: nobody else is waiting on this label
        if Rc::strong_count(&slot) == 2 {
            self.slots.borrow_mut().remove(&key);
        }
        result
    }

    #[cfg(test)]
    pub(crate) fn held(&self) -> usize {
        self.slots.borrow().len()
    }
}
