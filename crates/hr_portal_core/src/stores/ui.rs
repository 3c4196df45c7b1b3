//! crates/hr_portal_core/src/stores/ui.rs
//!
//! Sidebar, modal and notification state. Nothing here is persisted.

use serde_json::Value;
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::{NewNotification, Notification};
use crate::ports::Clock;

/// Maximum number of notifications retained, newest first.
pub const NOTIFICATION_CAPACITY: usize = 50;

/// The single active modal and its payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveModal {
    pub name: String,
    pub data: Option<Value>,
}

#[derive(Debug, Clone)]
struct UiState {
    sidebar_open: bool,
    modal: Option<ActiveModal>,
    notifications: Vec<Notification>,
    last_notification_id: i64,
}

#[derive(Clone)]
pub struct UiStore {
    state: Arc<Mutex<UiState>>,
    clock: Arc<dyn Clock>,
}

impl UiStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(Mutex::new(UiState {
                sidebar_open: true,
                modal: None,
                notifications: Vec::new(),
                last_notification_id: 0,
            })),
            clock,
        }
    }

    // --- Sidebar ---

    pub fn sidebar_open(&self) -> bool {
        self.lock().sidebar_open
    }

    pub fn toggle_sidebar(&self) {
        let mut state = self.lock();
        state.sidebar_open = !state.sidebar_open;
    }

    pub fn set_sidebar_open(&self, open: bool) {
        self.lock().sidebar_open = open;
    }

    // --- Modal ---

    pub fn active_modal(&self) -> Option<ActiveModal> {
        self.lock().modal.clone()
    }

    /// Opens `name`, replacing whatever modal was open.
    pub fn open_modal(&self, name: impl Into<String>, data: Option<Value>) {
        self.lock().modal = Some(ActiveModal {
            name: name.into(),
            data,
        });
    }

    pub fn close_modal(&self) {
        self.lock().modal = None;
    }

    // --- Notifications ---

    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    pub fn unread_count(&self) -> usize {
        self.lock().notifications.iter().filter(|n| !n.read).count()
    }

    /// Prepends a notification and returns its id.
    ///
    /// Ids are the clock's millisecond timestamp, bumped when needed so they
    /// stay strictly increasing. Identical messages are not merged.
    pub fn add_notification(&self, new: NewNotification) -> i64 {
        let created_at = self.clock.now();
        let mut state = self.lock();
        let id = created_at
            .timestamp_millis()
            .max(state.last_notification_id + 1);
        state.last_notification_id = id;
        state.notifications.insert(
            0,
            Notification {
                id,
                message: new.message,
                kind: new.kind,
                read: new.read,
                created_at,
            },
        );
        state.notifications.truncate(NOTIFICATION_CAPACITY);
        id
    }

    pub fn remove_notification(&self, id: i64) {
        self.lock().notifications.retain(|n| n.id != id);
    }

    pub fn mark_all_read(&self) {
        for n in self.lock().notifications.iter_mut() {
            n.read = true;
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UiState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NotificationKind;
    use crate::simulated::ManualClock;
    use serde_json::json;

    fn store() -> UiStore {
        UiStore::new(Arc::new(ManualClock::at_millis(1_700_000_000_000)))
    }

    #[test]
    fn sidebar_starts_open_and_toggles() {
        let ui = store();
        assert!(ui.sidebar_open());
        ui.toggle_sidebar();
        assert!(!ui.sidebar_open());
        ui.set_sidebar_open(true);
        assert!(ui.sidebar_open());
    }

    #[test]
    fn opening_a_second_modal_replaces_the_first() {
        let ui = store();
        ui.open_modal("upload", None);
        ui.open_modal("preview", Some(json!({ "id": "3" })));
        let modal = ui.active_modal().unwrap();
        assert_eq!(modal.name, "preview");
        assert_eq!(modal.data, Some(json!({ "id": "3" })));
        ui.close_modal();
        assert_eq!(ui.active_modal(), None);
    }

    #[test]
    fn sixty_notifications_keep_the_fifty_most_recent() {
        let ui = store();
        for i in 0..60 {
            ui.add_notification(NewNotification::new(format!("note {i}"), NotificationKind::Info));
        }
        let notes = ui.notifications();
        assert_eq!(notes.len(), NOTIFICATION_CAPACITY);
        assert_eq!(notes[0].message, "note 59");
        assert_eq!(notes[49].message, "note 10");
        assert!(notes.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[test]
    fn identical_messages_are_kept_with_distinct_ids() {
        let ui = store();
        let a = ui.add_notification(NewNotification::new("signed", NotificationKind::Success));
        let b = ui.add_notification(NewNotification::new("signed", NotificationKind::Success));
        assert_ne!(a, b);
        assert_eq!(ui.notifications().len(), 2);
    }

    #[test]
    fn remove_and_mark_all_read() {
        let ui = store();
        let first = ui.add_notification(NewNotification::new("one", NotificationKind::Info));
        ui.add_notification(NewNotification::new("two", NotificationKind::Warning));
        assert_eq!(ui.unread_count(), 2);

        ui.remove_notification(first);
        assert_eq!(ui.notifications().len(), 1);
        ui.remove_notification(12345);
        assert_eq!(ui.notifications().len(), 1);

        ui.mark_all_read();
        assert_eq!(ui.unread_count(), 0);
    }
}
