//! Transient page notifications

use dioxus::prelude::*;
use std::collections::VecDeque;

use crate::models::UiError;

/// Maximum number of notifications to keep in history
const MAX_NOTIFICATION_HISTORY: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    /// Toast type understood by the `Toast` component
    pub fn toast_type(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: uuid::Uuid,
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub dismissed: bool,
}

/// Bounded notification history, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> uuid::Uuid {
        let notification = Notification {
            id: uuid::Uuid::new_v4(),
            kind,
            message: message.into(),
            timestamp: chrono::Utc::now(),
            dismissed: false,
        };
        let id = notification.id;
        self.items.push_back(notification);

        while self.items.len() > MAX_NOTIFICATION_HISTORY {
            self.items.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: uuid::Uuid) {
        if let Some(notification) = self.items.iter_mut().find(|n| n.id == id) {
            notification.dismissed = true;
        }
    }

    pub fn active(&self) -> Vec<Notification> {
        self.items.iter().filter(|n| !n.dismissed).cloned().collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Notification state owned by one page
#[derive(Clone, Copy, PartialEq)]
pub struct Notifications {
    queue: Signal<NotificationQueue>,
}

impl Notifications {
    pub fn error(&mut self, error: &UiError) {
        tracing::warn!(code = error.error_code(), "{error}");
        self.queue
            .write()
            .push(NotificationKind::Error, error.user_message());
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.queue.write().push(NotificationKind::Success, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.queue.write().push(NotificationKind::Info, message);
    }

    pub fn dismiss(&mut self, id: uuid::Uuid) {
        self.queue.write().dismiss(id);
    }

    pub fn clear(&mut self) {
        self.queue.write().clear();
    }

    pub fn active(&self) -> Vec<Notification> {
        self.queue.read().active()
    }
}

pub fn use_notifications() -> Notifications {
    let queue = use_signal(NotificationQueue::default);
    Notifications { queue }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut queue = NotificationQueue::default();
        for i in 0..15 {
            queue.push(NotificationKind::Info, format!("message {i}"));
        }
        let active = queue.active();
        assert_eq!(active.len(), MAX_NOTIFICATION_HISTORY);
        assert_eq!(active[0].message, "message 5");
    }

    #[test]
    fn test_dismiss_hides_notification() {
        let mut queue = NotificationQueue::default();
        let first = queue.push(NotificationKind::Error, "Could not reach the server");
        queue.push(NotificationKind::Success, "Saved");

        queue.dismiss(first);
        let active = queue.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].kind, NotificationKind::Success);
        assert_eq!(active[0].kind.toast_type(), "success");
    }
}
