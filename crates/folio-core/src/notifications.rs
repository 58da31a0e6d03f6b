//! Notification queue backing the toast stack.

use std::collections::VecDeque;
use std::time::Duration;

/// Oldest toasts are dropped beyond this
pub const MAX_NOTIFICATIONS: usize = 5;

/// How long a toast stays up before it dismisses itself
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "toast-info",
            NotificationKind::Success => "toast-success",
            NotificationKind::Error => "toast-error",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
    next_id: u64,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification and return its id.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let notification = Notification {
            id,
            title: title.into(),
            message: message.into(),
            kind,
        };
        match kind {
            NotificationKind::Error => tracing::warn!(title = %notification.title, message = %notification.message, "notification"),
            _ => tracing::info!(title = %notification.title, "notification"),
        }

        self.queue.push_back(notification);
        while self.queue.len() > MAX_NOTIFICATIONS {
            self.queue.pop_front();
        }
        id
    }

    /// Remove by id; returns whether anything was removed.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.queue.len();
        self.queue.retain(|n| n.id != id);
        self.queue.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut notes = Notifications::new();
        let id = notes.push("Error", "File not found", NotificationKind::Error);
        assert_eq!(notes.len(), 1);
        assert!(notes.dismiss(id));
        assert!(!notes.dismiss(id));
        assert!(notes.is_empty());
    }

    #[test]
    fn test_capped() {
        let mut notes = Notifications::new();
        for i in 0..8 {
            notes.push(format!("n{i}"), "", NotificationKind::Info);
        }
        assert_eq!(notes.len(), MAX_NOTIFICATIONS);
        assert_eq!(notes.iter().next().map(|n| n.title.as_str()), Some("n3"));
    }

    #[test]
    fn test_ids_unique() {
        let mut notes = Notifications::new();
        let a = notes.push("a", "", NotificationKind::Info);
        let b = notes.push("b", "", NotificationKind::Success);
        assert_ne!(a, b);
    }
}
