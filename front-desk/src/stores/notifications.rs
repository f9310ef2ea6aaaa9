//! Notification inbox
//!
//! Seed-created entries mutated by mark-read / mark-all-read and
//! removed by delete. Like the other stores, unknown ids on unguarded
//! paths are silent no-ops.

use crate::notice::Notice;
use shared::models::Notification;

/// Notification inbox
#[derive(Debug, Clone)]
pub struct NotificationInbox {
    notifications: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new(notifications: Vec<Notification>) -> Self {
        Self { notifications }
    }

    // ==================== Mutations ====================

    /// Mark a single notification read
    pub fn mark_read(&mut self, id: i64) -> Option<Notice> {
        let Some(n) = self.notifications.iter_mut().find(|n| n.id == id) else {
            tracing::warn!(id, "mark_read on unknown notification, ignoring");
            return None;
        };
        n.is_read = true;
        Some(Notice::success("Notificación marcada como leída"))
    }

    /// Mark everything read
    pub fn mark_all_read(&mut self) -> Notice {
        for n in &mut self.notifications {
            n.is_read = true;
        }
        Notice::success("Todas las notificaciones marcadas como leídas")
    }

    /// Delete a notification
    pub fn delete(&mut self, id: i64) -> Option<Notice> {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() == before {
            tracing::warn!(id, "delete on unknown notification, ignoring");
            return None;
        }
        Some(Notice::success("Notificación eliminada"))
    }

    // ==================== Derived reads ====================

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.is_read).count()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{NotificationKind, Priority};

    fn inbox() -> NotificationInbox {
        let entry = |id: i64, is_read: bool| Notification {
            id,
            kind: NotificationKind::NewReservation,
            title: NotificationKind::NewReservation.title().to_string(),
            message: format!("Reserva {id}"),
            relative_time: "Hace 5 minutos".to_string(),
            is_read,
            priority: Priority::Medium,
        };
        NotificationInbox::new(vec![entry(1, false), entry(2, false), entry(3, true)])
    }

    #[test]
    fn test_mark_read() {
        let mut i = inbox();
        assert_eq!(i.unread_count(), 2);
        i.mark_read(1).unwrap();
        assert_eq!(i.unread_count(), 1);
        // already-read stays read, still a success
        i.mark_read(3).unwrap();
        assert_eq!(i.unread_count(), 1);
    }

    #[test]
    fn test_mark_all_read() {
        let mut i = inbox();
        i.mark_all_read();
        assert_eq!(i.unread_count(), 0);
        assert_eq!(i.len(), 3);
    }

    #[test]
    fn test_delete() {
        let mut i = inbox();
        i.delete(2).unwrap();
        assert_eq!(i.len(), 2);
        assert!(i.delete(2).is_none());
    }
}
