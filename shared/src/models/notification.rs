//! Notification Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewReservation,
    Cancellation,
    SpecialRequest,
    Reminder,
}

impl NotificationKind {
    /// User-facing title (Spanish)
    pub fn title(&self) -> &'static str {
        match self {
            Self::NewReservation => "Nueva Reserva",
            Self::Cancellation => "Cancelación",
            Self::SpecialRequest => "Solicitud Especial",
            Self::Reminder => "Recordatorio de Reserva",
        }
    }
}

/// Notification priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// User-facing label (Spanish)
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Media",
            Self::Low => "Baja",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inbox notification entity
///
/// Seed-only in this system; created externally, mutated by
/// mark-read / mark-all-read, removed by delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Pre-rendered relative time label ("Hace 5 minutos")
    pub relative_time: String,
    pub is_read: bool,
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::NewReservation).unwrap(),
            "\"new_reservation\""
        );
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }
}
