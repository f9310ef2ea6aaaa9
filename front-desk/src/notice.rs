//! Transient notice payload
//!
//! The toast-equivalent returned by store mutations. Fire-and-forget:
//! a notice never feeds back into the data model, the caller only
//! hands it to whatever presentation layer is attached.

use serde::{Deserialize, Serialize};
use shared::types::Timestamp;
use shared::util::now_millis;
use std::fmt;
use uuid::Uuid;

/// Notice severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient user-facing notice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// Unique id for de-duplication in the presentation layer
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
    /// Emission time (Unix milliseconds)
    pub created_at: Timestamp,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: NoticeLevel::Success,
            message: message.into(),
            created_at: now_millis(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level: NoticeLevel::Error,
            message: message.into(),
            created_at: now_millis(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_levels() {
        let ok = Notice::success("Mesa eliminada");
        assert_eq!(ok.level, NoticeLevel::Success);
        assert_eq!(ok.to_string(), "Mesa eliminada");

        let err = Notice::error("No se puede eliminar una mesa ocupada o reservada");
        assert_eq!(err.level, NoticeLevel::Error);
    }

    #[test]
    fn test_notice_ids_unique() {
        assert_ne!(Notice::success("a").id, Notice::success("a").id);
    }
}
