//! Dining Table Model

use crate::error::AppError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Table status, advanced by a single click-to-cycle action in the
/// fixed order available → occupied → reserved → cleaning → available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
    Cleaning,
}

impl TableStatus {
    /// Next status in the fixed cycle, wrapping around
    pub fn next(self) -> Self {
        match self {
            Self::Available => Self::Occupied,
            Self::Occupied => Self::Reserved,
            Self::Reserved => Self::Cleaning,
            Self::Cleaning => Self::Available,
        }
    }

    /// User-facing label (Spanish)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Available => "Disponible",
            Self::Occupied => "Ocupada",
            Self::Reserved => "Reservada",
            Self::Cleaning => "Limpieza",
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Dining table entity (mesa)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    /// Display label ("1".."15", free-form for new tables)
    pub number: String,
    /// Seats, always >= 1
    pub capacity: u32,
    pub status: TableStatus,
    /// Free-text zone (Ventana, Interior, Centro, Privado)
    pub location: String,
    /// Only meaningful while status is `Occupied`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_guests: Option<u32>,
    /// Only meaningful while status is `Reserved`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation_time: Option<NaiveTime>,
}

/// Create table payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCreate {
    pub number: String,
    pub capacity: u32,
    pub location: String,
}

impl TableCreate {
    /// All three fields are mandatory: non-empty number and location,
    /// non-zero capacity.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.number.trim().is_empty() || self.location.trim().is_empty() || self.capacity == 0 {
            tracing::debug!(number = %self.number, "table create rejected, missing fields");
            return Err(AppError::validation("Por favor completa todos los campos"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_cycle_order() {
        assert_eq!(TableStatus::Available.next(), TableStatus::Occupied);
        assert_eq!(TableStatus::Occupied.next(), TableStatus::Reserved);
        assert_eq!(TableStatus::Reserved.next(), TableStatus::Cleaning);
        assert_eq!(TableStatus::Cleaning.next(), TableStatus::Available);
    }

    #[test]
    fn test_cycle_closes_after_four() {
        for start in [
            TableStatus::Available,
            TableStatus::Occupied,
            TableStatus::Reserved,
            TableStatus::Cleaning,
        ] {
            assert_eq!(start.next().next().next().next(), start);
        }
    }

    #[test]
    fn test_create_validation() {
        let ok = TableCreate {
            number: "16".to_string(),
            capacity: 4,
            location: "Ventana".to_string(),
        };
        assert!(ok.validate().is_ok());

        let empty = TableCreate {
            number: String::new(),
            capacity: 0,
            location: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
