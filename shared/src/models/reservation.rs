//! Reservation Model

use crate::error::AppError;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reservation status
///
/// Any status is reachable from any status via explicit admin action;
/// there is deliberately no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Seated,
    Completed,
    Cancelled,
}

impl ReservationStatus {
    /// User-facing label (Spanish, as surfaced in the admin UI)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pendiente",
            Self::Confirmed => "Confirmada",
            Self::Seated => "En mesa",
            Self::Completed => "Completada",
            Self::Cancelled => "Cancelada",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reservation entity (reserva)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    /// Reservation time for the current business day
    pub time: NaiveTime,
    pub customer_name: String,
    /// Party size, always >= 1
    pub guest_count: u32,
    pub phone: String,
    pub email: String,
    /// Display label of the assigned table, if any.
    /// Held as a label, not a foreign key; the table store is the
    /// authority on which tables exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_table: Option<String>,
    pub status: ReservationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

/// Public booking request payload (two-step reservation modal)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
}

impl ReservationRequest {
    /// Validate that every required field is present.
    ///
    /// Mirrors the booking form check: date, time, guest count, name,
    /// email and phone are all mandatory; special requests are not.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.guests == 0
            || self.name.trim().is_empty()
            || self.email.trim().is_empty()
            || self.phone.trim().is_empty()
        {
            tracing::debug!(guests = self.guests, "booking request rejected, missing fields");
            return Err(AppError::validation(
                "Por favor completa todos los campos requeridos",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ReservationRequest {
        ReservationRequest {
            date: NaiveDate::from_ymd_opt(2025, 11, 8).unwrap(),
            time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            guests: 2,
            name: "Laura Sánchez".to_string(),
            email: "laura.s@email.com".to_string(),
            phone: "+34 656 789 012".to_string(),
            special_requests: None,
        }
    }

    #[test]
    fn test_request_validates() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_request_rejects_missing_fields() {
        let mut r = request();
        r.name = "  ".to_string();
        assert!(r.validate().is_err());

        let mut r = request();
        r.guests = 0;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&ReservationStatus::Seated).unwrap();
        assert_eq!(json, "\"seated\"");
    }
}
