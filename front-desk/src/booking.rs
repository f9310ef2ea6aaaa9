//! Public booking flow
//!
//! The two-step reservation modal: date, time slot and party size
//! first, contact details second. Confirmation yields a validated
//! [`ReservationRequest`]; nothing is mutated until the caller hands
//! that request to the reservation store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::error::AppError;
use shared::models::ReservationRequest;

/// Calendar load marker for a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayLoad {
    Normal,
    HighDemand,
    FullyBooked,
}

/// Demand calendar shown on the public landing page
#[derive(Debug, Clone, Default)]
pub struct DemandCalendar {
    high_demand: Vec<NaiveDate>,
    fully_booked: Vec<NaiveDate>,
}

impl DemandCalendar {
    pub fn new(high_demand: Vec<NaiveDate>, fully_booked: Vec<NaiveDate>) -> Self {
        Self {
            high_demand,
            fully_booked,
        }
    }

    /// Fully booked wins over high demand when a day is marked as both.
    pub fn load_for(&self, date: NaiveDate) -> DayLoad {
        if self.fully_booked.contains(&date) {
            DayLoad::FullyBooked
        } else if self.high_demand.contains(&date) {
            DayLoad::HighDemand
        } else {
            DayLoad::Normal
        }
    }
}

/// Flow step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BookingStep {
    #[default]
    DateAndTime,
    ContactDetails,
}

/// In-progress booking
#[derive(Debug, Clone, Default)]
pub struct BookingFlow {
    pub step: BookingStep,
    pub date: Option<NaiveDate>,
    pub time: Option<chrono::NaiveTime>,
    pub guests: Option<u32>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub special_requests: String,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Step 1 is complete once date, time and party size are all chosen
    pub fn can_continue(&self) -> bool {
        self.date.is_some() && self.time.is_some() && self.guests.is_some()
    }

    /// Move to the contact-details step; no-op until step 1 is complete
    pub fn continue_to_details(&mut self) {
        if self.can_continue() {
            self.step = BookingStep::ContactDetails;
        }
    }

    /// Back to step 1, keeping everything entered so far
    pub fn back(&mut self) {
        self.step = BookingStep::DateAndTime;
    }

    /// Validate and produce the reservation request.
    ///
    /// All required fields must be present; special requests are
    /// optional. The flow itself is left untouched on failure so the
    /// user can fix the missing field and retry.
    pub fn confirm(&self) -> Result<ReservationRequest, AppError> {
        let (Some(date), Some(time), Some(guests)) = (self.date, self.time, self.guests) else {
            return Err(AppError::validation(
                "Por favor completa todos los campos requeridos",
            ));
        };
        let request = ReservationRequest {
            date,
            time,
            guests,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            special_requests: if self.special_requests.trim().is_empty() {
                None
            } else {
                Some(self.special_requests.trim().to_string())
            },
        };
        request.validate()?;
        Ok(request)
    }

    /// Clear everything back to a fresh step 1
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn filled() -> BookingFlow {
        BookingFlow {
            step: BookingStep::ContactDetails,
            date: NaiveDate::from_ymd_opt(2025, 11, 14),
            time: NaiveTime::from_hms_opt(20, 0, 0),
            guests: Some(2),
            name: "Isabel Torres".to_string(),
            email: "isabel.t@email.com".to_string(),
            phone: "+34 678 901 234".to_string(),
            special_requests: String::new(),
        }
    }

    #[test]
    fn test_cannot_continue_until_step_one_complete() {
        let mut flow = BookingFlow::new();
        flow.continue_to_details();
        assert_eq!(flow.step, BookingStep::DateAndTime);

        flow.date = NaiveDate::from_ymd_opt(2025, 11, 14);
        flow.time = NaiveTime::from_hms_opt(20, 0, 0);
        flow.guests = Some(4);
        flow.continue_to_details();
        assert_eq!(flow.step, BookingStep::ContactDetails);
    }

    #[test]
    fn test_confirm_requires_contact_fields() {
        let mut flow = filled();
        flow.phone = String::new();
        let err = flow.confirm().unwrap_err();
        assert_eq!(err.message, "Por favor completa todos los campos requeridos");
        // flow untouched, user can retry
        assert_eq!(flow.step, BookingStep::ContactDetails);
    }

    #[test]
    fn test_confirm_produces_request() {
        let mut flow = filled();
        flow.special_requests = "  Mesa junto a la ventana  ".to_string();
        let req = flow.confirm().unwrap();
        assert_eq!(req.guests, 2);
        assert_eq!(
            req.special_requests.as_deref(),
            Some("Mesa junto a la ventana")
        );
    }

    #[test]
    fn test_reset() {
        let mut flow = filled();
        flow.reset();
        assert_eq!(flow.step, BookingStep::DateAndTime);
        assert!(flow.date.is_none());
        assert!(flow.name.is_empty());
    }

    #[test]
    fn test_fully_booked_wins() {
        let day = NaiveDate::from_ymd_opt(2025, 11, 15).unwrap();
        let calendar = DemandCalendar::new(vec![day], vec![day]);
        assert_eq!(calendar.load_for(day), DayLoad::FullyBooked);
        assert_eq!(
            calendar.load_for(NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()),
            DayLoad::Normal
        );
    }
}
