//! Reservation store
//!
//! Today's reservations. Mutations are replace-by-id over a small Vec;
//! unknown ids are silent no-ops (logged, nothing surfaced), matching
//! the admin surface where every action originates from a rendered row.

use super::ids::IdAlloc;
use crate::notice::Notice;
use shared::models::{Reservation, ReservationRequest, ReservationStatus};

/// Reservation store for the current business day
#[derive(Debug, Clone)]
pub struct ReservationStore {
    reservations: Vec<Reservation>,
    ids: IdAlloc,
}

impl ReservationStore {
    /// Build from seed rows; the allocator starts past the highest seed id
    pub fn new(reservations: Vec<Reservation>) -> Self {
        let highest = reservations.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            reservations,
            ids: IdAlloc::starting_after(highest),
        }
    }

    // ==================== Mutations ====================

    /// Overwrite a reservation's status, unconditionally.
    ///
    /// Any status is reachable from any status; there is no transition
    /// table. Returns the success notice, or `None` if the id is unknown.
    pub fn set_status(&mut self, id: i64, status: ReservationStatus) -> Option<Notice> {
        let Some(res) = self.reservations.iter_mut().find(|r| r.id == id) else {
            tracing::warn!(id, "set_status on unknown reservation, ignoring");
            return None;
        };
        res.status = status;
        tracing::debug!(id, status = %status.label(), "reservation status changed");
        Some(Notice::success(format!(
            "Reserva {}",
            status.label().to_lowercase()
        )))
    }

    /// Assign (or reassign) a table by display label.
    ///
    /// The label is not checked against the table store; the source of
    /// truth for which tables exist stays with that store.
    pub fn assign_table(&mut self, id: i64, table: impl Into<String>) -> Option<Notice> {
        let table = table.into();
        let Some(res) = self.reservations.iter_mut().find(|r| r.id == id) else {
            tracing::warn!(id, "assign_table on unknown reservation, ignoring");
            return None;
        };
        res.assigned_table = Some(table.clone());
        tracing::debug!(id, table = %table, "table assigned");
        Some(Notice::success(format!("Mesa {table} asignada")))
    }

    /// Append a validated booking request as a new pending reservation
    pub fn add_request(&mut self, req: &ReservationRequest) -> i64 {
        let id = self.ids.next();
        self.reservations.push(Reservation {
            id,
            time: req.time,
            customer_name: req.name.clone(),
            guest_count: req.guests,
            phone: req.phone.clone(),
            email: req.email.clone(),
            assigned_table: None,
            status: ReservationStatus::Pending,
            special_requests: req.special_requests.clone(),
        });
        tracing::info!(id, guests = req.guests, "reservation added");
        id
    }

    // ==================== Derived reads ====================

    /// Sum of guest counts over every reservation, regardless of status
    pub fn total_guests(&self) -> u32 {
        self.reservations.iter().map(|r| r.guest_count).sum()
    }

    /// Number of confirmed reservations
    pub fn confirmed_count(&self) -> usize {
        self.reservations
            .iter()
            .filter(|r| r.status == ReservationStatus::Confirmed)
            .count()
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.iter()
    }
}
