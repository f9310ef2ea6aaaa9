//! Session root
//!
//! One [`FrontDesk`] per session owns every store plus the current
//! view. Mutation is single-writer and synchronous: each user action
//! completes before the next is processed, so there is no locking
//! discipline anywhere in the model.

use crate::analytics::{AnalyticsSeries, DailySummary};
use crate::booking::{BookingFlow, DemandCalendar};
use crate::config::FrontDeskConfig;
use crate::notice::Notice;
use crate::seed;
use crate::stores::{CustomerDirectory, NotificationInbox, ReservationStore, TableStore};
use crate::view::View;
use shared::error::AppError;
use shared::models::ReservationRequest;

/// The session-scoped state model behind both surfaces
#[derive(Debug, Clone)]
pub struct FrontDesk {
    pub config: FrontDeskConfig,
    pub reservations: ReservationStore,
    pub tables: TableStore,
    pub customers: CustomerDirectory,
    pub notifications: NotificationInbox,
    pub analytics: AnalyticsSeries,
    pub demand: DemandCalendar,
    pub booking: BookingFlow,
    view: View,
}

impl FrontDesk {
    /// Build a fresh session from the seed fixtures
    pub fn seeded(config: FrontDeskConfig) -> Self {
        tracing::info!(restaurant = %config.restaurant_name, "front desk session started");
        Self {
            config,
            reservations: ReservationStore::new(seed::reservations()),
            tables: TableStore::new(seed::tables()),
            customers: CustomerDirectory::new(seed::customers(), seed::visit_history()),
            notifications: NotificationInbox::new(seed::notifications()),
            analytics: seed::analytics(),
            demand: seed::demand_calendar(),
            booking: BookingFlow::new(),
            view: View::default(),
        }
    }

    /// Current view
    pub fn view(&self) -> View {
        self.view
    }

    /// Switch views. Store state is session-scoped and survives every
    /// switch; only the view pointer moves.
    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Confirm the in-progress booking: validate, append as a pending
    /// reservation, reset the flow, and hand back the toast.
    pub fn confirm_booking(&mut self) -> Result<Notice, AppError> {
        let request = self.booking.confirm()?;
        self.reservations.add_request(&request);
        self.booking.reset();
        Ok(Notice::success(confirmation_message(&request)))
    }

    /// Overview-card rollup over the current snapshots
    pub fn daily_summary(&self) -> DailySummary {
        DailySummary::compute(&self.reservations, &self.tables)
    }
}

fn confirmation_message(request: &ReservationRequest) -> String {
    format!(
        "¡Reserva confirmada! Tu reserva para {} personas el {} a las {} ha sido confirmada.",
        request.guests,
        request.date.format("%d/%m/%Y"),
        request.time.format("%H:%M"),
    )
}
