//! Session seed data
//!
//! The fixed fixtures every session starts from. Nothing here persists;
//! a reload rebuilds the same state.

use crate::analytics::{AnalyticsSeries, DayStat, GuestBucket, SlotStat};
use crate::booking::DemandCalendar;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use shared::models::{
    Customer, CustomerTier, Notification, NotificationKind, Priority, Reservation,
    ReservationStatus, Table, TableStatus, VisitRecord,
};
use std::collections::HashMap;

fn hhmm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid seed time")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Today's reservations
pub fn reservations() -> Vec<Reservation> {
    let row = |id: i64,
               time: NaiveTime,
               name: &str,
               guests: u32,
               phone: &str,
               email: &str,
               table: Option<&str>,
               status: ReservationStatus,
               requests: Option<&str>| Reservation {
        id,
        time,
        customer_name: name.to_string(),
        guest_count: guests,
        phone: phone.to_string(),
        email: email.to_string(),
        assigned_table: table.map(str::to_string),
        status,
        special_requests: requests.map(str::to_string),
    };

    vec![
        row(
            1,
            hhmm(12, 30),
            "María García",
            4,
            "+34 612 345 678",
            "maria.garcia@email.com",
            Some("5"),
            ReservationStatus::Confirmed,
            Some("Mesa junto a la ventana"),
        ),
        row(
            2,
            hhmm(13, 0),
            "Carlos Rodríguez",
            2,
            "+34 623 456 789",
            "carlos.r@email.com",
            Some("12"),
            ReservationStatus::Confirmed,
            None,
        ),
        row(
            3,
            hhmm(14, 0),
            "Ana Martínez",
            6,
            "+34 634 567 890",
            "ana.m@email.com",
            None,
            ReservationStatus::Pending,
            Some("Cumpleaños, necesitan pastel"),
        ),
        row(
            4,
            hhmm(19, 30),
            "Jorge López",
            3,
            "+34 645 678 901",
            "jorge.lopez@email.com",
            Some("8"),
            ReservationStatus::Confirmed,
            None,
        ),
        row(
            5,
            hhmm(20, 0),
            "Laura Sánchez",
            2,
            "+34 656 789 012",
            "laura.s@email.com",
            None,
            ReservationStatus::Pending,
            None,
        ),
        row(
            6,
            hhmm(20, 30),
            "Pedro Fernández",
            8,
            "+34 667 890 123",
            "pedro.f@email.com",
            Some("15"),
            ReservationStatus::Confirmed,
            Some("Menú vegetariano para 3 personas"),
        ),
        row(
            7,
            hhmm(21, 0),
            "Isabel Torres",
            4,
            "+34 678 901 234",
            "isabel.t@email.com",
            None,
            ReservationStatus::Pending,
            None,
        ),
    ]
}

/// The floor: fifteen tables with their map adornments
pub fn tables() -> Vec<Table> {
    let row = |id: i64,
               capacity: u32,
               status: TableStatus,
               location: &str,
               guests: Option<u32>,
               reserved_at: Option<NaiveTime>| Table {
        id,
        number: id.to_string(),
        capacity,
        status,
        location: location.to_string(),
        current_guests: guests,
        reservation_time: reserved_at,
    };

    vec![
        row(1, 2, TableStatus::Available, "Ventana", None, None),
        row(2, 2, TableStatus::Occupied, "Interior", Some(2), None),
        row(3, 4, TableStatus::Available, "Ventana", None, None),
        row(4, 4, TableStatus::Reserved, "Interior", None, Some(hhmm(19, 30))),
        row(5, 4, TableStatus::Occupied, "Ventana", Some(4), None),
        row(6, 2, TableStatus::Cleaning, "Interior", None, None),
        row(7, 6, TableStatus::Available, "Centro", None, None),
        row(8, 4, TableStatus::Reserved, "Ventana", None, Some(hhmm(20, 0))),
        row(9, 2, TableStatus::Available, "Interior", None, None),
        row(10, 2, TableStatus::Available, "Interior", None, None),
        row(11, 8, TableStatus::Occupied, "Centro", Some(6), None),
        row(12, 2, TableStatus::Occupied, "Ventana", Some(2), None),
        row(13, 4, TableStatus::Available, "Interior", None, None),
        row(14, 4, TableStatus::Cleaning, "Ventana", None, None),
        row(15, 10, TableStatus::Reserved, "Privado", None, Some(hhmm(21, 0))),
    ]
}

/// Customer directory profiles
pub fn customers() -> Vec<Customer> {
    let row = |id: i64,
               name: &str,
               email: &str,
               phone: &str,
               visits: u32,
               last: NaiveDate,
               spent: i64,
               avg: f64,
               points: u32,
               tier: CustomerTier,
               prefs: Option<&str>| Customer {
        id,
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        total_visits: visits,
        last_visit: last,
        total_spent: Decimal::from(spent),
        average_guests: avg,
        loyalty_points: points,
        tier,
        preferences: prefs.map(str::to_string),
    };

    vec![
        row(
            1,
            "María García",
            "maria.garcia@email.com",
            "+34 612 345 678",
            24,
            date(2025, 11, 5),
            1850,
            3.5,
            240,
            CustomerTier::Gold,
            Some("Mesa junto a la ventana, prefiere vino tinto"),
        ),
        row(
            2,
            "Carlos Rodríguez",
            "carlos.r@email.com",
            "+34 623 456 789",
            48,
            date(2025, 11, 8),
            3200,
            2.0,
            480,
            CustomerTier::Platinum,
            Some("Alérgico a mariscos, siempre pide menú degustación"),
        ),
        row(
            3,
            "Ana Martínez",
            "ana.m@email.com",
            "+34 634 567 890",
            12,
            date(2025, 10, 28),
            890,
            4.0,
            120,
            CustomerTier::Silver,
            Some("Vegetariana"),
        ),
        row(
            4,
            "Jorge López",
            "jorge.lopez@email.com",
            "+34 645 678 901",
            8,
            date(2025, 11, 1),
            520,
            2.0,
            80,
            CustomerTier::Regular,
            None,
        ),
        row(
            5,
            "Laura Sánchez",
            "laura.s@email.com",
            "+34 656 789 012",
            36,
            date(2025, 11, 7),
            2400,
            2.0,
            360,
            CustomerTier::Gold,
            Some("Prefiere cenas tardías, le gusta el postre de chocolate"),
        ),
        row(
            6,
            "Pedro Fernández",
            "pedro.f@email.com",
            "+34 667 890 123",
            15,
            date(2025, 11, 8),
            1250,
            6.0,
            150,
            CustomerTier::Silver,
            Some("Organiza eventos empresariales"),
        ),
    ]
}

/// Recent completed reservations per customer
pub fn visit_history() -> HashMap<i64, Vec<VisitRecord>> {
    let recent = vec![
        VisitRecord {
            date: date(2025, 11, 8),
            time: hhmm(20, 0),
            guests: 2,
            status: ReservationStatus::Completed,
        },
        VisitRecord {
            date: date(2025, 10, 25),
            time: hhmm(19, 30),
            guests: 2,
            status: ReservationStatus::Completed,
        },
        VisitRecord {
            date: date(2025, 10, 12),
            time: hhmm(21, 0),
            guests: 4,
            status: ReservationStatus::Completed,
        },
        VisitRecord {
            date: date(2025, 9, 28),
            time: hhmm(20, 30),
            guests: 2,
            status: ReservationStatus::Completed,
        },
    ];
    customers().iter().map(|c| (c.id, recent.clone())).collect()
}

/// Notification inbox entries
pub fn notifications() -> Vec<Notification> {
    let row = |id: i64,
               kind: NotificationKind,
               message: &str,
               relative_time: &str,
               is_read: bool,
               priority: Priority| Notification {
        id,
        kind,
        title: kind.title().to_string(),
        message: message.to_string(),
        relative_time: relative_time.to_string(),
        is_read,
        priority,
    };

    vec![
        row(
            1,
            NotificationKind::NewReservation,
            "Isabel Torres ha reservado para 4 personas el 8 de noviembre a las 21:00",
            "Hace 5 minutos",
            false,
            Priority::High,
        ),
        row(
            2,
            NotificationKind::SpecialRequest,
            "Ana Martínez solicita un pastel de cumpleaños para su reserva de hoy",
            "Hace 15 minutos",
            false,
            Priority::High,
        ),
        row(
            3,
            NotificationKind::NewReservation,
            "Laura Sánchez ha reservado para 2 personas el 8 de noviembre a las 20:00",
            "Hace 1 hora",
            false,
            Priority::Medium,
        ),
        row(
            4,
            NotificationKind::Reminder,
            "Pedro Fernández tiene una reserva para 8 personas en 30 minutos",
            "Hace 2 horas",
            true,
            Priority::Medium,
        ),
        row(
            5,
            NotificationKind::Cancellation,
            "Roberto Díaz ha cancelado su reserva para 6 personas del 10 de noviembre",
            "Hace 3 horas",
            true,
            Priority::Low,
        ),
        row(
            6,
            NotificationKind::NewReservation,
            "Carmen Ruiz ha reservado para 3 personas el 9 de noviembre a las 19:30",
            "Hace 4 horas",
            true,
            Priority::Medium,
        ),
    ]
}

/// Chart series behind the analytics dashboard
pub fn analytics() -> AnalyticsSeries {
    let day = |day: &str, reservations: u32, revenue: i64| DayStat {
        day: day.to_string(),
        reservations,
        revenue: Decimal::from(revenue),
    };
    let slot = |slot: &str, reservations: u32| SlotStat {
        slot: slot.to_string(),
        reservations,
    };
    let bucket = |label: &str, percent: u32| GuestBucket {
        label: label.to_string(),
        percent,
    };

    AnalyticsSeries {
        weekly: vec![
            day("Lun", 28, 1680),
            day("Mar", 32, 1920),
            day("Mié", 35, 2100),
            day("Jue", 42, 2520),
            day("Vie", 58, 3480),
            day("Sáb", 65, 3900),
            day("Dom", 48, 2880),
        ],
        slots: vec![
            slot("12:00-14:00", 45),
            slot("14:00-16:00", 28),
            slot("16:00-18:00", 12),
            slot("18:00-20:00", 38),
            slot("20:00-22:00", 82),
            slot("22:00-00:00", 35),
        ],
        guest_distribution: vec![
            bucket("1-2 personas", 45),
            bucket("3-4 personas", 35),
            bucket("5-6 personas", 15),
            bucket("7+ personas", 5),
        ],
    }
}

/// High-demand and fully-booked calendar markers
pub fn demand_calendar() -> DemandCalendar {
    DemandCalendar::new(
        vec![
            date(2025, 11, 14),
            date(2025, 11, 15),
            date(2025, 11, 21),
            date(2025, 11, 22),
        ],
        vec![date(2025, 11, 15)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shapes() {
        assert_eq!(reservations().len(), 7);
        assert_eq!(tables().len(), 15);
        assert_eq!(customers().len(), 6);
        assert_eq!(notifications().len(), 6);
    }

    #[test]
    fn test_seed_guest_counts_positive() {
        assert!(reservations().iter().all(|r| r.guest_count >= 1));
        assert!(tables().iter().all(|t| t.capacity >= 1));
    }

    #[test]
    fn test_map_adornments() {
        let tables = tables();
        let occupied: Vec<_> = tables
            .iter()
            .filter(|t| t.status == TableStatus::Occupied)
            .collect();
        assert!(occupied.iter().all(|t| t.current_guests.is_some()));
        let reserved: Vec<_> = tables
            .iter()
            .filter(|t| t.status == TableStatus::Reserved)
            .collect();
        assert!(reserved.iter().all(|t| t.reservation_time.is_some()));
    }

    #[test]
    fn test_analytics_series_totals() {
        let series = analytics();
        let (count, revenue) = series.week_totals();
        assert_eq!(count, 308);
        assert_eq!(revenue, Decimal::from(18480));
        assert_eq!(series.peak_slot().unwrap().slot, "20:00-22:00");
        let pct: u32 = series.guest_distribution.iter().map(|b| b.percent).sum();
        assert_eq!(pct, 100);
    }
}
