//! Derived aggregates
//!
//! Pure rollups recomputed on read from current store snapshots.
//! Collections are small and mutation is synchronous, so there is no
//! caching and no incremental maintenance. Every rate guards its
//! denominator; an empty floor reports 0%, never a division by zero.

use crate::stores::{ReservationStore, TableStore};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline numbers for the overview cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub reservation_count: usize,
    pub confirmed_count: usize,
    pub total_guests: u32,
    pub table_count: usize,
    pub total_capacity: u32,
    pub available_tables: usize,
    /// Seated guests as a whole percentage of total capacity
    pub occupancy_rate: u32,
}

impl DailySummary {
    /// Compute from the current reservation and table snapshots
    pub fn compute(reservations: &ReservationStore, tables: &TableStore) -> Self {
        let total_capacity = tables.total_capacity();
        let occupancy_rate = if total_capacity == 0 {
            0
        } else {
            (tables.seated_guests() * 100 + total_capacity / 2) / total_capacity
        };
        Self {
            reservation_count: reservations.len(),
            confirmed_count: reservations.confirmed_count(),
            total_guests: reservations.total_guests(),
            table_count: tables.len(),
            total_capacity,
            available_tables: tables.available_count(),
            occupancy_rate,
        }
    }
}

/// One day of the weekly reservations/revenue series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayStat {
    /// Short weekday label ("Lun".."Dom")
    pub day: String,
    pub reservations: u32,
    /// Estimated revenue in euros
    pub revenue: Decimal,
}

/// One bucket of the time-slot histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStat {
    /// Slot label ("20:00-22:00")
    pub slot: String,
    pub reservations: u32,
}

/// One bucket of the party-size distribution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestBucket {
    /// Bucket label ("1-2 personas")
    pub label: String,
    /// Share as a whole percentage
    pub percent: u32,
}

/// Seeded analytics series backing the dashboard charts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSeries {
    pub weekly: Vec<DayStat>,
    pub slots: Vec<SlotStat>,
    pub guest_distribution: Vec<GuestBucket>,
}

impl AnalyticsSeries {
    /// Total reservations and revenue over the weekly series
    pub fn week_totals(&self) -> (u32, Decimal) {
        self.weekly.iter().fold(
            (0, Decimal::ZERO),
            |(count, revenue), d| (count + d.reservations, revenue + d.revenue),
        )
    }

    /// Busiest time slot, if any data exists
    pub fn peak_slot(&self) -> Option<&SlotStat> {
        self.slots.iter().max_by_key(|s| s.reservations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_on_empty_stores() {
        let reservations = ReservationStore::new(Vec::new());
        let tables = TableStore::new(Vec::new());
        let summary = DailySummary::compute(&reservations, &tables);
        assert_eq!(summary.occupancy_rate, 0);
        assert_eq!(summary.total_capacity, 0);
        assert_eq!(summary.total_guests, 0);
    }

    #[test]
    fn test_week_totals() {
        let series = AnalyticsSeries {
            weekly: vec![
                DayStat {
                    day: "Lun".to_string(),
                    reservations: 28,
                    revenue: Decimal::from(1680),
                },
                DayStat {
                    day: "Mar".to_string(),
                    reservations: 32,
                    revenue: Decimal::from(1920),
                },
            ],
            slots: Vec::new(),
            guest_distribution: Vec::new(),
        };
        let (count, revenue) = series.week_totals();
        assert_eq!(count, 60);
        assert_eq!(revenue, Decimal::from(3600));
    }

    #[test]
    fn test_peak_slot() {
        let series = AnalyticsSeries {
            weekly: Vec::new(),
            slots: vec![
                SlotStat {
                    slot: "12:00-14:00".to_string(),
                    reservations: 45,
                },
                SlotStat {
                    slot: "20:00-22:00".to_string(),
                    reservations: 82,
                },
            ],
            guest_distribution: Vec::new(),
        };
        assert_eq!(series.peak_slot().unwrap().slot, "20:00-22:00");
        assert!(AnalyticsSeries::default().peak_slot().is_none());
    }
}
