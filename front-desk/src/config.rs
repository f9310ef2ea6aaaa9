//! Front-desk configuration
//!
//! Session-level settings for the booking surface. Loaded once at
//! startup; there is no hot reload because the model is session-scoped.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Bookable time slots offered by the public flow (lunch + dinner service)
pub const TIME_SLOTS: [&str; 15] = [
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30", "15:00", "19:00", "19:30", "20:00",
    "20:30", "21:00", "21:30", "22:00", "22:30",
];

/// Front-desk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontDeskConfig {
    /// Restaurant display name
    pub restaurant_name: String,
    /// Largest party size offered by the booking flow
    pub max_party_size: u32,
}

impl Default for FrontDeskConfig {
    fn default() -> Self {
        Self {
            restaurant_name: "Riviera Restaurant".to_string(),
            max_party_size: 12,
        }
    }
}

impl FrontDeskConfig {
    /// Parsed bookable time slots, in service order
    pub fn time_slots(&self) -> Vec<NaiveTime> {
        TIME_SLOTS
            .iter()
            .filter_map(|s| shared::util::parse_hhmm(s))
            .collect()
    }

    /// Offered party sizes (1..=max)
    pub fn party_sizes(&self) -> impl Iterator<Item = u32> + '_ {
        1..=self.max_party_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = FrontDeskConfig::default();
        assert_eq!(cfg.restaurant_name, "Riviera Restaurant");
        assert_eq!(cfg.party_sizes().count(), 12);
    }

    #[test]
    fn test_all_slots_parse() {
        let cfg = FrontDeskConfig::default();
        assert_eq!(cfg.time_slots().len(), TIME_SLOTS.len());
    }
}
