//! Customer Model

use crate::models::reservation::ReservationStatus;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Loyalty tier
///
/// Externally supplied classification; no visit/spend threshold rule is
/// specified, so tiers are never derived here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerTier {
    Regular,
    Silver,
    Gold,
    Platinum,
}

impl CustomerTier {
    /// User-facing label (Spanish)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Silver => "Plata",
            Self::Gold => "Oro",
            Self::Platinum => "Platino",
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Customer profile (cliente)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_visits: u32,
    pub last_visit: NaiveDate,
    /// Lifetime spend in euros
    pub total_spent: Decimal,
    pub average_guests: f64,
    pub loyalty_points: u32,
    pub tier: CustomerTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
}

impl Customer {
    /// Two-letter initials for the avatar fallback
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// One entry of a customer's recent reservation history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub guests: u32,
    pub status: ReservationStatus,
}
