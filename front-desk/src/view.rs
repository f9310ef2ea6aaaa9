//! View routing boundary
//!
//! The public and admin surfaces are selected by a single external
//! view-identifier string (the location hash). Switching views never
//! resets the state model.

use serde::{Deserialize, Serialize};

/// Top-level view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Admin,
}

impl View {
    /// Resolve a view from a location hash (without the leading '#').
    /// Anything that is not "admin" falls back to the public home view.
    pub fn from_hash(hash: &str) -> Self {
        match hash {
            "admin" => Self::Admin,
            _ => Self::Home,
        }
    }
}

/// Admin dashboard tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Overview,
    Reservations,
    Tables,
    Customers,
    Notifications,
    Analytics,
}

impl AdminTab {
    /// Stable tab identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Reservations => "reservations",
            Self::Tables => "tables",
            Self::Customers => "customers",
            Self::Notifications => "notifications",
            Self::Analytics => "analytics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hash() {
        assert_eq!(View::from_hash("admin"), View::Admin);
        assert_eq!(View::from_hash("home"), View::Home);
        assert_eq!(View::from_hash(""), View::Home);
        assert_eq!(View::from_hash("anything-else"), View::Home);
    }

    #[test]
    fn test_tab_ids() {
        assert_eq!(AdminTab::Overview.as_str(), "overview");
        assert_eq!(AdminTab::Analytics.as_str(), "analytics");
    }
}
