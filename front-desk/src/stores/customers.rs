//! Customer directory
//!
//! Read-only profiles with substring search and a display-focus
//! selection pointer. No create/update/delete is exposed; the
//! directory is the sole owner of customer records and the selection
//! is an id lookup, never ownership.

use shared::models::{Customer, VisitRecord};
use std::collections::HashMap;

/// Customer directory
#[derive(Debug, Clone)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
    history: HashMap<i64, Vec<VisitRecord>>,
    selected: Option<i64>,
}

impl CustomerDirectory {
    pub fn new(customers: Vec<Customer>, history: HashMap<i64, Vec<VisitRecord>>) -> Self {
        Self {
            customers,
            history,
            selected: None,
        }
    }

    /// Case-insensitive substring search over name and email, plus a
    /// raw substring match on phone. Accent-sensitive: "garcía" matches
    /// "García" but not "Garcia". Input order is preserved and the
    /// filter is restartable (pure read, nothing is consumed).
    pub fn search(&self, query: &str) -> Vec<&Customer> {
        let q = query.to_lowercase();
        self.customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&q)
                    || c.email.to_lowercase().contains(&q)
                    || c.phone.contains(query)
            })
            .collect()
    }

    /// Point the detail view at a customer. Unknown ids clear the
    /// selection rather than leaving a dangling pointer.
    pub fn select(&mut self, id: i64) {
        if self.customers.iter().any(|c| c.id == id) {
            self.selected = Some(id);
        } else {
            tracing::warn!(id, "select on unknown customer, clearing selection");
            self.selected = None;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Currently viewed customer, if any
    pub fn selected(&self) -> Option<&Customer> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Recent reservation history for a customer (seed data)
    pub fn visit_history(&self, id: i64) -> &[VisitRecord] {
        self.history.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Top customers by total visits, descending (analytics ranking)
    pub fn top_customers(&self, n: usize) -> Vec<&Customer> {
        let mut ranked: Vec<&Customer> = self.customers.iter().collect();
        ranked.sort_by(|a, b| b.total_visits.cmp(&a.total_visits));
        ranked.truncate(n);
        ranked
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use shared::models::CustomerTier;

    fn customer(id: i64, name: &str, email: &str, phone: &str, visits: u32) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            total_visits: visits,
            last_visit: NaiveDate::from_ymd_opt(2025, 11, 5).unwrap(),
            total_spent: Decimal::from(1000),
            average_guests: 2.0,
            loyalty_points: visits * 10,
            tier: CustomerTier::Regular,
            preferences: None,
        }
    }

    fn directory() -> CustomerDirectory {
        CustomerDirectory::new(
            vec![
                customer(1, "María García", "maria.garcia@email.com", "+34 612 345 678", 24),
                customer(2, "Carlos Rodríguez", "carlos.r@email.com", "+34 623 456 789", 48),
                customer(3, "Ana Martínez", "ana.m@email.com", "+34 634 567 890", 12),
            ],
            HashMap::new(),
        )
    }

    #[test]
    fn test_search_case_insensitive_accent_sensitive() {
        let d = directory();
        let hits = d.search("garcía");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "María García");
        // accent-sensitive: the unaccented form does not match
        assert!(d.search("garcia").iter().all(|c| c.name != "María García"));
    }

    #[test]
    fn test_search_matches_email_and_phone() {
        let d = directory();
        assert_eq!(d.search("carlos.r@")[0].id, 2);
        assert_eq!(d.search("634 567")[0].id, 3);
    }

    #[test]
    fn test_search_empty_query_returns_all_in_order() {
        let d = directory();
        let all = d.search("");
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, 1);
        assert_eq!(all[2].id, 3);
    }

    #[test]
    fn test_search_is_restartable() {
        let d = directory();
        assert_eq!(d.search("a").len(), d.search("a").len());
    }

    #[test]
    fn test_selection_pointer() {
        let mut d = directory();
        assert!(d.selected().is_none());
        d.select(2);
        assert_eq!(d.selected().unwrap().name, "Carlos Rodríguez");
        d.select(99);
        assert!(d.selected().is_none());
    }

    #[test]
    fn test_top_customers_by_visits() {
        let d = directory();
        let top = d.top_customers(2);
        assert_eq!(top[0].id, 2);
        assert_eq!(top[1].id, 1);
    }
}
