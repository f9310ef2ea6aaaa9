//! Table store
//!
//! The physical floor: status cycling from the table map, add/remove
//! from the management view. Removal is the one guarded mutation in
//! the whole model; occupied and reserved tables stay put.

use super::ids::IdAlloc;
use crate::notice::Notice;
use shared::error::AppError;
use shared::models::{Table, TableCreate, TableStatus};

/// Per-status table counts (the table-map legend)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableStatusCounts {
    pub available: usize,
    pub occupied: usize,
    pub reserved: usize,
    pub cleaning: usize,
}

/// Table store
#[derive(Debug, Clone)]
pub struct TableStore {
    tables: Vec<Table>,
    ids: IdAlloc,
}

impl TableStore {
    /// Build from seed rows; the allocator starts past the highest seed id
    pub fn new(tables: Vec<Table>) -> Self {
        let highest = tables.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            tables,
            ids: IdAlloc::starting_after(highest),
        }
    }

    // ==================== Mutations ====================

    /// Advance a table one step along the fixed status cycle.
    ///
    /// `current_guests` and `reservation_time` are left untouched; they
    /// are display adornments owned by whoever seats the party, and the
    /// cycle action does not know the party size.
    pub fn advance_status(&mut self, id: i64) -> Option<TableStatus> {
        let Some(table) = self.tables.iter_mut().find(|t| t.id == id) else {
            tracing::warn!(id, "advance_status on unknown table, ignoring");
            return None;
        };
        table.status = table.status.next();
        tracing::debug!(id, status = %table.status.label(), "table status advanced");
        Some(table.status)
    }

    /// Add a new table. All fields are required; new tables start
    /// `Available` with no guests and no reservation time.
    pub fn add(&mut self, create: TableCreate) -> Result<&Table, AppError> {
        create.validate()?;
        let id = self.ids.next();
        self.tables.push(Table {
            id,
            number: create.number,
            capacity: create.capacity,
            status: TableStatus::Available,
            location: create.location,
            current_guests: None,
            reservation_time: None,
        });
        let table = self.tables.last().expect("just pushed");
        tracing::info!(id, number = %table.number, "table added");
        Ok(table)
    }

    /// Remove a table unless it is occupied or reserved.
    pub fn remove(&mut self, id: i64) -> Result<Notice, AppError> {
        let Some(pos) = self.tables.iter().position(|t| t.id == id) else {
            return Err(AppError::not_found("Mesa"));
        };
        match self.tables[pos].status {
            TableStatus::Occupied | TableStatus::Reserved => Err(AppError::table_in_use(
                "No se puede eliminar una mesa ocupada o reservada",
            )),
            TableStatus::Available | TableStatus::Cleaning => {
                let removed = self.tables.remove(pos);
                tracing::info!(id, number = %removed.number, "table removed");
                Ok(Notice::success("Mesa eliminada"))
            }
        }
    }

    // ==================== Derived reads ====================

    /// Sum of every table's capacity
    pub fn total_capacity(&self) -> u32 {
        self.tables.iter().map(|t| t.capacity).sum()
    }

    /// Number of tables currently available
    pub fn available_count(&self) -> usize {
        self.tables
            .iter()
            .filter(|t| t.status == TableStatus::Available)
            .count()
    }

    /// Per-status counts for the map legend
    pub fn status_counts(&self) -> TableStatusCounts {
        let mut counts = TableStatusCounts::default();
        for table in &self.tables {
            match table.status {
                TableStatus::Available => counts.available += 1,
                TableStatus::Occupied => counts.occupied += 1,
                TableStatus::Reserved => counts.reserved += 1,
                TableStatus::Cleaning => counts.cleaning += 1,
            }
        }
        counts
    }

    /// Guests currently seated, summed over occupied tables
    pub fn seated_guests(&self) -> u32 {
        self.tables
            .iter()
            .filter(|t| t.status == TableStatus::Occupied)
            .filter_map(|t| t.current_guests)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Table> {
        self.tables.iter()
    }
}
