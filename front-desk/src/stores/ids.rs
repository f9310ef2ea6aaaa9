//! Monotonic id allocation
//!
//! Each store owns one allocator. Ids are never reused after a delete,
//! so a delete-then-add sequence cannot collide the way a
//! collection-length scheme would.

use serde::{Deserialize, Serialize};

/// Monotonic `i64` id allocator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdAlloc {
    next: i64,
}

impl IdAlloc {
    /// Start allocating after the given id (typically the highest seed id)
    pub fn starting_after(highest: i64) -> Self {
        Self { next: highest + 1 }
    }

    /// Allocate the next id
    pub fn next(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic() {
        let mut alloc = IdAlloc::starting_after(15);
        assert_eq!(alloc.next(), 16);
        assert_eq!(alloc.next(), 17);
    }

    #[test]
    fn test_never_reissues() {
        let mut alloc = IdAlloc::starting_after(0);
        let a = alloc.next();
        // No free/release API exists at all; the next id only moves forward.
        let b = alloc.next();
        assert!(b > a);
    }
}
