//! Shared identifier generator.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces unique, monotonically increasing numeric identifiers.
///
/// Tasks and lists draw from the same generator, so every id is unique
/// across the whole store regardless of entity type. One instance lives in
/// the application state for the lifetime of the session.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Creates a generator whose first id is 1.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the next identifier. Never fails, never repeats.
    pub fn next(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next(), 1);
        assert_eq!(ids.next(), 2);
        assert_eq!(ids.next(), 3);
    }

    #[test]
    fn test_ids_are_pairwise_distinct() {
        let ids = IdGenerator::new();
        let drawn: HashSet<u64> = (0..1000).map(|_| ids.next()).collect();
        assert_eq!(drawn.len(), 1000);
    }

    #[test]
    fn test_ids_are_unique_across_threads() {
        let ids = Arc::new(IdGenerator::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ids = Arc::clone(&ids);
                std::thread::spawn(move || (0..500).map(|_| ids.next()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "id {id} was issued twice");
            }
        }
        assert_eq!(seen.len(), 8 * 500);
    }
}
