use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{PrefEntry, PreferenceStore};
use crate::error::{Result, SiftError};

/// In-memory preference store for testing.
///
/// Uses `RefCell` for interior mutability since the system is
/// single-threaded; the `PreferenceStore` trait can then take `&self` for
/// both reads and writes.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, PrefEntry>>,
    simulate_write_error: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Test helper: the full stored entry, timestamp included.
    pub fn entry(&self, key: &str) -> Option<PrefEntry> {
        self.values.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

#[async_trait(?Send)]
impl PreferenceStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).map(|e| e.value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(SiftError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), PrefEntry::new(value));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_of_a_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("filter-mode").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = MemoryStore::new();
        store.set("filter-mode", "matching-only").await.unwrap();
        assert_eq!(
            store.get("filter-mode").await.unwrap(),
            Some("matching-only".to_string())
        );
    }

    #[tokio::test]
    async fn set_replaces_the_previous_value() {
        let store = MemoryStore::new();
        store.set("filter-mode", "matching-only").await.unwrap();
        store.set("filter-mode", "off").await.unwrap();

        assert_eq!(store.get("filter-mode").await.unwrap(), Some("off".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn writes_are_timestamped() {
        let store = MemoryStore::new();
        store.set("filter-mode", "off").await.unwrap();
        assert!(store.entry("filter-mode").is_some());
    }

    #[tokio::test]
    async fn simulated_write_error_surfaces_and_leaves_state_alone() {
        let store = MemoryStore::new();
        store.set("filter-mode", "off").await.unwrap();

        store.set_simulate_write_error(true);
        let err = store.set("filter-mode", "matching-only").await;
        assert!(err.is_err());
        assert_eq!(store.get("filter-mode").await.unwrap(), Some("off".to_string()));
    }
}
