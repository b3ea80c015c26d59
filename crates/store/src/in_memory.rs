use std::collections::HashMap;
use std::sync::RwLock;

use crate::store::{SnapshotStore, StoreError};

/// In-memory snapshot store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slots: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemoryStore {
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StoreError> {
        let slots = self
            .slots
            .read()
            .map_err(|_| StoreError::Access("lock poisoned".to_string()))?;
        Ok(slots.get(slot).cloned())
    }

    fn write_slot(&self, slot: &str, payload: &str) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StoreError::Access("lock poisoned".to_string()))?;
        slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }

    fn remove_slot(&self, slot: &str) -> Result<(), StoreError> {
        let mut slots = self
            .slots
            .write()
            .map_err(|_| StoreError::Access("lock poisoned".to_string()))?;
        slots.remove(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_back_what_was_written() {
        let store = InMemoryStore::new();
        assert!(store.read_slot("storeProducts").unwrap().is_none());

        store.write_slot("storeProducts", "[]").unwrap();
        assert_eq!(store.read_slot("storeProducts").unwrap().as_deref(), Some("[]"));

        store.write_slot("storeProducts", "[1]").unwrap();
        assert_eq!(store.read_slot("storeProducts").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn remove_is_idempotent() {
        let store = InMemoryStore::new();
        store.write_slot("storeOrders", "[]").unwrap();
        store.remove_slot("storeOrders").unwrap();
        store.remove_slot("storeOrders").unwrap();
        assert!(store.read_slot("storeOrders").unwrap().is_none());
    }
}
