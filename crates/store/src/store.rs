//! Key-value snapshot store boundary.
//!
//! This module defines the storage-facing abstraction for reading and
//! writing named snapshot slots without making any backend assumptions.

use std::sync::Arc;

use thiserror::Error;

/// Store-level error. Distinct from `LedgerError`: nothing in here is a
/// bookkeeping failure, it is all plumbing.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("slot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed slot payload: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("slot access failed: {0}")]
    Access(String),
}

/// Named-slot key-value store for serialized snapshots.
///
/// Slots hold opaque strings; (de)serialization happens in the snapshot
/// layer. Implementations replace a slot's full payload on every write,
/// mirroring the wholesale write-on-teardown persistence model.
pub trait SnapshotStore {
    /// Read a slot's payload, `None` if the slot was never written.
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StoreError>;

    /// Replace a slot's payload.
    fn write_slot(&self, slot: &str, payload: &str) -> Result<(), StoreError>;

    /// Remove a slot; removing an absent slot is a no-op.
    fn remove_slot(&self, slot: &str) -> Result<(), StoreError>;
}

impl<S> SnapshotStore for Arc<S>
where
    S: SnapshotStore + ?Sized,
{
    fn read_slot(&self, slot: &str) -> Result<Option<String>, StoreError> {
        (**self).read_slot(slot)
    }

    fn write_slot(&self, slot: &str, payload: &str) -> Result<(), StoreError> {
        (**self).write_slot(slot, payload)
    }

    fn remove_slot(&self, slot: &str) -> Result<(), StoreError> {
        (**self).remove_slot(slot)
    }
}
