//! Snapshot persistence for the stock ledger.
//!
//! The ledger persists as three named slots (`storeProducts`,
//! `storeOrders`, `storeStockMovements`), each holding one JSON array.
//! Slots are written wholesale on teardown and read wholesale on startup;
//! there is no schema versioning, no incremental persistence, and no
//! recovery beyond falling back to the seed dataset for absent slots.

pub mod file;
pub mod in_memory;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use file::JsonFileStore;
pub use in_memory::InMemoryStore;
pub use seed::seed;
pub use snapshot::{
    SLOT_MOVEMENTS, SLOT_ORDERS, SLOT_PRODUCTS, Snapshot, load_or_seed, reset, save,
};
pub use store::{SnapshotStore, StoreError};
