//! Stock ledger: the single-owner bookkeeping core.
//!
//! [`StockLedger`] exclusively owns the product catalog, the order list,
//! and the stock-movement audit log. Callers never touch the collections
//! directly; every read and mutation goes through the operations here.
//! All logic is deterministic and free of IO; timestamps are passed in.

pub mod ledger;
pub mod movement;
pub mod stats;

pub use ledger::StockLedger;
pub use movement::{AdjustDirection, MovementKind, StockMovement};
pub use stats::{CategoryStats, LedgerStats};
