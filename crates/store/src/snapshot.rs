use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use martpos_ledger::{StockLedger, StockMovement};
use martpos_products::Product;
use martpos_sales::Order;

use crate::seed;
use crate::store::{SnapshotStore, StoreError};

/// Slot holding the serialized product catalog.
pub const SLOT_PRODUCTS: &str = "storeProducts";
/// Slot holding the serialized order list.
pub const SLOT_ORDERS: &str = "storeOrders";
/// Slot holding the serialized movement log.
pub const SLOT_MOVEMENTS: &str = "storeStockMovements";

/// Full serialized copy of the three ledger collections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    pub stock_movements: Vec<StockMovement>,
}

impl Snapshot {
    /// Capture the ledger's collections in their raw stored order.
    pub fn from_ledger(ledger: &StockLedger) -> Self {
        let (products, orders, stock_movements) = ledger.clone().into_parts();
        Self {
            products,
            orders,
            stock_movements,
        }
    }

    pub fn into_ledger(self) -> StockLedger {
        StockLedger::from_parts(self.products, self.orders, self.stock_movements)
    }
}

/// Write all three slots wholesale.
pub fn save(store: &impl SnapshotStore, snapshot: &Snapshot) -> Result<(), StoreError> {
    store.write_slot(SLOT_PRODUCTS, &serde_json::to_string(&snapshot.products)?)?;
    store.write_slot(SLOT_ORDERS, &serde_json::to_string(&snapshot.orders)?)?;
    store.write_slot(
        SLOT_MOVEMENTS,
        &serde_json::to_string(&snapshot.stock_movements)?,
    )?;
    debug!(
        products = snapshot.products.len(),
        orders = snapshot.orders.len(),
        movements = snapshot.stock_movements.len(),
        "saved snapshot"
    );
    Ok(())
}

/// Read the three slots, falling back to the seed dataset slot by slot.
///
/// Each absent slot falls back independently of the others. A
/// present-but-malformed slot is an error; there is no schema versioning
/// or repair.
pub fn load_or_seed(store: &impl SnapshotStore) -> Result<Snapshot, StoreError> {
    let mut snapshot = seed::seed();

    match store.read_slot(SLOT_PRODUCTS)? {
        Some(raw) => snapshot.products = serde_json::from_str(&raw)?,
        None => info!(slot = SLOT_PRODUCTS, "slot absent, using seed data"),
    }
    match store.read_slot(SLOT_ORDERS)? {
        Some(raw) => snapshot.orders = serde_json::from_str(&raw)?,
        None => info!(slot = SLOT_ORDERS, "slot absent, using seed data"),
    }
    match store.read_slot(SLOT_MOVEMENTS)? {
        Some(raw) => snapshot.stock_movements = serde_json::from_str(&raw)?,
        None => info!(slot = SLOT_MOVEMENTS, "slot absent, using seed data"),
    }

    Ok(snapshot)
}

/// Drop all three slots; the next load starts from seed data again.
pub fn reset(store: &impl SnapshotStore) -> Result<(), StoreError> {
    store.remove_slot(SLOT_PRODUCTS)?;
    store.remove_slot(SLOT_ORDERS)?;
    store.remove_slot(SLOT_MOVEMENTS)?;
    Ok(())
}
