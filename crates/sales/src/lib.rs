//! Sales module: recorded orders.
//!
//! This crate contains the order record and its ordering/numbering rules,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod order;

pub use order::{FIRST_ORDER_ID, Order, OrderDraft, OrderStatus, next_order_id, sort_by_time_desc};
