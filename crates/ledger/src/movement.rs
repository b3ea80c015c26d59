use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use martpos_core::{MovementId, ProductId};

/// Classification of a stock movement.
///
/// `In`/`Out`/`Adjust` come from direct stock writes and order placement;
/// the remaining kinds come from the receiving screen's richer vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    In,
    Out,
    Adjust,
    Receive,
    AdjustmentIn,
    AdjustmentOut,
    Return,
    Damage,
    Expired,
}

/// Direction of a manual stock adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustDirection {
    Increase,
    Decrease,
}

/// Audit record: one signed stock delta with before/after values.
///
/// Invariant: `current_stock == previous_stock + quantity`, and
/// `current_stock` equals the product's stock at the moment the movement
/// was recorded. `product_name` is a denormalized copy, not re-synced on
/// rename, and `product_id` may dangle after a product is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: MovementId,
    pub product_id: ProductId,
    pub product_name: String,
    pub kind: MovementKind,
    /// Signed delta: positive for increases, negative for decreases.
    pub quantity: i64,
    pub previous_stock: i64,
    pub current_stock: i64,
    pub recorded_at: DateTime<Utc>,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}
