//! Built-in seed dataset: the store's shelf on first launch.
//!
//! Numbers are load-bearing for tests elsewhere (Cola 45/10, Chocopie
//! 8/15, Tissue 2/5); change them and the low-stock scenarios change too.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use martpos_core::{MovementId, OrderId, ProductId};
use martpos_ledger::{MovementKind, StockMovement};
use martpos_products::Product;
use martpos_sales::{Order, OrderStatus};

use crate::snapshot::Snapshot;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("hardcoded seed date is valid")
}

fn ts(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, day, hour, minute, 0)
        .single()
        .expect("hardcoded seed timestamp is valid")
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    name: &str,
    category: &str,
    price: u64,
    stock: i64,
    min_stock: i64,
    description: &str,
    supplier: &str,
    last_stock_in: NaiveDate,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock,
        min_stock,
        description: description.to_string(),
        supplier: supplier.to_string(),
        barcode: None,
        last_stock_in,
    }
}

fn order(id: u32, product_id: u32, name: &str, quantity: i64, amount: u64, minute: u32) -> Order {
    Order {
        id: OrderId::new(id),
        product_id: Some(ProductId::new(product_id)),
        product_name: name.to_string(),
        quantity,
        amount,
        placed_at: ts(15, 14, minute),
        status: OrderStatus::Completed,
    }
}

/// The full first-launch snapshot: 8 products, 7 completed orders
/// (ids 1001 through 1007), 4 movements.
pub fn seed() -> Snapshot {
    let products = vec![
        product(1, "Cola", "Beverages", 1500, 45, 10, "Crisp carbonated soft drink", "Coca-Cola", date(2024, 11, 10)),
        product(2, "Cider", "Beverages", 1500, 32, 10, "Cool lemon-lime cider", "Lotte Chilsung", date(2024, 11, 12)),
        product(3, "Chocopie", "Snacks", 2000, 8, 15, "Soft chocolate pie", "Orion", date(2024, 11, 8)),
        product(4, "Ramen", "Instant Food", 1200, 25, 20, "Spicy instant ramen", "Nongshim", date(2024, 11, 14)),
        product(5, "Tissue", "Household", 3000, 2, 5, "Soft facial tissue", "Yuhan-Kimberly", date(2024, 11, 5)),
        product(6, "Gum", "Snacks", 800, 50, 20, "Mint chewing gum", "Lotte", date(2024, 11, 13)),
        product(7, "Water", "Beverages", 1000, 60, 30, "Clean mineral water", "Samdasoo", date(2024, 11, 15)),
        product(8, "Cup Ramen", "Instant Food", 1800, 15, 10, "Quick cup ramen", "Nongshim", date(2024, 11, 11)),
    ];

    // Most-recent-first, the order placement path's insertion order.
    let orders = vec![
        order(1001, 1, "Cola", 2, 3000, 30),
        order(1002, 3, "Chocopie", 1, 2000, 25),
        order(1003, 4, "Ramen", 3, 3600, 20),
        order(1004, 2, "Cider", 1, 1500, 15),
        order(1005, 7, "Water", 2, 2000, 10),
        order(1006, 8, "Cup Ramen", 1, 1800, 5),
        order(1007, 6, "Gum", 2, 1600, 0),
    ];

    let stock_movements = vec![
        StockMovement {
            id: MovementId::new(1),
            product_id: ProductId::new(1),
            product_name: "Cola".to_string(),
            kind: MovementKind::In,
            quantity: 50,
            previous_stock: 20,
            current_stock: 70,
            recorded_at: ts(10, 9, 0),
            notes: "Scheduled restock".to_string(),
            supplier: Some("Coca-Cola".to_string()),
        },
        StockMovement {
            id: MovementId::new(2),
            product_id: ProductId::new(3),
            product_name: "Chocopie".to_string(),
            kind: MovementKind::Out,
            quantity: -5,
            previous_stock: 13,
            current_stock: 8,
            recorded_at: ts(15, 14, 25),
            notes: "customer purchase".to_string(),
            supplier: None,
        },
        StockMovement {
            id: MovementId::new(3),
            product_id: ProductId::new(5),
            product_name: "Tissue".to_string(),
            kind: MovementKind::Adjust,
            quantity: -3,
            previous_stock: 5,
            current_stock: 2,
            recorded_at: ts(14, 16, 0),
            notes: "Damaged goods adjustment".to_string(),
            supplier: None,
        },
        StockMovement {
            id: MovementId::new(4),
            product_id: ProductId::new(7),
            product_name: "Water".to_string(),
            kind: MovementKind::In,
            quantity: 100,
            previous_stock: 20,
            current_stock: 120,
            recorded_at: ts(15, 10, 30),
            notes: "Bulk restock".to_string(),
            supplier: Some("Samdasoo".to_string()),
        },
    ];

    Snapshot {
        products,
        orders,
        stock_movements,
    }
}
