use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use martpos_core::{OrderId, ProductId};

/// First id handed out on an empty order list (seed data starts at 1001).
pub const FIRST_ORDER_ID: OrderId = OrderId::new(1001);

/// Order status. Orders are recorded after the fact, so there is no
/// transition model; every recorded order is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
}

/// Recorded order.
///
/// `amount` is quantity x unit price captured at order time and never
/// recomputed; `product_name` is a denormalized copy that is not re-synced
/// if the product is later renamed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Absent for free-form orders not tied to a catalog product.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub quantity: i64,
    /// Amount in smallest currency unit (e.g., won).
    pub amount: u64,
    pub placed_at: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Input for placing an order; the ledger assigns id, timestamp, and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub product_id: Option<ProductId>,
    /// Display name; for tracked products the ledger takes the catalog name.
    pub product_name: String,
    pub quantity: i64,
    /// Preset amount for free-form orders; tracked products compute it from
    /// the unit price instead.
    pub amount: Option<u64>,
}

/// Next id: max existing + 1, or [`FIRST_ORDER_ID`] on an empty list.
pub fn next_order_id(orders: &[Order]) -> OrderId {
    orders
        .iter()
        .map(|o| o.id)
        .max()
        .map_or(FIRST_ORDER_ID, OrderId::next)
}

/// Descending by timestamp, stable (ties keep their relative order).
pub fn sort_by_time_desc(orders: &[Order]) -> Vec<Order> {
    let mut sorted = orders.to_vec();
    sorted.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(id: u32, hour: u32, minute: u32) -> Order {
        Order {
            id: OrderId::new(id),
            product_id: Some(ProductId::new(1)),
            product_name: "Cola".to_string(),
            quantity: 1,
            amount: 1500,
            placed_at: Utc.with_ymd_and_hms(2024, 11, 15, hour, minute, 0).unwrap(),
            status: OrderStatus::Completed,
        }
    }

    #[test]
    fn empty_list_seeds_at_1001() {
        assert_eq!(next_order_id(&[]), OrderId::new(1001));
    }

    #[test]
    fn next_id_is_max_plus_one_even_after_gaps() {
        let orders = vec![order(1001, 14, 0), order(1005, 14, 10), order(1003, 14, 20)];
        assert_eq!(next_order_id(&orders), OrderId::new(1006));
    }

    #[test]
    fn sort_is_descending_by_timestamp() {
        let orders = vec![order(1001, 14, 0), order(1003, 14, 30), order(1002, 14, 15)];
        let sorted = sort_by_time_desc(&orders);
        let ids: Vec<u32> = sorted.iter().map(|o| o.id.get()).collect();
        assert_eq!(ids, vec![1003, 1002, 1001]);
    }

    #[test]
    fn sort_keeps_tied_timestamps_in_relative_order() {
        let mut a = order(1001, 14, 0);
        let mut b = order(1002, 14, 0);
        a.product_name = "first".to_string();
        b.product_name = "second".to_string();
        let sorted = sort_by_time_desc(&[a, b]);
        assert_eq!(sorted[0].product_name, "first");
        assert_eq!(sorted[1].product_name, "second");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: assigned ids strictly dominate every existing id.
            #[test]
            fn next_id_exceeds_all_existing(ids in proptest::collection::vec(1001u32..5000, 1..30)) {
                let orders: Vec<Order> = ids
                    .iter()
                    .map(|&id| Order {
                        id: OrderId::new(id),
                        product_id: None,
                        product_name: String::new(),
                        quantity: 1,
                        amount: 0,
                        placed_at: Utc.with_ymd_and_hms(2024, 11, 15, 12, 0, 0).unwrap(),
                        status: OrderStatus::Completed,
                    })
                    .collect();
                let next = next_order_id(&orders);
                for order in &orders {
                    prop_assert!(next > order.id);
                }
            }

            /// Property: sorting permutes, and adjacent timestamps never ascend.
            #[test]
            fn sort_is_a_monotone_permutation(minutes in proptest::collection::vec(0u32..60, 0..30)) {
                let orders: Vec<Order> = minutes
                    .iter()
                    .enumerate()
                    .map(|(i, &m)| Order {
                        id: OrderId::new(1001 + i as u32),
                        product_id: None,
                        product_name: String::new(),
                        quantity: 1,
                        amount: 0,
                        placed_at: Utc.with_ymd_and_hms(2024, 11, 15, 12, m, 0).unwrap(),
                        status: OrderStatus::Completed,
                    })
                    .collect();
                let sorted = sort_by_time_desc(&orders);
                prop_assert_eq!(sorted.len(), orders.len());
                for pair in sorted.windows(2) {
                    prop_assert!(pair[0].placed_at >= pair[1].placed_at);
                }
            }
        }
    }
}
