//! Derived statistics: dashboard totals and category aggregation.
//!
//! Everything here is a linear scan over the owned collections; nothing is
//! cached or incremental. "Today" is the calendar date of the timestamp the
//! caller passes in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use martpos_products::Product;

use crate::ledger::StockLedger;

/// Dashboard totals over the whole ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total_products: usize,
    pub total_stock: i64,
    /// Sum of stock x unit price, smallest currency unit.
    pub total_value: u64,
    /// Products at or below their reorder threshold (out-of-stock included).
    pub low_stock_products: Vec<Product>,
    pub low_stock_count: usize,
    pub out_of_stock_count: usize,
    /// Distinct categories in order of first appearance.
    pub categories: Vec<String>,
    pub category_count: usize,
    /// Amount and count of orders placed on the reference date.
    pub today_sales: u64,
    pub today_order_count: usize,
}

/// Per-category aggregate. A product counts toward `out_of_stock` or
/// `low_stock`, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: usize,
    pub total_stock: i64,
    pub total_value: u64,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl CategoryStats {
    fn empty(category: String) -> Self {
        Self {
            category,
            count: 0,
            total_stock: 0,
            total_value: 0,
            low_stock: 0,
            out_of_stock: 0,
        }
    }
}

impl StockLedger {
    /// Dashboard totals; `now` fixes what "today" means.
    pub fn stats(&self, now: DateTime<Utc>) -> LedgerStats {
        let today = now.date_naive();

        let mut total_stock = 0i64;
        let mut total_value = 0u64;
        let mut low_stock_products = Vec::new();
        let mut out_of_stock_count = 0usize;
        let mut categories: Vec<String> = Vec::new();

        for product in &self.products {
            total_stock += product.stock;
            total_value += product.stock_value();
            if product.is_low_stock() {
                low_stock_products.push(product.clone());
            }
            if product.is_out_of_stock() {
                out_of_stock_count += 1;
            }
            if !categories.iter().any(|c| c == &product.category) {
                categories.push(product.category.clone());
            }
        }

        let mut today_sales = 0u64;
        let mut today_order_count = 0usize;
        for order in &self.orders {
            if order.placed_at.date_naive() == today {
                today_sales += order.amount;
                today_order_count += 1;
            }
        }

        LedgerStats {
            total_products: self.products.len(),
            total_stock,
            total_value,
            low_stock_count: low_stock_products.len(),
            low_stock_products,
            out_of_stock_count,
            category_count: categories.len(),
            categories,
            today_sales,
            today_order_count,
        }
    }

    /// Per-category aggregates in first-seen-category order.
    pub fn category_stats(&self) -> Vec<CategoryStats> {
        let mut stats: Vec<CategoryStats> = Vec::new();
        for product in &self.products {
            let idx = match stats.iter().position(|s| s.category == product.category) {
                Some(idx) => idx,
                None => {
                    stats.push(CategoryStats::empty(product.category.clone()));
                    stats.len() - 1
                }
            };
            let entry = &mut stats[idx];
            entry.count += 1;
            entry.total_stock += product.stock;
            entry.total_value += product.stock_value();
            if product.is_out_of_stock() {
                entry.out_of_stock += 1;
            } else if product.is_low_stock() {
                entry.low_stock += 1;
            }
        }
        stats
    }
}
