use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use martpos_core::ProductId;

/// Reorder threshold applied when a draft leaves `min_stock` unset.
pub const DEFAULT_MIN_STOCK: i64 = 10;

/// Stock-level band relative to a product's reorder threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockLevel {
    /// stock <= min_stock (inclusive).
    Low,
    /// min_stock < stock <= 2 * min_stock.
    Medium,
    /// stock > 2 * min_stock.
    High,
}

/// Catalog record: Product.
///
/// `stock` is denormalized for fast reads; the movement log is the audit
/// trail. Every stock-mutating ledger operation keeps the two consistent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Price in smallest currency unit (e.g., won).
    pub price: u64,
    pub stock: i64,
    pub min_stock: i64,
    pub description: String,
    pub supplier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub last_stock_in: NaiveDate,
}

impl Product {
    pub fn stock_level(&self) -> StockLevel {
        if self.stock <= self.min_stock {
            StockLevel::Low
        } else if self.stock <= self.min_stock * 2 {
            StockLevel::Medium
        } else {
            StockLevel::High
        }
    }

    /// Low stock means at or below the reorder threshold (inclusive).
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// On-hand value of this product (stock x unit price).
    pub fn stock_value(&self) -> u64 {
        self.stock.max(0) as u64 * self.price
    }
}

/// Input for creating a product; the ledger assigns id and `last_stock_in`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: u64,
    pub stock: i64,
    /// Defaults to [`DEFAULT_MIN_STOCK`] when unset.
    pub min_stock: Option<i64>,
    pub description: String,
    pub supplier: String,
    pub barcode: Option<String>,
}

/// Field-wise merge applied to an existing product; unset fields keep
/// their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<u64>,
    pub stock: Option<i64>,
    pub min_stock: Option<i64>,
    pub description: Option<String>,
    pub supplier: Option<String>,
    pub barcode: Option<String>,
}

impl ProductPatch {
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(min_stock) = self.min_stock {
            product.min_stock = min_stock;
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(supplier) = &self.supplier {
            product.supplier = supplier.clone();
        }
        if let Some(barcode) = &self.barcode {
            product.barcode = Some(barcode.clone());
        }
    }
}
