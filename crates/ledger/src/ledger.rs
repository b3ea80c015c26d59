use chrono::{DateTime, Utc};

use martpos_core::{LedgerError, LedgerResult, MovementId, ProductId};
use martpos_products::{Product, ProductDraft, ProductPatch, StockLevel, DEFAULT_MIN_STOCK};
use martpos_sales::{Order, OrderDraft, OrderStatus, next_order_id, sort_by_time_desc};

use crate::movement::{AdjustDirection, MovementKind, StockMovement};

/// Single-owner state container for the catalog, the order list, and the
/// stock-movement log.
///
/// Every operation is a total, synchronous mutation: it either applies
/// fully or returns an error having changed nothing. Stock never goes
/// below zero; an over-order fails with `InsufficientStock` instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockLedger {
    pub(crate) products: Vec<Product>,
    pub(crate) orders: Vec<Order>,
    pub(crate) movements: Vec<StockMovement>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore from a snapshot's collections.
    pub fn from_parts(
        products: Vec<Product>,
        orders: Vec<Order>,
        movements: Vec<StockMovement>,
    ) -> Self {
        Self {
            products,
            orders,
            movements,
        }
    }

    /// Hand the collections back for snapshotting.
    pub fn into_parts(self) -> (Vec<Product>, Vec<Order>, Vec<StockMovement>) {
        (self.products, self.orders, self.movements)
    }

    // --- product queries ---

    /// All products, insertion order (no implicit sort).
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Conjunctive search: substring query, exact category, stock band.
    pub fn search_products(
        &self,
        query: &str,
        category: Option<&str>,
        level: Option<StockLevel>,
    ) -> Vec<&Product> {
        martpos_products::search(&self.products, query, category, level)
    }

    // --- order queries ---

    /// All orders, descending by timestamp.
    pub fn orders(&self) -> Vec<Order> {
        sort_by_time_desc(&self.orders)
    }

    /// The n most recent orders (dashboard feed).
    pub fn recent_orders(&self, limit: usize) -> Vec<Order> {
        let mut orders = self.orders();
        orders.truncate(limit);
        orders
    }

    // --- movement queries ---

    /// All movements, descending by timestamp.
    pub fn movements(&self) -> Vec<StockMovement> {
        let mut movements = self.movements.clone();
        movements.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
        movements
    }

    /// Movement history for one product, most recent first. Works for
    /// deleted products too; the log keeps their ids on purpose.
    pub fn movements_for_product(&self, id: ProductId) -> Vec<&StockMovement> {
        self.movements.iter().filter(|m| m.product_id == id).collect()
    }

    // --- product mutation ---

    /// Append a product with id = max existing + 1 (1 when empty).
    ///
    /// `min_stock` defaults when the draft leaves it unset; `last_stock_in`
    /// starts at the creation date.
    pub fn add_product(&mut self, draft: ProductDraft, now: DateTime<Utc>) -> &Product {
        let id = self
            .products
            .iter()
            .map(|p| p.id)
            .max()
            .map_or(ProductId::new(1), ProductId::next);

        self.products.push(Product {
            id,
            name: draft.name,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
            min_stock: draft.min_stock.unwrap_or(DEFAULT_MIN_STOCK),
            description: draft.description,
            supplier: draft.supplier,
            barcode: draft.barcode,
            last_stock_in: now.date_naive(),
        });
        &self.products[self.products.len() - 1]
    }

    /// Field-wise merge into the existing record.
    pub fn update_product(&mut self, id: ProductId, patch: &ProductPatch) -> LedgerResult<&Product> {
        let idx = self.index_of(id)?;
        patch.apply_to(&mut self.products[idx]);
        Ok(&self.products[idx])
    }

    /// Remove and return the record. Historical orders and movements are
    /// left untouched; their product ids dangle by design.
    pub fn delete_product(&mut self, id: ProductId) -> LedgerResult<Product> {
        let idx = self.index_of(id)?;
        Ok(self.products.remove(idx))
    }

    // --- stock mutation ---

    /// Write an absolute stock level and log the implied delta.
    ///
    /// The recorded movement's `previous_stock` is the pre-call stock and
    /// its `current_stock` is `new_stock`; the two are written in the same
    /// operation and can never drift apart.
    pub fn set_stock(
        &mut self,
        product_id: ProductId,
        new_stock: i64,
        kind: MovementKind,
        notes: &str,
        now: DateTime<Utc>,
    ) -> LedgerResult<&Product> {
        if new_stock < 0 {
            return Err(LedgerError::validation("stock cannot go negative"));
        }
        let idx = self.index_of(product_id)?;
        let previous = self.products[idx].stock;
        self.products[idx].stock = new_stock;

        let movement = StockMovement {
            id: self.next_movement_id(),
            product_id,
            product_name: self.products[idx].name.clone(),
            kind,
            quantity: new_stock - previous,
            previous_stock: previous,
            current_stock: new_stock,
            recorded_at: now,
            notes: notes.to_string(),
            supplier: None,
        };
        self.push_movement(movement);
        Ok(&self.products[idx])
    }

    /// Record an inbound delivery: stock += quantity, `last_stock_in`
    /// becomes today, and the movement carries the supplier.
    pub fn receive_stock(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        supplier: &str,
        notes: &str,
        now: DateTime<Utc>,
    ) -> LedgerResult<&Product> {
        if quantity <= 0 {
            return Err(LedgerError::validation("receive quantity must be positive"));
        }
        let idx = self.index_of(product_id)?;
        let previous = self.products[idx].stock;
        let new_stock = previous + quantity;
        self.products[idx].stock = new_stock;
        self.products[idx].last_stock_in = now.date_naive();

        let movement = StockMovement {
            id: self.next_movement_id(),
            product_id,
            product_name: self.products[idx].name.clone(),
            kind: MovementKind::In,
            quantity,
            previous_stock: previous,
            current_stock: new_stock,
            recorded_at: now,
            notes: if notes.trim().is_empty() {
                "stock received".to_string()
            } else {
                notes.to_string()
            },
            supplier: (!supplier.trim().is_empty()).then(|| supplier.to_string()),
        };
        self.push_movement(movement);
        Ok(&self.products[idx])
    }

    /// Manual adjustment from the receiving screen. Decreases floor at
    /// zero; the recorded delta is the change actually applied.
    pub fn adjust_stock(
        &mut self,
        product_id: ProductId,
        direction: AdjustDirection,
        quantity: i64,
        reason: &str,
        now: DateTime<Utc>,
    ) -> LedgerResult<&Product> {
        if quantity <= 0 {
            return Err(LedgerError::validation(
                "adjustment quantity must be positive",
            ));
        }
        let idx = self.index_of(product_id)?;
        let previous = self.products[idx].stock;
        let (new_stock, kind) = match direction {
            AdjustDirection::Increase => (previous + quantity, MovementKind::AdjustmentIn),
            AdjustDirection::Decrease => ((previous - quantity).max(0), MovementKind::AdjustmentOut),
        };
        self.products[idx].stock = new_stock;

        let movement = StockMovement {
            id: self.next_movement_id(),
            product_id,
            product_name: self.products[idx].name.clone(),
            kind,
            quantity: new_stock - previous,
            previous_stock: previous,
            current_stock: new_stock,
            recorded_at: now,
            notes: reason.to_string(),
            supplier: None,
        };
        self.push_movement(movement);
        Ok(&self.products[idx])
    }

    // --- order placement ---

    /// Record an order (most-recent-first) and, for a tracked product,
    /// apply the implicit stock-out movement.
    ///
    /// Tracked orders compute `amount = quantity x unit price` at placement
    /// time; an order exceeding the available stock fails with
    /// `InsufficientStock` and changes nothing.
    pub fn place_order(&mut self, draft: OrderDraft, now: DateTime<Utc>) -> LedgerResult<Order> {
        match draft.product_id {
            Some(product_id) => {
                let product = self.product(product_id).ok_or(LedgerError::NotFound)?;
                if draft.quantity > product.stock {
                    return Err(LedgerError::insufficient_stock(
                        product_id,
                        draft.quantity,
                        product.stock,
                    ));
                }
                let product_name = product.name.clone();
                let amount = draft.quantity.max(0) as u64 * product.price;
                let new_stock = product.stock - draft.quantity;

                let order = self.push_order(
                    Some(product_id),
                    product_name,
                    draft.quantity,
                    amount,
                    now,
                );
                self.set_stock(product_id, new_stock, MovementKind::Out, "customer purchase", now)?;
                Ok(order)
            }
            None => {
                let amount = draft.amount.ok_or_else(|| {
                    LedgerError::validation("free-form order requires an amount")
                })?;
                Ok(self.push_order(None, draft.product_name, draft.quantity, amount, now))
            }
        }
    }

    // --- internals ---

    fn index_of(&self, id: ProductId) -> LedgerResult<usize> {
        self.products
            .iter()
            .position(|p| p.id == id)
            .ok_or(LedgerError::NotFound)
    }

    fn push_order(
        &mut self,
        product_id: Option<ProductId>,
        product_name: String,
        quantity: i64,
        amount: u64,
        now: DateTime<Utc>,
    ) -> Order {
        let order = Order {
            id: next_order_id(&self.orders),
            product_id,
            product_name,
            quantity,
            amount,
            placed_at: now,
            status: OrderStatus::Completed,
        };
        // Most-recent-first insertion.
        self.orders.insert(0, order.clone());
        order
    }

    fn next_movement_id(&self) -> MovementId {
        self.movements
            .iter()
            .map(|m| m.id)
            .max()
            .map_or(MovementId::new(1), MovementId::next)
    }

    /// Most-recent-first insertion, like the order list.
    fn push_movement(&mut self, movement: StockMovement) {
        self.movements.insert(0, movement);
    }
}
