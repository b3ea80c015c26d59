//! Draft/patch validation at the caller boundary.
//!
//! The ledger itself trusts its inputs; screens run these checks before
//! handing data over.

use martpos_core::{LedgerError, LedgerResult, ProductId};

use crate::product::{Product, ProductDraft, ProductPatch};

/// Validate a creation draft against the current catalog.
pub fn validate_draft(draft: &ProductDraft, catalog: &[Product]) -> LedgerResult<()> {
    if draft.name.trim().is_empty() {
        return Err(LedgerError::validation("name cannot be empty"));
    }
    if draft.category.trim().is_empty() {
        return Err(LedgerError::validation("category cannot be empty"));
    }
    if draft.stock < 0 {
        return Err(LedgerError::validation("stock cannot be negative"));
    }
    if let Some(min_stock) = draft.min_stock {
        if min_stock < 0 {
            return Err(LedgerError::validation("min_stock cannot be negative"));
        }
    }
    if let Some(barcode) = &draft.barcode {
        ensure_barcode_free(barcode, None, catalog)?;
    }
    Ok(())
}

/// Validate a field-wise update against the current catalog.
pub fn validate_patch(
    product_id: ProductId,
    patch: &ProductPatch,
    catalog: &[Product],
) -> LedgerResult<()> {
    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            return Err(LedgerError::validation("name cannot be empty"));
        }
    }
    if let Some(category) = &patch.category {
        if category.trim().is_empty() {
            return Err(LedgerError::validation("category cannot be empty"));
        }
    }
    if let Some(stock) = patch.stock {
        if stock < 0 {
            return Err(LedgerError::validation("stock cannot be negative"));
        }
    }
    if let Some(min_stock) = patch.min_stock {
        if min_stock < 0 {
            return Err(LedgerError::validation("min_stock cannot be negative"));
        }
    }
    if let Some(barcode) = &patch.barcode {
        ensure_barcode_free(barcode, Some(product_id), catalog)?;
    }
    Ok(())
}

fn ensure_barcode_free(
    barcode: &str,
    own_id: Option<ProductId>,
    catalog: &[Product],
) -> LedgerResult<()> {
    if barcode.trim().is_empty() {
        return Err(LedgerError::validation("barcode cannot be blank"));
    }
    let taken = catalog.iter().any(|p| {
        p.barcode.as_deref() == Some(barcode) && own_id.is_none_or(|id| p.id != id)
    });
    if taken {
        return Err(LedgerError::validation(format!(
            "barcode already in use: {barcode}"
        )));
    }
    Ok(())
}
