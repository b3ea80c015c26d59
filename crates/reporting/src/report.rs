use chrono::{DateTime, Utc};
use thiserror::Error;

use martpos_ledger::StockLedger;

use crate::format::format_currency;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("csv serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("report rendering failed: {0}")]
    Render(String),
}

/// Render the inventory report as CSV.
///
/// Layout: a title row, generation timestamp, summary totals, then a
/// per-category table. The low-stock summary counts products above zero
/// stock only; out-of-stock rows are tallied separately, matching the
/// category aggregation.
pub fn inventory_report_csv(
    ledger: &StockLedger,
    now: DateTime<Utc>,
) -> Result<String, ReportError> {
    let stats = ledger.stats(now);
    let categories = ledger.category_stats();
    let low_stock: usize = categories.iter().map(|c| c.low_stock).sum();
    let out_of_stock: usize = categories.iter().map(|c| c.out_of_stock).sum();

    let mut wtr = csv::WriterBuilder::new().flexible(true).from_writer(vec![]);

    wtr.write_record(["Inventory Report"])?;
    wtr.write_record([
        "Generated at".to_string(),
        now.format("%Y-%m-%d %H:%M").to_string(),
    ])?;
    wtr.write_record(["Total products".to_string(), stats.total_products.to_string()])?;
    wtr.write_record([
        "Total stock value".to_string(),
        format_currency(stats.total_value),
    ])?;
    wtr.write_record(["Low-stock products".to_string(), low_stock.to_string()])?;
    wtr.write_record([
        "Out-of-stock products".to_string(),
        out_of_stock.to_string(),
    ])?;
    wtr.write_record([""])?;

    wtr.write_record(["Category breakdown"])?;
    wtr.write_record([
        "Category",
        "Count",
        "Total stock",
        "Total value",
        "Low stock",
        "Out of stock",
    ])?;
    for category in &categories {
        wtr.write_record([
            category.category.clone(),
            category.count.to_string(),
            category.total_stock.to_string(),
            format_currency(category.total_value),
            category.low_stock.to_string(),
            category.out_of_stock.to_string(),
        ])?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ReportError::Render(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ReportError::Render(e.to_string()))
}
