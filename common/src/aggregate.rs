//! Sales figures derived from a snapshot of receipts.
//!
//! Every function here is pure: it borrows the receipts, recomputes from
//! scratch and keeps nothing between calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::product::ProductId;
use crate::receipt::Receipt;

/// How many products the dashboard ranks when no limit is given.
pub const DEFAULT_TOP_PRODUCTS: usize = 5;

/// How many receipts the dashboard lists under "Recent Receipts".
pub const RECENT_RECEIPTS: usize = 5;

/// Cumulative sales of one product across a set of receipts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAggregate {
    pub id: ProductId,
    pub name: String,
    pub quantity: u64,
    pub revenue: u64,
}

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub total_sales: u64,
    pub receipt_count: usize,
    /// Mean receipt total in cents, rounded down. Zero when there are no receipts.
    pub average_purchase: u64,
}

/// Sum of every receipt's stored total, saturating at `u64::MAX`.
pub fn total_sales(receipts: &[Receipt]) -> u64 {
    receipts
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.total()))
}

/// The `limit` products with the highest cumulative revenue, highest first.
///
/// Products are grouped by id and keep the first name seen for that id.
/// Equal revenues are ordered by product id so the ranking does not depend
/// on input order. Quantity and revenue saturate at `u64::MAX`.
pub fn top_products(receipts: &[Receipt], limit: usize) -> Vec<ProductAggregate> {
    if limit == 0 {
        return Vec::new();
    }

    let mut by_product: BTreeMap<&ProductId, ProductAggregate> = BTreeMap::new();
    for item in receipts.iter().flat_map(|r| r.items()) {
        let acc = by_product
            .entry(&item.id)
            .or_insert_with(|| ProductAggregate {
                id: item.id.clone(),
                name: item.name.clone(),
                quantity: 0,
                revenue: 0,
            });
        acc.quantity = acc.quantity.saturating_add(u64::from(item.quantity()));
        acc.revenue = acc.revenue.saturating_add(item.line_total());
    }

    let mut ranked: Vec<ProductAggregate> = by_product.into_values().collect();
    // BTreeMap yields ids in ascending order and sort_by is stable.
    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));
    ranked.truncate(limit);

    tracing::debug!(
        receipts = receipts.len(),
        products = ranked.len(),
        "ranked top products"
    );
    ranked
}

/// Total, count and average purchase for the dashboard.
pub fn summarize(receipts: &[Receipt]) -> SalesSummary {
    let total_sales = total_sales(receipts);
    let receipt_count = receipts.len();
    let average_purchase = match receipt_count {
        0 => 0,
        n => total_sales / n as u64,
    };
    SalesSummary {
        total_sales,
        receipt_count,
        average_purchase,
    }
}

/// The `n` most recent receipts, newest first.
pub fn recent_receipts(receipts: &[Receipt], n: usize) -> Vec<&Receipt> {
    let mut recent: Vec<&Receipt> = receipts.iter().collect();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(n);
    recent
}
