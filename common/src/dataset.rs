use serde::{Deserialize, Serialize};

use crate::aggregate::{self, ProductAggregate, SalesSummary, DEFAULT_TOP_PRODUCTS};
use crate::daily_sales::DailySalesPoint;
use crate::receipt::{find_receipt, Receipt, ReceiptId};
use crate::search::filter_receipts;

/// A read-only snapshot of receipts and daily takings.
///
/// Callers hold one of these explicitly and pass it where it is needed;
/// every query recomputes from the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesData {
    receipts: Vec<Receipt>,
    daily_sales: Vec<DailySalesPoint>,
}

impl SalesData {
    pub fn new(receipts: Vec<Receipt>, daily_sales: Vec<DailySalesPoint>) -> Self {
        Self {
            receipts,
            daily_sales,
        }
    }

    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    pub fn receipt(&self, id: &ReceiptId) -> Option<&Receipt> {
        find_receipt(&self.receipts, id)
    }

    pub fn daily_sales(&self) -> &[DailySalesPoint] {
        &self.daily_sales
    }

    pub fn total_sales(&self) -> u64 {
        aggregate::total_sales(&self.receipts)
    }

    pub fn top_selling_products(&self) -> Vec<ProductAggregate> {
        aggregate::top_products(&self.receipts, DEFAULT_TOP_PRODUCTS)
    }

    pub fn top_products(&self, limit: usize) -> Vec<ProductAggregate> {
        aggregate::top_products(&self.receipts, limit)
    }

    pub fn summary(&self) -> SalesSummary {
        aggregate::summarize(&self.receipts)
    }

    pub fn recent(&self, n: usize) -> Vec<&Receipt> {
        aggregate::recent_receipts(&self.receipts, n)
    }

    pub fn search(&self, term: &str) -> Vec<&Receipt> {
        filter_receipts(&self.receipts, term)
    }
}
