use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Takings for one calendar day, in cents.
///
/// Generated independently of the receipts; a real feed would roll these up
/// from receipts grouped by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySalesPoint {
    pub date: NaiveDate,
    pub amount: u64,
}

impl DailySalesPoint {
    pub fn new(date: NaiveDate, amount: u64) -> Self {
        Self { date, amount }
    }
}

/// Largest daily amount, used to scale the dashboard bar chart.
pub fn peak_amount(points: &[DailySalesPoint]) -> u64 {
    points.iter().map(|p| p.amount).max().unwrap_or(0)
}
