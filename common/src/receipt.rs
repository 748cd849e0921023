use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::product::{LineItem, ProductId};

/// Unique receipt identifier (`r1`, `r2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReceiptId(pub String);

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// How the customer paid at the till.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "Mobile Payment")]
    MobilePayment,
}

impl PaymentMethod {
    pub fn all() -> &'static [PaymentMethod] {
        &[
            PaymentMethod::Cash,
            PaymentMethod::CreditCard,
            PaymentMethod::DebitCard,
            PaymentMethod::MobilePayment,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::MobilePayment => "Mobile Payment",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reasons a receipt or line item cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiptError {
    #[error("line item {product} has zero quantity")]
    ZeroQuantity { product: ProductId },
    #[error("receipt total {stated} does not match line items ({computed})")]
    TotalMismatch { stated: u64, computed: u64 },
    #[error("receipt total overflows")]
    PriceOverflow,
}

/// One completed purchase. Amounts are in cents.
///
/// `total` is always the sum of the line totals: it is computed by
/// [`Receipt::new`] and re-checked when a receipt is deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ReceiptRecord")]
pub struct Receipt {
    pub id: ReceiptId,
    pub date: DateTime<Utc>,
    pub store_location: String,
    pub cashier_name: String,
    items: Vec<LineItem>,
    total: u64,
    pub payment_method: PaymentMethod,
    pub receipt_number: String,
}

impl Receipt {
    pub fn new(
        id: impl Into<ReceiptId>,
        date: DateTime<Utc>,
        store_location: impl Into<String>,
        cashier_name: impl Into<String>,
        items: Vec<LineItem>,
        payment_method: PaymentMethod,
        receipt_number: impl Into<String>,
    ) -> Result<Self, ReceiptError> {
        let total = sum_line_totals(&items)?;
        Ok(Self {
            id: id.into(),
            date,
            store_location: store_location.into(),
            cashier_name: cashier_name.into(),
            items,
            total,
            payment_method,
            receipt_number: receipt_number.into(),
        })
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

fn sum_line_totals(items: &[LineItem]) -> Result<u64, ReceiptError> {
    items.iter().try_fold(0u64, |acc, item| {
        item.checked_line_total()
            .and_then(|line| acc.checked_add(line))
            .ok_or(ReceiptError::PriceOverflow)
    })
}

/// Wire shape of a receipt before the total is checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptRecord {
    id: ReceiptId,
    date: DateTime<Utc>,
    store_location: String,
    cashier_name: String,
    items: Vec<LineItem>,
    total: u64,
    payment_method: PaymentMethod,
    receipt_number: String,
}

impl TryFrom<ReceiptRecord> for Receipt {
    type Error = ReceiptError;

    fn try_from(raw: ReceiptRecord) -> Result<Self, Self::Error> {
        let stated = raw.total;
        let receipt = Receipt::new(
            raw.id,
            raw.date,
            raw.store_location,
            raw.cashier_name,
            raw.items,
            raw.payment_method,
            raw.receipt_number,
        )?;
        if receipt.total != stated {
            return Err(ReceiptError::TotalMismatch {
                stated,
                computed: receipt.total,
            });
        }
        Ok(receipt)
    }
}

/// Look up a receipt by id. A missing id is `None`, not an error.
pub fn find_receipt<'a>(receipts: &'a [Receipt], id: &ReceiptId) -> Option<&'a Receipt> {
    receipts.iter().find(|r| &r.id == id)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn item(id: &str, name: &str, price: u64, quantity: u32) -> LineItem {
        LineItem::new(id, name, price, quantity, "Groceries").unwrap()
    }

    pub(crate) fn receipt(id: &str, number: &str, store: &str, items: Vec<LineItem>) -> Receipt {
        Receipt::new(
            id,
            Utc.with_ymd_and_hms(2024, 5, 17, 14, 3, 9).unwrap(),
            store,
            "Sarah",
            items,
            PaymentMethod::Cash,
            number,
        )
        .unwrap()
    }

    #[test]
    fn total_is_sum_of_line_totals() {
        let r = receipt(
            "r2",
            "SH-10002",
            "Durban",
            vec![item("p1", "Milk", 1_000, 1), item("p2", "Bread", 500, 3)],
        );
        assert_eq!(r.total(), 2_500);
    }

    #[test]
    fn empty_receipt_totals_zero() {
        let r = receipt("r1", "SH-10001", "Durban", vec![]);
        assert_eq!(r.total(), 0);
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let items = vec![item("p1", "Gold", u64::MAX, 1), item("p2", "Gold", 1, 1)];
        let err = Receipt::new(
            "r1",
            Utc::now(),
            "Durban",
            "John",
            items,
            PaymentMethod::Cash,
            "SH-1",
        )
        .unwrap_err();
        assert_eq!(err, ReceiptError::PriceOverflow);
    }

    #[test]
    fn deserialize_checks_stated_total() {
        let r = receipt("r1", "SH-10001", "Pretoria", vec![item("p1", "Milk", 1_000, 2)]);
        let mut value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["total"], 2_000);
        assert_eq!(value["storeLocation"], "Pretoria");
        assert_eq!(value["paymentMethod"], "Cash");

        let back: Receipt = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(back, r);

        value["total"] = serde_json::json!(1_999);
        let err = serde_json::from_value::<Receipt>(value).unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn payment_method_labels() {
        assert_eq!(PaymentMethod::CreditCard.to_string(), "Credit Card");
        assert_eq!(
            serde_json::to_value(PaymentMethod::MobilePayment).unwrap(),
            "Mobile Payment"
        );
        assert_eq!(PaymentMethod::all().len(), 4);
    }

    #[test]
    fn find_receipt_returns_match_or_none() {
        let receipts = vec![
            receipt("r1", "SH-10001", "Durban", vec![item("p1", "Milk", 1_000, 2)]),
            receipt("r2", "SH-10002", "Durban", vec![item("p2", "Bread", 500, 1)]),
        ];
        let found = find_receipt(&receipts, &ReceiptId::from("r2")).unwrap();
        assert_eq!(found, &receipts[1]);
        assert!(find_receipt(&receipts, &ReceiptId::from("r99")).is_none());
        assert!(find_receipt(&[], &ReceiptId::from("r1")).is_none());
    }
}
