use std::fmt;

use serde::{Deserialize, Serialize};

use crate::receipt::ReceiptError;

/// Catalogue product identifier (`p1`, `p2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One product entry on a slip.
///
/// Prices are in cents. A line item can only be built with a positive
/// quantity, both through [`LineItem::new`] and when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LineItemRecord")]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: u64,
    quantity: u32,
    pub category: String,
}

impl LineItem {
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: u64,
        quantity: u32,
        category: impl Into<String>,
    ) -> Result<Self, ReceiptError> {
        let id = id.into();
        if quantity == 0 {
            return Err(ReceiptError::ZeroQuantity { product: id });
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            quantity,
            category: category.into(),
        })
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `price × quantity`, or `None` if it does not fit in a `u64`.
    pub fn checked_line_total(&self) -> Option<u64> {
        self.price.checked_mul(u64::from(self.quantity))
    }

    /// `price × quantity` in cents, saturating at `u64::MAX`.
    ///
    /// [`Receipt::new`](crate::receipt::Receipt::new) rejects items whose
    /// line total overflows; a standalone item is not checked.
    pub fn line_total(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Wire shape of a line item before validation.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineItemRecord {
    id: ProductId,
    name: String,
    price: u64,
    quantity: u32,
    category: String,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = ReceiptError;

    fn try_from(raw: LineItemRecord) -> Result<Self, Self::Error> {
        LineItem::new(raw.id, raw.name, raw.price, raw.quantity, raw.category)
    }
}
