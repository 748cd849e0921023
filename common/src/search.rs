use crate::receipt::Receipt;

/// Receipts whose number, store or any item name contains `term`,
/// ignoring case. An empty term matches every receipt. Order is kept.
pub fn filter_receipts<'a>(receipts: &'a [Receipt], term: &str) -> Vec<&'a Receipt> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return receipts.iter().collect();
    }
    receipts.iter().filter(|r| matches(r, &term)).collect()
}

/// `term` must already be lowercased.
fn matches(receipt: &Receipt, term: &str) -> bool {
    receipt.receipt_number.to_lowercase().contains(term)
        || receipt.store_location.to_lowercase().contains(term)
        || receipt
            .items()
            .iter()
            .any(|item| item.name.to_lowercase().contains(term))
}
