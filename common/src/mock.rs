//! Random demo data standing in for a receipts API.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::daily_sales::DailySalesPoint;
use crate::dataset::SalesData;
use crate::product::LineItem;
use crate::receipt::{PaymentMethod, Receipt, ReceiptError};

/// Receipts generated when no count is given.
pub const DEFAULT_RECEIPT_COUNT: usize = 15;

/// Days of takings shown on the dashboard chart.
pub const DAILY_SALES_DAYS: u32 = 14;

/// Receipts are dated up to this many days back.
const RECEIPT_WINDOW_DAYS: i64 = 30;

/// (name, category), in catalogue order `p1`..`p12`.
const CATALOGUE: &[(&str, &str)] = &[
    ("Milk 1L", "Dairy"),
    ("Bread (white)", "Bakery"),
    ("Eggs (dozen)", "Dairy"),
    ("Chicken Breast", "Meat"),
    ("Tomatoes 500g", "Produce"),
    ("Potatoes 1kg", "Produce"),
    ("Coca-Cola 2L", "Beverages"),
    ("Chocolate Bar", "Snacks"),
    ("Washing Powder", "Household"),
    ("Toilet Paper 9pk", "Household"),
    ("Toothpaste", "Personal Care"),
    ("Shampoo 400ml", "Personal Care"),
];

const STORE_LOCATIONS: &[&str] = &[
    "Cape Town",
    "Johannesburg",
    "Durban",
    "Pretoria",
    "Port Elizabeth",
];

const CASHIERS: &[&str] = &["John", "Sarah", "Michael", "Emily", "David"];

/// Generate the default demo snapshot from the thread rng.
pub fn generate() -> Result<SalesData, ReceiptError> {
    generate_with(&mut rand::thread_rng(), Utc::now(), DEFAULT_RECEIPT_COUNT)
}

/// Generate `count` receipts and the daily takings series ending at `now`.
///
/// Deterministic for a seeded rng and fixed `now`.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Result<SalesData, ReceiptError> {
    let receipts = generate_receipts(rng, now, count)?;
    let daily_sales = generate_daily_sales(rng, now);
    tracing::debug!(
        receipts = receipts.len(),
        days = daily_sales.len(),
        "generated mock sales data"
    );
    Ok(SalesData::new(receipts, daily_sales))
}

/// The whole catalogue with fresh prices (R5.00 to R55.00) and quantities (1 to 5).
fn priced_catalogue<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<LineItem>, ReceiptError> {
    CATALOGUE
        .iter()
        .enumerate()
        .map(|(index, (name, category))| {
            LineItem::new(
                format!("p{}", index + 1).as_str(),
                *name,
                rng.gen_range(500..=5_500),
                rng.gen_range(1..=5),
                *category,
            )
        })
        .collect()
}

/// Receipts sorted newest first.
fn generate_receipts<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
) -> Result<Vec<Receipt>, ReceiptError> {
    let mut receipts = Vec::with_capacity(count);
    for i in 0..count {
        let mut items = priced_catalogue(rng)?;
        items.truncate(rng.gen_range(2..=9));

        let date = now - Duration::days(rng.gen_range(0..RECEIPT_WINDOW_DAYS));
        let store = STORE_LOCATIONS.choose(rng).copied().unwrap_or("Cape Town");
        let cashier = CASHIERS.choose(rng).copied().unwrap_or("John");
        let payment = PaymentMethod::all()
            .choose(rng)
            .copied()
            .unwrap_or(PaymentMethod::Cash);
        let number = format!("SH-{}", rng.gen_range(10_000..=99_999));

        receipts.push(Receipt::new(
            format!("r{}", i + 1).as_str(),
            date,
            store,
            cashier,
            items,
            payment,
            number,
        )?);
    }
    receipts.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(receipts)
}

/// One point per day for the last [`DAILY_SALES_DAYS`] days, oldest first,
/// between R15 000 and R40 000.
fn generate_daily_sales<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> Vec<DailySalesPoint> {
    let today = now.date_naive();
    (0..DAILY_SALES_DAYS)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(i64::from(days_ago));
            DailySalesPoint::new(date, rng.gen_range(1_500_000..=4_000_000))
        })
        .collect()
}
