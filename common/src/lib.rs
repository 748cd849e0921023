pub mod aggregate;
pub mod currency;
pub mod daily_sales;
pub mod dataset;
pub mod dates;
pub mod product;
pub mod receipt;
pub mod search;

#[cfg(feature = "mock")]
pub mod mock;
