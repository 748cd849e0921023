use chrono::{DateTime, NaiveDate, Utc};

/// `2024/05/17`, the en-ZA short date.
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%Y/%m/%d").to_string()
}

/// `14:03:09`
pub fn format_time(at: &DateTime<Utc>) -> String {
    at.format("%H:%M:%S").to_string()
}

/// `17 May`, used under the daily sales bars.
pub fn format_short_date(day: &NaiveDate) -> String {
    day.format("%-d %b").to_string()
}
