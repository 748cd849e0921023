//! Rand amounts for display. Amounts are always stored in cents.

/// South African VAT rate, in percent.
pub const VAT_PERCENT: u64 = 15;

/// Format cents the way en-ZA shows rand: `R 1 234,56`.
pub fn format_rand(cents: u64) -> String {
    let rands = cents / 100;
    let rem = cents % 100;
    format!("R {},{rem:02}", group_thousands(rands))
}

/// Compact label for chart axes: `R15k`, `R12.5k`, `R0k`.
pub fn format_rand_thousands(cents: u64) -> String {
    // tenths of a thousand rand
    let tenths = cents.saturating_add(5_000) / 10_000;
    if tenths % 10 == 0 {
        format!("R{}k", tenths / 10)
    } else {
        format!("R{}.{}k", tenths / 10, tenths % 10)
    }
}

/// VAT line printed on a slip: 15% of `total_cents`, rounded half-up.
pub fn vat_amount(total_cents: u64) -> u64 {
    ((u128::from(total_cents) * u128::from(VAT_PERCENT) + 50) / 100) as u64
}

fn group_thousands(mut n: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if n < 1_000 {
            groups.push(n.to_string());
            break;
        }
        groups.push(format!("{:03}", n % 1_000));
        n /= 1_000;
    }
    groups.reverse();
    groups.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts() {
        assert_eq!(format_rand(0), "R 0,00");
        assert_eq!(format_rand(5), "R 0,05");
        assert_eq!(format_rand(4_599), "R 45,99");
    }

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(format_rand(123_456), "R 1 234,56");
        assert_eq!(format_rand(100_000_000), "R 1 000 000,00");
        assert_eq!(format_rand(2_500_007), "R 25 000,07");
    }

    #[test]
    fn chart_labels_in_thousands() {
        assert_eq!(format_rand_thousands(1_500_000), "R15k");
        assert_eq!(format_rand_thousands(1_250_000), "R12.5k");
        assert_eq!(format_rand_thousands(0), "R0k");
        assert_eq!(format_rand_thousands(u64::MAX), "R184467440737095.5k");
    }

    #[test]
    fn vat_rounds_half_up() {
        assert_eq!(vat_amount(10_000), 1_500);
        assert_eq!(vat_amount(10), 2); // 1.5 cents
        assert_eq!(vat_amount(0), 0);
    }
}
