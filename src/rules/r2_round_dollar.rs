//! RULE 2: ROUND DOLLAR TOTAL
//!
//! 50 points if the total has no cents.

use rust_decimal::Decimal;

pub const ROUND_DOLLAR_POINTS: u64 = 50;

/// Calculate R2: 50 points when `total` has a zero fractional part
pub fn calculate_r2(total: Decimal) -> u64 {
    if total.fract().is_zero() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amount(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_totals() {
        assert_eq!(calculate_r2(amount("100.00")), 50);
        assert_eq!(calculate_r2(amount("9.00")), 50);
        assert_eq!(calculate_r2(amount("0")), 50);
        assert_eq!(calculate_r2(amount("-3.00")), 50);
    }

    #[test]
    fn test_fractional_totals() {
        assert_eq!(calculate_r2(amount("100.10")), 0);
        assert_eq!(calculate_r2(amount("100.25")), 0);
        assert_eq!(calculate_r2(amount("100.50")), 0);
        assert_eq!(calculate_r2(amount("35.35")), 0);
        assert_eq!(calculate_r2(amount("0.001")), 0);
    }
}
