//! RULE 3: QUARTER MULTIPLE TOTAL
//!
//! 25 points if the total is an exact multiple of 0.25, checked as
//! `(total * 100) mod 25 == 0`. Independent of rule 2: a round total earns
//! both bonuses.
//!
//! Whole dollars are always quarter multiples, so only the cents part is
//! scaled. `fract() * 100` stays below 100 and cannot overflow.

use rust_decimal::Decimal;

pub const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Calculate R3: 25 points when `total` is a multiple of 0.25
pub fn calculate_r3(total: Decimal) -> u64 {
    let cents = total.fract() * Decimal::ONE_HUNDRED;
    if (cents % Decimal::from(25)).is_zero() {
        QUARTER_MULTIPLE_POINTS
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
    fn test_quarter_multiples() {
        assert_eq!(calculate_r3(amount("100.00")), 25);
        assert_eq!(calculate_r3(amount("100.25")), 25);
        assert_eq!(calculate_r3(amount("100.50")), 25);
        assert_eq!(calculate_r3(amount("100.75")), 25);
        assert_eq!(calculate_r3(amount("9.00")), 25);
        assert_eq!(calculate_r3(amount("-1.25")), 25);
    }

    #[test]
    fn test_non_multiples() {
        assert_eq!(calculate_r3(amount("100.10")), 0);
        assert_eq!(calculate_r3(amount("35.35")), 0);
        // Sub-cent remainder must not be rounded away
        assert_eq!(calculate_r3(amount("100.255")), 0);
        assert_eq!(calculate_r3(amount("-0.10")), 0);
    }

    #[test]
    fn test_extreme_totals_do_not_overflow() {
        assert_eq!(calculate_r3(Decimal::MAX), 25);
        assert_eq!(calculate_r3(Decimal::MIN), 25);
        assert_eq!(calculate_r3(amount("1000000000000000000000000000.00")), 25);
        assert_eq!(calculate_r3(amount("1000000000000000000000000.10")), 0);
        assert_eq!(calculate_r3(amount("0.0000000000000000000000000025")), 0);
    }
}
