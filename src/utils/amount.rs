//! Monetary amount parsing
//!
//! Amounts arrive as text ("35.35") and are parsed into exact decimals so the
//! round-dollar and quarter checks never suffer binary floating point error.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a monetary amount such as `"12.25"` or `"-3"`.
///
/// Surrounding whitespace is not accepted.
pub fn parse_amount(text: &str) -> Option<Decimal> {
    Decimal::from_str(text).ok()
}

/// Round `amount` up to whole points.
///
/// Non-positive amounts earn nothing. Returns `None` when the rounded value
/// does not fit in a `u64`.
pub fn ceil_to_points(amount: Decimal) -> Option<u64> {
    if amount <= Decimal::ZERO {
        return Some(0);
    }
    amount.ceil().to_u64()
}
