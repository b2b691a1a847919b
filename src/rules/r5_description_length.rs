//! RULE 5: DESCRIPTION LENGTH
//!
//! For each item whose trimmed description length is a positive multiple of
//! 3, add `ceil(price * 0.2)` points. Length is counted in characters.
//! Descriptions that trim to nothing earn no points.

use rust_decimal::Decimal;
use crate::error::ScoringError;
use crate::utils::ceil_to_points;

/// An item description paired with its parsed price
#[derive(Debug, Clone, Copy)]
pub struct PricedItem<'a> {
    pub short_description: &'a str,
    pub price: Decimal,
}

/// Price multiplier applied to qualifying items
fn price_multiplier() -> Decimal {
    Decimal::new(2, 1)
}

fn qualifies(short_description: &str) -> bool {
    let len = short_description.trim().chars().count();
    len > 0 && len % 3 == 0
}

/// Points earned by a single item
pub fn item_points(item: &PricedItem<'_>) -> Result<u64, ScoringError> {
    if !qualifies(item.short_description) {
        return Ok(0);
    }
    item.price
        .checked_mul(price_multiplier())
        .and_then(ceil_to_points)
        .ok_or_else(|| ScoringError::AmountOutOfRange(item.price.to_string()))
}

/// Calculate R5: sum of per-item description bonuses
pub fn calculate_r5(items: &[PricedItem<'_>]) -> Result<u64, ScoringError> {
    items
        .iter()
        .try_fold(0u64, |acc, item| Ok::<u64, ScoringError>(acc.saturating_add(item_points(item)?)))
}
