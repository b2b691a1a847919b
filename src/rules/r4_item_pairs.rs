//! RULE 4: ITEM PAIRS
//!
//! 5 points for every two items. A trailing unpaired item earns nothing.

pub const POINTS_PER_PAIR: u64 = 5;

/// Calculate R4: `floor(item_count / 2) * 5`
pub fn calculate_r4(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_PAIR
}
