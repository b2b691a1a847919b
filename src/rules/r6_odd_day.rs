//! RULE 6: ODD PURCHASE DAY
//!
//! 6 points if the day-of-month of the purchase date is odd.

use chrono::{Datelike, NaiveDate};

pub const ODD_DAY_POINTS: u64 = 6;

/// Calculate R6
pub fn calculate_r6(purchase_date: NaiveDate) -> u64 {
    if purchase_date.day() % 2 == 1 {
        ODD_DAY_POINTS
    } else {
        0
    }
}
