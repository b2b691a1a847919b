//! RULE 7: AFTERNOON WINDOW
//!
//! 10 points if the purchase time is strictly after 14:00 and strictly
//! before 16:00. The boundaries themselves do not qualify.

use chrono::{NaiveTime, Timelike};

pub const AFTERNOON_POINTS: u64 = 10;

const WINDOW_START_SECS: u32 = 14 * 3600;
const WINDOW_END_SECS: u32 = 16 * 3600;

/// Calculate R7
pub fn calculate_r7(purchase_time: NaiveTime) -> u64 {
    let secs = purchase_time.num_seconds_from_midnight();
    if secs > WINDOW_START_SECS && secs < WINDOW_END_SECS {
        AFTERNOON_POINTS
    } else {
        0
    }
}
