//! Rule modules for receipt scoring
//!
//! Each of the seven point rules lives in its own module. Rules are pure and
//! additive: they read already-parsed fields and return non-negative points,
//! and the scorer sums them.

pub mod r1_retailer_name;
pub mod r2_round_dollar;
pub mod r3_quarter_multiple;
pub mod r4_item_pairs;
pub mod r5_description_length;
pub mod r6_odd_day;
pub mod r7_afternoon_window;

// Re-export rule functions
pub use r1_retailer_name::calculate_r1;
pub use r2_round_dollar::calculate_r2;
pub use r3_quarter_multiple::calculate_r3;
pub use r4_item_pairs::calculate_r4;
pub use r5_description_length::{calculate_r5, PricedItem};
pub use r6_odd_day::calculate_r6;
pub use r7_afternoon_window::calculate_r7;

/// Number of scoring rules
pub const RULE_COUNT: usize = 7;
