//! Utility modules for receipt scoring
//!
//! Field parsers shared by the scorer:
//! - Amount: exact decimal parsing of monetary text and point rounding
//! - DateTime: purchase date and time-of-day parsing

pub mod amount;
pub mod datetime;

// Re-export commonly used functions
pub use amount::{parse_amount, ceil_to_points};
pub use datetime::{parse_purchase_date, parse_purchase_time};
