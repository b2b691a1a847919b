//! RULE 1: RETAILER NAME DENSITY
//!
//! One point for every ASCII letter or digit in the retailer name. Spaces,
//! punctuation and non-ASCII characters earn nothing.

/// Calculate R1: one point per alphanumeric character
pub fn calculate_r1(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}
