//! Error types for scoring, storage and configuration

use thiserror::Error;

/// Errors raised while parsing receipt fields for scoring.
///
/// Only produced under [`FieldPolicy::Strict`](crate::FieldPolicy::Strict);
/// the lenient policy substitutes zero values instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("invalid total {0:?}: expected a decimal amount")]
    InvalidTotal(String),

    #[error("invalid price {price:?} for item {index}: expected a decimal amount")]
    InvalidPrice { index: usize, price: String },

    #[error("invalid purchaseDate {0:?}: expected YYYY-MM-DD")]
    InvalidPurchaseDate(String),

    #[error("invalid purchaseTime {0:?}: expected HH:MM (24-hour)")]
    InvalidPurchaseTime(String),

    /// Amount parsed but the resulting points do not fit in 64 bits.
    #[error("amount {0} is out of range for point calculation")]
    AmountOutOfRange(String),
}

/// Errors from the score store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no receipt found for id {0}")]
    NotFound(String),

    /// The identifier generator kept returning ids that are already taken.
    #[error("could not generate a fresh receipt id after {0} attempts")]
    IdSpaceExhausted(usize),
}

/// Errors from reading the server configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {name} value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}
