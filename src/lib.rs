//! Receipt Processor
//!
//! Scores purchase receipts against seven fixed point rules and keeps the
//! results in memory, keyed by a generated receipt id.
//!
//! Structure:
//! - `receipt`: wire shapes for submitted receipts
//! - `utils/`: amount, date and time parsers
//! - `rules/`: individual rule implementations (R1-R7)
//! - `scorer`: parses fields under a field policy and sums the rules
//! - `store`: concurrency-safe id → score store
//! - `api_server`: Axum HTTP adapter (feature `api`)

pub mod config;
pub mod error;
pub mod receipt;
pub mod rules;
pub mod scorer;
pub mod store;
pub mod utils;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, ScoringError, StoreError};
pub use receipt::{Item, Receipt};
pub use scorer::{FieldPolicy, ReceiptScore, ReceiptScorer};
pub use store::{IdGenerator, ReceiptId, ScoreRecord, ScoreStore, UuidGenerator};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState, PointsResponse, ProcessResponse};
