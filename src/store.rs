//! Score Store - In-memory identifier → score storage
//!
//! Holds every scored receipt for the lifetime of the process. One
//! `RwLock` guards a single `FxHashMap`: lookups share the read lock, each
//! insert takes the write lock once. Records are never updated or removed.
//!
//! Identifiers come from an injectable [`IdGenerator`]; the default draws
//! random UUID v4 tokens.

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Attempts at drawing an unused identifier before `put` gives up
pub const MAX_ID_ATTEMPTS: usize = 8;

/// Opaque receipt identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(String);

impl ReceiptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ReceiptId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Source of fresh receipt identifiers
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> ReceiptId;
}

/// Random 128-bit identifiers, hyphenated UUID v4 text
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate_id(&self) -> ReceiptId {
        ReceiptId(Uuid::new_v4().to_string())
    }
}

/// A stored score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    pub points: u64,
    pub recorded_at: DateTime<Utc>,
}

/// Concurrency-safe receipt score store
pub struct ScoreStore {
    records: RwLock<FxHashMap<ReceiptId, ScoreRecord>>,
    id_generator: Box<dyn IdGenerator>,
}

impl ScoreStore {
    /// Create an empty store with random UUID identifiers
    pub fn new() -> Self {
        Self::with_generator(UuidGenerator)
    }

    /// Create an empty store that draws identifiers from `generator`
    pub fn with_generator(generator: impl IdGenerator + 'static) -> Self {
        Self {
            records: RwLock::new(FxHashMap::default()),
            id_generator: Box::new(generator),
        }
    }

    /// Store `points` under a freshly generated identifier
    ///
    /// Re-draws the identifier if the generator returns one already in use,
    /// up to [`MAX_ID_ATTEMPTS`] times. The check and the insert happen under
    /// the same write lock.
    pub fn put(&self, points: u64) -> Result<ReceiptId, StoreError> {
        let record = ScoreRecord {
            points,
            recorded_at: Utc::now(),
        };

        let mut records = self.write();
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.id_generator.generate_id();
            match records.entry(id) {
                Entry::Vacant(slot) => {
                    let id = slot.key().clone();
                    slot.insert(record);
                    return Ok(id);
                }
                Entry::Occupied(taken) => {
                    tracing::warn!(
                        "Receipt id {} already issued (attempt {}/{})",
                        taken.key(),
                        attempt,
                        MAX_ID_ATTEMPTS
                    );
                }
            }
        }

        Err(StoreError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
    }

    /// Look up the points stored for `id`
    pub fn get(&self, id: &str) -> Result<u64, StoreError> {
        self.record(id).map(|r| r.points)
    }

    /// Look up the full record stored for `id`
    pub fn record(&self, id: &str) -> Result<ScoreRecord, StoreError> {
        self.read()
            .get(id)
            .copied()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Number of stored receipts
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Every write is a single `insert`, so a panicking holder cannot leave a
    // half-written entry behind and poisoned guards are safe to reuse.
    fn read(&self) -> RwLockReadGuard<'_, FxHashMap<ReceiptId, ScoreRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, FxHashMap<ReceiptId, ScoreRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new()
    }
}
