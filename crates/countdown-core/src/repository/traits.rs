//! Repository Layer - Collaborator Traits
//!
//! The store never reaches for ambient state. Storage, the clock and the id
//! source are all injected through these traits.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure writing to a key-value backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// String-keyed blob store (browser localStorage, memory, ...)
pub trait KeyValueStorage {
    /// Stored value for `key`, if any
    fn load(&self, key: &str) -> Option<String>;

    /// Replace the value for `key`
    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Source of "now"
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Source of fresh countdown ids
pub trait IdGenerator {
    fn new_id(&mut self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Predictable ids (`id-1`, `id-2`, ...)
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdGenerator for SequentialIds {
    fn new_id(&mut self) -> String {
        self.next += 1;
        format!("id-{}", self.next)
    }
}
