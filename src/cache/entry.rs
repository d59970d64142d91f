//! Cache Entry Module
//!
//! Defines the structure for individual cache entries stamped with their creation time.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached response payload.
///
/// Entries are immutable once written. Re-adding a key replaces the whole
/// entry, timestamp included.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored response body
    pub value: Vec<u8>,
    /// When the entry was written
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates an entry with an explicit creation instant.
    pub fn with_created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the creation instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `max_age` as of `now`.
    ///
    /// Boundary condition: an entry whose age equals `max_age` is expired.
    pub fn is_expired(&self, max_age: Duration, now: Instant) -> bool {
        self.age(now) >= max_age
    }
}
