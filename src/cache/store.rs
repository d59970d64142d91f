//! Cache Store Module
//!
//! The timed cache: a mutex-guarded entry table plus the reaper task that
//! prunes entries older than the configured interval.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tracing::trace;

use crate::cache::{CacheEntry, CacheStats};
use crate::tasks::spawn_reaper_task;

// == Entry Table ==
/// The state guarded by the cache lock.
#[derive(Debug, Default)]
pub(crate) struct EntryTable {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

impl EntryTable {
    /// Inserts or wholesale replaces the entry for `key`.
    pub(crate) fn insert(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    /// Looks up `key`, counting the hit or miss. Never touches the entry itself.
    pub(crate) fn lookup(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                let value = entry.value.clone();
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap Expired ==
    /// Removes every entry whose age as of `now` is at least `max_age`.
    ///
    /// Returns the number of entries removed.
    pub(crate) fn reap_expired(&mut self, max_age: Duration, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(max_age, now));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn stats(&self) -> CacheStats {
        self.stats
    }
}

/// Acquires the table lock.
///
/// A poisoned lock is recovered: every mutation is a single map operation,
/// so a panicking holder cannot leave a half-written entry behind.
pub(crate) fn lock_table(table: &Mutex<EntryTable>) -> MutexGuard<'_, EntryTable> {
    table.lock().unwrap_or_else(PoisonError::into_inner)
}

// == Timed Cache ==
/// Concurrency-safe response cache whose entries live for roughly one interval.
///
/// Every entry is evicted no earlier than `interval` and no later than
/// `2 * interval` after it was added. Lookups and writes share one exclusive
/// lock; the reaper takes the same lock once per tick.
///
/// The reaper is spawned on the current tokio runtime at construction and is
/// stopped by [`TimedCache::shutdown`] or when the cache is dropped.
#[derive(Debug)]
pub struct TimedCache {
    table: Arc<Mutex<EntryTable>>,
    interval: Duration,
    reaper: JoinHandle<()>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// # Panics
    /// Panics if `interval` is zero, or if called outside a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero(), "cache interval must be positive");

        let table = Arc::new(Mutex::new(EntryTable::default()));
        let reaper = spawn_reaper_task(Arc::downgrade(&table), interval);

        Self {
            table,
            interval,
            reaper,
        }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and its age.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        trace!(key = %key, "cache add");
        lock_table(&self.table).insert(key, CacheEntry::new(value.into()));
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if present right now.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        lock_table(&self.table).lookup(key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        lock_table(&self.table).stats()
    }

    pub fn len(&self) -> usize {
        lock_table(&self.table).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The TTL and reaper tick period this cache was built with.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Shutdown ==
    /// Stops the reaper. Entries already stored stay readable but no longer expire.
    pub fn shutdown(&self) {
        self.reaper.abort();
    }

    /// Returns true while the reaper task is still alive.
    pub fn is_reaper_running(&self) -> bool {
        !self.reaper.is_finished()
    }
}

impl Drop for TimedCache {
    fn drop(&mut self) {
        self.reaper.abort();
    }
}
