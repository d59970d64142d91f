//! Cache Module
//!
//! Provides the in-memory response cache with interval-based expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::TimedCache;

pub(crate) use store::{lock_table, EntryTable};

// == Public Constants ==
/// Default cache interval (entry TTL and reaper tick) in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 5_000;
