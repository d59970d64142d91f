//! Cache Reaper Task
//!
//! Background task that periodically removes cache entries older than the
//! cache interval.

use std::sync::{Mutex, Weak};
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio::time::{interval_at, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::{lock_table, EntryTable};

/// Spawns the reaper for one cache's entry table.
///
/// The first tick fires one `interval` after spawning, then every `interval`
/// after that. Each tick takes the table lock and drops every entry whose
/// age has reached `interval`, so an entry lives at least one interval and is
/// gone by the second tick after its creation.
///
/// The task only holds a weak reference to the table and exits on its own
/// once the owning cache is dropped. The returned handle can abort it sooner.
///
/// # Panics
/// Panics if called outside a tokio runtime or with a zero `interval`.
pub(crate) fn spawn_reaper_task(
    table: Weak<Mutex<EntryTable>>,
    interval: Duration,
) -> JoinHandle<()> {
    let mut ticker = interval_at(tokio::time::Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::spawn(async move {
        info!(interval_ms = interval.as_millis() as u64, "Starting cache reaper");

        loop {
            ticker.tick().await;

            let Some(entries) = table.upgrade() else {
                debug!("Cache dropped, stopping reaper");
                break;
            };

            let removed = lock_table(&entries).reap_expired(interval, Instant::now());

            if removed > 0 {
                info!("Cache reaper: removed {} expired entries", removed);
            } else {
                debug!("Cache reaper: no expired entries found");
            }
        }
    })
}
