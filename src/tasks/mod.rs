//! Background Tasks Module
//!
//! Contains background tasks that run periodically alongside the shell.
//!
//! # Tasks
//! - Reaper: removes cache entries older than the cache interval on every tick

mod reaper;

pub(crate) use reaper::spawn_reaper_task;
