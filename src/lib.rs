//! Pokédex - an interactive PokeAPI explorer
//!
//! Browses location areas and catches Pokémon over HTTP, with responses kept
//! in a time-bounded in-memory cache.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
mod tasks;

pub use cache::TimedCache;
pub use client::FetchClient;
pub use commands::{Flow, Session};
pub use config::Config;
pub use error::{CommandError, FetchError};
