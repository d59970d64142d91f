//! Catalog models
//!
//! Serde DTOs for the PokeAPI payloads the shell decodes.

pub mod locations;
pub mod pokemon;

// Re-export commonly used types
pub use locations::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
