//! Pokémon DTOs

use serde::Deserialize;

use super::NamedResource;

/// `GET /pokemon/{name}`, trimmed to what the shell shows.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Null for a handful of alternate forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    // == Catch Chance ==
    /// Probability of a successful catch: 0.7 minus a thousandth per point of
    /// base experience, floored at zero.
    pub fn catch_chance(&self) -> f64 {
        let experience = f64::from(self.base_experience.unwrap_or(0));
        (0.7 - experience / 1000.0).max(0.0)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
