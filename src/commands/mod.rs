//! Commands Module
//!
//! The interactive shell's command registry and the session that runs them.
//!
//! # Commands
//! - `help` - Show usage
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List the Pokémon found in an area
//! - `catch <pokemon>` - Try to catch a Pokémon
//! - `inspect <pokemon>` - Show a caught Pokémon
//! - `pokedex` - List caught Pokémon
//! - `exit` - Leave the shell

mod endpoints;
mod session;

pub use endpoints::Endpoints;
pub use session::{Flow, Session};

/// Every command the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
    Exit,
}

impl Command {
    /// All commands, in the order `help` lists them.
    pub const ALL: [Command; 8] = [
        Command::Help,
        Command::Map,
        Command::MapBack,
        Command::Explore,
        Command::Catch,
        Command::Inspect,
        Command::Pokedex,
        Command::Exit,
    ];

    /// The word typed to invoke the command.
    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
            Command::Exit => "exit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Map => "Displays the next page of location areas",
            Command::MapBack => "Go back to the previous page",
            Command::Explore => "Explore a location area",
            Command::Catch => "Catch a Pokemon",
            Command::Inspect => "Inspect a Pokemon",
            Command::Pokedex => "List all caught pokemon",
            Command::Exit => "Exit the Pokedex",
        }
    }

    /// Looks up a command by its exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }
}

/// Lowercases a raw input line and splits it into words.
pub fn parse_input(line: &str) -> Vec<String> {
    line.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
