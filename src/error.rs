//! Error types for the Pokédex client
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Fetch Error Enum ==
/// Failure of a single remote fetch.
///
/// Neither variant is ever cached or retried by the client.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed (DNS, connection, timeout, body read)
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A response arrived but its status is not 2xx
    #[error("response failed with status code: {status} and body: {body}")]
    RemoteStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body, lossily decoded for diagnostics
        body: String,
    },
}

// == Command Error Enum ==
/// Errors surfaced by shell commands. None of them end the session.
#[derive(Error, Debug)]
pub enum CommandError {
    /// First word of the input is not a known command
    #[error("Unknown command")]
    UnknownCommand,

    /// A command was invoked without its required argument
    #[error("{0}")]
    MissingArgument(&'static str),

    /// `inspect` was asked about a Pokémon that is not in the Pokédex
    #[error("you have not caught that pokemon")]
    NotCaught,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The response body was not the expected JSON shape
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Writing command output failed
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Aliases ==
/// Convenience Result type for fetches.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Convenience Result type for shell commands.
pub type Result<T> = std::result::Result<T, CommandError>;
