//! Error types for Tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Agent call failed before a usable response arrived (unreachable
    /// service, exhausted mock script, poisoned transport state).
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Agent response text yielded no valid structured object.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, Error>;
