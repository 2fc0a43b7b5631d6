//! Error types for the parser

use thiserror::Error;

/// Errors that can occur while parsing a killmail
///
/// Missing optional fields are never errors; they fall back to their
/// defaults. Only the mandatory parts of a report fail a parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No date token at the end of any line
    #[error("Malformed killmail: no timestamp found")]
    MissingTimestamp,

    /// No `Victim:` line in the victim header
    #[error("Malformed killmail: no victim found")]
    MissingVictim,

    /// Input exceeds the configured maximum length
    #[error("Killmail too long: {0} bytes (max: {1})")]
    InputTooLong(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for ParseError {
    fn from(e: toml::de::Error) -> Self {
        ParseError::Config(e.to_string())
    }
}
