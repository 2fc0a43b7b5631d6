//! Rewriter error types

use killmail_parser::ParseError;
use thiserror::Error;

/// Errors that can occur while rewriting a killmail
#[derive(Error, Debug)]
pub enum RewriteError {
    /// The raw killmail could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for RewriteError {
    fn from(e: toml::de::Error) -> Self {
        RewriteError::Config(e.to_string())
    }
}
