//! Configuration for the parser

use crate::error::ParseError;
use serde::{Deserialize, Serialize};

/// Configuration for the killmail parser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum input length (bytes)
    pub max_input_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_input_length: 1024 * 1024,
        }
    }
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ParseError> {
        if self.max_input_length == 0 {
            return Err(ParseError::Config(
                "max_input_length must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ParseError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ParseError> {
        toml::to_string_pretty(self)
            .map_err(|e| ParseError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
