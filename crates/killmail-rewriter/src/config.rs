//! Rewriter configuration

use crate::error::RewriteError;
use crate::faction::{FactionalWarfareAlliances, DEFAULT_FACTIONS};
use crate::rewriter::RewritePipeline;
use serde::{Deserialize, Serialize};

/// Which correction passes run, and with what data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriterConfig {
    /// Move faction names out of the alliance field
    pub fix_faction_alliances: bool,

    /// Faction names recognised by the alliance fix
    pub factions: Vec<String>,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            fix_faction_alliances: true,
            factions: DEFAULT_FACTIONS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl RewriterConfig {
    /// Create a configuration with every pass disabled
    pub fn disabled() -> Self {
        Self {
            fix_faction_alliances: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), RewriteError> {
        if self.fix_faction_alliances && self.factions.is_empty() {
            return Err(RewriteError::Config(
                "factions must not be empty when fix_faction_alliances is enabled".to_string(),
            ));
        }
        if let Some(blank) = self.factions.iter().find(|f| f.trim().is_empty()) {
            return Err(RewriteError::Config(format!(
                "faction name {:?} is blank",
                blank
            )));
        }
        Ok(())
    }

    /// Build the pipeline this configuration describes
    pub fn pipeline(&self) -> Result<RewritePipeline, RewriteError> {
        self.validate()?;
        let mut pipeline = RewritePipeline::new();
        if self.fix_faction_alliances {
            pipeline = pipeline.with(FactionalWarfareAlliances::new(self.factions.iter().cloned()));
        }
        Ok(pipeline)
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, RewriteError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, RewriteError> {
        toml::to_string_pretty(self)
            .map_err(|e| RewriteError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RewriterConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.fix_faction_alliances);
        assert_eq!(config.factions.len(), 4);
        assert_eq!(config.pipeline().unwrap().names(), vec!["factional_warfare_alliances"]);
    }

    #[test]
    fn test_disabled_config_builds_empty_pipeline() {
        let pipeline = RewriterConfig::disabled().pipeline().unwrap();
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_empty_factions_invalid_when_enabled() {
        let config = RewriterConfig {
            fix_faction_alliances: true,
            factions: Vec::new(),
        };
        assert!(config.validate().is_err());
        assert!(config.pipeline().is_err());
    }

    #[test]
    fn test_blank_faction_invalid() {
        let config = RewriterConfig {
            fix_faction_alliances: true,
            factions: vec!["Amarr Empire".to_string(), "  ".to_string()],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RewriterConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = RewriterConfig::from_toml(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_from_toml_partial() {
        let parsed = RewriterConfig::from_toml("factions = [\"Guristas Pirates\"]").unwrap();
        assert!(parsed.fix_faction_alliances);
        assert_eq!(parsed.factions, vec!["Guristas Pirates".to_string()]);
    }
}
