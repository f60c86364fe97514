//! Lab tunables, loaded from the embedded `lab_config.json`.
//! Every field has a default so a partial document is fine.

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;

use crate::state::Tab;

pub const BUILTIN_LAB_CONFIG: &str = include_str!("data/lab_config.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse lab config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("flask capacity {0} cannot hold a reaction (need at least 2)")]
    FlaskTooSmall(usize),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabConfig {
    /// Simulated "reaction in progress" pause before the result applies.
    pub reaction_delay_ms: u32,
    /// Most compounds the flask holds at once.
    pub flask_capacity: usize,
    pub toast_ms: u32,
    pub achievement_toast_ms: u32,
    /// Failures and repeat reactions.
    pub short_toast_ms: u32,
    pub start_tab: Tab,
    /// Locked cards show their synthesis hint instead of "Recipe unknown".
    pub show_synthesis_hints: bool,
    pub log_level: LevelFilter,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            reaction_delay_ms: 1500,
            flask_capacity: 12,
            toast_ms: 3000,
            achievement_toast_ms: 4000,
            short_toast_ms: 2000,
            start_tab: Tab::Discovery,
            show_synthesis_hints: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl LabConfig {
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_LAB_CONFIG)
    }

    /// Only a JSON object is accepted; arrays would fill fields by position.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(ConfigError::Parse(serde::de::Error::custom(
                "lab config must be a JSON object",
            )));
        }
        let config: LabConfig = serde_json::from_value(value)?;
        if config.flask_capacity < crate::engine::MIN_REACTANTS {
            return Err(ConfigError::FlaskTooSmall(config.flask_capacity));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_matches_defaults() {
        assert_eq!(LabConfig::builtin().unwrap(), LabConfig::default());
    }

    #[test]
    fn partial_document_keeps_defaults() {
        let c = LabConfig::from_json(r#"{"reaction_delay_ms": 0, "log_level": "debug"}"#).unwrap();
        assert_eq!(c.reaction_delay_ms, 0);
        assert_eq!(c.log_level, LevelFilter::Debug);
        assert_eq!(c.flask_capacity, 12);
        assert_eq!(c.start_tab, Tab::Discovery);
    }

    #[test]
    fn rejects_tiny_flask() {
        assert!(matches!(
            LabConfig::from_json(r#"{"flask_capacity": 1}"#),
            Err(ConfigError::FlaskTooSmall(1))
        ));
        assert!(matches!(
            LabConfig::from_json("[]"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn positional_array_is_not_a_config() {
        assert!(matches!(
            LabConfig::from_json("[0, 1]"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            LabConfig::from_json("1500"),
            Err(ConfigError::Parse(_))
        ));
    }
}
