//! Runtime configuration
//!
//! Read once from the environment at startup.

use thiserror::Error;

use crate::units::{DisplaySystem, UnitError};

/// Environment variable holding the default display system
pub const UNIT_SYSTEM_VAR: &str = "MENUPLAN_UNIT_SYSTEM";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {source}")]
    InvalidUnitSystem {
        var: &'static str,
        #[source]
        source: UnitError,
    },
}

/// Service configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Display system used when a tool call does not name one
    pub default_system: DisplaySystem,
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_system = match lookup(UNIT_SYSTEM_VAR) {
            Some(value) if !value.trim().is_empty() => {
                value
                    .parse()
                    .map_err(|source| ConfigError::InvalidUnitSystem {
                        var: UNIT_SYSTEM_VAR,
                        source,
                    })?
            }
            _ => DisplaySystem::default(),
        };

        Ok(Self { default_system })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_metric() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.default_system, DisplaySystem::Metric);

        let config = Config::from_lookup(|_| Some("  ".to_string())).unwrap();
        assert_eq!(config.default_system, DisplaySystem::Metric);
    }

    #[test]
    fn test_reads_unit_system() {
        let config = Config::from_lookup(|key| {
            (key == UNIT_SYSTEM_VAR).then(|| "Imperial".to_string())
        })
        .unwrap();
        assert_eq!(config.default_system, DisplaySystem::Imperial);
    }

    #[test]
    fn test_rejects_unknown_unit_system() {
        let err = Config::from_lookup(|_| Some("cubits".to_string())).unwrap_err();
        assert!(err.to_string().contains(UNIT_SYSTEM_VAR));
        assert!(err.to_string().contains("cubits"));
    }
}
