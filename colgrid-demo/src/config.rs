//! Demo configuration from environment variables.

use std::str::FromStr;

use log::LevelFilter;
use thiserror::Error;

const ROWS_VAR: &str = "COLGRID_ROWS";
const SEED_VAR: &str = "COLGRID_SEED";
const LOG_VAR: &str = "COLGRID_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of generated rows
    pub rows: usize,
    /// Seed for reproducible data; random when unset
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            seed: None,
            log_level: LevelFilter::Debug,
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from a variable lookup, falling back to defaults for unset
    /// variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            rows: parse(&lookup, ROWS_VAR)?.unwrap_or(defaults.rows),
            seed: parse(&lookup, SEED_VAR)?.or(defaults.seed),
            log_level: parse(&lookup, LOG_VAR)?.unwrap_or(defaults.log_level),
        })
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::Invalid { name, value })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<DemoConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DemoConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]).unwrap(), DemoConfig::default());
        assert_eq!(config(&[("COLGRID_ROWS", "  ")]).unwrap().rows, 10);
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("COLGRID_ROWS", "25"),
            ("COLGRID_SEED", "7"),
            ("COLGRID_LOG", "warn"),
        ])
        .unwrap();
        assert_eq!(c.rows, 25);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config(&[("COLGRID_ROWS", "many")]),
            Err(ConfigError::Invalid {
                name: "COLGRID_ROWS",
                value: "many".to_string()
            })
        );
        assert!(config(&[("COLGRID_LOG", "loud")]).is_err());
    }
}
