//! Configuration loading for the city core.
//!
//! The canonical configuration lives in `civitas-config.yaml` at the
//! workspace root. Every section is optional; anything left out falls back to
//! the standard ruleset.

use std::path::Path;

use serde::Deserialize;

use crate::ruleset::Ruleset;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CivitasConfig {
    /// Game rules.
    #[serde(default)]
    pub rules: Ruleset,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CivitasConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes
    /// precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    String::from("info")
}

#[cfg(test)]
mod tests {
    use civitas_types::{ModifierEffect, YieldType};
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CivitasConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.rules.population.food_per_citizen, dec!(2));
        assert_eq!(config.rules.great_person_points_per_specialist, dec!(3));
        assert_eq!(config.rules.policies.len(), 2);
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
rules:
  specialist_yields:
    Science: { science: 4 }
    Gold: { gold: 2, production: 1 }
  population:
    food_per_citizen: 2
    science_per_citizen: 0.5
    production_per_free_citizen: 1
    unhappiness_per_citizen: 1
  great_person_points_per_specialist: 2
  policies:
    - name: Rationalism
      city_happiness: 1
      specialist_modifiers:
        - role: Science
          target: Science
          effect: { kind: percent, percent: 50 }
logging:
  level: debug
"#;
        let config = CivitasConfig::parse(yaml);
        assert!(config.is_ok(), "parse failed: {config:?}");
        let config = config.ok().unwrap_or_default();

        assert_eq!(config.logging.level, "debug");
        let rules = &config.rules;
        assert_eq!(rules.specialist_yields.get(YieldType::Science).science, dec!(4));
        assert_eq!(rules.specialist_yields.get(YieldType::Gold).production, dec!(1));
        assert!(rules.specialist_yields.get(YieldType::Culture).is_zero());
        assert_eq!(rules.population.science_per_citizen, dec!(0.5));
        assert_eq!(rules.great_person_points_per_specialist, dec!(2));

        let policy = rules.policy("Rationalism");
        assert_eq!(policy.map(|p| p.city_happiness), Some(dec!(1)));
        let effect = policy
            .and_then(|p| p.specialist_modifiers.first())
            .map(|m| m.effect);
        assert_eq!(effect, Some(ModifierEffect::Percent { percent: dec!(50) }));
        assert!(rules.policy("Secularism").is_none());
    }

    #[test]
    fn parse_minimal_yaml() {
        let yaml = "logging:\n  level: warn\n";
        let config = CivitasConfig::parse(yaml).ok().unwrap_or_default();

        assert_eq!(config.logging.level, "warn");
        // Everything else uses defaults
        assert_eq!(config.rules, Ruleset::default());
    }

    #[test]
    fn parse_empty_yaml() {
        let config = CivitasConfig::parse("");
        assert!(config.is_ok());
    }

    #[test]
    fn parse_invalid_yaml() {
        let config = CivitasConfig::parse("rules: [unclosed");
        assert!(matches!(config, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let config = CivitasConfig::from_file(Path::new("/nonexistent/civitas-config.yaml"));
        assert!(matches!(config, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn load_project_config_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("civitas-config.yaml");
        if path.exists() {
            let config = CivitasConfig::from_file(&path);
            assert!(config.is_ok(), "Failed to load project config: {config:?}");
        }
    }
}
