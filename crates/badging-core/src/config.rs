//! Badge service configuration
//!
//! Loaded from TOML, then overridden by `BADGING_*` environment variables,
//! then validated. Every field has a default so an empty file is valid.

use crate::effects::ForwardingConvention;
use crate::errors::{BadgeError, Result};
use crate::format::MAX_BADGE_CONTENT;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "BADGING_";

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en-US";

/// Configuration for badge services created by one factory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeConfig {
    /// Largest count rendered literally.
    pub max_badge_content: u64,
    /// Calling convention for the icon capability.
    pub convention: ForwardingConvention,
    /// Locale tag for number formatting.
    pub locale: String,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            max_badge_content: MAX_BADGE_CONTENT,
            convention: ForwardingConvention::platform_default(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl BadgeConfig {
    /// Parse from TOML text and validate.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BadgeConfig = toml::from_str(content)
            .map_err(|e| BadgeError::config(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BadgeError::config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from `path` when given, fall back to defaults, then apply the
    /// process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.merge_with_env()?;
        Ok(config)
    }

    /// Merge with `BADGING_*` variables from the process environment
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Merge with `BADGING_*` entries from an explicit variable list.
    ///
    /// Unrelated variables are ignored; unknown `BADGING_*` keys are an error.
    pub fn merge_with_vars<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            if let Some(field) = key.strip_prefix(ENV_PREFIX) {
                let field = field.to_ascii_lowercase();
                self.set_from_string(&field, &value)?;
                tracing::debug!(field = %field, value = %value, "badge config override from environment");
            }
        }
        self.validate()
    }

    /// Set a configuration value from a string (for env and CLI parsing)
    pub fn set_from_string(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "max_badge_content" => {
                self.max_badge_content = value.trim().parse().map_err(|e| {
                    BadgeError::invalid(format!("max_badge_content '{value}': {e}"))
                })?;
            }
            "convention" => {
                self.convention = value.parse().map_err(BadgeError::invalid)?;
            }
            "locale" => {
                self.locale = value.trim().to_string();
            }
            other => {
                return Err(BadgeError::invalid(format!(
                    "unknown configuration key '{other}'"
                )))
            }
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let mut validator = ConfigValidator::new();
        validator
            .at_least("max_badge_content", self.max_badge_content, 1)
            .non_empty("locale", &self.locale);
        validator.finish()
    }
}

/// Single validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Value is below its minimum
    TooSmall {
        /// Field name
        field: String,
        /// Minimum allowed value
        min: u64,
        /// Value found
        actual: u64,
    },
    /// Value is required but empty
    Empty {
        /// Field name
        field: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::TooSmall { field, min, actual } => {
                write!(f, "Field '{field}' must be at least {min} (got {actual})")
            }
            ValidationError::Empty { field } => write!(f, "Field '{field}' must not be empty"),
        }
    }
}

/// Configuration validator that accumulates validation failures
#[derive(Debug, Default)]
pub struct ConfigValidator {
    errors: Vec<ValidationError>,
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate that a number is at least `min`
    pub fn at_least(&mut self, field: &str, value: u64, min: u64) -> &mut Self {
        if value < min {
            self.errors.push(ValidationError::TooSmall {
                field: field.to_string(),
                min,
                actual: value,
            });
        }
        self
    }

    /// Validate that a string has visible content
    pub fn non_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::Empty {
                field: field.to_string(),
            });
        }
        self
    }

    /// Failures collected so far
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Collapse into a single result
    pub fn finish(&self) -> Result<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let joined = self
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Err(BadgeError::invalid(joined))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = BadgeConfig::default();
        assert_eq!(config.max_badge_content, 99);
        assert_eq!(config.locale, "en-US");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = BadgeConfig::from_toml_str("").expect("parse");
        assert_eq!(config, BadgeConfig::default());
    }

    #[test]
    fn test_toml_fields() {
        let config = BadgeConfig::from_toml_str(
            r#"
            max_badge_content = 999
            convention = "flag"
            locale = "de-DE"
            "#,
        )
        .expect("parse");
        assert_eq!(config.max_badge_content, 999);
        assert_eq!(config.convention, ForwardingConvention::Flag);
        assert_eq!(config.locale, "de-DE");
    }

    #[test]
    fn test_toml_rejects_zero_ceiling() {
        let err = BadgeConfig::from_toml_str("max_badge_content = 0").unwrap_err();
        assert_matches!(err, BadgeError::Invalid { .. });
    }

    #[test]
    fn test_toml_rejects_unknown_field() {
        let err = BadgeConfig::from_toml_str("ceiling = 5").unwrap_err();
        assert_matches!(err, BadgeError::Config { .. });
    }

    #[test]
    fn test_env_overrides() {
        let mut config = BadgeConfig::default();
        config
            .merge_with_vars(vars(&[
                ("BADGING_MAX_BADGE_CONTENT", "500"),
                ("BADGING_CONVENTION", "count_only"),
                ("HOME", "/root"),
            ]))
            .expect("merge");
        assert_eq!(config.max_badge_content, 500);
        assert_eq!(config.convention, ForwardingConvention::CountOnly);
    }

    #[test]
    fn test_env_unknown_key_is_error() {
        let mut config = BadgeConfig::default();
        let err = config
            .merge_with_vars(vars(&[("BADGING_COLOR", "red")]))
            .unwrap_err();
        assert!(err.to_string().contains("color"));
    }

    #[test]
    fn test_validator_accumulates() {
        let mut validator = ConfigValidator::new();
        validator.at_least("a", 0, 1).non_empty("b", "  ");
        assert_eq!(validator.errors().len(), 2);
        let message = validator.finish().unwrap_err().to_string();
        assert!(message.contains("'a'"));
        assert!(message.contains("'b'"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("badging.toml");
        std::fs::write(&path, "locale = \"fr\"\n").expect("write");
        let config = BadgeConfig::load_from_file(&path).expect("load");
        assert_eq!(config.locale, "fr");

        let missing = BadgeConfig::load_from_file(&dir.path().join("missing.toml"));
        assert_matches!(missing, Err(BadgeError::Config { .. }));
    }
}
