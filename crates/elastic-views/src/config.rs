//! Widget configuration.
//!
//! [`ElasticConfig`] holds the defaults elastic widgets are built with. It can
//! be loaded from TOML; missing keys fall back to their defaults:
//!
//! ```toml
//! scale = 0.85
//! duration_ms = 500
//! checked_alpha = 0.7
//! easing = "elastic_out"
//! include_children = true
//! ```

use std::path::{Path, PathBuf};

use elastic_views_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::widget::animation::Easing;

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized.
    #[error("Config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A value is out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Defaults for elastic widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticConfig {
    /// Scale a widget shrinks to while pressed.
    pub scale: f32,
    /// Total press duration in milliseconds (shrink and release).
    pub duration_ms: u32,
    /// Opacity of a checked check button.
    pub checked_alpha: f32,
    /// Easing curve of the press animation.
    pub easing: Easing,
    /// Whether a group's children animate with it.
    pub include_children: bool,
}

impl Default for ElasticConfig {
    fn default() -> Self {
        Self {
            scale: 0.9,
            duration_ms: 500,
            checked_alpha: 0.7,
            easing: Easing::ElasticOut,
            include_children: true,
        }
    }
}

impl ElasticConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::invalid_value(
                "scale",
                format!("must be a positive number, got {}", self.scale),
            ));
        }
        if !(0.0..=1.0).contains(&self.checked_alpha) {
            return Err(ConfigError::invalid_value(
                "checked_alpha",
                format!("must be within 0.0..=1.0, got {}", self.checked_alpha),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = ElasticConfig::from_toml_str("scale = 0.85").unwrap();
        assert_eq!(config.scale, 0.85);
        assert_eq!(config.duration_ms, 500);
        assert_eq!(config.easing, Easing::ElasticOut);
    }

    #[test]
    fn test_easing_names() {
        let config = ElasticConfig::from_toml_str(r#"easing = "ease_in_out""#).unwrap();
        assert_eq!(config.easing, Easing::EaseInOut);
        assert!(ElasticConfig::from_toml_str(r#"easing = "bouncy""#).is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let err = ElasticConfig::from_toml_str("checked_alpha = 1.5").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "checked_alpha", .. }));

        let err = ElasticConfig::from_toml_str("scale = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "scale", .. }));
    }

    #[test]
    fn test_negative_duration_is_a_parse_error() {
        let err = ElasticConfig::from_toml_str("duration_ms = -5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scale = 0.75\nduration_ms = 300\ninclude_children = false").unwrap();

        let config = ElasticConfig::load(file.path()).unwrap();
        assert_eq!(config.scale, 0.75);
        assert_eq!(config.duration_ms, 300);
        assert!(!config.include_children);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ElasticConfig::load("/nonexistent/elastic.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let text = ElasticConfig::default().to_toml_string().unwrap();
        assert_eq!(ElasticConfig::from_toml_str(&text).unwrap(), ElasticConfig::default());
    }
}
