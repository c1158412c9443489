use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Largest precision that still round-trips through an f64 multiplier.
pub const MAX_UNIT_PRECISION: u32 = 15;

/// Resolved conversion settings. Built once and shared by every rewrite.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Source unit that gets converted (e.g. "px")
    pub unit: String,
    /// Divisor applied to every converted magnitude
    pub root_value: f64,
    /// Fractional digits kept after rounding
    pub unit_precision: u32,
    /// Magnitudes at or below this stay in the source unit
    pub min_pixel_value: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit: "px".to_string(),
            root_value: 16.0,
            unit_precision: 5,
            min_pixel_value: 1.0,
        }
    }
}

/// Caller-supplied overrides; missing fields fall back to the defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_pixel_value: Option<f64>,
}

impl PartialConfig {
    /// Overlay these overrides onto the defaults.
    pub fn resolve(&self) -> Config {
        self.overlay(Config::default())
    }

    /// Overlay these overrides onto an existing config.
    pub fn overlay(&self, base: Config) -> Config {
        Config {
            unit: self.unit.clone().unwrap_or(base.unit),
            root_value: self.root_value.unwrap_or(base.root_value),
            unit_precision: self.unit_precision.unwrap_or(base.unit_precision),
            min_pixel_value: self.min_pixel_value.unwrap_or(base.min_pixel_value),
        }
    }

    /// Merge `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: PartialConfig) -> PartialConfig {
        PartialConfig {
            unit: other.unit.or(self.unit),
            root_value: other.root_value.or(self.root_value),
            unit_precision: other.unit_precision.or(self.unit_precision),
            min_pixel_value: other.min_pixel_value.or(self.min_pixel_value),
        }
    }

    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let partial: PartialConfig = toml::from_str(content)?;
        Ok(partial)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let partial: PartialConfig = serde_json::from_str(content)?;
        Ok(partial)
    }
}

impl Config {
    /// Load a TOML file of overrides and resolve it against the defaults.
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let config = PartialConfig::load_from_file(path)?.resolve();
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config = PartialConfig::load_from_str(content)?.resolve();
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config = PartialConfig::from_json_str(content)?.resolve();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.unit.is_empty() {
            return Err(ConfigError::Invalid("unit cannot be empty".to_string()));
        }
        if !self.root_value.is_finite() || self.root_value <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "rootValue must be a positive number, got {}",
                self.root_value
            )));
        }
        if !self.min_pixel_value.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "minPixelValue must be finite, got {}",
                self.min_pixel_value
            )));
        }
        if self.unit_precision > MAX_UNIT_PRECISION {
            return Err(ConfigError::Invalid(format!(
                "unitPrecision must be at most {}, got {}",
                MAX_UNIT_PRECISION, self.unit_precision
            )));
        }
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PartialConfig::default().resolve();
        assert_eq!(config.unit, "px");
        assert_eq!(config.root_value, 16.0);
        assert_eq!(config.unit_precision, 5);
        assert_eq!(config.min_pixel_value, 1.0);
    }

    #[test]
    fn test_overlay_keeps_unset_fields() {
        let partial = PartialConfig {
            root_value: Some(10.0),
            ..Default::default()
        };
        let config = partial.resolve();
        assert_eq!(config.root_value, 10.0);
        assert_eq!(config.unit, "px");
        assert_eq!(config.unit_precision, 5);
    }

    #[test]
    fn test_merge_prefers_later() {
        let file = PartialConfig {
            root_value: Some(10.0),
            unit: Some("pt".to_string()),
            ..Default::default()
        };
        let cli = PartialConfig {
            root_value: Some(20.0),
            ..Default::default()
        };
        let config = file.merge(cli).resolve();
        assert_eq!(config.root_value, 20.0);
        assert_eq!(config.unit, "pt");
    }

    #[test]
    fn test_load_toml_camel_case() {
        let config = Config::load_from_str(
            r#"
rootValue = 10
unitPrecision = 3
minPixelValue = 0
"#,
        )
        .unwrap();
        assert_eq!(config.root_value, 10.0);
        assert_eq!(config.unit_precision, 3);
        assert_eq!(config.min_pixel_value, 0.0);
        assert_eq!(config.unit, "px");
    }

    #[test]
    fn test_load_json() {
        let config = Config::from_json_str(r#"{"unit": "pt", "rootValue": 12}"#).unwrap();
        assert_eq!(config.unit, "pt");
        assert_eq!(config.root_value, 12.0);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = Config::load_from_str("root_value = 10");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero_root = Config {
            root_value: 0.0,
            ..Config::default()
        };
        assert!(matches!(zero_root.validate(), Err(ConfigError::Invalid(_))));

        let empty_unit = Config {
            unit: String::new(),
            ..Config::default()
        };
        assert!(matches!(empty_unit.validate(), Err(ConfigError::Invalid(_))));

        let precision = Config {
            unit_precision: 16,
            ..Config::default()
        };
        assert!(matches!(precision.validate(), Err(ConfigError::Invalid(_))));

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_toml_output_round_trips() {
        let config = Config::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("rootValue"));
        assert_eq!(Config::load_from_str(&text).unwrap(), config);
    }
}
