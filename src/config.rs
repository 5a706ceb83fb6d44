//! Configuration types for the emotion engine.

use serde::{Deserialize, Serialize};

use crate::error::{EmotionError, Result};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionConfig {
    /// Mood trend tracking settings.
    pub trend: TrendConfig,
}

/// Trend tracker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Maximum number of results kept; the oldest is evicted first.
    pub capacity: usize,
    /// Consecutive negative results that count as sustained stress.
    pub stress_window: usize,
    /// Recent results without positive signal that call for a boost.
    pub boost_window: usize,
    /// Minimum history length before a dominant trend is reported.
    pub dominant_min_entries: usize,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            capacity: 10,
            stress_window: 3,
            boost_window: 4,
            dominant_min_entries: 2,
        }
    }
}

impl TrendConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `capacity` must be greater than 0
    /// - every window must be greater than 0 and at most `capacity`
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(EmotionError::Config(
                "capacity must be greater than 0".into(),
            ));
        }
        for (name, value) in [
            ("stress_window", self.stress_window),
            ("boost_window", self.boost_window),
            ("dominant_min_entries", self.dominant_min_entries),
        ] {
            if value == 0 {
                return Err(EmotionError::Config(format!(
                    "{name} must be greater than 0"
                )));
            }
            if value > self.capacity {
                return Err(EmotionError::Config(format!(
                    "{name} ({value}) must not exceed capacity ({})",
                    self.capacity
                )));
            }
        }
        Ok(())
    }
}

impl EmotionConfig {
    /// Validates every section.
    pub fn validate(&self) -> Result<()> {
        self.trend.validate()
    }

    /// Parse and validate configuration from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EmotionError::Config`] if the text cannot be parsed or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| EmotionError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| EmotionError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
