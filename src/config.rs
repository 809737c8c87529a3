use std::path::Path;

use crate::ai::{Difficulty, SEARCH_DEPTH};
use crate::error::ConfigError;

/// Top-level engine configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub selfplay: SelfPlayConfig,
    pub search: SearchConfig,
}

/// Settings for the bot-vs-bot match runner.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games per match.
    pub games: usize,
    /// Tier playing the red pieces.
    pub red: Difficulty,
    /// Tier playing the yellow pieces.
    pub yellow: Difficulty,
}

/// Settings for the hard tier's adversarial search.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Depth bound in plies. The sole latency control; there is no search
    /// timeout.
    pub depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            selfplay: SelfPlayConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            games: 100,
            red: Difficulty::Hard,
            yellow: Difficulty::Medium,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: SEARCH_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.selfplay.games == 0 {
            return Err(ConfigError::Validation(
                "selfplay.games must be >= 1".into(),
            ));
        }
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be >= 1".into()));
        }
        if self.search.depth > 12 {
            return Err(ConfigError::Validation(
                "search.depth must be <= 12".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&EngineConfig::default()).expect("default config serializes")
    }
}
