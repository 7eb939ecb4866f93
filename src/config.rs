use std::path::Path;

use log::warn;

use crate::ai::AiConfig;
use crate::error::ConfigError;
use crate::game::{Player, CELLS};

/// Console game settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// `x` moves first. The machine takes the other side.
    pub human_side: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { human_side: 'o' }
    }
}

impl GameConfig {
    pub fn human_player(&self) -> Option<Player> {
        Player::from_symbol(&self.human_side.to_string())
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ai: AiConfig,
    pub game: GameConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ai.simulations == 0 {
            return Err(ConfigError::Validation(
                "ai.simulations must be > 0".into(),
            ));
        }
        if self.ai.negamax_max_empty > CELLS {
            return Err(ConfigError::Validation(format!(
                "ai.negamax_max_empty must be <= {CELLS}"
            )));
        }
        if self.game.human_player().is_none() {
            return Err(ConfigError::Validation(
                "game.human_side must be 'x' or 'o'".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
