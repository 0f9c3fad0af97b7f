//////////////////////////
// config.rs
//////////////////////////

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::api::PerspectiveRequest;

pub const DEFAULT_CONFIG_PATH: &str = "fog_chess.json";
pub const CONFIG_PATH_ENV: &str = "FOG_CHESS_CONFIG";

/// Options that change which moves are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Require the square in front of a pawn to be empty before a two-square
    /// advance. Off by default, so a pawn on its starting rank may jump a piece.
    pub strict_pawn_double_step: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rules: RuleConfig,
    /// Board shown after each command in the terminal front end.
    pub default_perspective: PerspectiveRequest,
    pub colored_output: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rules: RuleConfig::default(),
            default_perspective: PerspectiveRequest::Audience,
            colored_output: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Could not read config: {}", e),
            ConfigError::Parse(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl GameConfig {
    pub fn from_json(text: &str) -> Result<GameConfig, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<GameConfig, ConfigError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => {
                log::info!("Loaded config from {}", path.display());
                GameConfig::from_json(&text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(GameConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Path from `FOG_CHESS_CONFIG`, or `fog_chess.json` in the working directory.
    pub fn load_from_env() -> Result<GameConfig, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        GameConfig::load(path)
    }
}
