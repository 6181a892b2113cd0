//! Configuration
//!
//! Settings come from an optional TOML file and are overridden by command-line
//! flags. Every field is optional:
//!
//! ```toml
//! scoring = "standard"      # or "naive"
//! data_dir = "/home/me/.local/share/wriddle"
//! player_name = "ada"       # leaderboard name; unset means no leaderboard
//! wordlist = "all"          # "all", "answers" or a path
//! ```

use crate::core::ScoringRule;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

const APP_DIR: &str = "wriddle";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Contents of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub scoring: Option<ScoringRule>,
    pub data_dir: Option<PathBuf>,
    pub player_name: Option<String>,
    pub wordlist: Option<String>,
}

impl FileConfig {
    /// Load the config file; a missing file yields `None`
    ///
    /// # Errors
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// `<config_dir>/wriddle/config.toml`
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// `<data_dir>/wriddle`, or `./.wriddle` when the platform has no data dir
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".wriddle"), |dir| dir.join(APP_DIR))
}

/// Values given on the command line; `None` defers to the file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub scoring: Option<ScoringRule>,
    pub data_dir: Option<PathBuf>,
    pub player_name: Option<String>,
    pub wordlist: Option<String>,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub scoring: ScoringRule,
    pub data_dir: PathBuf,
    pub player_name: Option<String>,
    pub wordlist: String,
}

impl Settings {
    /// Command line wins over file, file wins over defaults
    #[must_use]
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        let player_name = overrides
            .player_name
            .or(file.player_name)
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        Self {
            scoring: overrides.scoring.or(file.scoring).unwrap_or_default(),
            data_dir: overrides
                .data_dir
                .or(file.data_dir)
                .unwrap_or_else(default_data_dir),
            player_name,
            wordlist: overrides
                .wordlist
                .or(file.wordlist)
                .unwrap_or_else(|| "all".to_string()),
        }
    }

    /// Log file inside the data directory
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("wriddle.log")
    }
}
