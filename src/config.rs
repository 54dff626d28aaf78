//! Runtime configuration
//!
//! Read from a RON file; every field has a default so a partial (or
//! missing) file is fine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::save::RestoreMode;

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "DUNGEON_EXPLORER_CONFIG";
/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "dungeon_explorer.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Directory holding `<name>.txt` saves
    pub save_dir: PathBuf,
    /// Directory searched for `enemies.ron`
    pub data_dir: PathBuf,
    /// Where the binary writes its log
    pub log_file: PathBuf,
    /// Fixed seed for replaying a run; time-derived when unset
    pub rng_seed: Option<u64>,
    pub restore_mode: RestoreMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_dir: PathBuf::from("."),
            data_dir: PathBuf::from("data"),
            log_file: PathBuf::from("dungeon_explorer.log"),
            rng_seed: None,
            restore_mode: RestoreMode::Legacy,
        }
    }
}

impl GameConfig {
    /// Parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// First existing config file: `$DUNGEON_EXPLORER_CONFIG`, then the
    /// working directory, then the platform config directory.
    pub fn locate() -> Option<PathBuf> {
        let mut candidates = Vec::new();
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            candidates.push(PathBuf::from(path));
        }
        candidates.push(PathBuf::from(LOCAL_CONFIG_FILE));
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "dungeon-explorer", "DungeonExplorer") {
            candidates.push(proj_dirs.config_dir().join("config.ron"));
        }
        candidates.into_iter().find(|path| path.exists())
    }

    /// Load the located config, falling back to defaults on any problem.
    /// Returns the warning to surface when a file was found but unusable.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::locate() {
            Some(path) => match Self::from_file(&path) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            None => (Self::default(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(rng_seed: Some(42), restore_mode: Exact)").unwrap();

        let config = GameConfig::from_file(&path).unwrap();
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.restore_mode, RestoreMode::Exact);
        assert_eq!(config.save_dir, PathBuf::from("."));
        assert_eq!(config.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_bad_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ron");
        fs::write(&path, "(rng_seed: \"soon\")").unwrap();

        assert!(matches!(GameConfig::from_file(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::from_file(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
