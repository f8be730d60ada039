//! Launcher configuration (config.toml)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::grid::GridProfile;
use crate::search::MAX_RESULTS_COUNT;

/// Configuration loaded from config.toml
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LauncherConfig {
    /// Grid geometry section
    #[serde(default)]
    pub grid: GridConfig,

    /// Search section
    #[serde(default)]
    pub search: SearchConfig,

    /// Store locations section
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Grid geometry
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Columns per desktop screen
    #[serde(default = "default_columns")]
    pub columns: i32,

    /// Rows per desktop screen
    #[serde(default = "default_rows")]
    pub rows: i32,

    /// Hotseat capacity
    #[serde(default = "default_hotseat_icons")]
    pub hotseat_icons: i32,
}

impl GridConfig {
    /// The grid profile this configuration describes
    pub fn profile(&self) -> GridProfile {
        GridProfile::new(self.columns, self.rows, self.hotseat_icons)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            hotseat_icons: default_hotseat_icons(),
        }
    }
}

fn default_columns() -> i32 {
    5
}

fn default_rows() -> i32 {
    5
}

fn default_hotseat_icons() -> i32 {
    5
}

/// Search behavior
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum app search results
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Language passed to web suggestion endpoints
    #[serde(default = "default_suggestions_lang")]
    pub suggestions_lang: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            suggestions_lang: default_suggestions_lang(),
        }
    }
}

fn default_max_results() -> usize {
    MAX_RESULTS_COUNT
}

fn default_suggestions_lang() -> String {
    "en".to_string()
}

/// Store locations
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Launch history file; defaults to the user data dir when unset
    #[serde(default)]
    pub history_path: Option<PathBuf>,

    /// Usage log file; usage logging is off when unset
    #[serde(default)]
    pub usage_log_path: Option<PathBuf>,
}

impl LauncherConfig {
    /// Find config.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("burrow").join("config.toml")),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("config.toml"))),
            Some(PathBuf::from("config.toml")),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Load configuration from file, returning defaults if not found
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_path() {
            Self::load_from_path(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: LauncherConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Configuration error
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::ParseError(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: LauncherConfig = toml::from_str("").unwrap();

        assert_eq!(config.grid.columns, 5);
        assert_eq!(config.grid.rows, 5);
        assert_eq!(config.grid.hotseat_icons, 5);
        assert_eq!(config.search.max_results, MAX_RESULTS_COUNT);
        assert_eq!(config.search.suggestions_lang, "en");
        assert!(config.storage.history_path.is_none());
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let config: LauncherConfig = toml::from_str(
            r#"
            [grid]
            columns = 4
            rows = 4
            hotseat_icons = 3

            [search]
            max_results = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.grid.profile(), GridProfile::new(4, 4, 3));
        assert_eq!(config.search.max_results, 10);
        assert_eq!(config.search.suggestions_lang, "en");
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[grid]\ncolumns = 6\n").unwrap();

        let config = LauncherConfig::load_from_path(&path).unwrap();

        assert_eq!(config.grid.columns, 6);
        assert_eq!(config.grid.rows, 5);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[grid\ncolumns = ").unwrap();

        let err = LauncherConfig::load_from_path(&path).unwrap_err();

        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
