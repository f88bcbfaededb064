//! Configuration
//!
//! Optional TOML file; every field has a default so an empty file (or no
//! file at all) is a valid configuration.
//!
//! ```toml
//! [storage]
//! backend = "sled"        # or "memory"
//! path = "/var/lib/blogshell"
//! key = "terminal-filesystem"
//!
//! [logging]
//! level = "info"
//!
//! [seed]
//! enabled = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::fs::DEFAULT_STORAGE_KEY;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not determine a data directory; set storage.path or --data-dir")]
    NoDataDir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Sled,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory for the sled database; platform data dir when unset.
    pub path: Option<PathBuf>,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: None,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `warn` or `blogshell=debug`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

impl ShellConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Config file in the platform config directory, if one exists.
    pub fn default_file() -> Option<PathBuf> {
        let dirs = project_dirs()?;
        let path = dirs.config_dir().join("config.toml");
        path.is_file().then_some(path)
    }

    /// Where the sled database lives.
    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.storage.path {
            return Ok(path.clone());
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or(ConfigError::NoDataDir)
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", "blogshell")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ShellConfig::from_toml_str("").unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.storage.backend, StorageBackend::Sled);
        assert_eq!(config.storage.key, "terminal-filesystem");
        assert_eq!(config.logging.level, "warn");
        assert!(config.seed.enabled);
    }

    #[test]
    fn test_full_config() {
        let config = ShellConfig::from_toml_str(
            r#"
            [storage]
            backend = "memory"
            path = "/tmp/shell"
            key = "other"

            [logging]
            level = "debug"

            [seed]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/shell"));
        assert_eq!(config.storage.key, "other");
        assert_eq!(config.logging.level, "debug");
        assert!(!config.seed.enabled);
    }

    #[test]
    fn test_partial_section() {
        let config = ShellConfig::from_toml_str("[storage]\nkey = \"k\"\n").unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Sled);
        assert_eq!(config.storage.key, "k");
    }

    #[test]
    fn test_invalid_config() {
        let err = ShellConfig::from_toml_str("[storage]\nbackend = \"floppy\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();
        let config = ShellConfig::load(&path).unwrap();
        assert_eq!(config.logging.level, "info");
    }
}
