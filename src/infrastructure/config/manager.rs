//! Configuration file loading.

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading or writing the configuration file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// How [`ConfigManager::load_config`] obtained the configuration.
///
/// Call [`log`](Self::log) once logging is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigStatus {
    /// The file was read and parsed.
    Loaded(PathBuf),
    /// No file existed; defaults were written to this path.
    CreatedDefault(PathBuf),
    /// The file could not be parsed; defaults are in use.
    Malformed {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message.
        error: String,
    },
}

impl ConfigStatus {
    /// Emits the matching log event.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => debug!(path = %path.display(), "Loaded config file"),
            Self::CreatedDefault(path) => {
                info!(path = %path.display(), "Config file not found, created default");
            }
            Self::Malformed { path, error } => {
                warn!(path = %path.display(), %error, "Failed to parse config file, using defaults");
            }
        }
    }
}

/// Locates and loads `config.toml`.
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a new `ConfigManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `ConfigManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the application configuration, writing defaults if none exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot be written.
    pub fn load_config(
        &self,
        path_override: Option<&Path>,
    ) -> Result<(AppConfig, ConfigStatus), ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            std::path::Path::to_path_buf,
        );

        if !config_path.exists() {
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok((default_config, ConfigStatus::CreatedDefault(config_path)));
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => Ok((config, ConfigStatus::Loaded(config_path))),
            Err(e) => Ok((
                AppConfig::default(),
                ConfigStatus::Malformed {
                    path: config_path,
                    error: e.to_string(),
                },
            )),
        }
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}
