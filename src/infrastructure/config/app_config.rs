//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::infrastructure::image::{DEFAULT_MAX_CACHE_SIZE, ImageFetcherConfig};

pub(crate) const APP_NAME: &str = "feedcache";
pub(crate) const APP_QUALIFIER: &str = "org";
pub(crate) const APP_ORGANIZATION: &str = "feedcache";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden from the CLI.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Where stored content is read from.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Image cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,

    /// HTTP configuration.
    #[serde(default)]
    pub network: NetworkConfig,

    /// User preferences.
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Whether the current connection is metered. Only settable from the CLI.
    #[serde(skip)]
    pub metered: bool,
}

/// Stored content locations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// JSON snapshot of stored items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_file: Option<PathBuf>,

    /// Directory holding `<id>.txt.gz` article blobs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_dir: Option<PathBuf>,
}

/// Image cache configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Disk cache directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_dir: Option<PathBuf>,

    /// Maximum disk cache size in bytes.
    #[serde(default = "default_disk_cache_size")]
    pub disk_cache_size: u64,

    /// Maximum images held in memory.
    #[serde(default = "default_memory_cache_size")]
    pub memory_cache_size: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_dir: None,
            disk_cache_size: default_disk_cache_size(),
            memory_cache_size: default_memory_cache_size(),
        }
    }
}

/// HTTP configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with image requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// User preferences that affect background jobs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Only pre-cache images on unmetered connections.
    #[serde(default)]
    pub load_image_only_on_wifi: bool,
}

fn default_disk_cache_size() -> u64 {
    DEFAULT_MAX_CACHE_SIZE
}

fn default_memory_cache_size() -> usize {
    50
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("{APP_NAME}/{}", crate::VERSION)
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(items_file) = args.items_file {
            self.storage.items_file = Some(items_file);
        }
        if let Some(article_dir) = args.article_dir {
            self.storage.article_dir = Some(article_dir);
        }
        if let Some(cache_dir) = args.cache_dir {
            self.cache.cache_dir = Some(cache_dir);
        }
        if let Some(wifi_only) = args.wifi_only {
            self.preferences.load_image_only_on_wifi = wifi_only;
        }
        self.metered = args.metered;
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
    }

    fn data_dir() -> PathBuf {
        Self::project_dirs().map_or_else(
            || std::env::temp_dir().join(APP_NAME).join("data"),
            |dirs| dirs.data_dir().to_path_buf(),
        )
    }

    /// Returns effective stored-items snapshot path.
    #[must_use]
    pub fn effective_items_file(&self) -> PathBuf {
        self.storage
            .items_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("items.json"))
    }

    /// Returns effective article blob directory.
    #[must_use]
    pub fn effective_article_dir(&self) -> PathBuf {
        self.storage
            .article_dir
            .clone()
            .unwrap_or_else(|| Self::data_dir().join("articles"))
    }

    /// Returns effective disk cache directory.
    #[must_use]
    pub fn effective_cache_dir(&self) -> PathBuf {
        self.cache.cache_dir.clone().unwrap_or_else(|| {
            Self::project_dirs().map_or_else(
                || std::env::temp_dir().join(APP_NAME).join("image_cache"),
                |dirs| dirs.cache_dir().join("image_cache"),
            )
        })
    }

    /// Returns the image fetcher settings.
    #[must_use]
    pub fn fetcher_config(&self) -> ImageFetcherConfig {
        ImageFetcherConfig {
            memory_cache_size: self.cache.memory_cache_size,
            timeout_secs: self.network.timeout_secs,
            user_agent: self.network.user_agent.clone(),
        }
    }
}
