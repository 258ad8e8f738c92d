//! Application configuration.

pub mod app_config;
pub mod args;
pub mod manager;

pub use app_config::{
    AppConfig, CacheConfig, LogLevel, NetworkConfig, PreferencesConfig, StorageConfig,
};
pub use args::CliArgs;
pub use manager::{ConfigError, ConfigManager, ConfigStatus};
