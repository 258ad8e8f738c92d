//! Infrastructure layer with filesystem, HTTP and runtime adapters.

/// Application configuration.
pub mod config;
/// Image handling (memory and disk caches, HTTP fetching).
pub mod image;
/// In-process background job scheduling.
pub mod scheduler;
/// Stored feed content adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigManager, ConfigStatus, LogLevel};
pub use image::{DiskImageCache, HttpImageFetcher, ImageFetcherConfig, MemoryImageCache};
pub use scheduler::LocalJobScheduler;
pub use storage::{FileBlobStore, JsonContentStore, StoredItem};
