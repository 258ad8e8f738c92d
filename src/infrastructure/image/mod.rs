//! Image handling infrastructure.
//!
//! This module provides:
//! - Memory caching with LRU eviction
//! - Disk caching for persistence
//! - An HTTP fetcher that warms both according to per-request policy

pub mod disk_cache;
pub mod fetcher;
pub mod memory_cache;

pub use disk_cache::{DEFAULT_MAX_CACHE_SIZE, DiskImageCache};
pub use fetcher::{HttpImageFetcher, ImageFetcherConfig};
pub use memory_cache::MemoryImageCache;
