//! Application layer with the cache-warming pipeline and job use cases.

/// Pipeline services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use services::{BlobScanner, CacheWarmer, UrlAggregator, UrlExtractor};
pub use use_cases::{ScheduleImageCacheUseCase, WarmImageCacheUseCase};
