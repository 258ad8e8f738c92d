//! Services making up the image cache pipeline.

pub mod blob_scanner;
pub mod cache_warmer;
pub mod run_reporter;
pub mod url_aggregator;
pub mod url_extractor;

pub use blob_scanner::{BlobRead, BlobScanReport, BlobScanner};
pub use cache_warmer::{CacheWarmer, UrlFailure, WarmReport};
pub use run_reporter::{LOG_TARGET, RunReporter};
pub use url_aggregator::{AggregatedUrls, UrlAggregator};
pub use url_extractor::UrlExtractor;
