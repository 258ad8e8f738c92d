//! Sequential disk-cache warming over a deduplicated URL set.

use std::collections::HashSet;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::domain::entities::{DataSource, FetchOutcome, ImageRequest, ImageUrl};
use crate::domain::ports::ImageFetchPort;

/// A URL that could not be cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFailure {
    /// The URL attempted.
    pub url: ImageUrl,
    /// Why it failed.
    pub reason: String,
}

/// Tally of one warming pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WarmReport {
    /// Fetches that succeeded.
    pub success_count: usize,
    /// Fetches that failed.
    pub fail_count: usize,
    /// Successful fetches that had to download.
    pub downloaded: usize,
    /// Successful fetches that were already cached.
    pub already_cached: usize,
    /// Details of each failure, in attempt order.
    pub failures: Vec<UrlFailure>,
    /// True if the pass stopped before attempting every URL.
    pub cancelled: bool,
}

impl WarmReport {
    /// Total fetch attempts made.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.success_count + self.fail_count
    }

    fn record(&mut self, url: &ImageUrl, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Success { source } => {
                trace!(url = %url, source = %source, "Cached");
                self.success_count += 1;
                if source == DataSource::Network {
                    self.downloaded += 1;
                } else {
                    self.already_cached += 1;
                }
            }
            FetchOutcome::Failure { reason } => {
                trace!(url = %url, error = %reason, "Failed");
                self.fail_count += 1;
                self.failures.push(UrlFailure {
                    url: url.clone(),
                    reason,
                });
            }
        }
    }
}

/// Fetches every URL once into the persistent cache, one at a time.
pub struct CacheWarmer {
    fetcher: Arc<dyn ImageFetchPort>,
}

impl CacheWarmer {
    /// Creates a warmer using the given fetch capability.
    #[must_use]
    pub fn new(fetcher: Arc<dyn ImageFetchPort>) -> Self {
        Self { fetcher }
    }

    /// Attempts each URL exactly once with the memory cache bypassed.
    ///
    /// `cancel` is checked before every fetch; an in-flight fetch always runs to
    /// completion. Failures are tallied and never stop the pass.
    pub async fn warm(&self, urls: &HashSet<ImageUrl>, cancel: &CancellationToken) -> WarmReport {
        let mut report = WarmReport::default();

        for url in urls {
            if cancel.is_cancelled() {
                report.cancelled = true;
                break;
            }

            let request = ImageRequest::disk_only(url.clone());
            let outcome = self.fetcher.fetch(&request).await;
            report.record(url, outcome);
        }

        report
    }
}
