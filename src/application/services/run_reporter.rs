//! Translates job stage results into log events.

use tracing::{debug, error, info, warn};

use crate::domain::entities::{JobId, NetworkType, RunOutcome, RunSummary};

use super::blob_scanner::BlobScanReport;
use super::cache_warmer::WarmReport;
use super::url_aggregator::AggregatedUrls;

/// Log target for every image cache job event.
pub const LOG_TARGET: &str = "feedcache::imagecache";

/// Emits one log event per pipeline stage boundary.
#[derive(Debug, Clone, Copy)]
pub struct RunReporter {
    job_id: JobId,
}

impl RunReporter {
    /// Creates a reporter for the given job.
    #[must_use]
    pub const fn new(job_id: JobId) -> Self {
        Self { job_id }
    }

    /// Logs that a trigger is submitting the job.
    pub fn scheduling(&self, network: NetworkType) {
        info!(target: LOG_TARGET, job_id = %self.job_id, network_type = %network, "Scheduling image cache job");
    }

    /// Logs the start of a run.
    pub fn started(&self) {
        info!(target: LOG_TARGET, job_id = %self.job_id, "Starting image pre-caching");
    }

    /// Logs the number of direct image URLs found in the content store.
    pub fn direct_urls_found(&self, count: usize) {
        info!(target: LOG_TARGET, job_id = %self.job_id, count, "Found thumbnail/enclosure URLs");
    }

    /// Logs the start of the blob scan.
    pub fn scanning_blobs(&self, item_count: usize) {
        info!(target: LOG_TARGET, job_id = %self.job_id, item_count, "Scanning article blobs for images");
    }

    /// Logs the outcome of the blob scan.
    pub fn blobs_scanned(&self, report: &BlobScanReport) {
        debug!(
            target: LOG_TARGET,
            job_id = %self.job_id,
            scanned = report.scanned,
            loaded = report.loaded,
            missing = report.missing,
            unreadable = report.unreadable,
            urls = report.urls.len(),
            cancelled = report.cancelled,
            "Article blob scan finished"
        );
    }

    /// Logs the three aggregation counts.
    pub fn aggregated(&self, merged: &AggregatedUrls) {
        info!(
            target: LOG_TARGET,
            job_id = %self.job_id,
            thumbnails = merged.direct_count,
            from_blobs = merged.blob_count,
            unique = merged.unique_count(),
            "Aggregated image URLs"
        );
    }

    /// Logs per-URL failures and the download breakdown of a warming pass.
    pub fn warmed(&self, report: &WarmReport) {
        for failure in &report.failures {
            warn!(target: LOG_TARGET, job_id = %self.job_id, url = %failure.url, error = %failure.reason, "Failed to cache image");
        }
        debug!(
            target: LOG_TARGET,
            job_id = %self.job_id,
            downloaded = report.downloaded,
            already_cached = report.already_cached,
            "Cache warming pass finished"
        );
    }

    /// Logs the run summary. Called exactly once per run.
    pub fn finished(&self, summary: &RunSummary) {
        match &summary.outcome {
            RunOutcome::Completed => info!(
                target: LOG_TARGET,
                job_id = %self.job_id,
                ok = summary.success_count,
                failed = summary.fail_count,
                unique = summary.unique_url_count,
                elapsed_ms = summary.elapsed_ms,
                "Image pre-caching completed"
            ),
            RunOutcome::Cancelled => info!(
                target: LOG_TARGET,
                job_id = %self.job_id,
                ok = summary.success_count,
                failed = summary.fail_count,
                unique = summary.unique_url_count,
                elapsed_ms = summary.elapsed_ms,
                "Image pre-caching cancelled"
            ),
            RunOutcome::Failed(reason) => error!(
                target: LOG_TARGET,
                job_id = %self.job_id,
                ok = summary.success_count,
                failed = summary.fail_count,
                unique = summary.unique_url_count,
                elapsed_ms = summary.elapsed_ms,
                error = %reason,
                "Error during image pre-caching"
            ),
        }
    }
}
