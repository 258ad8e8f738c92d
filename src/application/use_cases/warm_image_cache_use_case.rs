//! Image cache warming job.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;

use crate::application::services::{
    BlobScanner, CacheWarmer, RunReporter, UrlAggregator, WarmReport,
};
use crate::domain::entities::{JobContext, RunOutcome, RunSummary};
use crate::domain::errors::JobError;
use crate::domain::ports::{
    BackgroundJob, BlobStorePort, ContentIndexPort, ContentStorePort, ImageFetchPort,
};

/// Everything the pipeline produced before it stopped.
struct PipelineResult {
    unique_url_count: usize,
    warm: WarmReport,
    cancelled: bool,
}

/// Discovers every image referenced by stored content and warms the disk cache with it.
pub struct WarmImageCacheUseCase {
    content_store: Arc<dyn ContentStorePort>,
    content_index: Arc<dyn ContentIndexPort>,
    scanner: BlobScanner,
    warmer: CacheWarmer,
}

impl WarmImageCacheUseCase {
    /// Creates new use case.
    #[must_use]
    pub fn new(
        content_store: Arc<dyn ContentStorePort>,
        content_index: Arc<dyn ContentIndexPort>,
        blob_store: Arc<dyn BlobStorePort>,
        fetcher: Arc<dyn ImageFetchPort>,
    ) -> Self {
        Self {
            content_store,
            content_index,
            scanner: BlobScanner::new(blob_store),
            warmer: CacheWarmer::new(fetcher),
        }
    }

    /// Runs the whole pipeline once and returns its summary.
    ///
    /// Never fails: a pipeline-level error is recorded as
    /// [`RunOutcome::Failed`]. The summary is logged exactly once.
    pub async fn execute(&self, ctx: &JobContext) -> RunSummary {
        let started_at = Utc::now();
        let clock = Instant::now();
        let reporter = RunReporter::new(ctx.job_id);
        reporter.started();

        let result = self.run_pipeline(ctx, &reporter).await;

        let elapsed_ms = u64::try_from(clock.elapsed().as_millis()).unwrap_or(u64::MAX);
        let summary = match result {
            Ok(done) => RunSummary {
                job_id: ctx.job_id,
                started_at,
                success_count: done.warm.success_count,
                fail_count: done.warm.fail_count,
                unique_url_count: done.unique_url_count,
                elapsed_ms,
                outcome: if done.cancelled {
                    RunOutcome::Cancelled
                } else {
                    RunOutcome::Completed
                },
            },
            Err(e) => RunSummary {
                job_id: ctx.job_id,
                started_at,
                success_count: 0,
                fail_count: 0,
                unique_url_count: 0,
                elapsed_ms,
                outcome: RunOutcome::Failed(e.to_string()),
            },
        };

        reporter.finished(&summary);
        summary
    }

    async fn run_pipeline(
        &self,
        ctx: &JobContext,
        reporter: &RunReporter,
    ) -> Result<PipelineResult, JobError> {
        let direct = self.content_store.get_all_item_image_urls().await?;
        reporter.direct_urls_found(direct.len());

        let item_ids = self.content_index.get_all_content_item_ids().await?;
        reporter.scanning_blobs(item_ids.len());

        let scan = self.scanner.scan(&item_ids, &ctx.cancel).await;
        reporter.blobs_scanned(&scan);

        let merged = UrlAggregator::merge(direct, scan.urls);
        reporter.aggregated(&merged);

        let warm = self.warmer.warm(&merged.urls, &ctx.cancel).await;
        reporter.warmed(&warm);

        Ok(PipelineResult {
            unique_url_count: merged.unique_count(),
            cancelled: scan.cancelled || warm.cancelled,
            warm,
        })
    }
}

#[async_trait]
impl BackgroundJob for WarmImageCacheUseCase {
    async fn do_work(&self, ctx: JobContext) -> Result<(), JobError> {
        let summary = self.execute(&ctx).await;
        match summary.outcome {
            RunOutcome::Failed(message) => Err(JobError::Failed {
                job_id: ctx.job_id.as_u32(),
                message,
            }),
            RunOutcome::Completed | RunOutcome::Cancelled => Ok(()),
        }
    }
}
