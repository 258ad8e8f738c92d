//! Submits the image cache job to the scheduler.

use std::sync::Arc;

use crate::application::services::RunReporter;
use crate::domain::entities::{JobId, JobRequest, NetworkType};
use crate::domain::errors::JobError;
use crate::domain::ports::{BackgroundJob, JobSchedulerPort, ScheduleStatus};

/// Schedules a one-off image cache run constrained by the Wi-Fi-only preference.
pub struct ScheduleImageCacheUseCase {
    scheduler: Arc<dyn JobSchedulerPort>,
}

impl ScheduleImageCacheUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(scheduler: Arc<dyn JobSchedulerPort>) -> Self {
        Self { scheduler }
    }

    /// Builds the job request from the preference and hands it to the scheduler.
    ///
    /// # Errors
    /// Returns error if the scheduler rejects the job.
    pub fn execute(
        &self,
        load_image_only_on_wifi: bool,
        job: Arc<dyn BackgroundJob>,
    ) -> Result<ScheduleStatus, JobError> {
        let request = JobRequest {
            job_id: JobId::IMAGE_CACHE,
            network: NetworkType::from_wifi_only(load_image_only_on_wifi),
        };
        RunReporter::new(request.job_id).scheduling(request.network);
        self.scheduler.schedule(request, job)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::entities::JobContext;

    struct NoopJob;

    #[async_trait]
    impl BackgroundJob for NoopJob {
        async fn do_work(&self, _ctx: JobContext) -> Result<(), JobError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingScheduler {
        requests: Mutex<Vec<JobRequest>>,
    }

    impl JobSchedulerPort for RecordingScheduler {
        fn schedule(
            &self,
            request: JobRequest,
            _job: Arc<dyn BackgroundJob>,
        ) -> Result<ScheduleStatus, JobError> {
            self.requests.lock().unwrap().push(request);
            Ok(ScheduleStatus::Deferred {
                reason: "recorded".to_string(),
            })
        }
    }

    #[test]
    fn test_wifi_only_requires_unmetered() {
        let scheduler = Arc::new(RecordingScheduler::default());
        let use_case = ScheduleImageCacheUseCase::new(scheduler.clone());

        use_case.execute(true, Arc::new(NoopJob)).unwrap();
        use_case.execute(false, Arc::new(NoopJob)).unwrap();

        let requests = scheduler.requests.lock().unwrap();
        assert_eq!(
            *requests,
            vec![
                JobRequest {
                    job_id: JobId::IMAGE_CACHE,
                    network: NetworkType::Unmetered,
                },
                JobRequest {
                    job_id: JobId::IMAGE_CACHE,
                    network: NetworkType::Any,
                },
            ]
        );
    }
}
