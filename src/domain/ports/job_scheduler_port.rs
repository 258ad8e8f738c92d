//! Ports for background jobs and the facility that schedules them.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::domain::entities::{JobContext, JobId, JobRequest};
use crate::domain::errors::JobError;

/// A unit of background work run by a job host.
#[async_trait]
pub trait BackgroundJob: Send + Sync {
    /// Runs the job to completion or until `ctx` is cancelled.
    async fn do_work(&self, ctx: JobContext) -> Result<(), JobError>;
}

/// Outcome of handing a job to the scheduler.
#[derive(Debug)]
pub enum ScheduleStatus {
    /// The job's constraints are met and it is running.
    Started(JobHandle),
    /// The job's constraints are not met; it was not started.
    Deferred {
        /// Why the job did not start.
        reason: String,
    },
}

/// Handle to a running job.
#[derive(Debug)]
pub struct JobHandle {
    job_id: JobId,
    cancel: CancellationToken,
    task: JoinHandle<Result<(), JobError>>,
}

impl JobHandle {
    /// Wraps a spawned job task.
    #[must_use]
    pub const fn new(
        job_id: JobId,
        cancel: CancellationToken,
        task: JoinHandle<Result<(), JobError>>,
    ) -> Self {
        Self {
            job_id,
            cancel,
            task,
        }
    }

    /// Returns the running job's identifier.
    #[must_use]
    pub const fn job_id(&self) -> JobId {
        self.job_id
    }

    /// Returns a token that cancels the job when triggered.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Asks the job to stop at its next safe point.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Waits for the job to finish.
    ///
    /// # Errors
    /// Returns the job's own error, or [`JobError::Aborted`] if its task panicked.
    pub async fn join(self) -> Result<(), JobError> {
        self.task.await.map_err(|e| JobError::Aborted {
            job_id: self.job_id.as_u32(),
            message: e.to_string(),
        })?
    }
}

/// Port for the facility that decides when background jobs run.
pub trait JobSchedulerPort: Send + Sync {
    /// Submits a job subject to the request's constraints.
    ///
    /// # Errors
    /// Returns error if the job cannot be submitted at all.
    fn schedule(
        &self,
        request: JobRequest,
        job: Arc<dyn BackgroundJob>,
    ) -> Result<ScheduleStatus, JobError>;
}
