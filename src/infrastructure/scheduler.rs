//! In-process job scheduler.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{JobContext, JobRequest};
use crate::domain::errors::JobError;
use crate::domain::ports::{BackgroundJob, JobHandle, JobSchedulerPort, ScheduleStatus};

/// Runs jobs immediately on the current tokio runtime when their network
/// constraint is satisfied by the declared connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalJobScheduler {
    metered: bool,
}

impl LocalJobScheduler {
    /// Creates a scheduler for a connection that is `metered` or not.
    #[must_use]
    pub const fn new(metered: bool) -> Self {
        Self { metered }
    }
}

impl JobSchedulerPort for LocalJobScheduler {
    fn schedule(
        &self,
        request: JobRequest,
        job: Arc<dyn BackgroundJob>,
    ) -> Result<ScheduleStatus, JobError> {
        if !request.network.allows(self.metered) {
            info!(job_id = %request.job_id, network_type = %request.network, "Network constraint not met, deferring job");
            return Ok(ScheduleStatus::Deferred {
                reason: format!("requires {} network, connection is metered", request.network),
            });
        }

        let runtime = tokio::runtime::Handle::try_current().map_err(|e| JobError::Schedule {
            job_id: request.job_id.as_u32(),
            message: e.to_string(),
        })?;

        let ctx = JobContext::new(request.job_id);
        let cancel = ctx.cancel.clone();
        debug!(job_id = %request.job_id, "Starting job");
        let task = runtime.spawn(async move { job.do_work(ctx).await });

        Ok(ScheduleStatus::Started(JobHandle::new(
            request.job_id,
            cancel,
            task,
        )))
    }
}
