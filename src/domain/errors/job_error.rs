//! Job execution error types.

use thiserror::Error;

use super::StoreError;

/// Errors that stop a job run or prevent it from being scheduled.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum JobError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("job {job_id} failed: {message}")]
    Failed { job_id: u32, message: String },

    #[error("job {job_id} aborted: {message}")]
    Aborted { job_id: u32, message: String },

    #[error("failed to schedule job {job_id}: {message}")]
    Schedule { job_id: u32, message: String },
}
