//! Background job identity, scheduling constraints and run results.

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

/// Stable identifier of a background job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JobId(u32);

impl JobId {
    /// The image cache warming job.
    pub const IMAGE_CACHE: Self = Self(6);

    /// Creates a new `JobId`.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Network a job is allowed to run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NetworkType {
    /// Any connection, metered or not.
    #[default]
    Any,
    /// Only unmetered connections (e.g. Wi-Fi).
    Unmetered,
}

impl NetworkType {
    /// Derives the constraint from the "load images only on Wi-Fi" preference.
    #[must_use]
    pub const fn from_wifi_only(wifi_only: bool) -> Self {
        if wifi_only { Self::Unmetered } else { Self::Any }
    }

    /// Returns true if a connection with the given metered state satisfies this constraint.
    #[must_use]
    pub const fn allows(self, metered: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Unmetered => !metered,
        }
    }
}

impl std::fmt::Display for NetworkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "ANY"),
            Self::Unmetered => write!(f, "UNMETERED"),
        }
    }
}

/// A request to run a job subject to a network constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobRequest {
    /// Job to run.
    pub job_id: JobId,
    /// Required network type.
    pub network: NetworkType,
}

/// Execution context handed to a running job by its host.
#[derive(Debug, Clone)]
pub struct JobContext {
    /// Identifier of the running job.
    pub job_id: JobId,
    /// Cooperative cancellation signal.
    pub cancel: CancellationToken,
}

impl JobContext {
    /// Creates a context with a fresh cancellation token.
    #[must_use]
    pub fn new(job_id: JobId) -> Self {
        Self {
            job_id,
            cancel: CancellationToken::new(),
        }
    }
}

/// How a job run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every URL was attempted.
    Completed,
    /// The host cancelled the run; counts are partial.
    Cancelled,
    /// A pipeline-level failure stopped the run.
    Failed(String),
}

impl RunOutcome {
    /// Returns true if the run ended in failure.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Aggregate result of one job execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Job that produced this summary.
    pub job_id: JobId,
    /// Wall-clock time the run started.
    pub started_at: DateTime<Utc>,
    /// URLs successfully cached.
    pub success_count: usize,
    /// URLs that failed.
    pub fail_count: usize,
    /// Size of the deduplicated URL set.
    pub unique_url_count: usize,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// How the run ended.
    pub outcome: RunOutcome,
}

impl RunSummary {
    /// Total fetch attempts made.
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.success_count + self.fail_count
    }
}
