//! Port definitions for storage, fetching and job scheduling.

mod blob_store_port;
mod content_store_port;
mod image_fetch_port;
mod job_scheduler_port;

pub use blob_store_port::BlobStorePort;
pub use content_store_port::{ContentIndexPort, ContentStorePort};
pub use image_fetch_port::ImageFetchPort;
pub use job_scheduler_port::{BackgroundJob, JobHandle, JobSchedulerPort, ScheduleStatus};

#[cfg(test)]
pub use content_store_port::{MockContentIndexPort, MockContentStorePort};
