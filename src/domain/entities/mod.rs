//! Domain entity definitions.

mod content;
mod image;
mod job;

pub use content::ContentItemId;
pub use image::{CachePolicy, DataSource, FetchOutcome, ImageId, ImageRequest, ImageUrl};
pub use job::{JobContext, JobId, JobRequest, NetworkType, RunOutcome, RunSummary};
