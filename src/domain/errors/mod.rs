//! Domain error types.

mod blob_error;
mod cache_error;
mod job_error;
mod store_error;

pub use blob_error::BlobError;
pub use cache_error::{CacheError, CacheResult};
pub use job_error::JobError;
pub use store_error::StoreError;
