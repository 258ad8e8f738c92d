//! Domain layer with core entities, error types and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{ContentItemId, FetchOutcome, ImageUrl, JobContext, JobId, RunSummary};
pub use errors::{BlobError, CacheError, JobError, StoreError};
pub use ports::{BlobStorePort, ContentIndexPort, ContentStorePort, ImageFetchPort};
