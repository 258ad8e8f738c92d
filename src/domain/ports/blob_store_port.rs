//! Port for reading stored article markup.

use async_trait::async_trait;

use crate::domain::entities::ContentItemId;
use crate::domain::errors::BlobError;

/// Read-only access to the article blob stored for each item.
#[async_trait]
pub trait BlobStorePort: Send + Sync {
    /// Returns true if a blob is stored for the item.
    async fn exists(&self, id: ContentItemId) -> bool;

    /// Reads the item's blob as text.
    async fn read_text(&self, id: ContentItemId) -> Result<String, BlobError>;
}
