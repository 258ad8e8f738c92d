//! Ports for enumerating stored feed content.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::entities::{ContentItemId, ImageUrl};
use crate::domain::errors::StoreError;

/// Port for direct image references (thumbnails, image enclosures) of stored items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStorePort: Send + Sync {
    /// Returns every thumbnail and image enclosure URL across all stored items.
    async fn get_all_item_image_urls(&self) -> Result<HashSet<ImageUrl>, StoreError>;
}

/// Port listing the identifiers of all stored items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentIndexPort: Send + Sync {
    /// Returns the identifiers of all stored items.
    async fn get_all_content_item_ids(&self) -> Result<Vec<ContentItemId>, StoreError>;
}
