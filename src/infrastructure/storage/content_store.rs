//! Content store backed by a JSON snapshot of stored feed items.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::entities::{ContentItemId, ImageUrl};
use crate::domain::errors::StoreError;
use crate::domain::ports::{ContentIndexPort, ContentStorePort};

/// One stored feed item as exported to the snapshot file.
#[derive(Debug, Clone, Deserialize)]
pub struct StoredItem {
    /// Item identifier; also names its article blob.
    pub id: ContentItemId,
    /// Thumbnail URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Enclosure URL.
    #[serde(default)]
    pub enclosure_link: Option<String>,
    /// Enclosure MIME type.
    #[serde(default)]
    pub enclosure_type: Option<String>,
}

impl StoredItem {
    /// Returns the thumbnail and, if it is an image, the enclosure.
    pub fn image_urls(&self) -> impl Iterator<Item = ImageUrl> + '_ {
        let enclosure = self
            .enclosure_link
            .as_deref()
            .filter(|_| {
                self.enclosure_type
                    .as_deref()
                    .is_some_and(|t| t.trim().to_ascii_lowercase().starts_with("image/"))
            });

        self.image_url
            .as_deref()
            .into_iter()
            .chain(enclosure)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(ImageUrl::from)
    }
}

/// Reads stored items from a JSON array file.
///
/// The file is parsed on first use and both ports answer from that snapshot
/// for the lifetime of the store. A failed load is not cached.
#[derive(Debug)]
pub struct JsonContentStore {
    path: PathBuf,
    items: OnceCell<Vec<StoredItem>>,
}

impl JsonContentStore {
    /// Creates a store reading `path`.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            items: OnceCell::new(),
        }
    }

    async fn items(&self) -> Result<&[StoredItem], StoreError> {
        self.items
            .get_or_try_init(|| self.load_items())
            .await
            .map(Vec::as_slice)
    }

    async fn load_items(&self) -> Result<Vec<StoredItem>, StoreError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            StoreError::unavailable(format!("{}: {e}", self.path.display()))
        })?;
        let items: Vec<StoredItem> = serde_json::from_str(&content)
            .map_err(|e| StoreError::corrupt(format!("{}: {e}", self.path.display())))?;
        debug!(path = %self.path.display(), count = items.len(), "Loaded stored items");
        Ok(items)
    }
}

#[async_trait]
impl ContentStorePort for JsonContentStore {
    async fn get_all_item_image_urls(&self) -> Result<HashSet<ImageUrl>, StoreError> {
        let items = self.items().await?;
        Ok(items.iter().flat_map(|item| item.image_urls()).collect())
    }
}

#[async_trait]
impl ContentIndexPort for JsonContentStore {
    async fn get_all_content_item_ids(&self) -> Result<Vec<ContentItemId>, StoreError> {
        let items = self.items().await?;
        Ok(items.iter().map(|item| item.id).collect())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    const ITEMS: &str = r#"[
        {"id": 1, "title": "First", "image_url": "https://a/thumb1.jpg"},
        {"id": 2, "image_url": "https://a/thumb1.jpg",
         "enclosure_link": "https://a/cover.png", "enclosure_type": "image/png"},
        {"id": 3, "enclosure_link": "https://a/episode.mp3", "enclosure_type": "audio/mpeg"},
        {"id": 4, "image_url": "  "}
    ]"#;

    fn store_with(content: &str) -> (JsonContentStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, content).unwrap();
        (JsonContentStore::new(path), dir)
    }

    #[tokio::test]
    async fn test_image_urls_from_thumbnails_and_image_enclosures() {
        let (store, _dir) = store_with(ITEMS);

        let urls = store.get_all_item_image_urls().await.unwrap();

        assert_eq!(
            urls,
            HashSet::from([
                ImageUrl::new("https://a/thumb1.jpg"),
                ImageUrl::new("https://a/cover.png"),
            ])
        );
    }

    #[tokio::test]
    async fn test_item_ids() {
        let (store, _dir) = store_with(ITEMS);

        let ids = store.get_all_content_item_ids().await.unwrap();

        assert_eq!(ids, [1, 2, 3, 4].map(ContentItemId::new));
    }

    #[tokio::test]
    async fn test_both_ports_read_one_snapshot() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, ITEMS).unwrap();
        let store = JsonContentStore::new(path.clone());

        let urls = store.get_all_item_image_urls().await.unwrap();
        std::fs::write(&path, r#"[{"id": 99, "image_url": "https://a/new.jpg"}]"#).unwrap();
        let ids = store.get_all_content_item_ids().await.unwrap();

        assert_eq!(urls.len(), 2);
        assert_eq!(ids, [1, 2, 3, 4].map(ContentItemId::new));
    }

    #[tokio::test]
    async fn test_failed_load_is_retried() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("items.json");
        let store = JsonContentStore::new(path.clone());

        assert!(store.get_all_content_item_ids().await.is_err());
        std::fs::write(&path, ITEMS).unwrap();

        assert_eq!(store.get_all_content_item_ids().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let store = JsonContentStore::new(dir.path().join("missing.json"));

        assert!(matches!(
            store.get_all_item_image_urls().await,
            Err(StoreError::Unavailable { .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_file_is_corrupt() {
        let (store, _dir) = store_with("[{\"id\": ");

        assert!(matches!(
            store.get_all_content_item_ids().await,
            Err(StoreError::Corrupt { .. })
        ));
    }
}
