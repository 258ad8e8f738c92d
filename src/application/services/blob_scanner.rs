//! Scans stored article blobs for embedded image URLs.

use std::collections::HashSet;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::domain::entities::{ContentItemId, ImageUrl};
use crate::domain::ports::BlobStorePort;

use super::url_extractor::UrlExtractor;

/// Result of reading one item's blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobRead {
    /// The blob was read and scanned.
    Loaded(Vec<ImageUrl>),
    /// No blob is stored for the item.
    Missing,
    /// The blob exists but could not be read or decoded.
    Unreadable(String),
}

/// URLs found across all scanned blobs, with per-item tallies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlobScanReport {
    /// Union of all URLs found.
    pub urls: HashSet<ImageUrl>,
    /// Items visited before the scan ended.
    pub scanned: usize,
    /// Items whose blob was read.
    pub loaded: usize,
    /// Items with no blob.
    pub missing: usize,
    /// Items whose blob failed to read.
    pub unreadable: usize,
    /// True if the scan stopped early because of cancellation.
    pub cancelled: bool,
}

/// Reads each item's blob and collects the image URLs it references.
pub struct BlobScanner {
    blob_store: Arc<dyn BlobStorePort>,
}

impl BlobScanner {
    /// Creates a scanner over the given blob store.
    #[must_use]
    pub fn new(blob_store: Arc<dyn BlobStorePort>) -> Self {
        Self { blob_store }
    }

    /// Reads one item's blob. Never fails; problems are reported in the result.
    pub async fn read_item(&self, id: ContentItemId) -> BlobRead {
        if !self.blob_store.exists(id).await {
            return BlobRead::Missing;
        }

        match self.blob_store.read_text(id).await {
            Ok(html) => BlobRead::Loaded(UrlExtractor::find_all_image_urls(&html)),
            Err(e) => BlobRead::Unreadable(e.to_string()),
        }
    }

    /// Scans every item in `ids`, stopping early if `cancel` fires.
    pub async fn scan(&self, ids: &[ContentItemId], cancel: &CancellationToken) -> BlobScanReport {
        let mut report = BlobScanReport::default();

        for &id in ids {
            if cancel.is_cancelled() {
                debug!(scanned = report.scanned, "Blob scan cancelled");
                report.cancelled = true;
                break;
            }

            report.scanned += 1;
            match self.read_item(id).await {
                BlobRead::Loaded(urls) => {
                    trace!(id = %id, count = urls.len(), "Scanned article blob");
                    report.loaded += 1;
                    report.urls.extend(urls);
                }
                BlobRead::Missing => {
                    trace!(id = %id, "No article blob");
                    report.missing += 1;
                }
                BlobRead::Unreadable(reason) => {
                    debug!(id = %id, error = %reason, "Skipping unreadable article blob");
                    report.unreadable += 1;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::InMemoryBlobStore;

    fn ids(raw: &[i64]) -> Vec<ContentItemId> {
        raw.iter().copied().map(ContentItemId::new).collect()
    }

    fn img(url: &str) -> String {
        format!(r#"<p><img src="{url}"></p>"#)
    }

    #[tokio::test]
    async fn test_scan_unions_urls() {
        let store = InMemoryBlobStore::new()
            .with_blob(1, img("https://a/1.jpg"))
            .with_blob(2, format!("{}{}", img("https://a/1.jpg"), img("https://a/2.jpg")));
        let scanner = BlobScanner::new(Arc::new(store));

        let report = scanner
            .scan(&ids(&[1, 2]), &CancellationToken::new())
            .await;

        assert_eq!(report.urls.len(), 2);
        assert!(report.urls.contains("https://a/1.jpg"));
        assert!(report.urls.contains("https://a/2.jpg"));
        assert_eq!(report.loaded, 2);
        assert!(!report.cancelled);
    }

    #[tokio::test]
    async fn test_missing_blob_is_skipped() {
        let mut store = InMemoryBlobStore::new();
        for id in [1, 2, 3, 4, 5] {
            store = store.with_blob(id, img(&format!("https://a/{id}.jpg")));
        }
        let scanner = BlobScanner::new(Arc::new(store));

        let report = scanner
            .scan(&ids(&[1, 2, 42, 3, 4, 5]), &CancellationToken::new())
            .await;

        assert_eq!(report.urls.len(), 5);
        assert_eq!(report.scanned, 6);
        assert_eq!(report.missing, 1);
        assert_eq!(report.unreadable, 0);
    }

    #[tokio::test]
    async fn test_corrupt_blob_contributes_nothing() {
        let store = InMemoryBlobStore::new()
            .with_corrupt_blob(7)
            .with_blob(8, img("https://a/8.jpg"));
        let scanner = BlobScanner::new(Arc::new(store));

        assert!(matches!(
            scanner.read_item(ContentItemId::new(7)).await,
            BlobRead::Unreadable(_)
        ));

        let report = scanner
            .scan(&ids(&[7, 8]), &CancellationToken::new())
            .await;
        assert_eq!(report.unreadable, 1);
        assert_eq!(report.urls.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_blob_is_not_read() {
        let store = Arc::new(InMemoryBlobStore::new());
        let scanner = BlobScanner::new(store.clone());

        assert_eq!(
            scanner.read_item(ContentItemId::new(42)).await,
            BlobRead::Missing
        );
        assert!(store.reads().is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_scan_reads_nothing() {
        let store = Arc::new(InMemoryBlobStore::new().with_blob(1, img("https://a/1.jpg")));
        let scanner = BlobScanner::new(store.clone());
        let cancel = CancellationToken::new();
        cancel.cancel();

        let report = scanner.scan(&ids(&[1]), &cancel).await;

        assert!(report.cancelled);
        assert_eq!(report.scanned, 0);
        assert!(report.urls.is_empty());
        assert!(store.reads().is_empty());
    }
}
