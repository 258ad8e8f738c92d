//! Gzip-compressed article blobs on the local filesystem.

use std::io::Read;
use std::path::PathBuf;

use async_trait::async_trait;
use flate2::read::GzDecoder;
use tokio::fs;

use crate::domain::entities::ContentItemId;
use crate::domain::errors::BlobError;
use crate::domain::ports::BlobStorePort;

/// Reads article markup stored as `<article_dir>/<id>.txt.gz`.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    article_dir: PathBuf,
}

impl FileBlobStore {
    /// Creates a store rooted at `article_dir`.
    #[must_use]
    pub const fn new(article_dir: PathBuf) -> Self {
        Self { article_dir }
    }

    /// Returns the blob file for an item.
    #[must_use]
    pub fn blob_file(&self, id: ContentItemId) -> PathBuf {
        self.article_dir.join(format!("{id}.txt.gz"))
    }
}

#[async_trait]
impl BlobStorePort for FileBlobStore {
    async fn exists(&self, id: ContentItemId) -> bool {
        fs::metadata(self.blob_file(id))
            .await
            .is_ok_and(|meta| meta.is_file())
    }

    async fn read_text(&self, id: ContentItemId) -> Result<String, BlobError> {
        let path = self.blob_file(id);
        let compressed = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BlobError::NotFound(path.display().to_string())
            } else {
                BlobError::Io(e)
            }
        })?;

        tokio::task::spawn_blocking(move || -> Result<String, BlobError> {
            let mut text = Vec::new();
            GzDecoder::new(&compressed[..]).read_to_end(&mut text)?;
            Ok(String::from_utf8(text)?)
        })
        .await
        .map_err(|e| BlobError::Io(std::io::Error::other(e)))?
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use tempfile::TempDir;

    use super::*;

    fn write_blob(store: &FileBlobStore, id: i64, content: &[u8]) {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content).unwrap();
        std::fs::write(
            store.blob_file(ContentItemId::new(id)),
            encoder.finish().unwrap(),
        )
        .unwrap();
    }

    #[tokio::test]
    async fn test_read_gzipped_blob() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());
        write_blob(&store, 1, br#"<img src="https://a/1.jpg">"#);

        assert!(store.exists(ContentItemId::new(1)).await);
        let text = store.read_text(ContentItemId::new(1)).await.unwrap();
        assert_eq!(text, r#"<img src="https://a/1.jpg">"#);
    }

    #[tokio::test]
    async fn test_missing_blob() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());

        assert!(!store.exists(ContentItemId::new(42)).await);
        assert!(matches!(
            store.read_text(ContentItemId::new(42)).await,
            Err(BlobError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_directory_is_not_a_blob() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());
        std::fs::create_dir(store.blob_file(ContentItemId::new(3))).unwrap();

        assert!(!store.exists(ContentItemId::new(3)).await);
    }

    #[tokio::test]
    async fn test_corrupt_gzip() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());
        std::fs::write(store.blob_file(ContentItemId::new(5)), b"plain text").unwrap();

        assert!(matches!(
            store.read_text(ContentItemId::new(5)).await,
            Err(BlobError::Io(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(dir.path().to_path_buf());
        write_blob(&store, 6, &[0xff, 0xfe, 0x00]);

        assert!(matches!(
            store.read_text(ContentItemId::new(6)).await,
            Err(BlobError::InvalidEncoding(_))
        ));
    }
}
