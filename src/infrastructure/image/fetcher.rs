//! HTTP image fetcher backed by memory and disk caches.
//!
//! Implements a three-tier lookup: Memory -> Disk -> Network, honouring the
//! per-request cache policies.

use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, trace};

use crate::domain::entities::{DataSource, FetchOutcome, ImageId, ImageRequest};
use crate::domain::errors::{CacheError, CacheResult};
use crate::domain::ports::ImageFetchPort;

use super::disk_cache::DiskImageCache;
use super::memory_cache::MemoryImageCache;

/// Configuration for the image fetcher.
#[derive(Debug, Clone)]
pub struct ImageFetcherConfig {
    /// Maximum images in memory cache.
    pub memory_cache_size: usize,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ImageFetcherConfig {
    fn default() -> Self {
        Self {
            memory_cache_size: 50,
            timeout_secs: 30,
            user_agent: format!("feedcache/{}", crate::VERSION),
        }
    }
}

/// Fetches images over HTTP, reading and writing the cache tiers a request allows.
pub struct HttpImageFetcher {
    memory_cache: Arc<MemoryImageCache>,
    disk_cache: Arc<DiskImageCache>,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for HttpImageFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpImageFetcher").finish_non_exhaustive()
    }
}

impl HttpImageFetcher {
    /// Creates a new fetcher with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &ImageFetcherConfig, disk_cache: Arc<DiskImageCache>) -> CacheResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CacheError::NetworkError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            memory_cache: Arc::new(MemoryImageCache::new(config.memory_cache_size)),
            disk_cache,
            http_client,
        })
    }

    /// Returns the in-memory tier.
    #[must_use]
    pub fn memory_cache(&self) -> &MemoryImageCache {
        &self.memory_cache
    }

    /// Loads an image through the allowed tiers and reports where it came from.
    ///
    /// # Errors
    /// Returns error if download, validation or the disk write fails.
    pub async fn load(&self, request: &ImageRequest) -> CacheResult<DataSource> {
        let id = ImageId::from_url(&request.url);
        let use_memory = request.memory_cache.is_enabled();
        let use_disk = request.disk_cache.is_enabled();

        if use_memory && self.memory_cache.get(&id).await.is_some() {
            return Ok(DataSource::Memory);
        }

        if use_disk {
            if use_memory {
                if let Some(bytes) = self.disk_cache.get_bytes(&id).await {
                    self.memory_cache.put(id, Bytes::from(bytes)).await;
                    return Ok(DataSource::Disk);
                }
            } else if self.disk_cache.contains(&id).await {
                trace!(url = %request.url, "Already in disk cache");
                return Ok(DataSource::Disk);
            }
        }

        debug!(id = %id, url = %request.url, "Downloading image from network");
        let bytes = self.download(request.url.as_str()).await?;
        validate_image(bytes.clone()).await?;

        if use_disk {
            self.disk_cache.put_bytes(&id, &bytes).await?;
        }
        if use_memory {
            self.memory_cache.put(id, bytes).await;
        }

        Ok(DataSource::Network)
    }

    /// Downloads image bytes from a URL.
    async fn download(&self, url: &str) -> CacheResult<Bytes> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| CacheError::NetworkError(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(CacheError::NetworkError(format!(
                "HTTP {}: {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .bytes()
            .await
            .map_err(|e| CacheError::NetworkError(format!("Failed to read body: {e}")))
    }
}

#[async_trait]
impl ImageFetchPort for HttpImageFetcher {
    async fn fetch(&self, request: &ImageRequest) -> FetchOutcome {
        match self.load(request).await {
            Ok(source) => FetchOutcome::Success { source },
            Err(e) => FetchOutcome::failure(e.to_string()),
        }
    }
}

/// Checks that `bytes` holds a decodable image header.
async fn validate_image(bytes: Bytes) -> CacheResult<()> {
    tokio::task::spawn_blocking(move || {
        image::ImageReader::new(Cursor::new(&bytes[..]))
            .with_guessed_format()
            .map_err(|e| CacheError::DecodeError(format!("Failed to read image: {e}")))?
            .into_dimensions()
            .map(|_| ())
            .map_err(|e| CacheError::DecodeError(format!("Failed to decode image: {e}")))
    })
    .await
    .map_err(|e| CacheError::DecodeError(format!("Decode task panicked: {e}")))?
}
