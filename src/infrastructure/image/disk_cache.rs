//! Disk-based image cache shared by every fetcher in the process.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace, warn};

use crate::domain::entities::ImageId;
use crate::domain::errors::{CacheError, CacheResult};

/// Maximum disk cache size in bytes (250 MB default).
pub const DEFAULT_MAX_CACHE_SIZE: u64 = 250 * 1024 * 1024;

const ENTRY_EXTENSION: &str = "img";

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Disk-based image cache that persists raw image bytes.
///
/// Entries are written to a temporary file and renamed into place, so
/// concurrent writers of the same entry never leave a torn file behind.
pub struct DiskImageCache {
    cache_dir: PathBuf,
    max_size: u64,
    current_size: AtomicU64,
    item_count: AtomicUsize,
}

impl DiskImageCache {
    /// Creates a new disk cache in the specified directory.
    ///
    /// # Errors
    /// Returns error if cache directory cannot be created.
    pub async fn new(cache_dir: PathBuf, max_size: u64) -> CacheResult<Self> {
        fs::create_dir_all(&cache_dir)
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to create cache dir: {e}")))?;
        let mut total_size = 0u64;
        let mut count = 0usize;

        let mut entries = fs::read_dir(&cache_dir)
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to read cache dir: {e}")))?;

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == ENTRY_EXTENSION)
                && let Ok(meta) = entry.metadata().await
            {
                total_size += meta.len();
                count += 1;
            }
        }

        let cache = Self {
            cache_dir,
            max_size,
            current_size: AtomicU64::new(total_size),
            item_count: AtomicUsize::new(count),
        };

        cache.cleanup_if_needed().await;

        Ok(cache)
    }

    /// Returns the path for a cached image.
    fn cache_path(&self, id: &ImageId) -> PathBuf {
        self.cache_dir.join(format!("{}.{ENTRY_EXTENSION}", id.as_str()))
    }

    fn temp_path(&self, id: &ImageId) -> PathBuf {
        let n = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.cache_dir
            .join(format!("{}.{}-{n}.tmp", id.as_str(), std::process::id()))
    }

    /// Gets raw image bytes from disk cache.
    pub async fn get_bytes(&self, id: &ImageId) -> Option<Vec<u8>> {
        let path = self.cache_path(id);
        if let Ok(bytes) = fs::read(&path).await {
            trace!(id = %id, path = %path.display(), "Disk cache hit");
            Some(bytes)
        } else {
            trace!(id = %id, "Disk cache miss");
            None
        }
    }

    /// Stores raw bytes in the disk cache.
    ///
    /// # Errors
    /// Returns error if file cannot be created, written or moved into place.
    pub async fn put_bytes(&self, id: &ImageId, bytes: &[u8]) -> CacheResult<()> {
        let path = self.cache_path(id);
        let temp = self.temp_path(id);

        let old_size = fs::metadata(&path).await.map(|m| m.len()).ok();

        if let Err(e) = Self::write_file(&temp, bytes).await {
            let _ = fs::remove_file(&temp).await;
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp, &path).await {
            let _ = fs::remove_file(&temp).await;
            return Err(CacheError::IoError(format!(
                "Failed to move cache file into place: {e}"
            )));
        }

        let new_size = bytes.len() as u64;
        if let Some(old) = old_size {
            if new_size > old {
                self.current_size
                    .fetch_add(new_size - old, Ordering::Relaxed);
            } else {
                saturating_sub_u64(&self.current_size, old - new_size);
            }
        } else {
            self.current_size.fetch_add(new_size, Ordering::Relaxed);
            self.item_count.fetch_add(1, Ordering::Relaxed);
        }

        debug!(id = %id, path = %path.display(), size = bytes.len(), "Stored image in disk cache");

        self.cleanup_if_needed().await;

        Ok(())
    }

    async fn write_file(path: &std::path::Path, bytes: &[u8]) -> CacheResult<()> {
        let mut file = fs::File::create(path)
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to create cache file: {e}")))?;

        file.write_all(bytes)
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to write cache file: {e}")))?;

        file.flush()
            .await
            .map_err(|e| CacheError::IoError(format!("Failed to flush cache file: {e}")))
    }

    /// Returns the current cache size in bytes.
    #[must_use]
    pub fn current_size(&self) -> u64 {
        self.current_size.load(Ordering::Relaxed)
    }

    /// Returns the number of cached files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.item_count.load(Ordering::Relaxed)
    }

    /// Returns true if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes the least recently accessed entries until the cache is back
    /// under 90% of its limit.
    ///
    /// The counters are set from the directory scan, which also sees entries
    /// written by other caches sharing the directory.
    async fn cleanup_if_needed(&self) {
        let current_size = self.current_size();
        if current_size <= self.max_size {
            return;
        }

        debug!(
            current_size = current_size,
            max_size = self.max_size,
            "Disk cache over limit, cleaning up"
        );

        let Ok(mut entries) = fs::read_dir(&self.cache_dir).await else {
            return;
        };

        let mut files: Vec<(PathBuf, std::time::SystemTime, u64)> = Vec::new();
        let mut on_disk_size = 0u64;

        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != ENTRY_EXTENSION) {
                continue;
            }

            if let Ok(meta) = entry.metadata().await {
                on_disk_size += meta.len();
                let accessed = meta
                    .accessed()
                    .or_else(|_| meta.modified())
                    .unwrap_or(std::time::SystemTime::UNIX_EPOCH);
                files.push((path, accessed, meta.len()));
            }
        }

        files.sort_by_key(|(_, time, _)| *time);

        let on_disk_count = files.len();
        if on_disk_size <= self.max_size {
            self.current_size.store(on_disk_size, Ordering::Relaxed);
            self.item_count.store(on_disk_count, Ordering::Relaxed);
            return;
        }

        let mut freed_size = 0u64;
        let mut freed_count = 0usize;
        let target = on_disk_size - self.max_size + (self.max_size / 10);

        for (path, _, size) in files {
            if freed_size >= target {
                break;
            }

            if let Err(e) = fs::remove_file(&path).await {
                warn!(path = %path.display(), error = %e, "Failed to remove old cache file");
            } else {
                debug!(path = %path.display(), "Removed old cache file");
                freed_size += size;
                freed_count += 1;
            }
        }
        self.current_size
            .store(on_disk_size.saturating_sub(freed_size), Ordering::Relaxed);
        self.item_count
            .store(on_disk_count.saturating_sub(freed_count), Ordering::Relaxed);

        debug!(
            freed_size = freed_size,
            freed_count = freed_count,
            "Disk cache cleanup complete"
        );
    }

    /// Checks if an image is cached.
    pub async fn contains(&self, id: &ImageId) -> bool {
        let path = self.cache_path(id);
        fs::try_exists(&path).await.unwrap_or(false)
    }
}

fn saturating_sub_u64(counter: &AtomicU64, amount: u64) {
    let _ = counter.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
        Some(v.saturating_sub(amount))
    });
}
