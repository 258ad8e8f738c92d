//! In-memory LRU cache of raw image bytes.

use std::num::NonZeroUsize;

use bytes::Bytes;
use lru::LruCache;
use tokio::sync::Mutex;
use tracing::{debug, trace};

use crate::domain::entities::ImageId;

/// In-memory LRU cache for recently fetched images.
pub struct MemoryImageCache {
    cache: Mutex<LruCache<ImageId, Bytes>>,
}

impl MemoryImageCache {
    /// Creates a new cache with the specified capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: Mutex::new(LruCache::new(cap)),
        }
    }

    /// Gets an image, promoting it in the LRU.
    pub async fn get(&self, id: &ImageId) -> Option<Bytes> {
        let mut cache = self.cache.lock().await;
        let hit = cache.get(id).cloned();
        trace!(id = %id, hit = hit.is_some(), "Memory cache lookup");
        hit
    }

    /// Stores an image.
    pub async fn put(&self, id: ImageId, bytes: Bytes) {
        let mut cache = self.cache.lock().await;
        debug!(id = %id, size = bytes.len(), "Storing image in memory cache");
        cache.put(id, bytes);
    }

    /// Returns true if the image is cached, without promoting it.
    pub async fn contains(&self, id: &ImageId) -> bool {
        self.cache.lock().await.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ImageUrl;

    fn id(name: &str) -> ImageId {
        ImageId::from_url(&ImageUrl::new(format!("https://example.com/{name}.png")))
    }

    #[tokio::test]
    async fn test_cache_put_and_get() {
        let cache = MemoryImageCache::new(10);

        cache.put(id("a"), Bytes::from_static(b"png")).await;

        assert_eq!(cache.get(&id("a")).await, Some(Bytes::from_static(b"png")));
        assert!(cache.get(&id("b")).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_eviction() {
        let cache = MemoryImageCache::new(2);

        cache.put(id("1"), Bytes::from_static(b"1")).await;
        cache.put(id("2"), Bytes::from_static(b"2")).await;
        cache.put(id("3"), Bytes::from_static(b"3")).await;

        assert!(!cache.contains(&id("1")).await);
        assert!(cache.contains(&id("2")).await);
        assert!(cache.contains(&id("3")).await);
    }

    #[tokio::test]
    async fn test_get_promotes_entry() {
        let cache = MemoryImageCache::new(2);

        cache.put(id("1"), Bytes::from_static(b"1")).await;
        cache.put(id("2"), Bytes::from_static(b"2")).await;
        assert!(cache.get(&id("1")).await.is_some());
        cache.put(id("3"), Bytes::from_static(b"3")).await;

        assert!(cache.contains(&id("1")).await);
        assert!(!cache.contains(&id("2")).await);
    }
}
