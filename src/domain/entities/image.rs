//! Domain types for image URLs, cache keys and fetch outcomes.

use std::borrow::Borrow;

/// An image URL exactly as referenced by stored content.
///
/// Equality is an exact string match; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Creates a new `ImageUrl` from any string-like input.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the URL and returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageUrl {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageUrl {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Borrow<str> for ImageUrl {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Cache key for an image.
/// Generated from a hash of the URL so it is safe to use as a file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    /// Creates an `ImageId` from a URL by hashing it.
    #[must_use]
    pub fn from_url(url: &ImageUrl) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(url.as_str().as_bytes());
        let result = hasher.finalize();
        Self(hex::encode(&result[..16]))
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a cache tier may be read from and written to for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Read and write the tier.
    #[default]
    Enabled,
    /// Bypass the tier entirely.
    Disabled,
}

impl CachePolicy {
    /// Returns true if the tier may be used.
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// A single image fetch request with per-tier cache policies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// The image to fetch.
    pub url: ImageUrl,
    /// Persistent cache policy.
    pub disk_cache: CachePolicy,
    /// In-memory cache policy.
    pub memory_cache: CachePolicy,
}

impl ImageRequest {
    /// Creates a request that warms the disk cache and leaves memory untouched.
    #[must_use]
    pub fn disk_only(url: ImageUrl) -> Self {
        Self {
            url,
            disk_cache: CachePolicy::Enabled,
            memory_cache: CachePolicy::Disabled,
        }
    }
}

/// Where a fetched image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Served from the in-memory cache.
    Memory,
    /// Served from the disk cache.
    Disk,
    /// Downloaded from the network.
    Network,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Disk => write!(f, "disk"),
            Self::Network => write!(f, "network"),
        }
    }
}

/// Result of fetching one image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The image is now present in the requested cache tiers.
    Success {
        /// Tier the data was obtained from.
        source: DataSource,
    },
    /// The fetch failed. Network, decode and cache-write errors all land here.
    Failure {
        /// Human-readable reason.
        reason: String,
    },
}

impl FetchOutcome {
    /// Creates a failure outcome.
    #[must_use]
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    /// Returns true if the fetch succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
