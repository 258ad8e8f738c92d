//! Merges direct and blob-discovered image URLs.

use std::collections::HashSet;

use crate::domain::entities::ImageUrl;

/// Deduplicated URL set plus the counts it was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedUrls {
    /// Union of both inputs.
    pub urls: HashSet<ImageUrl>,
    /// Size of the direct (thumbnail/enclosure) input.
    pub direct_count: usize,
    /// Size of the blob-discovered input.
    pub blob_count: usize,
}

impl AggregatedUrls {
    /// Number of unique URLs.
    #[must_use]
    pub fn unique_count(&self) -> usize {
        self.urls.len()
    }
}

/// Merges URL collections into one set.
pub struct UrlAggregator;

impl UrlAggregator {
    /// Returns the set union of `direct` and `from_blobs`.
    #[must_use]
    pub fn merge(direct: HashSet<ImageUrl>, from_blobs: HashSet<ImageUrl>) -> AggregatedUrls {
        let direct_count = direct.len();
        let blob_count = from_blobs.len();

        let (mut urls, rest) = if direct_count >= blob_count {
            (direct, from_blobs)
        } else {
            (from_blobs, direct)
        };
        urls.extend(rest);

        AggregatedUrls {
            urls,
            direct_count,
            blob_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(urls: &[&str]) -> HashSet<ImageUrl> {
        urls.iter().copied().map(ImageUrl::from).collect()
    }

    #[test]
    fn test_overlap_counts_once() {
        let merged = UrlAggregator::merge(set(&["X", "T"]), set(&["X", "Y"]));

        assert_eq!(merged.urls, set(&["X", "Y", "T"]));
        assert_eq!(merged.direct_count, 2);
        assert_eq!(merged.blob_count, 2);
        assert_eq!(merged.unique_count(), 3);
    }

    #[test]
    fn test_union_properties() {
        let cases = [
            (set(&[]), set(&[])),
            (set(&["a"]), set(&[])),
            (set(&[]), set(&["b", "c"])),
            (set(&["a", "b"]), set(&["a", "b"])),
            (set(&["a", "b", "c"]), set(&["c", "d"])),
        ];

        for (a, b) in cases {
            let expected: HashSet<ImageUrl> = a.union(&b).cloned().collect();
            let merged = UrlAggregator::merge(a.clone(), b.clone());

            assert!(a.is_subset(&merged.urls));
            assert!(b.is_subset(&merged.urls));
            assert!(merged.unique_count() <= a.len() + b.len());
            assert_eq!(merged.urls, expected);
        }
    }

    #[test]
    fn test_exact_string_equality() {
        let merged = UrlAggregator::merge(
            set(&["https://a/1.jpg"]),
            set(&["https://a/1.jpg/", "HTTPS://a/1.jpg"]),
        );
        assert_eq!(merged.unique_count(), 3);
    }
}
