//! Stored content identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of one stored feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentItemId(i64);

impl ContentItemId {
    /// Creates a new `ContentItemId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContentItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContentItemId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}
