//! Filesystem adapters for stored feed content.

mod blob_store;
mod content_store;

pub use blob_store::FileBlobStore;
pub use content_store::{JsonContentStore, StoredItem};
