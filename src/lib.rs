//! Feedcache - background image cache warmer for a feed reader.
//!
//! This crate collects every image URL referenced by stored feed items and
//! their full-text article blobs, then downloads each image once into a
//! persistent disk cache so it can be shown offline.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services and use cases.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "feedcache";
