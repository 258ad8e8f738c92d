//! Port for fetching images through the cache tiers.

use async_trait::async_trait;

use crate::domain::entities::{FetchOutcome, ImageRequest};

/// Fetches an image, consulting and populating the cache tiers the request allows.
///
/// Implementations fold every error into [`FetchOutcome::Failure`] and must
/// tolerate concurrent callers writing the same cache.
#[async_trait]
pub trait ImageFetchPort: Send + Sync {
    /// Fetches a single image.
    async fn fetch(&self, request: &ImageRequest) -> FetchOutcome;
}

#[cfg(test)]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use tokio_util::sync::CancellationToken;

    use super::*;
    use crate::domain::entities::{DataSource, ImageUrl};

    /// Fetcher that records every request and answers from a script.
    #[derive(Default)]
    pub struct RecordingFetcher {
        failures: HashMap<ImageUrl, String>,
        requests: Mutex<Vec<ImageRequest>>,
        cancel_after: Option<(usize, CancellationToken)>,
    }

    impl RecordingFetcher {
        /// Creates a fetcher where every fetch succeeds from the network.
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes fetches of `url` fail with `reason`.
        pub fn failing(mut self, url: &str, reason: &str) -> Self {
            self.failures.insert(ImageUrl::new(url), reason.to_string());
            self
        }

        /// Cancels `token` once `count` fetches have completed.
        pub fn cancel_after(mut self, count: usize, token: CancellationToken) -> Self {
            self.cancel_after = Some((count, token));
            self
        }

        /// Returns every request received, in order.
        pub fn requests(&self) -> Vec<ImageRequest> {
            self.requests.lock().unwrap().clone()
        }

        /// Returns the number of fetches performed.
        pub fn fetch_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ImageFetchPort for RecordingFetcher {
        async fn fetch(&self, request: &ImageRequest) -> FetchOutcome {
            let count = {
                let mut requests = self.requests.lock().unwrap();
                requests.push(request.clone());
                requests.len()
            };

            if let Some((limit, token)) = &self.cancel_after
                && count >= *limit
            {
                token.cancel();
            }

            match self.failures.get(&request.url) {
                Some(reason) => FetchOutcome::failure(reason.clone()),
                None => FetchOutcome::Success {
                    source: DataSource::Network,
                },
            }
        }
    }
}
