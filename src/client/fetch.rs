//! Fetch Client
//!
//! Direct and cache-backed GETs over a [`Transport`].

use std::sync::Arc;

use tracing::{debug, warn};

use crate::cache::TimedCache;
use crate::client::{HttpTransport, Transport};
use crate::config::Config;
use crate::error::{FetchError, FetchResult};

/// Fetches remote resources, optionally through a shared [`TimedCache`].
///
/// Cloning is cheap; clones share the transport and the cache.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    cache: Option<Arc<TimedCache>>,
}

impl FetchClient {
    // == Constructors ==
    /// Creates a client over the production HTTP transport.
    ///
    /// Passing `None` for `cache` turns every cached fetch into a direct one.
    pub fn new(cache: Option<Arc<TimedCache>>, config: &Config) -> FetchResult<Self> {
        let transport = HttpTransport::new(config.http_timeout())?;
        Ok(Self::with_transport(Arc::new(transport), cache))
    }

    /// Creates a client over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>, cache: Option<Arc<TimedCache>>) -> Self {
        Self { transport, cache }
    }

    /// The cache this client consults, if caching is enabled.
    pub fn cache(&self) -> Option<&Arc<TimedCache>> {
        self.cache.as_ref()
    }

    // == Fetch ==
    /// Performs one uncached GET and returns the full body.
    ///
    /// # Errors
    /// - [`FetchError::Transport`] if the exchange could not complete
    /// - [`FetchError::RemoteStatus`] if the status is not 2xx
    pub async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>> {
        let response = self.transport.get(url).await?;

        if !response.is_success() {
            warn!(url, status = response.status, "Remote returned an error status");
            return Err(FetchError::RemoteStatus {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        Ok(response.body)
    }

    // == Fetch Cached ==
    /// Serves `url` from the cache, fetching and storing it on a miss.
    ///
    /// Failed fetches are returned as-is and never stored, so the next call
    /// for the same URL goes back to the network. The cache key is the exact
    /// URL string.
    pub async fn fetch_cached(&self, url: &str) -> FetchResult<Vec<u8>> {
        let Some(cache) = &self.cache else {
            return self.fetch(url).await;
        };

        if let Some(body) = cache.get(url) {
            debug!(url, "Cache hit");
            return Ok(body);
        }

        debug!(url, "Cache miss");
        let body = self.fetch(url).await?;
        cache.add(url, body.clone());

        Ok(body)
    }
}

impl std::fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchClient")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
