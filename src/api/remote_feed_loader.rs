use std::sync::{Arc, Weak};

use log::debug;
use url::Url;

use crate::api::feed_item_mapper;
use crate::api::http_client::{HttpClient, HttpClientResult};
use crate::domain::{FeedLoader, LoadCompletion, LoadResult};
use crate::errors::LoadError;

struct Inner<C> {
    client: C,
    url: Url,
}

/// Loads the feed published at one URL through an `HttpClient`.
///
/// Pending requests only hold a weak reference back to the loader: once the
/// owner drops it, late responses are discarded without calling back.
pub struct RemoteFeedLoader<C: HttpClient> {
    inner: Arc<Inner<C>>,
}

impl<C: HttpClient + 'static> RemoteFeedLoader<C> {
    pub fn new(url: Url, client: C) -> Self {
        Self {
            inner: Arc::new(Inner { client, url }),
        }
    }

    pub fn url(&self) -> &Url {
        &self.inner.url
    }

    /// Request the feed once and report the outcome to `completion`.
    pub fn load<F>(&self, completion: F)
    where
        F: FnOnce(LoadResult) + Send + 'static,
    {
        self.request(Box::new(completion));
    }

    fn request(&self, completion: LoadCompletion) {
        let loader: Weak<Inner<C>> = Arc::downgrade(&self.inner);
        debug!("Requesting feed from {}", self.inner.url);

        self.inner.client.get(
            &self.inner.url,
            Box::new(move |result| {
                let Some(_loader) = loader.upgrade() else {
                    debug!("Feed loader dropped before the response arrived, discarding it");
                    return;
                };
                completion(classify(result));
            }),
        );
    }
}

impl<C: HttpClient + 'static> FeedLoader for RemoteFeedLoader<C> {
    fn load(&self, completion: LoadCompletion) {
        self.request(completion);
    }
}

fn classify(result: HttpClientResult) -> LoadResult {
    match result {
        Ok(response) => feed_item_mapper::map(&response),
        Err(e) => {
            debug!("Feed transport failed: {}", e);
            Err(LoadError::Connectivity)
        }
    }
}
