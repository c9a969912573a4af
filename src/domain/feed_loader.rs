use std::sync::mpsc;

use crate::domain::FeedItem;
use crate::errors::LoadError;

/// Outcome of a single feed load.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Callback receiving the result of one `load` call.
pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

pub trait FeedLoader: Send + Sync {
    /// Start loading the feed. `completion` is called at most once, possibly
    /// from another thread.
    fn load(&self, completion: LoadCompletion);
}

/// Run one load and block the current thread until its result arrives.
///
/// A completion that is dropped without being called (the loader went away
/// mid-flight) is reported as a connectivity failure.
pub fn load_blocking(loader: &dyn FeedLoader) -> LoadResult {
    let (tx, rx) = mpsc::channel();

    loader.load(Box::new(move |result| {
        // Receiver only disappears if the caller stopped waiting.
        let _ = tx.send(result);
    }));

    rx.recv().unwrap_or(Err(LoadError::Connectivity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    use url::Url;
    use uuid::Uuid;

    struct StubLoader {
        result: LoadResult,
    }

    impl FeedLoader for StubLoader {
        fn load(&self, completion: LoadCompletion) {
            let result = self.result.clone();
            thread::spawn(move || completion(result));
        }
    }

    struct DroppingLoader;

    impl FeedLoader for DroppingLoader {
        fn load(&self, completion: LoadCompletion) {
            drop(completion);
        }
    }

    #[test]
    fn test_load_blocking_waits_for_background_completion() {
        let item = FeedItem::new(Uuid::new_v4(), Url::parse("https://a-url.com").unwrap());
        let loader = StubLoader {
            result: Ok(vec![item.clone()]),
        };

        assert_eq!(load_blocking(&loader), Ok(vec![item]));
    }

    #[test]
    fn test_load_blocking_forwards_failures() {
        let loader = StubLoader {
            result: Err(LoadError::InvalidData),
        };

        assert_eq!(load_blocking(&loader), Err(LoadError::InvalidData));
    }

    #[test]
    fn test_load_blocking_treats_dropped_completion_as_connectivity() {
        assert_eq!(load_blocking(&DroppingLoader), Err(LoadError::Connectivity));
    }
}
