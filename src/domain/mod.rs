pub mod feed_item;
pub mod feed_loader;

pub use feed_item::FeedItem;
pub use feed_loader::{load_blocking, FeedLoader, LoadCompletion, LoadResult};
