pub mod http_client;
pub mod feed_item_mapper;
pub mod remote_feed_loader;
pub mod reqwest_http_client;

pub use http_client::{HttpClient, HttpClientResult, HttpCompletion, HttpResponse};
pub use remote_feed_loader::RemoteFeedLoader;
pub use reqwest_http_client::ReqwestHttpClient;
