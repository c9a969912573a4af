use url::Url;

use crate::errors::TransportError;

/// Status code and raw body of a response the transport obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub type HttpClientResult = Result<HttpResponse, TransportError>;

pub type HttpCompletion = Box<dyn FnOnce(HttpClientResult) + Send + 'static>;

#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Issue a GET for `url`.
    ///
    /// Implementations call `completion` exactly once, on whatever thread
    /// they finish on. Any status code counts as a response; classifying it
    /// is left to the caller.
    fn get(&self, url: &Url, completion: HttpCompletion);
}
