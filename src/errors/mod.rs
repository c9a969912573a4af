use thiserror::Error;

/// Why a feed load failed.
///
/// Only the classification is surfaced; the underlying transport cause is
/// dropped by the loader.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// The transport call itself failed and no response was obtained.
    #[error("Connectivity error: the feed could not be reached")]
    Connectivity,

    /// A response arrived but its status or body was rejected.
    #[error("Invalid data: the feed response could not be decoded")]
    InvalidData,
}

/// Failure reported by an `HttpClient` implementation.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not start request worker: {0}")]
    Spawn(std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum FeederError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Loading errors
    #[error("Feed load failed: {0}")]
    Load(#[from] LoadError),

    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),

    // Output errors
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FeederResult<T> = Result<T, FeederError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_converts_into_feeder_error() {
        let err: FeederError = LoadError::InvalidData.into();
        assert!(matches!(err, FeederError::Load(LoadError::InvalidData)));
        assert_eq!(
            err.to_string(),
            "Feed load failed: Invalid data: the feed response could not be decoded"
        );
    }

    #[test]
    fn test_transport_error_message() {
        let err = TransportError::Other("connection reset".to_string());
        assert_eq!(err.to_string(), "connection reset");
    }
}
