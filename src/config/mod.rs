use std::time::Duration;

use url::Url;

use crate::errors::{FeederError, FeederResult};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: Option<String>,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeederResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let feed_url = std::env::var("FEED_URL").ok();

        let request_timeout =
            parse_timeout(std::env::var("FEED_TIMEOUT_SECS").ok().as_deref())?;

        let user_agent =
            std::env::var("FEED_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Ok(Self {
            feed_url,
            request_timeout,
            user_agent,
        })
    }

    /// Resolve the feed URL, preferring `override_url` over `FEED_URL`.
    pub fn feed_url(&self, override_url: Option<&str>) -> FeederResult<Url> {
        let raw = override_url
            .or(self.feed_url.as_deref())
            .ok_or_else(|| FeederError::MissingEnvVar("FEED_URL".to_string()))?;

        let url = Url::parse(raw).map_err(|e| FeederError::InvalidUrl(format!("{}: {}", raw, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(FeederError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                raw, scheme
            ))),
        }
    }
}

fn default_user_agent() -> String {
    format!("essential-feed/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_timeout(value: Option<&str>) -> FeederResult<Duration> {
    let Some(raw) = value else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };

    match raw.trim().parse::<u64>() {
        Ok(0) => Err(FeederError::Config(
            "FEED_TIMEOUT_SECS must be greater than zero".to_string(),
        )),
        Ok(secs) => Ok(Duration::from_secs(secs)),
        Err(_) => Err(FeederError::Config(format!(
            "FEED_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
            raw
        ))),
    }
}
