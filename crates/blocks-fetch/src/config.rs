//! Client configuration

use std::env;
use std::time::Duration;

use crate::{FetchError, Result};

/// How long a fetched document is served from cache
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(10);

/// Request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Options for [`ContentClient`](crate::ContentClient)
#[derive(Debug, Clone, PartialEq)]
pub struct FetchConfig {
    /// Server root, e.g. `https://cms.example.com`
    pub base_url: String,

    /// Cache validity window; zero disables caching
    pub revalidate: Duration,

    pub timeout: Duration,
}

impl FetchConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url).map_err(|e| {
            FetchError::Config(format!("invalid API server URL {base_url:?}: {e}"))
        })?;

        Ok(Self {
            base_url,
            revalidate: DEFAULT_REVALIDATE,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read `API_SERVER_URL`, `BLOCKS_REVALIDATE_SECS` and `BLOCKS_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("API_SERVER_URL")
            .map_err(|_| FetchError::Config("API_SERVER_URL is not set".to_string()))?;

        let mut config = Self::new(base_url)?;
        if let Some(secs) = secs_from_env("BLOCKS_REVALIDATE_SECS")? {
            config.revalidate = secs;
        }
        if let Some(secs) = secs_from_env("BLOCKS_TIMEOUT_SECS")? {
            config.timeout = secs;
        }
        Ok(config)
    }

    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = revalidate;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn secs_from_env(name: &str) -> Result<Option<Duration>> {
    match env::var(name) {
        Ok(value) => parse_secs(name, &value).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_secs(name: &str, value: &str) -> Result<Duration> {
    value.trim().parse::<u64>().map(Duration::from_secs).map_err(|_| {
        FetchError::Config(format!(
            "{name} must be a whole number of seconds, got {value:?}"
        ))
    })
}
