//! ContentClient - async access to the content API

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Instant;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Url;
use serde_json::Value;

use crate::config::FetchConfig;
use crate::request::ContentRequest;
use crate::{FetchError, Result};

/// A cached `data` payload with its fetch time
struct CachedResponse {
    data: Value,
    fetched_at: Instant,
}

/// Client for the content API with a per-URL revalidation cache
pub struct ContentClient {
    config: FetchConfig,
    http: reqwest::Client,
    cache: RwLock<HashMap<String, CachedResponse>>,
}

impl ContentClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            config,
            http,
            cache: RwLock::new(HashMap::new()),
        })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Build `{base}/api/{slug}?{query}&locale={lang}`
    pub fn request_url(&self, request: &ContentRequest) -> Result<Url> {
        let raw = format!(
            "{}/api/{}",
            self.config.base_url,
            request.slug.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| FetchError::Config(format!("invalid request URL {raw:?}: {e}")))?;

        {
            let mut pairs = url.query_pairs_mut();
            if let Some(query) = &request.query {
                for (key, value) in query.to_pairs() {
                    pairs.append_pair(&key, &value);
                }
            }
            pairs.append_pair("locale", request.lang.as_str());
        }

        Ok(url)
    }

    /// Fetch a resource and return the `data` member of its JSON body.
    ///
    /// Dropping the returned future cancels the request.
    pub async fn fetch(&self, request: &ContentRequest) -> Result<Value> {
        let url = self.request_url(request)?;

        if let Some(data) = self.lookup_cached(url.as_str()) {
            tracing::debug!(%url, "serving content from cache");
            return Ok(data);
        }

        tracing::debug!(%url, "fetching content");
        let response = self
            .http
            .get(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "content request failed");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mut body: Value = response.json().await.map_err(FetchError::Decode)?;
        let data = body.get_mut("data").map(Value::take).unwrap_or(Value::Null);

        self.store(url.as_str(), &data);
        Ok(data)
    }

    /// Drop every cached response
    pub fn clear_cache(&self) {
        self.write_cache().clear();
    }

    fn lookup_cached(&self, url: &str) -> Option<Value> {
        let cache = self.read_cache();
        let cached = cache.get(url)?;

        if cached.fetched_at.elapsed() >= self.config.revalidate {
            return None;
        }

        Some(cached.data.clone())
    }

    /// Insert a response, evicting every entry past its revalidation window
    fn store(&self, url: &str, data: &Value) {
        let revalidate = self.config.revalidate;
        if revalidate.is_zero() {
            return;
        }

        let mut cache = self.write_cache();
        cache.retain(|_, cached| cached.fetched_at.elapsed() < revalidate);
        cache.insert(
            url.to_string(),
            CachedResponse {
                data: data.clone(),
                fetched_at: Instant::now(),
            },
        );
    }

    // Entries are whole values, so a panic elsewhere cannot leave one
    // half-written; a poisoned lock is still safe to use.
    fn read_cache(&self) -> RwLockReadGuard<'_, HashMap<String, CachedResponse>> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, HashMap<String, CachedResponse>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}
