//! Cached SeAT API client.
//!
//! Every call is a no-op until both the base URL and API key are configured. Responses are
//! cached under a SHA-512 digest of the full URL and the merged request options, so
//! identical calls within the cache lifetime never reach the network. Failures of any kind
//! are logged and reported as `None`; nothing is raised to the caller.

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Method,
};
use serde_json::Value;
use sha2::{Digest, Sha512};

use crate::{
    error::{internal::InternalError, AppError},
    host::ResponseCache,
    model::{
        request::{RequestOptions, SeatRequest},
        settings::SeatSettings,
    },
};

pub struct SeatApiClient<'a> {
    http_client: &'a reqwest::Client,
    settings: &'a SeatSettings,
    cache: &'a dyn ResponseCache,
}

impl<'a> SeatApiClient<'a> {
    pub fn new(
        http_client: &'a reqwest::Client,
        settings: &'a SeatSettings,
        cache: &'a dyn ResponseCache,
    ) -> Self {
        Self {
            http_client,
            settings,
            cache,
        }
    }

    /// Sends a request to a SeAT API endpoint.
    ///
    /// The cache is consulted first; on a miss the request is sent and a body that decodes
    /// as JSON is cached for the configured lifetime.
    ///
    /// # Arguments
    /// - `endpoint` - Path appended verbatim to the base URL, e.g. `/roles`
    /// - `options` - Overrides merged over the default GET request
    ///
    /// # Returns
    /// - `Some(Value)` - Decoded response body, fresh or cached
    /// - `None` - Client not configured, transport failure, or body is not JSON
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Option<Value> {
        if !self.settings.is_configured() {
            tracing::debug!(
                "SeAT API URL or key not configured, skipping request to {}",
                endpoint
            );
            return None;
        }

        let url = format!("{}{}", self.settings.api_url, endpoint);
        let request = options.merge_over(SeatRequest::defaults(&self.settings.api_key));

        let key = match cache_key(&url, &request) {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!("Failed to derive cache key for {}: {}", url, e);
                return None;
            }
        };

        match self.cache.get(&key).await {
            Ok(Some(value)) => {
                tracing::debug!("SeAT cache hit for {}", url);
                return Some(value);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Failed to read SeAT cache for {}: {}", url, e),
        }

        let value = match self.send(&url, &request).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("SeAT request to {} failed: {}", url, e);
                return None;
            }
        };

        if let Err(e) = self
            .cache
            .set(&key, &value, self.settings.cache_ttl())
            .await
        {
            tracing::warn!("Failed to cache SeAT response for {}: {}", url, e);
        }

        Some(value)
    }

    async fn send(&self, url: &str, request: &SeatRequest) -> Result<Value, AppError> {
        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|_| InternalError::InvalidHttpMethod(request.method.clone()))?;

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| InternalError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| InternalError::InvalidHeader(name.clone()))?;
            headers.insert(header_name, header_value);
        }

        let response = self
            .http_client
            .request(method, url)
            .headers(headers)
            .send()
            .await?;
        let body = response.bytes().await?;

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Hex SHA-512 digest of the URL followed by the serialized request options.
pub fn cache_key(url: &str, request: &SeatRequest) -> Result<String, AppError> {
    let serialized = serde_json::to_string(request)?;

    let mut hasher = Sha512::new();
    hasher.update(url.as_bytes());
    hasher.update(serialized.as_bytes());

    Ok(hex::encode(hasher.finalize()))
}
