//! Outbound SeAT request options.

use serde::Serialize;
use std::collections::BTreeMap;

/// Overrides applied on top of the default SeAT request.
///
/// Merging is shallow: a provided `headers` map replaces the default header map as a
/// whole rather than being merged header by header.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Option<String>,
    pub headers: Option<BTreeMap<String, String>>,
}

impl RequestOptions {
    /// Applies these overrides to `defaults`.
    pub fn merge_over(self, defaults: SeatRequest) -> SeatRequest {
        SeatRequest {
            method: self.method.unwrap_or(defaults.method),
            headers: self.headers.unwrap_or(defaults.headers),
        }
    }
}

/// Fully merged request options.
///
/// Serialized as part of the cache key; `BTreeMap` keeps the header order stable so the
/// same options always produce the same key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatRequest {
    pub method: String,
    pub headers: BTreeMap<String, String>,
}

impl SeatRequest {
    /// Default GET request authenticated with `api_key`, with a blank `X-CSRF-TOKEN`
    /// placeholder.
    pub fn defaults(api_key: &str) -> Self {
        let headers = BTreeMap::from([
            ("accept".to_string(), "application/json".to_string()),
            ("X-Token".to_string(), api_key.to_string()),
            ("X-CSRF-TOKEN".to_string(), " ".to_string()),
        ]);

        Self {
            method: "GET".to_string(),
            headers,
        }
    }
}
