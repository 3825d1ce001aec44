//! SeAT connection settings.
//!
//! The three values are persisted in the host's option table under the keys below and
//! handed to the API client as a `SeatSettings` value, read fresh for every sync pass.

use chrono::Duration;
use serde::Deserialize;

/// Option key holding the SeAT API base URL.
pub const SEAT_API_URL: &str = "seat_api_url";
/// Option key holding the SeAT API token.
pub const SEAT_API_KEY: &str = "seat_api_key";
/// Option key holding the response cache lifetime in hours.
pub const SEAT_API_HOURS: &str = "seat_api_hours";

pub const DEFAULT_CACHE_HOURS: u32 = 1;
/// Longest accepted cache lifetime, one hundred years.
pub const MAX_CACHE_HOURS: u32 = 24 * 365 * 100;

#[derive(Debug, Clone, PartialEq)]
pub struct SeatSettings {
    /// Base URL the endpoint paths are appended to, e.g. `https://seat.example/api/v2`.
    pub api_url: String,
    /// Token sent in the `X-Token` header.
    pub api_key: String,
    /// Cache lifetime of API responses in hours. Zero stores responses without expiry.
    pub cache_hours: u32,
}

impl SeatSettings {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>, cache_hours: u32) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            cache_hours,
        }
    }

    /// Whether both the base URL and the API key are set.
    ///
    /// An unconfigured client never touches the network.
    pub fn is_configured(&self) -> bool {
        !self.api_url.trim().is_empty() && !self.api_key.trim().is_empty()
    }

    /// Lifetime of cached responses, `None` meaning the entry never expires.
    ///
    /// Lifetimes above `MAX_CACHE_HOURS` are capped.
    pub fn cache_ttl(&self) -> Option<Duration> {
        match self.cache_hours {
            0 => None,
            hours => Some(Duration::hours(i64::from(hours.min(MAX_CACHE_HOURS)))),
        }
    }

    /// Parses a stored hours value, falling back to the default when blank or invalid.
    pub fn parse_hours(value: Option<&str>) -> u32 {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_CACHE_HOURS)
    }
}

impl Default for SeatSettings {
    fn default() -> Self {
        Self::new("", "", DEFAULT_CACHE_HOURS)
    }
}

/// Form submitted by the settings page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SettingsForm {
    pub seat_api_url: String,
    pub seat_api_key: String,
    pub seat_api_hours: String,
}
