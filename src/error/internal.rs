use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A cached SeAT response could not be decoded back into JSON.
    ///
    /// The entry is treated as a cache miss by the API client.
    #[error("Failed to decode cached value for key '{key}': {source}")]
    CorruptCacheEntry {
        /// The namespaced cache key
        key: String,
        /// The underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// A cache lifetime pushed the expiry past the representable date range.
    #[error("Cache lifetime of {0} seconds is out of range")]
    CacheExpiryOutOfRange(i64),

    /// Request options named an HTTP method reqwest does not accept.
    #[error("Invalid HTTP method '{0}' in SeAT request options")]
    InvalidHttpMethod(String),

    /// Request options carried a header name or value that is not valid HTTP.
    #[error("Invalid header '{0}' in SeAT request options")]
    InvalidHeader(String),
}
