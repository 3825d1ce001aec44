//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared resources cloned into every handler and middleware through axum's state extraction.
///
/// Both fields are cheap to clone: the connection is a pool and `reqwest::Client` is
/// reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Client for SeAT API calls, configured without redirects.
    pub http_client: reqwest::Client,
}

impl AppState {
    pub fn new(db: DatabaseConnection, http_client: reqwest::Client) -> Self {
        Self { db, http_client }
    }
}
