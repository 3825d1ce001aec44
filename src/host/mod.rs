//! Capabilities the role sync needs from its host application.
//!
//! The sync services depend only on these traits. `SqlHost` and `TransientCache` implement
//! them over this application's own tables; tests and other hosts can supply their own.

pub mod cache;
pub mod sql;

use async_trait::async_trait;
use chrono::Duration;
use serde_json::Value;

use crate::error::AppError;

/// Host user identifier.
pub type UserId = i32;

/// Role and user-record operations provided by the host.
#[async_trait]
pub trait HostPlatform: Send + Sync {
    /// Registers a role with `slug` and display `title` unless the slug already exists.
    ///
    /// Returns whether a role was created.
    async fn create_role_if_absent(&self, slug: &str, title: &str) -> Result<bool, AppError>;

    /// Grants the role identified by `slug` to the user.
    async fn add_role_to_user(&self, user_id: UserId, slug: &str) -> Result<(), AppError>;

    /// Revokes the role identified by `slug` from the user.
    async fn remove_role_from_user(&self, user_id: UserId, slug: &str) -> Result<(), AppError>;

    /// Reads a single metadata value stored on the user record.
    async fn get_user_metadata(&self, user_id: UserId, key: &str)
        -> Result<Option<String>, AppError>;

    /// The user the current request is made on behalf of, if any.
    fn current_user_id(&self) -> Option<UserId>;
}

/// Time-boxed store for decoded API responses.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Gets a live entry.
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError>;

    /// Stores an entry for `ttl`, or without expiry when `ttl` is `None`.
    async fn set(&self, key: &str, value: &Value, ttl: Option<Duration>) -> Result<(), AppError>;
}
