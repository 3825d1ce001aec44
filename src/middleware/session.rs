//! Type-safe wrapper for the authentication state kept in the session.
//!
//! The host's login flow stores the logged-in user's ID under `SESSION_AUTH_USER_ID`;
//! everything else reads it through `AuthSession`.

use tower_sessions::Session;

use crate::{error::AppError, host::UserId};

pub const SESSION_AUTH_USER_ID: &str = "auth:user";

pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the logged-in user's ID in the session.
    pub async fn set_user_id(&self, user_id: UserId) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Retrieves the logged-in user's ID.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<UserId>, AppError> {
        Ok(self.session.get::<UserId>(SESSION_AUTH_USER_ID).await?)
    }
}
