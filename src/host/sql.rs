//! `HostPlatform` backed by the application's own database.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::{
    data::{role::RoleRepository, user_meta::UserMetaRepository, user_role::UserRoleRepository},
    error::AppError,
    host::{HostPlatform, UserId},
};

/// Host view for a single request.
///
/// Built per request with the session's user so the current user is passed explicitly
/// rather than read from ambient state.
pub struct SqlHost<'a> {
    db: &'a DatabaseConnection,
    current_user: Option<UserId>,
}

impl<'a> SqlHost<'a> {
    pub fn new(db: &'a DatabaseConnection, current_user: Option<UserId>) -> Self {
        Self { db, current_user }
    }
}

#[async_trait]
impl HostPlatform for SqlHost<'_> {
    async fn create_role_if_absent(&self, slug: &str, title: &str) -> Result<bool, AppError> {
        Ok(RoleRepository::new(self.db)
            .create_if_absent(slug, title)
            .await?)
    }

    async fn add_role_to_user(&self, user_id: UserId, slug: &str) -> Result<(), AppError> {
        UserRoleRepository::new(self.db).add(user_id, slug).await?;
        Ok(())
    }

    async fn remove_role_from_user(&self, user_id: UserId, slug: &str) -> Result<(), AppError> {
        UserRoleRepository::new(self.db).remove(user_id, slug).await?;
        Ok(())
    }

    async fn get_user_metadata(
        &self,
        user_id: UserId,
        key: &str,
    ) -> Result<Option<String>, AppError> {
        Ok(UserMetaRepository::new(self.db).get(user_id, key).await?)
    }

    fn current_user_id(&self) -> Option<UserId> {
        self.current_user
    }
}
