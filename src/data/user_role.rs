//! User role membership repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct UserRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Grants the role to the user.
    ///
    /// Checks for an existing membership first to avoid unique key violations.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership was created
    /// - `Ok(false)` - User already held the role
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn add(&self, user_id: i32, role_slug: &str) -> Result<bool, DbErr> {
        let exists = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::RoleSlug.eq(role_slug))
            .one(self.db)
            .await?;

        if exists.is_some() {
            return Ok(false);
        }

        entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_slug: ActiveValue::Set(role_slug.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Revokes the role from the user. No-op if the user does not hold it.
    pub async fn remove(&self, user_id: i32, role_slug: &str) -> Result<(), DbErr> {
        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .filter(entity::user_role::Column::RoleSlug.eq(role_slug))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the slugs of every role the user holds, sorted.
    pub async fn get_slugs_by_user(&self, user_id: i32) -> Result<Vec<String>, DbErr> {
        let memberships = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(user_id))
            .order_by_asc(entity::user_role::Column::RoleSlug)
            .all(self.db)
            .await?;

        Ok(memberships.into_iter().map(|m| m.role_slug).collect())
    }
}
