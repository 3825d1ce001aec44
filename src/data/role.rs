//! Host role repository.
//!
//! Roles are keyed by slug. Registration is idempotent so the catalog sync can re-run on
//! every admin request without creating duplicates.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a role by its slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets all roles ordered by slug.
    pub async fn get_all(&self) -> Result<Vec<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Slug)
            .all(self.db)
            .await
    }

    /// Creates a role unless one with the same slug already exists.
    ///
    /// An existing role keeps its original title.
    ///
    /// # Arguments
    /// - `slug` - Unique role key
    /// - `title` - Display title
    ///
    /// # Returns
    /// - `Ok(true)` - Role was created
    /// - `Ok(false)` - Role already existed, nothing changed
    /// - `Err(DbErr)` - Database error during query or insert
    pub async fn create_if_absent(&self, slug: &str, title: &str) -> Result<bool, DbErr> {
        if self.find_by_slug(slug).await?.is_some() {
            return Ok(false);
        }

        entity::role::ActiveModel {
            slug: ActiveValue::Set(slug.to_string()),
            title: ActiveValue::Set(title.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }
}
