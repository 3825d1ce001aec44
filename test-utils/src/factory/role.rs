//! Factory for host role entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a host role.
///
/// # Arguments
/// - `db` - Database connection
/// - `slug` - Unique role slug
/// - `title` - Display title
pub async fn create_role(
    db: &DatabaseConnection,
    slug: impl Into<String>,
    title: impl Into<String>,
) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        slug: ActiveValue::Set(slug.into()),
        title: ActiveValue::Set(title.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
