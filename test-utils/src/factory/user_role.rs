//! Factory for user role memberships.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Grants the role identified by `role_slug` to the user.
pub async fn create_user_role(
    db: &DatabaseConnection,
    user_id: i32,
    role_slug: impl Into<String>,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_slug: ActiveValue::Set(role_slug.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
