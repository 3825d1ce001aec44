//! Factory for user metadata entries.

use crate::factory::helpers::character_image_url;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Metadata key under which the login plugin stores the character portrait URL.
pub const CHARACTER_IMAGE_META_KEY: &str = "wsl_current_user_image";

/// Creates a metadata entry for a user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - Host user ID owning the entry
/// - `key` - Metadata key
/// - `value` - Metadata value
pub async fn create_user_meta(
    db: &DatabaseConnection,
    user_id: i32,
    key: impl Into<String>,
    value: impl Into<String>,
) -> Result<entity::user_meta::Model, DbErr> {
    entity::user_meta::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        meta_key: ActiveValue::Set(key.into()),
        meta_value: ActiveValue::Set(value.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Stores a character portrait URL for the user so the character resolves to `character_id`.
pub async fn create_character_image(
    db: &DatabaseConnection,
    user_id: i32,
    character_id: u64,
) -> Result<entity::user_meta::Model, DbErr> {
    create_user_meta(
        db,
        user_id,
        CHARACTER_IMAGE_META_KEY,
        character_image_url(character_id),
    )
    .await
}
