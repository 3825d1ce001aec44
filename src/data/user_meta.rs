//! User metadata repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

pub struct UserMetaRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserMetaRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the metadata value stored for the user under `key`.
    pub async fn get(&self, user_id: i32, key: &str) -> Result<Option<String>, DbErr> {
        let meta = entity::prelude::UserMeta::find()
            .filter(entity::user_meta::Column::UserId.eq(user_id))
            .filter(entity::user_meta::Column::MetaKey.eq(key))
            .one(self.db)
            .await?;

        Ok(meta.map(|m| m.meta_value))
    }
}
