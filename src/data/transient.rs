//! Time-boxed key/value store repository.
//!
//! Entries past their expiry are invisible to reads and overwritten by the next write
//! for the same key; nothing sweeps them.

use chrono::{DateTime, Utc};
use sea_orm::{sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct TransientRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransientRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the value stored under `key` unless it expired at or before `now`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` - Live entry found
    /// - `Ok(None)` - No entry, or the entry has expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, key: &str, now: DateTime<Utc>) -> Result<Option<String>, DbErr> {
        let transient = entity::prelude::Transient::find_by_id(key.to_string())
            .one(self.db)
            .await?;

        Ok(transient
            .filter(|t| t.expires_at.is_none_or(|expires_at| expires_at > now))
            .map(|t| t.value))
    }

    /// Stores `value` under `key` until `expires_at`, or forever when `None`.
    pub async fn set(
        &self,
        key: &str,
        value: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<(), DbErr> {
        entity::prelude::Transient::insert(entity::transient::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            value: ActiveValue::Set(value),
            expires_at: ActiveValue::Set(expires_at),
        })
        .on_conflict(
            OnConflict::column(entity::transient::Column::Key)
                .update_columns([
                    entity::transient::Column::Value,
                    entity::transient::Column::ExpiresAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
