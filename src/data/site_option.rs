//! Key/value option repository backing the plugin settings.

use sea_orm::{sea_query::OnConflict, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct SiteOptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteOptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the value stored under `name`.
    ///
    /// # Returns
    /// - `Ok(Some(value))` - Option is set
    /// - `Ok(None)` - Option has never been stored
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self, name: &str) -> Result<Option<String>, DbErr> {
        let option = entity::prelude::SiteOption::find_by_id(name.to_string())
            .one(self.db)
            .await?;

        Ok(option.map(|o| o.value))
    }

    /// Stores `value` under `name`, replacing any previous value.
    pub async fn set(&self, name: &str, value: &str) -> Result<(), DbErr> {
        entity::prelude::SiteOption::insert(entity::site_option::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            value: ActiveValue::Set(value.to_string()),
        })
        .on_conflict(
            OnConflict::column(entity::site_option::Column::Name)
                .update_column(entity::site_option::Column::Value)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
