use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::model::user::HostUser;

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(HostUser))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<HostUser>, DbErr> {
        let user = entity::prelude::User::find_by_id(user_id).one(self.db).await?;

        Ok(user.map(HostUser::from_entity))
    }
}
