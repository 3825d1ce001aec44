//! `ResponseCache` over the transient table.
//!
//! Keys are prefixed with a namespace so SeAT responses never collide with unrelated
//! transients stored by the host.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::{
    data::transient::TransientRepository,
    error::{internal::InternalError, AppError},
    host::ResponseCache,
};

/// Namespace of the SeAT API response cache.
pub const SEAT_CACHE_NAMESPACE: &str = "seatapi_";

pub struct TransientCache<'a> {
    db: &'a DatabaseConnection,
    namespace: &'static str,
}

impl<'a> TransientCache<'a> {
    pub fn new(db: &'a DatabaseConnection, namespace: &'static str) -> Self {
        Self { db, namespace }
    }

    /// Cache scoped to SeAT API responses.
    pub fn seat(db: &'a DatabaseConnection) -> Self {
        Self::new(db, SEAT_CACHE_NAMESPACE)
    }

    fn namespaced(&self, key: &str) -> String {
        format!("{}{}", self.namespace, key)
    }
}

#[async_trait]
impl ResponseCache for TransientCache<'_> {
    async fn get(&self, key: &str) -> Result<Option<Value>, AppError> {
        let key = self.namespaced(key);
        let Some(raw) = TransientRepository::new(self.db)
            .get(&key, Utc::now())
            .await?
        else {
            return Ok(None);
        };

        let value = serde_json::from_str(&raw)
            .map_err(|source| InternalError::CorruptCacheEntry { key, source })?;

        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &Value, ttl: Option<Duration>) -> Result<(), AppError> {
        let expires_at = match ttl {
            Some(ttl) => Some(
                Utc::now()
                    .checked_add_signed(ttl)
                    .ok_or(InternalError::CacheExpiryOutOfRange(ttl.num_seconds()))?,
            ),
            None => None,
        };

        TransientRepository::new(self.db)
            .set(&self.namespaced(key), value.to_string(), expires_at)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_utils::builder::TestBuilder;

    #[tokio::test]
    async fn stores_values_under_namespace() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Transient)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let cache = TransientCache::seat(db);
        cache
            .set("abc", &json!([{"id": 1, "title": "Recruit"}]), Some(Duration::hours(1)))
            .await?;

        let raw = TransientRepository::new(db)
            .get("seatapi_abc", Utc::now())
            .await?;
        assert!(raw.is_some());
        assert_eq!(
            cache.get("abc").await?,
            Some(json!([{"id": 1, "title": "Recruit"}]))
        );

        Ok(())
    }

    #[tokio::test]
    async fn namespaces_do_not_collide() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Transient)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        TransientCache::new(db, "other_")
            .set("abc", &json!(true), None)
            .await?;

        assert!(TransientCache::seat(db).get("abc").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn rejects_expiry_past_date_range() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Transient)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let cache = TransientCache::seat(db);
        let result = cache.set("abc", &json!(true), Some(Duration::MAX)).await;

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::CacheExpiryOutOfRange(_)))
        ));
        assert!(cache.get("abc").await?.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn corrupt_entry_is_an_error() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Transient)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        TransientRepository::new(db)
            .set("seatapi_abc", "{not json".to_string(), None)
            .await?;

        let result = TransientCache::seat(db).get("abc").await;

        assert!(matches!(
            result,
            Err(AppError::InternalErr(InternalError::CorruptCacheEntry { .. }))
        ));

        Ok(())
    }
}
