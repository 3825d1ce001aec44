//! SeAT role catalog mirroring.

use serde_json::Value;

use crate::{
    error::AppError,
    host::HostPlatform,
    model::{
        request::RequestOptions,
        seat::{SeatRole, SeatRoleCatalog},
    },
    service::seat::SeatApiClient,
    util::slug::sanitize_role_slug,
};

pub struct RoleCatalogService<'a> {
    api: &'a SeatApiClient<'a>,
    host: &'a dyn HostPlatform,
}

impl<'a> RoleCatalogService<'a> {
    pub fn new(api: &'a SeatApiClient<'a>, host: &'a dyn HostPlatform) -> Self {
        Self { api, host }
    }

    /// Fetches every role defined in SeAT.
    ///
    /// Entries missing an `id` or `title` are skipped.
    ///
    /// # Returns
    /// - `Some(catalog)` - Role titles keyed by SeAT role ID, empty if SeAT defines none
    /// - `None` - No usable response from SeAT
    pub async fn get_seat_roles(&self) -> Option<SeatRoleCatalog> {
        let Value::Array(items) = self.api.request("/roles", RequestOptions::default()).await?
        else {
            tracing::warn!("SeAT /roles response is not a list, ignoring");
            return None;
        };

        let mut catalog = SeatRoleCatalog::new();
        for item in items {
            match serde_json::from_value::<SeatRole>(item) {
                Ok(role) => {
                    catalog.insert(role.id, role.title);
                }
                Err(e) => tracing::debug!("Skipping malformed SeAT role: {}", e),
            }
        }

        Some(catalog)
    }

    /// Ensures every SeAT role exists as a host role.
    ///
    /// Runs on admin initialization. Registration is idempotent, so roles already present
    /// are left untouched. Roles whose title sanitizes to an empty slug are skipped.
    ///
    /// # Returns
    /// - `Ok(Some(created))` - Number of host roles newly created
    /// - `Ok(None)` - Catalog unavailable, nothing registered
    /// - `Err(AppError)` - Host failed to register a role
    pub async fn register_seat_roles(&self) -> Result<Option<usize>, AppError> {
        let Some(catalog) = self.get_seat_roles().await else {
            return Ok(None);
        };

        let mut created = 0;
        for title in catalog.values() {
            let slug = sanitize_role_slug(title);
            if slug.is_empty() {
                tracing::warn!("SeAT role '{}' has no usable slug, skipping", title);
                continue;
            }

            if self.host.create_role_if_absent(&slug, title).await? {
                created += 1;
            }
        }

        tracing::debug!(
            "Registered {} new host roles from {} SeAT roles",
            created,
            catalog.len()
        );

        Ok(Some(created))
    }
}
