//! Per-user reconciliation of host roles with SeAT role membership.

use serde_json::Value;

use crate::{
    error::AppError,
    host::{HostPlatform, UserId},
    model::{request::RequestOptions, seat::CharacterRoles},
    service::{character::CharacterResolver, role_catalog::RoleCatalogService, seat::SeatApiClient},
    util::slug::sanitize_role_slug,
};

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleSyncSummary {
    /// Roles the user holds according to SeAT.
    pub granted: usize,
    /// Roles the user does not hold according to SeAT.
    pub revoked: usize,
}

pub struct RoleSyncService<'a> {
    api: &'a SeatApiClient<'a>,
    host: &'a dyn HostPlatform,
}

impl<'a> RoleSyncService<'a> {
    pub fn new(api: &'a SeatApiClient<'a>, host: &'a dyn HostPlatform) -> Self {
        Self { api, host }
    }

    /// Queries SeAT for the user's membership in every catalog role.
    ///
    /// Each role title is interpolated verbatim into the role-check path. Only a JSON
    /// `true` counts as membership; any other answer, including errors, counts as not a
    /// member.
    ///
    /// # Arguments
    /// - `user_id` - Host user, or `None` for the user of the current request
    ///
    /// # Returns
    /// - `Some(roles)` - Membership keyed by SeAT role title
    /// - `None` - Character unresolved or catalog unavailable; no role checks were made
    pub async fn get_character_roles(&self, user_id: Option<UserId>) -> Option<CharacterRoles> {
        let character_id = match CharacterResolver::new(self.host)
            .get_character_id(user_id)
            .await
        {
            Ok(Some(character_id)) => character_id,
            Ok(None) => {
                tracing::debug!("No EVE character resolved for user {:?}", user_id);
                return None;
            }
            Err(e) => {
                tracing::warn!("Failed to resolve character for user {:?}: {}", user_id, e);
                return None;
            }
        };

        let catalog = RoleCatalogService::new(self.api, self.host)
            .get_seat_roles()
            .await?;

        let mut roles = CharacterRoles::new();
        for title in catalog.into_values() {
            let endpoint = format!("/roles/query/role-check/{}/{}", character_id, title);
            let has_role = matches!(
                self.api.request(&endpoint, RequestOptions::default()).await,
                Some(Value::Bool(true))
            );
            roles.insert(title, has_role);
        }

        Some(roles)
    }

    /// Grants or revokes each SeAT-backed host role of the user to match SeAT.
    ///
    /// Every role in the catalog is applied on each pass; nothing is diffed against
    /// earlier passes. Host roles that no longer exist in SeAT are left alone.
    ///
    /// # Returns
    /// - `Ok(Some(summary))` - Roles reconciled
    /// - `Ok(None)` - Membership unavailable, the user's roles were not touched
    /// - `Err(AppError)` - Host failed to update a membership
    pub async fn sync_user_roles(&self, user_id: UserId) -> Result<Option<RoleSyncSummary>, AppError> {
        let Some(roles) = self.get_character_roles(Some(user_id)).await else {
            return Ok(None);
        };

        let mut summary = RoleSyncSummary::default();
        for (title, has_role) in &roles {
            let slug = sanitize_role_slug(title);
            if slug.is_empty() {
                continue;
            }

            if *has_role {
                self.host.add_role_to_user(user_id, &slug).await?;
                summary.granted += 1;
            } else {
                self.host.remove_role_from_user(user_id, &slug).await?;
                summary.revoked += 1;
            }
        }

        tracing::debug!(
            "Synced SeAT roles for user {}: {} granted, {} revoked",
            user_id,
            summary.granted,
            summary.revoked
        );

        Ok(Some(summary))
    }

    /// Runs `sync_user_roles` for the user of the current request, if anyone is logged in.
    pub async fn sync_current_user(&self) -> Result<Option<RoleSyncSummary>, AppError> {
        match self.host.current_user_id() {
            Some(user_id) => self.sync_user_roles(user_id).await,
            None => Ok(None),
        }
    }
}
