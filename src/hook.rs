//! Lifecycle hooks of the role sync.
//!
//! Each hook loads the SeAT settings, assembles the API client over the response cache and
//! runs one service pass. Failures are logged and swallowed so an unreachable SeAT or a
//! missing configuration never affects the host request.

use crate::{
    host::{cache::TransientCache, sql::SqlHost, UserId},
    service::{
        role_catalog::RoleCatalogService, role_sync::RoleSyncService, seat::SeatApiClient,
        settings::SettingsService,
    },
    state::AppState,
};

/// Admin initialization: registers every SeAT role as a host role.
pub async fn admin_init(state: &AppState, admin_id: UserId) {
    let settings = match SettingsService::new(&state.db).load().await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load SeAT settings: {}", e);
            return;
        }
    };

    let cache = TransientCache::seat(&state.db);
    let api = SeatApiClient::new(&state.http_client, &settings, &cache);
    let host = SqlHost::new(&state.db, Some(admin_id));

    match RoleCatalogService::new(&api, &host)
        .register_seat_roles()
        .await
    {
        Ok(Some(created)) if created > 0 => {
            tracing::info!("Registered {} new roles from SeAT", created)
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Failed to register SeAT roles: {}", e),
    }
}

/// Request initialization: reconciles the current user's roles with SeAT.
pub async fn init(state: &AppState, current_user: Option<UserId>) {
    let settings = match SettingsService::new(&state.db).load().await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load SeAT settings: {}", e);
            return;
        }
    };

    let cache = TransientCache::seat(&state.db);
    let api = SeatApiClient::new(&state.http_client, &settings, &cache);
    let host = SqlHost::new(&state.db, current_user);

    if let Err(e) = RoleSyncService::new(&api, &host).sync_current_user().await {
        tracing::warn!("Failed to sync SeAT roles for user {:?}: {}", current_user, e);
    }
}
