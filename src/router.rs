use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::{
    controller::{
        settings::{get_settings, update_settings},
        user::get_user_roles,
    },
    middleware::hook::{admin_init_hook, init_hook},
    state::AppState,
};

/// Builds the application router.
///
/// Administration routes run the admin-init hook, then every route runs the per-user
/// init hook. The session layer must be applied on top by the caller.
pub fn router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/admin/settings", get(get_settings).post(update_settings))
        .route_layer(from_fn_with_state(state.clone(), admin_init_hook));

    let api = Router::new().route("/api/user/roles", get(get_user_roles));

    Router::new()
        .merge(admin)
        .merge(api)
        .layer(from_fn_with_state(state.clone(), init_hook))
        .with_state(state)
}
