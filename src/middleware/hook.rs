//! Middleware firing the role sync lifecycle hooks.
//!
//! `init_hook` wraps every route and reconciles the logged-in user's roles before the
//! handler runs. `admin_init_hook` wraps the administration routes and mirrors the SeAT
//! role catalog when an admin makes the request. Neither ever fails the request.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;

use crate::{
    hook,
    middleware::{
        auth::{AuthGuard, Permission},
        session::AuthSession,
    },
    state::AppState,
};

pub async fn init_hook(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    match AuthSession::new(&session).get_user_id().await {
        Ok(Some(user_id)) => hook::init(&state, Some(user_id)).await,
        Ok(None) => {}
        Err(e) => tracing::warn!("Failed to read session for role sync: {}", e),
    }

    next.run(request).await
}

pub async fn admin_init_hook(
    State(state): State<AppState>,
    session: Session,
    request: Request,
    next: Next,
) -> Response {
    match AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await
    {
        Ok(user) => hook::admin_init(&state, user.id).await,
        Err(e) => tracing::debug!("Skipping SeAT role registration: {}", e),
    }

    next.run(request).await
}
