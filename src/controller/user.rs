use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    data::user_role::UserRoleRepository, error::AppError, middleware::auth::AuthGuard,
    model::api::UserRolesDto, state::AppState,
};

/// GET /api/user/roles - Get the host roles held by the current user
///
/// The init hook runs before this handler, so the result reflects the roles just
/// reconciled with SeAT.
///
/// # Authentication
/// Requires user to be logged in (no admin permission required)
///
/// # Returns
/// - `200 OK`: JSON `UserRolesDto` with the role slugs sorted
/// - `401 Unauthorized`: No user in session
pub async fn get_user_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let roles = UserRoleRepository::new(&state.db)
        .get_slugs_by_user(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UserRolesDto {
            user_id: user.id,
            roles,
        }),
    ))
}
