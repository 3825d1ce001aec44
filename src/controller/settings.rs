use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    Form,
};
use tower_sessions::Session;

use crate::{
    data::role::RoleRepository,
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::settings::{SeatSettings, SettingsForm, SEAT_API_HOURS, SEAT_API_KEY, SEAT_API_URL},
    service::settings::SettingsService,
    state::AppState,
    util::html::escape_html,
};

pub const SETTINGS_PATH: &str = "/admin/settings";

/// GET /admin/settings - Render the SeAT connection settings form
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `200 OK`: HTML form prefilled with the stored settings, followed by the host roles
/// - `401 Unauthorized`: No user in session
/// - `403 Forbidden`: User is not an admin
pub async fn get_settings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let settings = SettingsService::new(&state.db).load().await?;
    let roles = RoleRepository::new(&state.db).get_all().await?;

    Ok(Html(render_settings_page(&settings, &roles)))
}

/// POST /admin/settings - Persist the SeAT connection settings
///
/// # Authentication
/// Requires admin permission
///
/// # Returns
/// - `303 See Other`: Back to the settings form
/// - `400 Bad Request`: Invalid API URL or cache hours
/// - `401 Unauthorized` / `403 Forbidden`: Not an admin
pub async fn update_settings(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SettingsForm>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    SettingsService::new(&state.db).save(form).await?;

    Ok(Redirect::to(SETTINGS_PATH))
}

pub fn render_settings_page(settings: &SeatSettings, roles: &[entity::role::Model]) -> String {
    let role_rows: String = roles
        .iter()
        .map(|role| {
            format!(
                "<tr><td>{}</td><td><code>{}</code></td></tr>\n",
                escape_html(&role.title),
                escape_html(&role.slug)
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Sync SeAT Roles</title></head>
<body>
<h1>Sync SeAT Roles</h1>
<form method="post" action="{action}">
<table>
<tr>
<th><label for="{url_key}">SeAT API URL</label></th>
<td><input type="url" id="{url_key}" name="{url_key}" value="{url}" placeholder="https://seat.example.com/api/v2"></td>
</tr>
<tr>
<th><label for="{key_key}">SeAT API Key</label></th>
<td><input type="text" id="{key_key}" name="{key_key}" value="{key}"></td>
</tr>
<tr>
<th><label for="{hours_key}">Cache Hours</label></th>
<td><input type="number" min="0" id="{hours_key}" name="{hours_key}" value="{hours}"></td>
</tr>
</table>
<button type="submit">Save Changes</button>
</form>
<h2>Roles</h2>
<table>
<tr><th>Title</th><th>Slug</th></tr>
{role_rows}</table>
</body>
</html>
"#,
        action = SETTINGS_PATH,
        url_key = SEAT_API_URL,
        key_key = SEAT_API_KEY,
        hours_key = SEAT_API_HOURS,
        url = escape_html(&settings.api_url),
        key = escape_html(&settings.api_key),
        hours = settings.cache_hours,
        role_rows = role_rows,
    )
}
