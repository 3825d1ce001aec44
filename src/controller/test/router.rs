use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::json;
use std::collections::HashMap;
use tower::ServiceExt;
use tower_sessions::{
    session::{Id, Record},
    MemoryStore, SessionManagerLayer, SessionStore,
};

use super::*;
use crate::{
    data::role::RoleRepository,
    middleware::session::SESSION_AUTH_USER_ID,
    model::{api::UserRolesDto, settings::SettingsForm},
    router::router,
    service::settings::SettingsService,
};

const CHARACTER_ID: u64 = 654321;

fn app(state: AppState, store: MemoryStore) -> Router {
    router(state).layer(SessionManagerLayer::new(store).with_secure(false))
}

/// Stores a logged-in session for the user and returns its cookie header.
async fn login(store: &MemoryStore, user_id: i32) -> String {
    let mut record = Record {
        id: Id::default(),
        data: HashMap::from([(SESSION_AUTH_USER_ID.to_string(), json!(user_id))]),
        expiry_date: time::OffsetDateTime::now_utc() + time::Duration::days(1),
    };
    store.create(&mut record).await.unwrap();

    format!("id={}", record.id)
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

async fn configure_seat(db: &sea_orm::DatabaseConnection, seat: &MockSeat) -> Result<(), AppError> {
    SettingsService::new(db)
        .save(SettingsForm {
            seat_api_url: seat.base_url().to_string(),
            seat_api_key: "seat-token".to_string(),
            seat_api_hours: "1".to_string(),
        })
        .await?;

    Ok(())
}

/// Tests that anonymous requests are rejected and never reach SeAT.
#[tokio::test]
async fn anonymous_requests_skip_hooks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seat = MockSeat::start().await;
    configure_seat(db, &seat).await?;

    let app = app(
        AppState::new(db.clone(), reqwest::Client::new()),
        MemoryStore::default(),
    );

    let response = app
        .clone()
        .oneshot(get("/api/user/roles", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app.oneshot(get("/admin/settings", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    assert_eq!(seat.request_count(), 0);

    Ok(())
}

/// Tests that a logged-in request reconciles the user's roles before the handler runs.
#[tokio::test]
async fn user_request_syncs_roles() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seat = MockSeat::start().await;
    seat.set_roles(&[(1, "Fleet Commander"), (2, "Recruit")]);
    seat.set_role_check(CHARACTER_ID, "Fleet Commander", json!(true));
    configure_seat(db, &seat).await?;

    let user = factory::create_user(db).await?;
    factory::create_character_image(db, user.id, CHARACTER_ID).await?;

    let store = MemoryStore::default();
    let cookie = login(&store, user.id).await;
    let app = app(AppState::new(db.clone(), reqwest::Client::new()), store);

    let response = app
        .oneshot(get("/api/user/roles", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let dto: UserRolesDto = serde_json::from_str(&body_text(response).await)?;
    assert_eq!(dto.roles, vec!["fleet-commander".to_string()]);
    assert_eq!(seat.last_token().as_deref(), Some("seat-token"));

    Ok(())
}

/// Tests that opening the admin pages registers the SeAT role catalog.
#[tokio::test]
async fn admin_request_registers_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seat = MockSeat::start().await;
    seat.set_roles(&[(1, "Fleet Commander"), (2, "Recruit")]);
    configure_seat(db, &seat).await?;

    let admin = factory::create_admin(db).await?;

    let store = MemoryStore::default();
    let cookie = login(&store, admin.id).await;
    let app = app(AppState::new(db.clone(), reqwest::Client::new()), store);

    let response = app
        .oneshot(get("/admin/settings", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<td>Fleet Commander</td><td><code>fleet-commander</code></td>"));

    let slugs: Vec<String> = RoleRepository::new(db)
        .get_all()
        .await?
        .into_iter()
        .map(|role| role.slug)
        .collect();
    assert_eq!(
        slugs,
        vec!["fleet-commander".to_string(), "recruit".to_string()]
    );

    Ok(())
}

/// Tests that a regular user on the admin pages does not trigger catalog registration.
#[tokio::test]
async fn regular_user_does_not_register_catalog() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seat = MockSeat::start().await;
    seat.set_roles(&[(1, "Fleet Commander")]);
    configure_seat(db, &seat).await?;

    let user = factory::create_user(db).await?;

    let store = MemoryStore::default();
    let cookie = login(&store, user.id).await;
    let app = app(AppState::new(db.clone(), reqwest::Client::new()), store);

    let response = app
        .oneshot(get("/admin/settings", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(RoleRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
