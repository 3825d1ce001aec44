use super::*;
use crate::{data::role::RoleRepository, service::role_catalog::RoleCatalogService};

/// Tests mapping the SeAT role list to a catalog.
///
/// Expected: titles keyed by ID, malformed entries skipped
#[tokio::test]
async fn maps_roles_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seat = MockSeat::start().await;
    seat.set_roles_body(
        json!([
            {"id": 1, "title": "Fleet Commander"},
            {"id": 2, "title": "Recruit"},
            {"id": 3},
            "junk"
        ])
        .to_string(),
    );

    let settings = settings_for(&seat);
    let http = reqwest::Client::new();
    let cache = TransientCache::seat(db);
    let api = SeatApiClient::new(&http, &settings, &cache);
    let host = SqlHost::new(db, None);

    let catalog = RoleCatalogService::new(&api, &host)
        .get_seat_roles()
        .await
        .unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get(&1).map(String::as_str), Some("Fleet Commander"));
    assert_eq!(catalog.get(&2).map(String::as_str), Some("Recruit"));

    Ok(())
}

/// Tests that zero roles and no roles are distinguished.
///
/// Expected: empty list yields an empty catalog, an error object yields None
#[tokio::test]
async fn distinguishes_empty_from_unavailable() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seat = MockSeat::start().await;

    let settings = settings_for(&seat);
    let http = reqwest::Client::new();
    let cache = TransientCache::seat(db);
    let api = SeatApiClient::new(&http, &settings, &cache);
    let host = SqlHost::new(db, None);
    let service = RoleCatalogService::new(&api, &host);

    let empty = service.get_seat_roles().await;
    assert_eq!(empty.map(|c| c.len()), Some(0));

    entity::prelude::Transient::delete_many().exec(db).await?;
    seat.set_roles_body(json!({"message": "Unauthenticated."}).to_string());

    assert!(service.get_seat_roles().await.is_none());

    Ok(())
}

/// Tests that registering the catalog twice creates each host role once.
#[tokio::test]
async fn registers_roles_idempotently() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seat = MockSeat::start().await;
    seat.set_roles(&[(1, "Fleet Commander"), (2, "Recruit")]);

    let settings = settings_for(&seat);
    let http = reqwest::Client::new();
    let cache = TransientCache::seat(db);
    let api = SeatApiClient::new(&http, &settings, &cache);
    let host = SqlHost::new(db, None);
    let service = RoleCatalogService::new(&api, &host);

    assert_eq!(service.register_seat_roles().await?, Some(2));
    assert_eq!(service.register_seat_roles().await?, Some(0));

    let roles = RoleRepository::new(db).get_all().await?;
    let registered: Vec<_> = roles
        .iter()
        .map(|r| (r.slug.as_str(), r.title.as_str()))
        .collect();
    assert_eq!(
        registered,
        vec![
            ("fleet-commander", "Fleet Commander"),
            ("recruit", "Recruit")
        ]
    );

    Ok(())
}

/// Tests that titles without a usable slug are not registered.
#[tokio::test]
async fn skips_roles_without_slug() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seat = MockSeat::start().await;
    seat.set_roles(&[(1, "★★★"), (2, "Recruit")]);

    let settings = settings_for(&seat);
    let http = reqwest::Client::new();
    let cache = TransientCache::seat(db);
    let api = SeatApiClient::new(&http, &settings, &cache);
    let host = SqlHost::new(db, None);

    let created = RoleCatalogService::new(&api, &host)
        .register_seat_roles()
        .await?;

    assert_eq!(created, Some(1));
    assert_eq!(entity::prelude::Role::find().count(db).await?, 1);

    Ok(())
}

/// Tests that nothing is registered when SeAT is not configured.
#[tokio::test]
async fn registers_nothing_when_unavailable() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = SeatSettings::default();
    let http = reqwest::Client::new();
    let cache = TransientCache::seat(db);
    let api = SeatApiClient::new(&http, &settings, &cache);
    let host = SqlHost::new(db, None);

    let created = RoleCatalogService::new(&api, &host)
        .register_seat_roles()
        .await?;

    assert_eq!(created, None);
    assert_eq!(entity::prelude::Role::find().count(db).await?, 0);

    Ok(())
}
