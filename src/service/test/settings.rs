use super::*;
use crate::{
    data::site_option::SiteOptionRepository,
    model::settings::{SettingsForm, DEFAULT_CACHE_HOURS, MAX_CACHE_HOURS, SEAT_API_HOURS},
    service::settings::SettingsService,
};

fn form(url: &str, key: &str, hours: &str) -> SettingsForm {
    SettingsForm {
        seat_api_url: url.to_string(),
        seat_api_key: key.to_string(),
        seat_api_hours: hours.to_string(),
    }
}

/// Tests loading settings that were never saved.
///
/// Expected: unconfigured with the default cache lifetime
#[tokio::test]
async fn loads_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = SettingsService::new(db).load().await?;

    assert_eq!(settings, SeatSettings::default());
    assert!(!settings.is_configured());
    assert_eq!(settings.cache_hours, DEFAULT_CACHE_HOURS);

    Ok(())
}

/// Tests saving and reloading a settings form.
#[tokio::test]
async fn saves_and_loads_settings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingsService::new(db);
    let saved = service
        .save(form(" https://seat.example/api/v2/ ", " token ", "6"))
        .await?;
    let loaded = service.load().await?;

    assert_eq!(saved, loaded);
    assert_eq!(loaded.api_url, "https://seat.example/api/v2");
    assert_eq!(loaded.api_key, "token");
    assert_eq!(loaded.cache_hours, 6);
    assert!(loaded.is_configured());

    Ok(())
}

/// Tests blank and zero cache lifetimes.
///
/// Expected: blank stores the default, zero disables expiry
#[tokio::test]
async fn handles_blank_and_zero_hours() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingsService::new(db);

    let blank = service.save(form("", "", "")).await?;
    assert_eq!(blank.cache_hours, DEFAULT_CACHE_HOURS);

    let forever = service.save(form("", "", "0")).await?;
    assert_eq!(forever.cache_hours, 0);
    assert!(forever.cache_ttl().is_none());

    Ok(())
}

/// Tests rejection of invalid submissions.
///
/// Expected: BadRequest and nothing stored
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingsService::new(db);

    for invalid in [
        form("not a url", "token", "1"),
        form("ftp://seat.example", "token", "1"),
        form("https://seat.example", "token", "soon"),
        form("https://seat.example", "token", "-1"),
        form("https://seat.example", "token", "4000000000"),
    ] {
        let result = service.save(invalid).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    assert_eq!(entity::prelude::SiteOption::find().count(db).await?, 0);

    Ok(())
}

/// Tests the upper bound of the cache lifetime.
#[tokio::test]
async fn accepts_maximum_hours() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = SettingsService::new(db);

    let saved = service
        .save(form("", "", &MAX_CACHE_HOURS.to_string()))
        .await?;
    assert_eq!(saved.cache_hours, MAX_CACHE_HOURS);

    let result = service
        .save(form("", "", &(MAX_CACHE_HOURS + 1).to_string()))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a corrupted stored hours value falls back to the default.
#[tokio::test]
async fn ignores_unparseable_stored_hours() -> Result<(), AppError> {
    let test = TestBuilder::new().with_host_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SiteOptionRepository::new(db)
        .set(SEAT_API_HOURS, "twelve")
        .await?;

    let settings = SettingsService::new(db).load().await?;

    assert_eq!(settings.cache_hours, DEFAULT_CACHE_HOURS);

    Ok(())
}
