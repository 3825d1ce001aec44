//! SeAT connection settings persisted in the option table.

use sea_orm::DatabaseConnection;
use url::Url;

use crate::{
    data::site_option::SiteOptionRepository,
    error::AppError,
    model::settings::{
        SeatSettings, SettingsForm, MAX_CACHE_HOURS, SEAT_API_HOURS, SEAT_API_KEY, SEAT_API_URL,
    },
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the current settings, defaulting unset values.
    pub async fn load(&self) -> Result<SeatSettings, AppError> {
        let repo = SiteOptionRepository::new(self.db);

        let api_url = repo.get(SEAT_API_URL).await?.unwrap_or_default();
        let api_key = repo.get(SEAT_API_KEY).await?.unwrap_or_default();
        let cache_hours = SeatSettings::parse_hours(repo.get(SEAT_API_HOURS).await?.as_deref());

        Ok(SeatSettings::new(api_url, api_key, cache_hours))
    }

    /// Validates and stores a settings form submission.
    ///
    /// The URL must be absolute `http`/`https`; a trailing slash is dropped because
    /// endpoint paths start with one. A blank hours field stores the default.
    ///
    /// # Returns
    /// - `Ok(SeatSettings)` - Settings as stored
    /// - `Err(AppError::BadRequest)` - Invalid URL or hours value
    /// - `Err(AppError::DbErr)` - Failed to persist an option
    pub async fn save(&self, form: SettingsForm) -> Result<SeatSettings, AppError> {
        let api_url = normalize_api_url(&form.seat_api_url)?;
        let api_key = form.seat_api_key.trim().to_string();
        let cache_hours = parse_form_hours(&form.seat_api_hours)?;

        let repo = SiteOptionRepository::new(self.db);
        repo.set(SEAT_API_URL, &api_url).await?;
        repo.set(SEAT_API_KEY, &api_key).await?;
        repo.set(SEAT_API_HOURS, &cache_hours.to_string()).await?;

        tracing::info!("Updated SeAT API settings");

        Ok(SeatSettings::new(api_url, api_key, cache_hours))
    }
}

fn normalize_api_url(value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(String::new());
    }

    let url = Url::parse(value)
        .map_err(|e| AppError::BadRequest(format!("Invalid SeAT API URL: {}", e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::BadRequest(
            "SeAT API URL must use http or https".to_string(),
        ));
    }

    Ok(value.trim_end_matches('/').to_string())
}

fn parse_form_hours(value: &str) -> Result<u32, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(SeatSettings::parse_hours(None));
    }

    let hours = value.parse::<u32>().map_err(|_| {
        AppError::BadRequest("Cache expiry must be a whole number of hours".to_string())
    })?;
    if hours > MAX_CACHE_HOURS {
        return Err(AppError::BadRequest(format!(
            "Cache expiry must be at most {} hours",
            MAX_CACHE_HOURS
        )));
    }

    Ok(hours)
}
