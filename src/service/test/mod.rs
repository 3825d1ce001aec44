use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory, seat::MockSeat};

use crate::{
    error::AppError,
    host::{cache::TransientCache, sql::SqlHost},
    model::{request::RequestOptions, settings::SeatSettings},
    service::seat::SeatApiClient,
};

mod role_catalog;
mod settings;

const API_KEY: &str = "seat-token";

/// Settings pointing at the mock server with a one hour cache.
fn settings_for(seat: &MockSeat) -> SeatSettings {
    SeatSettings::new(seat.base_url(), API_KEY, 1)
}
