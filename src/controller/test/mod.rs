use axum::{
    body::to_bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use test_utils::{builder::TestBuilder, factory, seat::MockSeat};

use crate::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    state::AppState,
};

mod router;

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
