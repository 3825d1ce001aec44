//! Mock SeAT API server for exercising the HTTP client against a real socket.
//!
//! The server binds to an ephemeral localhost port and serves the two endpoints the role
//! sync consumes under the `/api/v2` prefix. Every request is counted so tests can assert
//! how many calls reached the network.
//!
//! ```rust,ignore
//! let seat = MockSeat::start().await;
//! seat.set_roles(&[(1, "Fleet Commander"), (2, "Recruit")]);
//! seat.set_role_check(654321, "Fleet Commander", serde_json::json!(true));
//!
//! // point the client at seat.base_url()
//! assert_eq!(seat.request_count(), 0);
//! ```

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

/// Shared state between the mock server task and the test.
#[derive(Clone, Default)]
struct MockSeatState {
    /// Raw body returned by `GET /roles`.
    roles_body: Arc<Mutex<String>>,
    /// Role-check answers keyed by `(character_id, role title)`.
    checks: Arc<Mutex<HashMap<(u64, String), Value>>>,
    /// `X-Token` header of the last request.
    last_token: Arc<Mutex<Option<String>>>,
    requests: Arc<AtomicUsize>,
    role_checks: Arc<AtomicUsize>,
}

/// Handle to a running mock SeAT server.
pub struct MockSeat {
    base_url: String,
    state: MockSeatState,
}

impl MockSeat {
    /// Starts the server on `127.0.0.1` with an ephemeral port.
    ///
    /// The server starts with an empty role catalog (`[]`) and answers every role check
    /// with `false` until configured otherwise.
    ///
    /// # Panics
    /// Panics if the listener cannot be bound, which only happens in a broken test
    /// environment.
    pub async fn start() -> Self {
        let state = MockSeatState::default();
        if let Ok(mut body) = state.roles_body.lock() {
            *body = "[]".to_string();
        }

        let routes = Router::new()
            .route("/roles", get(roles))
            .route(
                "/roles/query/role-check/{character_id}/{role}",
                get(role_check),
            );
        let app = Router::new()
            .nest("/api/v2", routes)
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock SeAT listener");
        let addr = listener.local_addr().expect("mock SeAT local address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            base_url: format!("http://{}/api/v2", addr),
            state,
        }
    }

    /// Base URL to configure as `seat_api_url`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replaces the role catalog returned by `GET /roles`.
    pub fn set_roles(&self, roles: &[(i64, &str)]) {
        let body: Vec<Value> = roles
            .iter()
            .map(|(id, title)| json!({ "id": id, "title": title }))
            .collect();
        self.set_roles_body(Value::Array(body).to_string());
    }

    /// Replaces the raw body returned by `GET /roles`, which need not be valid JSON.
    pub fn set_roles_body(&self, body: impl Into<String>) {
        if let Ok(mut roles_body) = self.state.roles_body.lock() {
            *roles_body = body.into();
        }
    }

    /// Sets the answer of the role check for a character and role title.
    pub fn set_role_check(&self, character_id: u64, role: &str, answer: Value) {
        if let Ok(mut checks) = self.state.checks.lock() {
            checks.insert((character_id, role.to_string()), answer);
        }
    }

    /// Total number of requests served.
    pub fn request_count(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Number of role-check requests served.
    pub fn role_check_count(&self) -> usize {
        self.state.role_checks.load(Ordering::SeqCst)
    }

    /// `X-Token` header sent with the most recent request.
    pub fn last_token(&self) -> Option<String> {
        self.state.last_token.lock().ok().and_then(|t| t.clone())
    }
}

fn record(state: &MockSeatState, headers: &HeaderMap) {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let token = headers
        .get("x-token")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    if let Ok(mut last) = state.last_token.lock() {
        *last = token;
    }
}

async fn roles(State(state): State<MockSeatState>, headers: HeaderMap) -> Response {
    record(&state, &headers);

    let body = state
        .roles_body
        .lock()
        .map(|b| b.clone())
        .unwrap_or_default();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

async fn role_check(
    State(state): State<MockSeatState>,
    Path((character_id, role)): Path<(u64, String)>,
    headers: HeaderMap,
) -> Response {
    record(&state, &headers);
    state.role_checks.fetch_add(1, Ordering::SeqCst);

    let answer = state
        .checks
        .lock()
        .ok()
        .and_then(|checks| checks.get(&(character_id, role)).cloned())
        .unwrap_or(Value::Bool(false));

    (StatusCode::OK, Json(answer)).into_response()
}
