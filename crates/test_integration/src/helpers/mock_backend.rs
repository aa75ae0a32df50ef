use axum::Json;
use axum::Router;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// In-process stand-in for the hosted data backend. Records every call so
/// tests can assert which downstream requests were (not) made.
#[derive(Clone, Default)]
pub struct MockBackend {
    /// access token -> user id
    pub users: Arc<Mutex<HashMap<String, String>>>,
    /// (album id, user id) -> role
    pub memberships: Arc<Mutex<HashMap<(String, String), String>>>,
    pub fail_membership_lookup: Arc<AtomicBool>,
    /// album id -> upserted row
    pub connections: Arc<Mutex<HashMap<String, Value>>>,
    pub identity_calls: Arc<AtomicUsize>,
    pub membership_calls: Arc<AtomicUsize>,
    pub upsert_calls: Arc<AtomicUsize>,
}

impl MockBackend {
    pub fn router(&self) -> Router {
        Router::new()
            .route("/auth/v1/user", get(get_user))
            .route("/rest/v1/album_members", get(list_album_members))
            .route(
                "/rest/v1/album_drive_connection",
                post(upsert_drive_connection),
            )
            .with_state(self.clone())
    }

    pub fn add_user(&self, access_token: &str, user_id: &str) {
        self.users
            .lock()
            .unwrap()
            .insert(access_token.to_owned(), user_id.to_owned());
    }

    pub fn add_membership(&self, album_id: &str, user_id: &str, role: &str) {
        self.memberships
            .lock()
            .unwrap()
            .insert((album_id.to_owned(), user_id.to_owned()), role.to_owned());
    }

    pub fn connection(&self, album_id: &str) -> Option<Value> {
        self.connections.lock().unwrap().get(album_id).cloned()
    }

    pub fn connection_count(&self) -> usize {
        self.connections.lock().unwrap().len()
    }
}

async fn get_user(State(state): State<MockBackend>, headers: HeaderMap) -> Response {
    state.identity_calls.fetch_add(1, Ordering::SeqCst);

    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    let user_id = token.and_then(|token| state.users.lock().unwrap().get(token).cloned());

    match user_id {
        Some(id) => Json(json!({ "id": id, "email": "owner@example.com" })).into_response(),
        None => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "invalid JWT" })),
        )
            .into_response(),
    }
}

async fn list_album_members(
    State(state): State<MockBackend>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    state.membership_calls.fetch_add(1, Ordering::SeqCst);

    if state.fail_membership_lookup.load(Ordering::SeqCst) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "membership lookup failed" })),
        )
            .into_response();
    }

    let album_id = filter_value(&params, "album_id");
    let user_id = filter_value(&params, "user_id");
    let role = match (album_id, user_id) {
        (Some(album_id), Some(user_id)) => state
            .memberships
            .lock()
            .unwrap()
            .get(&(album_id, user_id))
            .cloned(),
        _ => None,
    };

    let rows: Vec<Value> = role.map(|role| json!({ "role": role })).into_iter().collect();
    Json(rows).into_response()
}

// PostgREST filter values look like "eq.alb_1".
fn filter_value(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(|value| value.strip_prefix("eq."))
        .map(ToOwned::to_owned)
}

async fn upsert_drive_connection(
    State(state): State<MockBackend>,
    Json(row): Json<Value>,
) -> Response {
    state.upsert_calls.fetch_add(1, Ordering::SeqCst);

    let Some(album_id) = row.get("album_id").and_then(Value::as_str) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "album_id is required" })),
        )
            .into_response();
    };

    state
        .connections
        .lock()
        .unwrap()
        .insert(album_id.to_owned(), row.clone());
    (StatusCode::CREATED, Json(json!([]))).into_response()
}
