use axum::Json;
use axum::http::StatusCode;
use serde_json::{Value, json};

#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    responses(
        (status = 200, description = "API is healthy and ready to accept traffic", body = String)
    )
)]
pub async fn health_check() -> &'static str {
    "OK"
}

/// JSON body for requests that hit a known path with the wrong method.
pub async fn method_not_allowed() -> (StatusCode, Json<Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
}
