use crate::api_state::ApiContext;
use crate::routes::drive::handlers::connect_drive_handler;
use axum::{Router, routing::post};

pub fn drive_router() -> Router<ApiContext> {
    Router::new().route("/", post(connect_drive_handler))
}
