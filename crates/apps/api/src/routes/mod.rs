mod api_doc;
pub mod auth;
pub mod drive;
pub mod root;

use crate::api_state::ApiContext;
use crate::drive::router::drive_router;
use crate::root::handlers::method_not_allowed;
use crate::root::router::root_public_router;
use crate::routes::api_doc::ApiDoc;
use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// --- Router Construction ---
//
// The connect operation owns POST /; any other method on a known path gets
// the JSON 405 from the fallback, before authentication runs.
pub fn create_router(api_state: ApiContext) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .merge(root_public_router())
        .merge(drive_router())
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(api_state)
}
