use crate::api_state::ApiContext;
use crate::auth::middlewares::user::ApiUser;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use common_services::api::drive::error::DriveConnectError;
use common_services::api::drive::interfaces::{ConnectDriveRequest, ConnectDriveResponse};
use common_services::api::drive::service::connect_google_drive;

/// Connect an album to a Google Drive account.
///
/// Exchanges the supplied OAuth authorization code for tokens and stores
/// the refresh token as the album's drive connection. The caller must be
/// an owner or manager of the album.
#[utoipa::path(
    post,
    path = "/",
    tag = "Drive",
    request_body = ConnectDriveRequest,
    responses(
        (status = 200, description = "Album connected successfully.", body = ConnectDriveResponse),
        (status = 400, description = "Missing fields, rejected token exchange, or no refresh token returned."),
        (status = 401, description = "Missing or invalid credential."),
        (status = 403, description = "Caller is not an owner or manager of the album."),
        (status = 500, description = "A backend or internal error occurred."),
    ),
    security(("bearer_auth" = []))
)]
pub async fn connect_drive_handler(
    State(context): State<ApiContext>,
    ApiUser(user): ApiUser,
    payload: Result<Json<ConnectDriveRequest>, JsonRejection>,
) -> Result<Json<ConnectDriveResponse>, DriveConnectError> {
    let Json(payload) =
        payload.map_err(|rejection| DriveConnectError::InvalidBody(rejection.body_text()))?;

    // Membership reads run as the caller; the connection write runs with
    // the service credential.
    let user_backend = context.backend.for_user(&user.access_token);
    let service_backend = context.backend.service();

    let response = connect_google_drive(
        &user_backend,
        &service_backend,
        &context.google,
        &user.id,
        payload,
    )
    .await?;

    Ok(Json(response))
}
