use super::error::DriveConnectError;
use super::interfaces::{ConnectDriveRequest, ConnectDriveResponse};
use crate::backend::{DriveConnection, ServiceBackendClient, UserBackendClient};
use crate::google_oauth::GoogleOAuthClient;
use chrono::Utc;
use tracing::{info, instrument};

pub const GOOGLE_PROVIDER: &str = "google";

/// Links an album to a Google Drive account.
///
/// The caller must hold the owner or manager role on the album. The role
/// check runs before the token exchange: authorization codes are one-time
/// use, so an unauthorized request must never spend one.
#[instrument(skip_all, fields(album_id = %payload.album_id, user_id = %user_id))]
pub async fn connect_google_drive(
    user_backend: &UserBackendClient,
    service_backend: &ServiceBackendClient,
    google: &GoogleOAuthClient,
    user_id: &str,
    payload: ConnectDriveRequest,
) -> Result<ConnectDriveResponse, DriveConnectError> {
    if payload.album_id.is_empty()
        || payload.auth_code.is_empty()
        || payload.redirect_uri.is_empty()
    {
        return Err(DriveConnectError::MissingFields);
    }

    // Permission Check: membership is read under the caller's own
    // permissions, through the caller-scoped handle.
    let role = user_backend
        .find_album_role(&payload.album_id, user_id)
        .await?;
    match role {
        Some(role) if role.can_connect_storage() => {}
        _ => return Err(DriveConnectError::NotAllowed),
    }

    let tokens = google
        .exchange_auth_code(&payload.auth_code, &payload.redirect_uri)
        .await?;

    let Some(refresh_token) = tokens.refresh_token else {
        // Known provider behavior: a previously consented account gets no
        // refresh token unless offline access is requested again.
        return Err(DriveConnectError::NoRefreshToken);
    };

    // The write goes through the privileged handle; the upsert on album_id
    // keeps at most one connection per album.
    let connection = DriveConnection {
        album_id: payload.album_id.clone(),
        provider: GOOGLE_PROVIDER.to_owned(),
        refresh_token,
        root_folder_id: payload.root_folder_id,
        connected_by: user_id.to_owned(),
        connected_at: Utc::now(),
    };
    service_backend.upsert_drive_connection(&connection).await?;

    info!("Album {} connected to Google Drive", payload.album_id);

    Ok(ConnectDriveResponse {
        ok: true,
        provider: GOOGLE_PROVIDER.to_owned(),
        album_id: payload.album_id,
    })
}
