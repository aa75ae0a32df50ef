use crate::backend::BackendError;
use crate::google_oauth::GoogleOAuthError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum DriveConnectError {
    #[error("albumId/authCode/redirectUri required")]
    MissingFields,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Token exchange rejected by the provider")]
    TokenExchangeFailed(serde_json::Value),

    #[error("Token exchange returned no refresh token")]
    NoRefreshToken,

    #[error("Not allowed")]
    NotAllowed,

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("internal error")]
    Internal(#[from] eyre::Report),
}

fn log_error(drive_error: &DriveConnectError) {
    match drive_error {
        DriveConnectError::MissingFields => {
            warn!("Drive connect -> request is missing required fields");
        }
        DriveConnectError::InvalidBody(message) => {
            warn!("Drive connect -> invalid request body: {message}");
        }
        DriveConnectError::TokenExchangeFailed(detail) => {
            warn!("Drive connect -> provider rejected the token exchange: {detail}");
        }
        DriveConnectError::NoRefreshToken => {
            warn!("Drive connect -> exchange succeeded without a refresh token");
        }
        DriveConnectError::NotAllowed => {
            warn!("Drive connect -> caller lacks the owner/manager role");
        }
        DriveConnectError::Backend(e) => {
            warn!("Drive connect -> backend error: {e}");
        }
        DriveConnectError::Internal(e) => {
            error!("Drive connect -> internal error: {:?}", e);
        }
    }
}

impl IntoResponse for DriveConnectError {
    fn into_response(self) -> Response {
        log_error(&self);

        let (status, body) = match self {
            Self::MissingFields => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "albumId/authCode/redirectUri required" }),
            ),
            Self::InvalidBody(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("invalid request body: {message}") }),
            ),
            Self::TokenExchangeFailed(detail) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "google_token_exchange_failed", "detail": detail }),
            ),
            Self::NoRefreshToken => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "no_refresh_token",
                    "hint": "Need access_type=offline and prompt=consent to get refresh_token",
                }),
            ),
            Self::NotAllowed => (StatusCode::FORBIDDEN, json!({ "error": "Not allowed" })),
            Self::Backend(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": e.to_string() }),
            ),
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "An unexpected internal error occurred." }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<GoogleOAuthError> for DriveConnectError {
    fn from(err: GoogleOAuthError) -> Self {
        match err {
            GoogleOAuthError::ExchangeRejected(detail) => Self::TokenExchangeFailed(detail),
            other => Self::Internal(eyre::Report::new(other)),
        }
    }
}
