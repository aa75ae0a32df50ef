use crate::backend::BackendError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use color_eyre::eyre;
use serde_json::json;
use tracing::{error, warn};

pub enum AuthError {
    MissingToken,
    InvalidToken,
    IdentityCheckFailed(BackendError),
    Internal(eyre::Report),
}

// Helper function to log failures.
fn log_auth_failure(auth_error: &AuthError) {
    match auth_error {
        AuthError::MissingToken => warn!("Authentication failed: Missing Authorization token."),
        AuthError::InvalidToken => warn!("Authentication failed: Invalid token provided."),
        AuthError::IdentityCheckFailed(e) => {
            warn!("Authentication failed: identity backend error: {e}");
        }
        AuthError::Internal(e) => {
            error!("Internal server error during authentication: {:?}", e);
        }
    }
}

// Implementation to turn an AuthError into a user-facing response.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        log_auth_failure(&self);

        let (status, error_message) = match self {
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::IdentityCheckFailed(_) => (StatusCode::UNAUTHORIZED, "Unauthorized"),
            AuthError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred",
            ),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

impl From<BackendError> for AuthError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::CredentialRejected => Self::InvalidToken,
            other => Self::IdentityCheckFailed(other),
        }
    }
}

impl From<eyre::Report> for AuthError {
    fn from(err: eyre::Report) -> Self {
        Self::Internal(err)
    }
}
