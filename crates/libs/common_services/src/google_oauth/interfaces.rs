use serde::Deserialize;

/// Token endpoint response. Google only includes `refresh_token` when the
/// user granted offline access on this consent.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
}
