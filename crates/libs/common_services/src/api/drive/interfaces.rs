use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Request Payloads ---

/// Request to link an album to a Google Drive account.
///
/// `authCode` is the one-time OAuth authorization code obtained by the
/// client; `redirectUri` must be the exact URI used to obtain it.
#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConnectDriveRequest {
    #[serde(default)]
    pub album_id: String,
    #[serde(default)]
    pub auth_code: String,
    #[serde(default)]
    pub redirect_uri: String,
    /// Optional pre-created Drive folder to use as the sync root.
    #[serde(default)]
    pub root_folder_id: Option<String>,
}

// --- Response Payloads ---

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConnectDriveResponse {
    pub ok: bool,
    pub provider: String,
    pub album_id: String,
}
