use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Display;

/// The identity the backend resolved from the caller's credential.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendUser {
    pub id: String,
    pub email: Option<String>,
}

/// A user's role in an album. The backend's role set is open-ended; role
/// strings this service does not know parse to `Other` and hold no
/// privileges here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumRole {
    Owner,
    Manager,
    Member,
    Other,
}

impl AlbumRole {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "owner" => Self::Owner,
            "manager" => Self::Manager,
            "member" => Self::Member,
            _ => Self::Other,
        }
    }

    /// Only owners and managers may link an album to external storage.
    #[must_use]
    pub const fn can_connect_storage(self) -> bool {
        matches!(self, Self::Owner | Self::Manager)
    }
}

impl Display for AlbumRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Owner => "owner",
            Self::Manager => "manager",
            Self::Member => "member",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

/// The persisted drive connection, at most one row per album. Field names
/// match the backend's column names.
#[derive(Debug, Clone, Serialize)]
pub struct DriveConnection {
    pub album_id: String,
    pub provider: String,
    pub refresh_token: String,
    pub root_folder_id: Option<String>,
    pub connected_by: String,
    pub connected_at: DateTime<Utc>,
}
