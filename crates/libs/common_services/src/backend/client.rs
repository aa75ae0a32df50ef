use super::error::BackendError;
use super::interfaces::{AlbumRole, BackendUser, DriveConnection};
use app_state::{BackendSettings, SecretSettings};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

/// Built once at startup; hands out the two capability-scoped handles used
/// per request. Performs no requests itself.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: Url,
    anon_key: String,
    service_role_key: String,
}

impl BackendClient {
    pub fn new(
        http: Client,
        backend: &BackendSettings,
        secrets: &SecretSettings,
    ) -> Result<Self, BackendError> {
        Ok(Self {
            http,
            base_url: backend.url.parse()?,
            anon_key: secrets.backend_anon_key.clone(),
            service_role_key: secrets.backend_service_role_key.clone(),
        })
    }

    /// A handle that acts with the caller's own permissions.
    #[must_use]
    pub fn for_user(&self, access_token: &str) -> UserBackendClient {
        UserBackendClient {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            anon_key: self.anon_key.clone(),
            access_token: access_token.to_owned(),
        }
    }

    /// A handle that acts with the privileged service credential.
    #[must_use]
    pub fn service(&self) -> ServiceBackendClient {
        ServiceBackendClient {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            service_role_key: self.service_role_key.clone(),
        }
    }
}

/// Backend handle scoped to a single caller. Identity resolution and the
/// membership read both run under the caller's bearer token, so the backend
/// applies the caller's own row-level permissions.
#[derive(Clone)]
pub struct UserBackendClient {
    http: Client,
    base_url: Url,
    anon_key: String,
    access_token: String,
}

impl UserBackendClient {
    /// Resolves the caller's credential to a user identity.
    pub async fn current_user(&self) -> Result<BackendUser, BackendError> {
        let mut url = self.base_url.clone();
        url.set_path("/auth/v1/user");

        let response = self
            .http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED
            || response.status() == StatusCode::FORBIDDEN
        {
            return Err(BackendError::CredentialRejected);
        }
        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BackendError::RemoteServerError(error_text));
        }

        let user: BackendUser = response.json().await?;
        Ok(user)
    }

    /// Gets the caller's role for a specific album, if any.
    pub async fn find_album_role(
        &self,
        album_id: &str,
        user_id: &str,
    ) -> Result<Option<AlbumRole>, BackendError> {
        let mut url = self.base_url.clone();
        url.set_path("/rest/v1/album_members");

        let response = self
            .http
            .get(url)
            .query(&[
                ("select", "role".to_owned()),
                ("album_id", format!("eq.{album_id}")),
                ("user_id", format!("eq.{user_id}")),
            ])
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BackendError::RemoteServerError(error_text));
        }

        let rows: Vec<MembershipRow> = response.json().await?;
        Ok(rows.into_iter().next().map(|row| AlbumRole::parse(&row.role)))
    }
}

#[derive(Deserialize)]
struct MembershipRow {
    role: String,
}

/// Backend handle holding the service credential. Only administrative
/// writes go through it.
#[derive(Clone)]
pub struct ServiceBackendClient {
    http: Client,
    base_url: Url,
    service_role_key: String,
}

impl ServiceBackendClient {
    /// Inserts the album's drive connection, or replaces it if one exists.
    pub async fn upsert_drive_connection(
        &self,
        connection: &DriveConnection,
    ) -> Result<(), BackendError> {
        let mut url = self.base_url.clone();
        url.set_path("/rest/v1/album_drive_connection");
        url.set_query(Some("on_conflict=album_id"));

        let response = self
            .http
            .post(url)
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .header("Prefer", "resolution=merge-duplicates")
            .json(connection)
            .send()
            .await?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(BackendError::RemoteServerError(error_text));
        }

        Ok(())
    }
}
