use super::error::GoogleOAuthError;
use super::interfaces::TokenResponse;
use app_state::{GoogleOAuthSettings, SecretSettings};
use reqwest::Client;
use url::Url;

#[derive(Clone)]
pub struct GoogleOAuthClient {
    http: Client,
    token_url: Url,
    client_id: String,
    client_secret: String,
}

impl GoogleOAuthClient {
    pub fn new(
        http: Client,
        google: &GoogleOAuthSettings,
        secrets: &SecretSettings,
    ) -> Result<Self, GoogleOAuthError> {
        Ok(Self {
            http,
            token_url: google.token_url.parse()?,
            client_id: secrets.google_client_id.clone(),
            client_secret: secrets.google_client_secret.clone(),
        })
    }

    /// Exchanges a one-time authorization code for an access/refresh token
    /// pair. `redirect_uri` must be the exact URI the client used when
    /// obtaining the code.
    pub async fn exchange_auth_code(
        &self,
        auth_code: &str,
        redirect_uri: &str,
    ) -> Result<TokenResponse, GoogleOAuthError> {
        let params = [
            ("code", auth_code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", redirect_uri),
            ("grant_type", "authorization_code"),
        ];

        let response = self
            .http
            .post(self.token_url.clone())
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail =
                serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
            return Err(GoogleOAuthError::ExchangeRejected(detail));
        }

        let tokens: TokenResponse = response.json().await?;
        Ok(tokens)
    }
}
