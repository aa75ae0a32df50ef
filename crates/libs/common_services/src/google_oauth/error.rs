use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoogleOAuthError {
    #[error("Invalid token endpoint URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Token request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status. Carries the raw
    /// error payload for diagnosability.
    #[error("Token exchange rejected by the provider")]
    ExchangeRejected(serde_json::Value),
}
