use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to build backend request URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Credential rejected by the identity backend")]
    CredentialRejected,

    #[error("Backend returned an error: {0}")]
    RemoteServerError(String),
}
