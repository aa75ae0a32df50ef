use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub logging: LoggingSettings,
    pub api: ApiSettings,
    pub backend: BackendSettings,
    pub google: GoogleOAuthSettings,
    pub secrets: SecretSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    pub allowed_origins: Vec<String>,
    pub public_url: String,
}

/// The hosted data backend that owns users, album memberships and drive
/// connections.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub url: String,
}

/// OAuth token endpoint configuration. Points at Google in production and
/// at a local mock in tests.
#[derive(Debug, Deserialize, Clone)]
pub struct GoogleOAuthSettings {
    pub token_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SecretSettings {
    /// Public key for caller-scoped requests against the data backend.
    pub backend_anon_key: String,
    /// Privileged credential for administrative writes.
    pub backend_service_role_key: String,
    pub google_client_id: String,
    pub google_client_secret: String,
}
