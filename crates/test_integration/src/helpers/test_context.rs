use crate::helpers::mock_backend::MockBackend;
use crate::helpers::mock_google::MockGoogle;
use api::api_state::ApiContext;
use app_state::{
    ApiSettings, AppSettings, BackendSettings, GoogleOAuthSettings, LoggingSettings,
    SecretSettings,
};
use color_eyre::eyre::Result;
use common_services::backend::BackendClient;
use common_services::google_oauth::GoogleOAuthClient;
use reqwest::Client;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

pub const OWNER_TOKEN: &str = "owner-token";
pub const OWNER_USER_ID: &str = "11111111-1111-1111-1111-111111111111";

/// The main context for our integration tests: the real router bound to an
/// ephemeral port, talking to in-process mocks of the data backend and the
/// token endpoint.
#[allow(dead_code)]
pub struct TestContext {
    pub http_client: Client,
    pub api_url: String,
    pub backend: MockBackend,
    pub google: MockGoogle,
    api_handle: JoinHandle<()>,
    backend_handle: JoinHandle<()>,
    google_handle: JoinHandle<()>,
}

impl TestContext {
    /// Sets up the test environment: both mocks plus the API under test,
    /// each on its own ephemeral port. A known user is pre-registered.
    pub async fn new() -> Result<Self> {
        let backend = MockBackend::default();
        let google = MockGoogle::default();

        let (backend_addr, backend_handle) = spawn_router(backend.router()).await?;
        let (google_addr, google_handle) = spawn_router(google.router()).await?;

        let settings = test_settings(backend_addr, google_addr);
        let http = Client::new();
        let api_state = ApiContext {
            backend: BackendClient::new(http.clone(), &settings.backend, &settings.secrets)?,
            google: GoogleOAuthClient::new(http, &settings.google, &settings.secrets)?,
            settings,
        };
        let (api_addr, api_handle) = spawn_router(api::create_router(api_state)).await?;

        let context = Self {
            http_client: Client::new(),
            api_url: format!("http://{api_addr}"),
            backend,
            google,
            api_handle,
            backend_handle,
            google_handle,
        };
        context.backend.add_user(OWNER_TOKEN, OWNER_USER_ID);
        Ok(context)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        self.api_handle.abort();
        self.backend_handle.abort();
        self.google_handle.abort();
    }
}

async fn spawn_router(router: axum::Router) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    Ok((addr, handle))
}

fn test_settings(backend_addr: SocketAddr, google_addr: SocketAddr) -> AppSettings {
    AppSettings {
        logging: LoggingSettings {
            level: "info".to_owned(),
        },
        api: ApiSettings {
            host: "127.0.0.1".to_owned(),
            port: 0,
            allowed_origins: vec![],
            public_url: "http://127.0.0.1".to_owned(),
        },
        backend: BackendSettings {
            url: format!("http://{backend_addr}"),
        },
        google: GoogleOAuthSettings {
            token_url: format!("http://{google_addr}/token"),
        },
        secrets: SecretSettings {
            backend_anon_key: "anon-key".to_owned(),
            backend_service_role_key: "service-role-key".to_owned(),
            google_client_id: "client-id.apps.googleusercontent.com".to_owned(),
            google_client_secret: "client-secret".to_owned(),
        },
    }
}
