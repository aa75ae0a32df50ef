use app_state::AppSettings;
use axum::extract::FromRef;
use common_services::backend::BackendClient;
use common_services::google_oauth::GoogleOAuthClient;

#[derive(Clone)]
pub struct ApiContext {
    pub backend: BackendClient,
    pub google: GoogleOAuthClient,
    pub settings: AppSettings,
}

// These impls allow Axum to extract individual parts of the state, for
// extractors and middleware that only need one of them.
impl FromRef<ApiContext> for BackendClient {
    fn from_ref(state: &ApiContext) -> Self {
        state.backend.clone()
    }
}

impl FromRef<ApiContext> for GoogleOAuthClient {
    fn from_ref(state: &ApiContext) -> Self {
        state.google.clone()
    }
}

impl FromRef<ApiContext> for AppSettings {
    fn from_ref(state: &ApiContext) -> Self {
        state.settings.clone()
    }
}
