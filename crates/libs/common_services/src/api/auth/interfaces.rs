use std::fmt;

/// The authenticated caller, as resolved by the identity backend. Carries
/// the raw access token so further backend reads can run under the
/// caller's own permissions.
#[derive(Clone)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    pub access_token: String,
}

// Manual impl keeps the access token out of logs.
impl fmt::Debug for AuthUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
