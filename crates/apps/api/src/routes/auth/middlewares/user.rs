use crate::api_state::ApiContext;
use crate::auth::middlewares::common::{extract_context, extract_token};
use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
};
use common_services::api::auth::error::AuthError;
use common_services::api::auth::interfaces::AuthUser;

#[derive(Clone, Debug)]
pub struct ApiUser(pub AuthUser);

impl<S> FromRequestParts<S> for ApiUser
where
    S: Send + Sync,
    State<ApiContext>: FromRequestParts<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)?;
        let context = extract_context(parts, state).await?;
        let backend_user = context.backend.for_user(&token).current_user().await?;
        let user = AuthUser {
            id: backend_user.id,
            email: backend_user.email,
            access_token: token,
        };
        parts.extensions.insert(user.clone());
        Ok(Self(user))
    }
}
