//! Bearer-token extractor. Protected handlers take an `AuthUser` argument;
//! a missing, malformed, invalid, or expired token short-circuits the
//! request with 401 before the handler body runs.

use axum::{async_trait, extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use uuid::Uuid;

use crate::auth::token;
use crate::errors::AppError;
use crate::state::AppState;

/// The authenticated user id for the current request.
pub struct AuthUser(pub Uuid);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AppError::Unauthorized)?;

        let user_id = token::verify(&state.config.jwt_secret, token)?;
        Ok(AuthUser(user_id))
    }
}
