//! Axum route handlers for the account API: signup, login, token
//! verification, and profile reads/updates.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::extract::AuthUser;
use crate::auth::{password, store, token};
use crate::errors::AppError;
use crate::models::user::PublicUser;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub user: PublicUser,
}

// ────────────────────────────────────────────────────────────────────────────
// Validation
// ────────────────────────────────────────────────────────────────────────────

const MIN_PASSWORD_LEN: usize = 6;

/// Normalized email form: trimmed and lowercased. Uniqueness checks and
/// storage both operate on this form.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_signup(req: &SignupRequest) -> Result<(String, String), AppError> {
    let name = req.name.trim().to_string();
    let email = normalize_email(&req.email);
    if name.is_empty() || email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "name, email and password are required".to_string(),
        ));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok((name, email))
}

fn validate_profile_update(
    req: &UpdateProfileRequest,
) -> Result<(Option<String>, Option<String>), AppError> {
    let name = match &req.name {
        Some(n) => {
            let n = n.trim();
            if n.is_empty() {
                return Err(AppError::Validation("name must not be empty".to_string()));
            }
            Some(n.to_string())
        }
        None => None,
    };
    let email = match &req.email {
        Some(e) => {
            let e = normalize_email(e);
            if e.is_empty() {
                return Err(AppError::Validation("email must not be empty".to_string()));
            }
            Some(e)
        }
        None => None,
    };
    Ok((name, email))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let (name, email) = validate_signup(&req)?;
    let hash = password::hash(&req.password)?;

    let user = store::create_user(&state.db, &name, &email, &hash).await?;
    let token = token::issue(&state.config.jwt_secret, user.id)?;

    info!("New user registered: {}", user.id);
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into_public(0),
        }),
    ))
}

/// POST /api/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let email = normalize_email(&req.email);
    if email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }

    // Unknown email and wrong password take the same error path.
    let user = store::find_by_email(&state.db, &email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    if !password::verify(&req.password, &user.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let token = token::issue(&state.config.jwt_secret, user.id)?;
    let user = store::public_user(&state.db, user).await?;
    Ok(Json(AuthResponse { token, user }))
}

/// GET /api/auth/verify
pub async fn handle_verify(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserEnvelope>, AppError> {
    let user = store::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    let user = store::public_user(&state.db, user).await?;
    Ok(Json(UserEnvelope { user }))
}

/// GET /api/auth/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<PublicUser>, AppError> {
    let user = store::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(Json(store::public_user(&state.db, user).await?))
}

/// PUT /api/auth/profile
pub async fn handle_update_profile(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserEnvelope>, AppError> {
    let (name, email) = validate_profile_update(&req)?;
    let user = store::update_user(&state.db, user_id, name.as_deref(), email.as_deref()).await?;
    let user = store::public_user(&state.db, user).await?;
    Ok(Json(UserEnvelope { user }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_signup_lowercases_email() {
        let (_, email) = validate_signup(&signup("A", "A@X.Com", "secret1")).unwrap();
        assert_eq!(email, "a@x.com");
    }

    #[test]
    fn test_signup_trims_fields() {
        let (name, email) = validate_signup(&signup("  A  ", " a@x.com ", "secret1")).unwrap();
        assert_eq!(name, "A");
        assert_eq!(email, "a@x.com");
    }

    #[test]
    fn test_signup_rejects_missing_fields() {
        assert!(matches!(
            validate_signup(&signup("", "a@x.com", "secret1")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_signup(&signup("A", "", "secret1")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_signup(&signup("A", "a@x.com", "")),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_signup_rejects_short_password() {
        assert!(matches!(
            validate_signup(&signup("A", "a@x.com", "12345")),
            Err(AppError::Validation(_))
        ));
        assert!(validate_signup(&signup("A", "a@x.com", "123456")).is_ok());
    }

    #[test]
    fn test_profile_update_normalizes_email() {
        let req = UpdateProfileRequest {
            name: None,
            email: Some(" B@Y.Org ".to_string()),
        };
        let (name, email) = validate_profile_update(&req).unwrap();
        assert_eq!(name, None);
        assert_eq!(email.as_deref(), Some("b@y.org"));
    }

    #[test]
    fn test_profile_update_rejects_empty_strings() {
        let req = UpdateProfileRequest {
            name: Some("   ".to_string()),
            email: None,
        };
        assert!(matches!(
            validate_profile_update(&req),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_profile_update_allows_absent_fields() {
        let req = UpdateProfileRequest {
            name: None,
            email: None,
        };
        assert_eq!(validate_profile_update(&req).unwrap(), (None, None));
    }
}
