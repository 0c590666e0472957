//! Session tokens: stateless HS256 JWTs binding a user id to an expiry.
//!
//! Validity is a pure function of token + secret + clock — no session store,
//! no server-side revocation. The tradeoff (no forced logout) is acceptable
//! for this domain and lets the service scale horizontally.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Sessions expire 7 days after issuance.
const TOKEN_TTL_DAYS: i64 = 7;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The user id.
    sub: String,
    /// Issued-at, seconds since the epoch.
    iat: i64,
    /// Expiry, seconds since the epoch.
    exp: i64,
}

/// Issues a signed session token for `user_id`, expiring in 7 days.
pub fn issue(secret: &str, user_id: Uuid) -> Result<String, AppError> {
    issue_at(secret, user_id, Utc::now().timestamp())
}

fn issue_at(secret: &str, user_id: Uuid, issued_at: i64) -> Result<String, AppError> {
    let claims = Claims {
        sub: user_id.to_string(),
        iat: issued_at,
        exp: issued_at + Duration::days(TOKEN_TTL_DAYS).num_seconds(),
    };
    Ok(
        encode(&Header::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|e| anyhow::anyhow!("token encoding failed: {e}"))?,
    )
}

/// Verifies a token and returns the user id it was issued for.
/// Malformed, tampered, and expired tokens all fail uniformly.
pub fn verify(secret: &str, token: &str) -> Result<Uuid, AppError> {
    let mut validation = Validation::default();
    validation.leeway = 0; // exact expiry boundary

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|_| AppError::Unauthorized)?;

    Uuid::parse_str(&data.claims.sub).map_err(|_| AppError::Unauthorized)
}
