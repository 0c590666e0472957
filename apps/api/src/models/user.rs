use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for a registered user. The password hash never leaves the
/// server; only `PublicUser` is serialized into responses.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-facing user shape.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub test_count: i64,
}

impl UserRow {
    pub fn into_public(self, test_count: i64) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
            test_count,
        }
    }
}
