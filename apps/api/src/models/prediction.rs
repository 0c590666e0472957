use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Ledger row for one classification request. Append-only: inserted on a
/// successful predict call, never updated, removed only when the owning
/// user is deleted (cascade).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PredictionRow {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Flat feature-name → number map covering the full schema key set,
    /// defaults included.
    pub features: serde_json::Value,
    pub prediction: String,
    pub confidence: f64,
    /// Label → probability map; values sum to ≈1.
    pub probabilities: serde_json::Value,
    pub created_at: DateTime<Utc>,
}
