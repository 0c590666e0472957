//! Ledger queries. Rows are only ever inserted here; the single
//! `INSERT ... RETURNING` is the whole transaction, so a failed predict
//! call leaves no partial row.

use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use crate::classify::model::Classification;
use crate::errors::AppError;
use crate::models::prediction::PredictionRow;

/// Records one classification outcome. The returned row — with its
/// generated id and timestamp — is the source of truth for the response.
pub async fn record(
    pool: &PgPool,
    user_id: Uuid,
    features: serde_json::Value,
    result: &Classification,
) -> Result<PredictionRow, AppError> {
    let probabilities = serde_json::to_value(&result.probabilities)
        .context("failed to serialize probability distribution")?;

    Ok(sqlx::query_as::<_, PredictionRow>(
        r#"
        INSERT INTO predictions (id, user_id, features, prediction, confidence, probabilities)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(features)
    .bind(result.label.as_str())
    .bind(result.confidence)
    .bind(probabilities)
    .fetch_one(pool)
    .await?)
}

/// All of a user's predictions, newest first. No rows is an empty vec,
/// not an error.
pub async fn list_by_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<PredictionRow>, AppError> {
    Ok(sqlx::query_as::<_, PredictionRow>(
        "SELECT * FROM predictions WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?)
}

/// Fetches one prediction scoped by id AND owner. A row belonging to a
/// different user is indistinguishable from a nonexistent one.
pub async fn get_by_id(pool: &PgPool, id: Uuid, user_id: Uuid) -> Result<PredictionRow, AppError> {
    sqlx::query_as::<_, PredictionRow>(
        "SELECT * FROM predictions WHERE id = $1 AND user_id = $2",
    )
    .bind(id)
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound("Test result not found".to_string()))
}
