//! Axum route handlers for the classification API.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::advice::{self, Advice};
use crate::auth::extract::AuthUser;
use crate::auth::store;
use crate::errors::AppError;
use crate::history::ledger;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub features: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub test_id: Uuid,
    pub prediction: String,
    pub confidence: f64,
    pub probabilities: Value,
    pub advice: Advice,
    pub created_at: DateTime<Utc>,
}

/// GET /api/features
pub async fn handle_features(State(state): State<AppState>) -> Json<FeaturesResponse> {
    Json(FeaturesResponse {
        features: state.schema.names().to_vec(),
    })
}

/// POST /api/predict
///
/// Pipeline: validate/normalize the payload → classify → ledger the result
/// → attach advice. Any failure before the insert leaves no ledger row; the
/// inserted row (generated id + timestamp) is what the response reports.
pub async fn handle_predict(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<Value>,
) -> Result<Json<PredictResponse>, AppError> {
    store::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let raw = body.as_object().ok_or_else(|| {
        AppError::Validation("request body must be a JSON object of feature values".to_string())
    })?;

    let (vector, features) = state.schema.build_vector(raw)?;
    let result = state.classifier.classify(&vector).await?;
    let record = ledger::record(&state.db, user_id, Value::Object(features), &result).await?;

    info!("Recorded prediction {} for user {user_id}", record.id);

    let advice = advice::lookup(&record.prediction);
    Ok(Json(PredictResponse {
        test_id: record.id,
        prediction: record.prediction,
        confidence: record.confidence,
        probabilities: record.probabilities,
        advice,
        created_at: record.created_at,
    }))
}
