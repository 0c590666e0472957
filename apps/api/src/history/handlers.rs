//! Axum route handlers for the history API. Read-only; every query is
//! scoped to the authenticated user.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::advice::{self, Advice};
use crate::auth::extract::AuthUser;
use crate::errors::AppError;
use crate::history::ledger;
use crate::models::prediction::PredictionRow;
use crate::state::AppState;

/// One ledger entry as returned to clients, enriched with advice.
#[derive(Debug, Serialize)]
pub struct TestResult {
    pub id: Uuid,
    pub prediction: String,
    pub confidence: f64,
    pub probabilities: Value,
    pub features: Value,
    pub advice: Advice,
    pub created_at: DateTime<Utc>,
}

impl From<PredictionRow> for TestResult {
    fn from(row: PredictionRow) -> Self {
        let advice = advice::lookup(&row.prediction);
        TestResult {
            id: row.id,
            prediction: row.prediction,
            confidence: row.confidence,
            probabilities: row.probabilities,
            features: row.features,
            advice,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<TestResult>,
    pub total_tests: usize,
}

/// GET /api/history
pub async fn handle_history(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<HistoryResponse>, AppError> {
    let rows = ledger::list_by_user(&state.db, user_id).await?;
    let history: Vec<TestResult> = rows.into_iter().map(TestResult::from).collect();
    let total_tests = history.len();
    Ok(Json(HistoryResponse {
        history,
        total_tests,
    }))
}

/// GET /api/test/:id
pub async fn handle_get_test(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<TestResult>, AppError> {
    let row = ledger::get_by_id(&state.db, id, user_id).await?;
    Ok(Json(TestResult::from(row)))
}
