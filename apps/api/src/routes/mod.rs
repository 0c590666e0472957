pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth_handlers;
use crate::classify::handlers as classify_handlers;
use crate::history::handlers as history_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Account API
        .route("/api/auth/signup", post(auth_handlers::handle_signup))
        .route("/api/auth/login", post(auth_handlers::handle_login))
        .route("/api/auth/verify", get(auth_handlers::handle_verify))
        .route(
            "/api/auth/profile",
            get(auth_handlers::handle_get_profile).put(auth_handlers::handle_update_profile),
        )
        // Classification API
        .route("/api/features", get(classify_handlers::handle_features))
        .route("/api/predict", post(classify_handlers::handle_predict))
        // History API
        .route("/api/history", get(history_handlers::handle_history))
        .route("/api/test/:id", get(history_handlers::handle_get_test))
        .with_state(state)
}
