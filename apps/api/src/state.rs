use std::sync::Arc;

use sqlx::PgPool;

use crate::classify::model::Classifier;
use crate::classify::schema::FeatureSchema;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The model, feature schema, and config are constructed once in `main` and
/// passed in explicitly — no module-level singletons.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Ordered feature names the classifier expects; also the key set of
    /// every persisted feature vector.
    pub schema: FeatureSchema,
    /// Pluggable classifier. Default: PrototypeClassifier. The rest of the
    /// app depends only on this contract, never on model internals.
    pub classifier: Arc<dyn Classifier>,
}
