//! Feature schema: the ordered trait names the classifier expects, loaded
//! once at startup from `features.json` and injected via `AppState`.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::AppError;

/// Trait scores range 0–10; an omitted feature is read as the midpoint
/// rather than rejected, so partial client payloads still classify.
pub const NEUTRAL_VALUE: f64 = 5.0;

#[derive(Debug, Deserialize)]
struct FeaturesFile {
    features: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl FeatureSchema {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read feature schema from {}", path.display()))?;
        let parsed: FeaturesFile = serde_json::from_str(&raw)
            .with_context(|| format!("malformed feature schema in {}", path.display()))?;
        ensure!(!parsed.features.is_empty(), "feature schema is empty");
        Ok(Self::new(parsed.features))
    }

    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Builds the ordered feature vector and the fully-populated feature map
    /// from a raw client payload.
    ///
    /// Missing or null features default to `NEUTRAL_VALUE`. Numbers and
    /// numeric strings are coerced to f64; anything else is a validation
    /// error, raised before any side effect. The returned map (defaults
    /// included) is exactly what gets persisted in the ledger.
    pub fn build_vector(
        &self,
        raw: &Map<String, Value>,
    ) -> Result<(Vec<f64>, Map<String, Value>), AppError> {
        let mut vector = Vec::with_capacity(self.names.len());
        let mut full = Map::new();
        for name in &self.names {
            let value = match raw.get(name) {
                None | Some(Value::Null) => NEUTRAL_VALUE,
                Some(v) => coerce_number(name, v)?,
            };
            vector.push(value);
            full.insert(name.clone(), Value::from(value));
        }
        Ok((vector, full))
    }
}

fn coerce_number(name: &str, value: &Value) -> Result<f64, AppError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::Validation(format!("feature '{name}' must be a number")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> FeatureSchema {
        FeatureSchema::new(vec![
            "party_liking".to_string(),
            "talkativeness".to_string(),
            "reading_habit".to_string(),
        ])
    }

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_missing_features_default_to_neutral() {
        let (vector, full) = schema().build_vector(&Map::new()).unwrap();
        assert_eq!(vector, vec![5.0, 5.0, 5.0]);
        assert_eq!(full.len(), 3);
        assert_eq!(full["reading_habit"], json!(5.0));
    }

    #[test]
    fn test_vector_follows_schema_order() {
        let raw = map(json!({"reading_habit": 9, "party_liking": 1.5}));
        let (vector, _) = schema().build_vector(&raw).unwrap();
        assert_eq!(vector, vec![1.5, 5.0, 9.0]);
    }

    #[test]
    fn test_full_map_covers_schema_with_defaults() {
        let raw = map(json!({"party_liking": 2}));
        let (_, full) = schema().build_vector(&raw).unwrap();
        assert_eq!(full["party_liking"], json!(2.0));
        assert_eq!(full["talkativeness"], json!(5.0));
        assert_eq!(full["reading_habit"], json!(5.0));
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let raw = map(json!({"party_liking": "7.5"}));
        let (vector, _) = schema().build_vector(&raw).unwrap();
        assert_eq!(vector[0], 7.5);
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let raw = map(json!({"talkativeness": "very"}));
        assert!(matches!(
            schema().build_vector(&raw),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_null_treated_as_missing() {
        let raw = map(json!({"party_liking": null}));
        let (vector, _) = schema().build_vector(&raw).unwrap();
        assert_eq!(vector[0], NEUTRAL_VALUE);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let raw = map(json!({"favorite_color": "blue", "party_liking": 3}));
        let (vector, full) = schema().build_vector(&raw).unwrap();
        assert_eq!(vector[0], 3.0);
        assert!(!full.contains_key("favorite_color"));
    }
}
