//! The classifier seam and its default implementation.
//!
//! `AppState` holds an `Arc<dyn Classifier>`; swapping in a different model
//! backend (a served model, a different algorithm) only requires another
//! impl of the trait. The default `PrototypeClassifier` scores a vector by
//! its distance to a per-label prototype profile and softmaxes the result,
//! so the distribution always covers the full label set and sums to 1.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::classify::schema::{FeatureSchema, NEUTRAL_VALUE};
use crate::errors::AppError;

/// The closed set of personality categories the service predicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Personality {
    Introvert,
    Extrovert,
    Ambivert,
}

impl Personality {
    pub const ALL: [Personality; 3] = [
        Personality::Introvert,
        Personality::Extrovert,
        Personality::Ambivert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Introvert => "Introvert",
            Personality::Extrovert => "Extrovert",
            Personality::Ambivert => "Ambivert",
        }
    }
}

/// One classification outcome: the winning label plus the probability
/// assigned to every label. `confidence` is always the distribution's max.
#[derive(Debug, Clone)]
pub struct Classification {
    pub label: Personality,
    pub confidence: f64,
    pub probabilities: BTreeMap<String, f64>,
}

/// The classifier trait. Implement this to swap model backends without
/// touching the gateway, ledger, or advice code.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, vector: &[f64]) -> Result<Classification, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// PrototypeClassifier — default in-process backend
// ────────────────────────────────────────────────────────────────────────────

/// Traits where a high score signals an outgoing disposition.
const SOCIAL_TRAITS: &[&str] = &[
    "party_liking",
    "public_speaking_comfort",
    "excitement_seeking",
    "talkativeness",
    "social_energy",
    "leadership",
    "adventurousness",
    "group_comfort",
];

/// Traits where a high score signals a preference for solitude.
const SOLITARY_TRAITS: &[&str] = &["alone_time_preference", "reading_habit"];

/// Softmax temperature over mean squared distances. Tuned so an all-neutral
/// respondent lands on Ambivert with roughly 0.8 confidence.
const TEMPERATURE: f64 = 4.0;

/// Distance-to-prototype classifier over the configured feature schema.
/// Deterministic: the same vector always yields the same distribution.
pub struct PrototypeClassifier {
    prototypes: Vec<(Personality, Vec<f64>)>,
}

impl PrototypeClassifier {
    pub fn from_schema(schema: &FeatureSchema) -> Self {
        let prototypes = Personality::ALL
            .iter()
            .map(|&label| {
                let profile = schema
                    .names()
                    .iter()
                    .map(|name| prototype_value(label, name))
                    .collect();
                (label, profile)
            })
            .collect();
        Self { prototypes }
    }
}

/// Expected 0–10 score for a trait under each personality profile.
/// Unknown trait names sit at the midpoint for every label, so a widened
/// schema degrades gracefully instead of skewing one class.
fn prototype_value(label: Personality, name: &str) -> f64 {
    let social = SOCIAL_TRAITS.contains(&name);
    let solitary = SOLITARY_TRAITS.contains(&name);
    match label {
        Personality::Extrovert if social => 8.0,
        Personality::Extrovert if solitary => 3.0,
        Personality::Introvert if social => 2.0,
        Personality::Introvert if solitary => 8.0,
        _ => NEUTRAL_VALUE,
    }
}

#[async_trait]
impl Classifier for PrototypeClassifier {
    async fn classify(&self, vector: &[f64]) -> Result<Classification, AppError> {
        let expected = self.prototypes[0].1.len();
        if vector.len() != expected {
            return Err(AppError::Internal(anyhow::anyhow!(
                "feature vector length {} does not match schema length {expected}",
                vector.len()
            )));
        }

        // Score each label by negated mean squared distance, then softmax.
        let scores: Vec<f64> = self
            .prototypes
            .iter()
            .map(|(_, profile)| {
                let mse = profile
                    .iter()
                    .zip(vector)
                    .map(|(p, v)| (p - v).powi(2))
                    .sum::<f64>()
                    / expected as f64;
                -mse / TEMPERATURE
            })
            .collect();

        let max_score = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let exps: Vec<f64> = scores.iter().map(|s| (s - max_score).exp()).collect();
        let total: f64 = exps.iter().sum();

        let mut probabilities = BTreeMap::new();
        let mut best = (self.prototypes[0].0, f64::NEG_INFINITY);
        for ((label, _), exp) in self.prototypes.iter().zip(&exps) {
            let p = exp / total;
            probabilities.insert(label.as_str().to_string(), p);
            if p > best.1 {
                best = (*label, p);
            }
        }

        Ok(Classification {
            label: best.0,
            confidence: best.1,
            probabilities,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_schema() -> FeatureSchema {
        let mut names: Vec<String> = SOCIAL_TRAITS.iter().map(|s| s.to_string()).collect();
        names.extend(SOLITARY_TRAITS.iter().map(|s| s.to_string()));
        FeatureSchema::new(names)
    }

    fn vector_for(schema: &FeatureSchema, social: f64, solitary: f64) -> Vec<f64> {
        schema
            .names()
            .iter()
            .map(|n| {
                if SOLITARY_TRAITS.contains(&n.as_str()) {
                    solitary
                } else {
                    social
                }
            })
            .collect()
    }

    #[tokio::test]
    async fn test_distribution_sums_to_one_and_max_is_confidence() {
        let schema = full_schema();
        let clf = PrototypeClassifier::from_schema(&schema);
        let result = clf
            .classify(&vector_for(&schema, 7.0, 4.0))
            .await
            .unwrap();

        let sum: f64 = result.probabilities.values().sum();
        assert!((sum - 1.0).abs() < 1e-6, "sum was {sum}");

        let max = result
            .probabilities
            .values()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.confidence, max);
        assert!(result.confidence > 0.0 && result.confidence <= 1.0);
    }

    #[tokio::test]
    async fn test_distribution_covers_every_label() {
        let schema = full_schema();
        let clf = PrototypeClassifier::from_schema(&schema);
        let result = clf.classify(&vec![5.0; schema.len()]).await.unwrap();
        for label in Personality::ALL {
            assert!(result.probabilities.contains_key(label.as_str()));
        }
        assert_eq!(result.probabilities.len(), 3);
    }

    #[tokio::test]
    async fn test_neutral_vector_is_ambivert() {
        let schema = full_schema();
        let clf = PrototypeClassifier::from_schema(&schema);
        let result = clf.classify(&vec![5.0; schema.len()]).await.unwrap();
        assert_eq!(result.label, Personality::Ambivert);
    }

    #[tokio::test]
    async fn test_highly_social_vector_is_extrovert() {
        let schema = full_schema();
        let clf = PrototypeClassifier::from_schema(&schema);
        let result = clf
            .classify(&vector_for(&schema, 9.5, 1.0))
            .await
            .unwrap();
        assert_eq!(result.label, Personality::Extrovert);
        assert!(result.confidence > 0.9);
    }

    #[tokio::test]
    async fn test_solitary_vector_is_introvert() {
        let schema = full_schema();
        let clf = PrototypeClassifier::from_schema(&schema);
        let result = clf
            .classify(&vector_for(&schema, 1.0, 9.0))
            .await
            .unwrap();
        assert_eq!(result.label, Personality::Introvert);
    }

    #[tokio::test]
    async fn test_classification_is_deterministic() {
        let schema = full_schema();
        let clf = PrototypeClassifier::from_schema(&schema);
        let v = vector_for(&schema, 6.0, 6.0);
        let a = clf.classify(&v).await.unwrap();
        let b = clf.classify(&v).await.unwrap();
        assert_eq!(a.label, b.label);
        assert_eq!(a.probabilities, b.probabilities);
    }

    #[tokio::test]
    async fn test_length_mismatch_is_internal_error() {
        let schema = full_schema();
        let clf = PrototypeClassifier::from_schema(&schema);
        assert!(matches!(
            clf.classify(&[5.0, 5.0]).await,
            Err(AppError::Internal(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_trait_names_stay_neutral() {
        // A schema with names outside the known trait lists still produces a
        // valid distribution; those dimensions just don't separate labels.
        let schema = FeatureSchema::new(vec![
            "party_liking".to_string(),
            "favorite_number".to_string(),
        ]);
        let clf = PrototypeClassifier::from_schema(&schema);
        let result = clf.classify(&[9.0, 2.0]).await.unwrap();
        let sum: f64 = result.probabilities.values().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(result.label, Personality::Extrovert);
    }
}
