//! Churn prediction engine
//!
//! Runs a customer record through the loaded bundle: encode into the
//! classifier's feature layout, score, and select the positive-class
//! probability.

use crate::artifact::{ArtifactError, ModelBundle};
use crate::classifier::POSITIVE_CLASS;
use crate::models::{Prediction, Record};
use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use tracing::debug;

pub struct ChurnPredictor {
    bundle: ModelBundle,
}

impl ChurnPredictor {
    pub fn new(bundle: ModelBundle) -> Self {
        Self { bundle }
    }

    /// Load a bundle from disk and wrap it in a predictor
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        Ok(Self::new(ModelBundle::load(path)?))
    }

    pub fn model_version(&self) -> &str {
        &self.bundle.model_version
    }

    /// Predict the churn probability for one record
    pub fn predict(&self, record: &Record) -> Result<Prediction> {
        let start = Instant::now();

        let features = self.bundle.vectorizer.transform(record);
        let proba = self.bundle.classifier.predict_proba(&features)?;

        debug!(
            elapsed_us = start.elapsed().as_micros(),
            features = features.len(),
            "Inference completed"
        );

        Ok(Prediction {
            probability: proba[POSITIVE_CLASS],
            model_version: self.bundle.model_version.clone(),
            generated_at: chrono::Utc::now().timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::LogisticRegression;
    use crate::vectorizer::DictVectorizer;

    fn fixture_predictor() -> ChurnPredictor {
        let records = vec![
            Record::new()
                .with("contract", "month-to-month")
                .with("internetservice", "dsl")
                .with("tenure", 1i64)
                .with("monthlycharges", 29.85),
            Record::new()
                .with("contract", "two_year")
                .with("internetservice", "fiber_optic")
                .with("tenure", 60i64)
                .with("monthlycharges", 80.0),
        ];
        let vectorizer = DictVectorizer::fit(&records);
        let weights: Vec<f64> = (0..vectorizer.width()).map(|i| 0.05 * i as f64 - 0.1).collect();
        let classifier = LogisticRegression::new(weights, 0.2);
        ChurnPredictor::new(ModelBundle::new("C=1", vectorizer, classifier).unwrap())
    }

    #[test]
    fn test_probability_in_unit_interval() {
        let predictor = fixture_predictor();
        let record = Record::new()
            .with("contract", "month-to-month")
            .with("internetservice", "dsl")
            .with("tenure", 1i64)
            .with("monthlycharges", 29.85);
        let prediction = predictor.predict(&record).unwrap();
        assert!((0.0..=1.0).contains(&prediction.probability));
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let predictor = fixture_predictor();
        let record = Record::new()
            .with("contract", "two_year")
            .with("internetservice", "fiber_optic")
            .with("tenure", 60i64)
            .with("monthlycharges", 80.0);
        let first = predictor.predict(&record).unwrap();
        let second = predictor.predict(&record).unwrap();
        assert_eq!(first.probability, second.probability);
    }

    #[test]
    fn test_prediction_carries_model_version() {
        let predictor = fixture_predictor();
        let record = Record::new().with("tenure", 5i64);
        let prediction = predictor.predict(&record).unwrap();
        assert_eq!(prediction.model_version, "C=1");
    }
}
