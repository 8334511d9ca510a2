//! Binary logistic-regression classifier
//!
//! Scores a feature vector into a two-class probability distribution.
//! Index 1 is the positive (churn) class.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Index of the positive class in `predict_proba` output
pub const POSITIVE_CLASS: usize = 1;

/// Trained logistic-regression weights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl LogisticRegression {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Width of the feature vector this classifier expects
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Raw affine score before the sigmoid
    pub fn decision_function(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.coefficients.len() {
            anyhow::bail!(
                "feature vector has {} values, classifier expects {}",
                features.len(),
                self.coefficients.len()
            );
        }
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum();
        Ok(dot + self.intercept)
    }

    /// Probability distribution over [negative, positive]
    pub fn predict_proba(&self, features: &[f64]) -> Result<[f64; 2]> {
        let positive = sigmoid(self.decision_function(features)?);
        Ok([1.0 - positive, positive])
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
