//! Library for churn-prediction inference
//!
//! This crate provides the core functionality for:
//! - Loading a trained model bundle (vectorizer + classifier) from disk
//! - Encoding a customer record into a fixed-width feature vector
//! - Scoring the feature vector with a binary logistic-regression classifier
//! - Rendering the prediction report

pub mod artifact;
pub mod classifier;
pub mod models;
pub mod predictor;
pub mod report;
pub mod vectorizer;

pub use artifact::{ArtifactError, ModelBundle, FORMAT_VERSION};
pub use classifier::LogisticRegression;
pub use models::{FieldValue, Prediction, Record};
pub use predictor::ChurnPredictor;
pub use vectorizer::DictVectorizer;
