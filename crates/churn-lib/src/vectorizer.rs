//! Feature encoding for churn inference
//!
//! Maps a semi-structured customer record into the fixed-width numeric
//! vector the classifier was trained on. Categorical fields expand to
//! one-hot `field=value` columns, numeric fields pass through under the
//! bare field name. The column layout is captured at fit time and
//! travels inside the model bundle.

use crate::models::{FieldValue, Record};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Separator between field name and category in one-hot column names
pub const SEPARATOR: char = '=';

/// Fitted dictionary vectorizer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictVectorizer {
    feature_names: Vec<String>,
    index: HashMap<String, usize>,
}

impl DictVectorizer {
    /// Build a vectorizer from an explicit column layout
    pub fn from_feature_names(feature_names: Vec<String>) -> Self {
        let index = feature_names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            feature_names,
            index,
        }
    }

    /// Learn the column layout from a set of records
    ///
    /// Column names are sorted so the layout does not depend on record
    /// field order.
    pub fn fit(records: &[Record]) -> Self {
        let mut names: Vec<String> = Vec::new();
        for record in records {
            for (field, value) in record.iter() {
                let name = column_name(field, value);
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names.sort();
        Self::from_feature_names(names)
    }

    /// Encode one record into a vector of exactly `self.width()` values
    ///
    /// Fields and categories unseen at fit time are ignored, matching
    /// the behavior of the vectorizer the bundle was trained with.
    pub fn transform(&self, record: &Record) -> Vec<f64> {
        let mut features = vec![0.0; self.feature_names.len()];
        for (field, value) in record.iter() {
            if let Some(&column) = self.index.get(&column_name(field, value)) {
                features[column] = match value {
                    FieldValue::Text(_) => 1.0,
                    FieldValue::Number(n) => *n,
                };
            }
        }
        features
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Number of columns in the encoded vector
    pub fn width(&self) -> usize {
        self.feature_names.len()
    }
}

fn column_name(field: &str, value: &FieldValue) -> String {
    match value {
        FieldValue::Text(category) => format!("{field}{SEPARATOR}{category}"),
        FieldValue::Number(_) => field.to_string(),
    }
}
