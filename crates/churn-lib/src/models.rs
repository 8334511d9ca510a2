//! Core data models for churn inference

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field value in a customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Categorical attribute, one-hot expanded by the vectorizer
    Text(String),
    /// Numeric attribute, passed through by the vectorizer
    Number(f64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

/// A customer record: named fields of mixed categorical/numeric type
///
/// Fields keep insertion order so the echoed record reads the same way
/// it was written. Setting an existing field replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for record literals
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name.to_string(), value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// Prediction output for a single record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// Probability of the positive (churn) class, in [0, 1]
    pub probability: f64,
    pub model_version: String,
    pub generated_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_existing_field() {
        let mut record = Record::new();
        record.set("tenure", 1i64);
        record.set("tenure", 12i64);
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("tenure"), Some(&FieldValue::Number(12.0)));
    }

    #[test]
    fn test_record_preserves_insertion_order() {
        let record = Record::new()
            .with("contract", "month-to-month")
            .with("tenure", 1i64)
            .with("monthlycharges", 29.85);
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["contract", "tenure", "monthlycharges"]);
    }

    #[test]
    fn test_record_display_is_dict_like() {
        let record = Record::new()
            .with("contract", "month-to-month")
            .with("tenure", 1i64);
        assert_eq!(record.to_string(), "{contract: month-to-month, tenure: 1}");
    }

    #[test]
    fn test_numeric_display_drops_trailing_zero() {
        assert_eq!(FieldValue::Number(1.0).to_string(), "1");
        assert_eq!(FieldValue::Number(29.85).to_string(), "29.85");
    }
}
