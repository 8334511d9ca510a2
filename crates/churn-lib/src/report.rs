//! Prediction report rendering
//!
//! Human-readable output only: the echoed input record, a blank line,
//! then the churn probability.

use crate::models::{Prediction, Record};

/// Render the two-line report printed to stdout
pub fn render(record: &Record, prediction: &Prediction) -> String {
    format!(
        "input {record}\n\nchurn probability : {}",
        prediction.probability
    )
}
