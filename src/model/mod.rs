//! Trained classifier behind a single `predict` operation.

mod onnx;

pub use onnx::OnnxClassifier;

use crate::error::PredictionError;
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicted consumer class as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub String);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        Label(s.to_string())
    }
}

pub trait Predictor {
    fn predict(&self, features: &FeatureVector) -> Result<Label, PredictionError>;
}

/// Returns the same label for every row. Used where no trained model is available.
#[derive(Debug, Clone)]
pub struct FixedLabelPredictor {
    label: Label,
}

impl FixedLabelPredictor {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Label(label.into()),
        }
    }
}

impl Predictor for FixedLabelPredictor {
    fn predict(&self, _features: &FeatureVector) -> Result<Label, PredictionError> {
        Ok(self.label.clone())
    }
}

/// Map a class code to its configured display name, or print the code itself.
pub(crate) fn label_for_code(code: i64, class_labels: &[String]) -> Label {
    usize::try_from(code)
        .ok()
        .and_then(|i| class_labels.get(i))
        .map(|name| Label(name.clone()))
        .unwrap_or_else(|| Label(code.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_maps_through_class_labels() {
        let names = vec!["Casual".to_string(), "Loyal".to_string()];
        assert_eq!(label_for_code(1, &names), Label::from("Loyal"));
        assert_eq!(label_for_code(7, &names), Label::from("7"));
        assert_eq!(label_for_code(-1, &names), Label::from("-1"));
        assert_eq!(label_for_code(0, &[]), Label::from("0"));
    }
}
