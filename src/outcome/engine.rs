//! Prediction boundary: runs the transform, calls the predictor once, and turns any
//! predictor failure into a displayable outcome instead of an error.

use crate::features::{FeatureTransform, FeatureVector};
use crate::model::{Label, Predictor};
use crate::survey::RawAnswers;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PredictionOutcome {
    Success { label: Label },
    Failure { error: String },
}

impl PredictionOutcome {
    /// Text shown to the user.
    pub fn message(&self) -> String {
        match self {
            PredictionOutcome::Success { label } => format!("✅ Predicted Class: {}", label),
            PredictionOutcome::Failure { error } => {
                format!("⚠️ Error during prediction: {}", error)
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, PredictionOutcome::Success { .. })
    }
}

/// Result for one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub submission_id: String,
    pub ts: i64,
    pub outcome: PredictionOutcome,
    pub message: String,
}

pub struct PredictionEngine<'a> {
    predictor: &'a dyn Predictor,
}

impl<'a> PredictionEngine<'a> {
    pub fn new(predictor: &'a dyn Predictor) -> Self {
        Self { predictor }
    }

    /// Call the predictor once. Errors and panics inside it both become `Failure`.
    pub fn invoke(&self, features: &FeatureVector) -> PredictionOutcome {
        let result = panic::catch_unwind(AssertUnwindSafe(|| self.predictor.predict(features)));
        match result {
            Ok(Ok(label)) => PredictionOutcome::Success { label },
            Ok(Err(e)) => PredictionOutcome::Failure {
                error: e.to_string(),
            },
            Err(payload) => PredictionOutcome::Failure {
                error: panic_message(payload.as_ref()),
            },
        }
    }

    /// Transform one submission's answers and predict its class.
    pub fn submit(&self, raw: &RawAnswers) -> PredictionReport {
        let submission_id = Uuid::new_v4().to_string();
        let ts = Utc::now().timestamp_millis();

        let features = FeatureTransform::transform(raw);
        tracing::debug!(submission_id = %submission_id, features = ?features.as_slice(), "features aligned");

        let outcome = self.invoke(&features);
        match &outcome {
            PredictionOutcome::Success { label } => {
                tracing::info!(submission_id = %submission_id, label = %label, "prediction")
            }
            PredictionOutcome::Failure { error } => {
                tracing::warn!(submission_id = %submission_id, error = %error, "prediction failed")
            }
        }

        PredictionReport {
            submission_id,
            ts,
            message: outcome.message(),
            outcome,
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "model panicked".to_string()
    }
}
