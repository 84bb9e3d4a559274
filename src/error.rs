//! Error types for collection, model loading and prediction.

use std::path::PathBuf;
use thiserror::Error;

/// Answers rejected before they reach the feature transform.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("Failed to read answers: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid answers document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Age {0} is outside the accepted range 18..=100")]
    AgeOutOfRange(u32),
}

/// A config file that exists but cannot be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Fatal at startup; no submission is served without a model.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("ONNX runtime error: {0}")]
    Runtime(String),
}

impl From<ort::OrtError> for ModelLoadError {
    fn from(e: ort::OrtError) -> Self {
        ModelLoadError::Runtime(e.to_string())
    }
}

/// Raised by a predictor; caught at the prediction boundary and rendered.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("X has {got} features, but the model is expecting {expected} features as input")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("Invalid input tensor: {0}")]
    InvalidInput(String),

    #[error("Unsupported model output: {0}")]
    UnsupportedOutput(String),

    #[error("Model returned no prediction")]
    EmptyOutput,

    #[error("{0}")]
    Model(String),
}

impl From<ort::OrtError> for PredictionError {
    fn from(e: ort::OrtError) -> Self {
        PredictionError::Model(e.to_string())
    }
}
