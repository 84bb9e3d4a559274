//! Beverage consumer predictor: survey answers → engineered features → trained classifier.
//!
//! Modular structure:
//! - [`survey`] — Raw answer types and the answers collector
//! - [`features`] — Feature engineering, fixed encodings, 28-column alignment
//! - [`model`] — Predictor trait and ONNX classifier
//! - [`outcome`] — Failure boundary around the model call
//! - [`logging`] — tracing setup and JSON report lines

pub mod config;
pub mod error;
pub mod survey;
pub mod features;
pub mod model;
pub mod outcome;
pub mod logging;

pub use config::PredictorConfig;
pub use error::{CollectError, ConfigError, ModelLoadError, PredictionError};
pub use survey::{AnswerCollector, RawAnswers};
pub use features::{FeatureTransform, FeatureVector};
pub use model::{FixedLabelPredictor, Label, OnnxClassifier, Predictor};
pub use outcome::{PredictionEngine, PredictionOutcome, PredictionReport};
pub use logging::StructuredLogger;
