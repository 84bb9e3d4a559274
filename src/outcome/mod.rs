//! Prediction outcomes and the failure boundary around the model call.

mod engine;

pub use engine::{PredictionEngine, PredictionOutcome, PredictionReport};
