//! ONNX Runtime classifier. Input: [1, 28] f32. Output: class code (int64), class scores (f32)
//! or class name (string).
//! Loaded once at startup; a missing or unreadable model file is a hard error.

use super::{label_for_code, Label, Predictor};
use crate::config::ModelConfig;
use crate::error::{ModelLoadError, PredictionError};
use crate::features::FeatureVector;
use ndarray::{Array2, CowArray};
use ort::tensor::TensorElementDataType;
use ort::{Environment, GraphOptimizationLevel, Session, SessionBuilder, Value};
use std::path::Path;
use std::sync::Arc;

pub struct OnnxClassifier {
    session: Session,
    _env: Arc<Environment>,
    input_dim: usize,
    class_labels: Vec<String>,
}

impl OnnxClassifier {
    pub fn load(path: &Path, config: &ModelConfig) -> Result<Self, ModelLoadError> {
        // Checked before the runtime library is touched.
        if !path.exists() {
            return Err(ModelLoadError::NotFound(path.to_path_buf()));
        }

        let env = Environment::builder()
            .with_name("beverage-predictor")
            .build()?
            .into_arc();
        let session = SessionBuilder::new(&env)?
            .with_optimization_level(GraphOptimizationLevel::Level1)?
            .with_model_from_file(path)?;

        // Width the graph declares, if static; otherwise trust the configured width.
        let input_dim = session
            .inputs
            .first()
            .and_then(|i| i.dimensions.last().copied().flatten())
            .map(|d| d as usize)
            .unwrap_or(config.expected_dim);

        tracing::info!(
            path = %path.display(),
            input_dim,
            classes = config.class_labels.len(),
            "model loaded"
        );

        Ok(Self {
            session,
            _env: env,
            input_dim,
            class_labels: config.class_labels.clone(),
        })
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }
}

impl Predictor for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<Label, PredictionError> {
        let row = features.as_slice();
        check_width(row, self.input_dim)?;

        let arr = Array2::from_shape_vec((1, row.len()), row.to_vec())
            .map_err(|e| PredictionError::InvalidInput(e.to_string()))?;
        let arr = CowArray::from(arr.into_dyn());
        let input = Value::from_array(self.session.allocator(), &arr)?;
        let outputs = self.session.run(vec![input])?;
        let first = outputs.first().ok_or(PredictionError::EmptyOutput)?;

        let output = match self.session.outputs.first().map(|o| &o.output_type) {
            Some(TensorElementDataType::Int64) => {
                let tensor = first.try_extract::<i64>()?;
                let codes = tensor.view().iter().copied().collect();
                ClassOutput::Codes(codes)
            }
            Some(TensorElementDataType::Float32) => {
                let tensor = first.try_extract::<f32>()?;
                let scores = tensor.view().iter().copied().collect();
                ClassOutput::Scores(scores)
            }
            Some(TensorElementDataType::String) => {
                let tensor = first.try_extract::<String>()?;
                let names = tensor.view().iter().cloned().collect();
                ClassOutput::Names(names)
            }
            other => ClassOutput::Unsupported(format!("{:?}", other)),
        };
        decode_label(output, &self.class_labels)
    }
}

/// First model output, copied out of the runtime's tensor.
#[derive(Debug, Clone, PartialEq)]
enum ClassOutput {
    /// Integer class codes (int64 label output)
    Codes(Vec<i64>),
    /// One code as float, or per-class scores
    Scores(Vec<f32>),
    /// Class names (string label output)
    Names(Vec<String>),
    Unsupported(String),
}

fn check_width(row: &[f32], input_dim: usize) -> Result<(), PredictionError> {
    if row.len() != input_dim {
        return Err(PredictionError::ShapeMismatch {
            expected: input_dim,
            got: row.len(),
        });
    }
    Ok(())
}

/// Label for the single input row.
fn decode_label(output: ClassOutput, class_labels: &[String]) -> Result<Label, PredictionError> {
    match output {
        ClassOutput::Codes(codes) => {
            let code = codes.first().copied().ok_or(PredictionError::EmptyOutput)?;
            Ok(label_for_code(code, class_labels))
        }
        ClassOutput::Scores(scores) => {
            let code = match scores.as_slice() {
                [] => return Err(PredictionError::EmptyOutput),
                [single] => single.round() as i64,
                many => argmax(many).ok_or(PredictionError::EmptyOutput)? as i64,
            };
            Ok(label_for_code(code, class_labels))
        }
        ClassOutput::Names(names) => names
            .into_iter()
            .next()
            .map(Label)
            .ok_or(PredictionError::EmptyOutput),
        ClassOutput::Unsupported(kind) => Err(PredictionError::UnsupportedOutput(format!(
            "first output has element type {}",
            kind
        ))),
    }
}

/// Index of the highest score; NaN scores never win.
fn argmax(scores: &[f32]) -> Option<usize> {
    scores
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_nan())
        .max_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_is_not_found() {
        let err = OnnxClassifier::load(Path::new("nonexistent.onnx"), &ModelConfig::default())
            .err()
            .unwrap();
        assert!(matches!(err, ModelLoadError::NotFound(_)));
        assert!(err.to_string().contains("nonexistent.onnx"));
    }

    #[test]
    fn argmax_picks_highest_score() {
        assert_eq!(argmax(&[0.1, 0.7, 0.2]), Some(1));
        assert_eq!(argmax(&[f32::NAN, 0.3]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn width_must_match_model_input() {
        assert!(check_width(&[0.0; 28], 28).is_ok());
        let err = check_width(&[0.0; 28], 30).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::ShapeMismatch {
                expected: 30,
                got: 28
            }
        ));
    }

    #[test]
    fn int64_codes_map_through_class_labels() {
        let names = vec!["Occasional".to_string(), "Regular".to_string()];
        let label = decode_label(ClassOutput::Codes(vec![1]), &names).unwrap();
        assert_eq!(label, Label::from("Regular"));
        let label = decode_label(ClassOutput::Codes(vec![4]), &[]).unwrap();
        assert_eq!(label, Label::from("4"));
    }

    #[test]
    fn float_output_is_code_or_scores() {
        let label = decode_label(ClassOutput::Scores(vec![2.0]), &[]).unwrap();
        assert_eq!(label, Label::from("2"));
        let label = decode_label(ClassOutput::Scores(vec![0.2, 0.1, 0.7]), &[]).unwrap();
        assert_eq!(label, Label::from("2"));
    }

    #[test]
    fn string_output_is_the_label() {
        let output = ClassOutput::Names(vec!["Health Enthusiast".to_string()]);
        let label = decode_label(output, &["ignored".to_string()]).unwrap();
        assert_eq!(label, Label::from("Health Enthusiast"));
    }

    #[test]
    fn empty_or_unsupported_output_fails() {
        assert!(matches!(
            decode_label(ClassOutput::Codes(vec![]), &[]),
            Err(PredictionError::EmptyOutput)
        ));
        assert!(matches!(
            decode_label(ClassOutput::Names(vec![]), &[]),
            Err(PredictionError::EmptyOutput)
        ));
        assert!(matches!(
            decode_label(ClassOutput::Unsupported("Some(Bool)".into()), &[]),
            Err(PredictionError::UnsupportedOutput(_))
        ));
    }
}
