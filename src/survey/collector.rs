//! Reads a JSON answers document and rejects anything outside the survey's domains.

use super::RawAnswers;
use crate::error::CollectError;
use std::io::Read;
use std::path::Path;

pub struct AnswerCollector;

impl AnswerCollector {
    /// Parse and validate one submission.
    pub fn from_json(data: &str) -> Result<RawAnswers, CollectError> {
        let answers: RawAnswers = serde_json::from_str(data)?;
        answers.validate()?;
        tracing::debug!(age = answers.age, "answers collected");
        Ok(answers)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<RawAnswers, CollectError> {
        let mut data = String::new();
        reader.read_to_string(&mut data)?;
        Self::from_json(&data)
    }

    /// Read from a file, or from stdin when the path is `-`.
    pub fn from_path(path: &Path) -> Result<RawAnswers, CollectError> {
        if path.as_os_str() == "-" {
            return Self::from_reader(std::io::stdin().lock());
        }
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}
