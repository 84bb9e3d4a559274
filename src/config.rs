//! Predictor configuration. JSON file, every field optional; CLI flags override it.

use crate::error::ConfigError;
use crate::features::FEATURE_DIM;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "BEVERAGE_PREDICTOR_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    /// Path to the trained ONNX classifier
    pub model_path: PathBuf,
    pub model: ModelConfig,
    /// Logging
    pub log: LogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Display names indexed by class code; empty means print the code
    pub class_labels: Vec<String>,
    /// Input width assumed when the model does not declare one
    pub expected_dim: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// One JSON report per submission instead of the rendered message
    pub json: bool,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.onnx"),
            model: ModelConfig::default(),
            log: LogConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            class_labels: Vec::new(),
            expected_dim: FEATURE_DIM,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl PredictorConfig {
    /// Load from JSON file if present; a missing file means defaults, an unreadable
    /// or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Path from [`CONFIG_ENV`], falling back to `config.json`.
    pub fn path_from_env() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.json"))
    }
}
