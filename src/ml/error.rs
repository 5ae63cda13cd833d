use std::path::PathBuf;

use thiserror::Error;

/// Failures of the model path, from opening the artifact to reading a label.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model file not found: {}", path.display())]
    FileMissing { path: PathBuf },

    #[error("reading model file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("model file is not a valid serialized model: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("invalid model: {0}")]
    InvalidModel(String),

    #[error("feature mismatch: model expects {expected:?} but got {actual:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        actual: Vec<String>,
    },

    #[error("prediction failed: {0}")]
    Prediction(String),
}
