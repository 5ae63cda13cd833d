use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use super::artifact::ModelArtifact;
use super::classifier::Classifier;
use super::error::ModelError;

/// Something that can produce the classifier. The dashboard deserializes a
/// file; tests substitute fakes.
pub trait ModelSource {
    fn load(&self) -> Result<Box<dyn Classifier>, ModelError>;

    /// Human readable origin, used in log lines.
    fn origin(&self) -> String;
}

/// A JSON model artifact at a fixed path.
#[derive(Debug, Clone)]
pub struct ModelFile {
    path: PathBuf,
}

impl ModelFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ModelSource for ModelFile {
    fn load(&self) -> Result<Box<dyn Classifier>, ModelError> {
        Ok(Box::new(load_model_file(&self.path)?))
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read the whole artifact in binary mode and deserialize it.
pub fn load_model_file(path: &Path) -> Result<ModelArtifact, ModelError> {
    let io_err = |source: std::io::Error| {
        if source.kind() == ErrorKind::NotFound {
            ModelError::FileMissing {
                path: path.to_path_buf(),
            }
        } else {
            ModelError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    };

    let mut file = std::fs::File::open(path).map_err(io_err)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(io_err)?;
    ModelArtifact::from_slice(&bytes)
}
