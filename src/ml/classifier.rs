use super::error::ModelError;
use super::features::FeatureFrame;

/// A predicted class. The diabetes models only emit `0` or `1`.
pub type Label = i64;

/// The one capability the dashboard needs from a model: one label per row.
pub trait Classifier {
    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Label>, ModelError>;
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Label>, ModelError> {
        (**self).predict(features)
    }
}
