/// Prediction layer: the feature schema, the classifier capability and the
/// on-disk model artifact.

pub mod artifact;
pub mod classifier;
pub mod error;
pub mod features;
pub mod loader;

pub use classifier::{Classifier, Label};
pub use error::ModelError;
pub use features::{FeatureFrame, PredictionInput};

/// Display text for the positive label.
pub const POSITIVE_TEXT: &str = "Positif Diabetes";
/// Display text for every other label.
pub const NEGATIVE_TEXT: &str = "Negatif Diabetes";

/// Map a predicted label to its display text. Only `1` is positive.
pub fn outcome_text(label: Label) -> &'static str {
    if label == 1 {
        POSITIVE_TEXT
    } else {
        NEGATIVE_TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_is_positive() {
        assert_eq!(outcome_text(1), "Positif Diabetes");
        assert_eq!(outcome_text(0), "Negatif Diabetes");
        assert_eq!(outcome_text(2), "Negatif Diabetes");
        assert_eq!(outcome_text(-1), "Negatif Diabetes");
    }
}
