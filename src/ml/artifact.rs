use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::classifier::{Classifier, Label};
use super::error::ModelError;
use super::features::FeatureFrame;

// ---------------------------------------------------------------------------
// On-disk model artifact
// ---------------------------------------------------------------------------

/// A serialized pre-trained classifier.
///
/// Expected JSON schema:
///
/// ```json
/// {
///   "feature_names": ["Glucose", "BloodPressure", ...],
///   "estimator": {
///     "kind": "logistic_regression",
///     "coefficients": [0.035, -0.013, ...],
///     "intercept": -8.4,
///     "threshold": 0.5
///   }
/// }
/// ```
///
/// `kind` may also be `decision_tree` (`nodes`) or `random_forest` (`trees`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    pub estimator: Estimator,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Estimator {
    LogisticRegression {
        coefficients: Vec<f64>,
        intercept: f64,
        #[serde(default = "default_threshold")]
        threshold: f64,
    },
    DecisionTree(DecisionTree),
    RandomForest {
        trees: Vec<DecisionTree>,
    },
}

fn default_threshold() -> f64 {
    0.5
}

/// A binary decision tree stored as a flat node list; evaluation starts at
/// node 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TreeNode {
    /// Go `left` when `x[feature] <= threshold`, else `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: Label,
    },
}

impl ModelArtifact {
    /// Deserialize and validate an artifact.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        let artifact: ModelArtifact = serde_json::from_slice(bytes)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), ModelError> {
        let n = self.feature_names.len();
        if n == 0 {
            return Err(ModelError::InvalidModel("no feature names".into()));
        }
        match &self.estimator {
            Estimator::LogisticRegression { coefficients, .. } => {
                if coefficients.len() != n {
                    return Err(ModelError::InvalidModel(format!(
                        "{} coefficients for {n} features",
                        coefficients.len()
                    )));
                }
            }
            Estimator::DecisionTree(tree) => tree.validate(n)?,
            Estimator::RandomForest { trees } => {
                if trees.is_empty() {
                    return Err(ModelError::InvalidModel("random forest has no trees".into()));
                }
                for tree in trees {
                    tree.validate(n)?;
                }
            }
        }
        Ok(())
    }

    fn predict_row(&self, row: &[f64]) -> Result<Label, ModelError> {
        match &self.estimator {
            Estimator::LogisticRegression {
                coefficients,
                intercept,
                threshold,
            } => {
                let z: f64 = row
                    .iter()
                    .zip(coefficients)
                    .map(|(x, w)| x * w)
                    .sum::<f64>()
                    + intercept;
                let p = 1.0 / (1.0 + (-z).exp());
                Ok(Label::from(p >= *threshold))
            }
            Estimator::DecisionTree(tree) => tree.predict_row(row),
            Estimator::RandomForest { trees } => {
                let mut votes: BTreeMap<Label, usize> = BTreeMap::new();
                for tree in trees {
                    *votes.entry(tree.predict_row(row)?).or_default() += 1;
                }
                // Ties go to the larger label.
                votes
                    .into_iter()
                    .max_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)))
                    .map(|(label, _)| label)
                    .ok_or_else(|| ModelError::Prediction("random forest produced no votes".into()))
            }
        }
    }
}

impl Classifier for ModelArtifact {
    fn predict(&self, features: &FeatureFrame) -> Result<Vec<Label>, ModelError> {
        if features.columns() != self.feature_names.as_slice() {
            return Err(ModelError::FeatureMismatch {
                expected: self.feature_names.clone(),
                actual: features.columns().to_vec(),
            });
        }
        features
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                if row.len() != self.feature_names.len() {
                    return Err(ModelError::Prediction(format!(
                        "row {i} has {} values, expected {}",
                        row.len(),
                        self.feature_names.len()
                    )));
                }
                self.predict_row(row)
            })
            .collect()
    }
}

impl DecisionTree {
    fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::InvalidModel("decision tree has no nodes".into()));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature, left, right, ..
            } = node
            {
                if *feature >= n_features {
                    return Err(ModelError::InvalidModel(format!(
                        "node {i} splits on feature {feature}, model has {n_features}"
                    )));
                }
                if *left >= self.nodes.len() || *right >= self.nodes.len() {
                    return Err(ModelError::InvalidModel(format!(
                        "node {i} points outside the tree"
                    )));
                }
            }
        }
        Ok(())
    }

    fn predict_row(&self, row: &[f64]) -> Result<Label, ModelError> {
        let mut idx = 0;
        // A well-formed tree reaches a leaf in fewer steps than it has nodes.
        for _ in 0..self.nodes.len() {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { label }) => return Ok(*label),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = row.get(*feature).copied().ok_or_else(|| {
                        ModelError::Prediction(format!("missing feature {feature}"))
                    })?;
                    idx = if x <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ModelError::Prediction(format!("node {idx} does not exist")));
                }
            }
        }
        Err(ModelError::Prediction("decision tree does not reach a leaf".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::features::{PredictionInput, FEATURE_NAMES};

    fn names() -> Vec<String> {
        FEATURE_NAMES.iter().map(|s| s.to_string()).collect()
    }

    fn logistic(intercept: f64) -> ModelArtifact {
        ModelArtifact {
            feature_names: names(),
            estimator: Estimator::LogisticRegression {
                coefficients: vec![0.035, -0.013, 0.0, -0.001, 0.09, 0.9, 0.015],
                intercept,
                threshold: 0.5,
            },
        }
    }

    /// Glucose <= 127.5 → 0, else 1.
    fn stump() -> DecisionTree {
        DecisionTree {
            nodes: vec![
                TreeNode::Split { feature: 0, threshold: 127.5, left: 1, right: 2 },
                TreeNode::Leaf { label: 0 },
                TreeNode::Leaf { label: 1 },
            ],
        }
    }

    #[test]
    fn parses_json_with_default_threshold() {
        let json = format!(
            r#"{{"feature_names": {:?},
                "estimator": {{"kind": "logistic_regression",
                               "coefficients": [0,0,0,0,0,0,0], "intercept": 1.0}}}}"#,
            FEATURE_NAMES
        );
        let artifact = ModelArtifact::from_slice(json.as_bytes()).unwrap();
        match artifact.estimator {
            Estimator::LogisticRegression { threshold, .. } => assert_eq!(threshold, 0.5),
            other => panic!("unexpected estimator {other:?}"),
        }
    }

    #[test]
    fn garbage_is_a_deserialization_error() {
        let err = ModelArtifact::from_slice(b"\x80\x04\x95pickle").unwrap_err();
        assert!(matches!(err, ModelError::Deserialization(_)));
    }

    #[test]
    fn coefficient_count_is_validated() {
        let mut artifact = logistic(0.0);
        artifact.estimator = Estimator::LogisticRegression {
            coefficients: vec![1.0],
            intercept: 0.0,
            threshold: 0.5,
        };
        let bytes = serde_json::to_vec(&artifact).unwrap();
        assert!(matches!(
            ModelArtifact::from_slice(&bytes),
            Err(ModelError::InvalidModel(_))
        ));
    }

    #[test]
    fn logistic_regression_thresholds_probability() {
        let frame = FeatureFrame::single(&PredictionInput::default());
        assert_eq!(logistic(-8.4).predict(&frame).unwrap(), vec![0]);
        assert_eq!(logistic(20.0).predict(&frame).unwrap(), vec![1]);
    }

    #[test]
    fn reordered_columns_are_rejected() {
        let mut columns = names();
        columns.swap(0, 1);
        let frame = FeatureFrame::new(columns, vec![vec![0.0; 7]]);
        assert!(matches!(
            logistic(0.0).predict(&frame),
            Err(ModelError::FeatureMismatch { .. })
        ));
    }

    #[test]
    fn decision_tree_and_forest() {
        let high = PredictionInput { glucose: 180, ..PredictionInput::default() };
        let tree = ModelArtifact {
            feature_names: names(),
            estimator: Estimator::DecisionTree(stump()),
        };
        assert_eq!(tree.predict(&FeatureFrame::single(&high)).unwrap(), vec![1]);
        assert_eq!(
            tree.predict(&FeatureFrame::single(&PredictionInput::default())).unwrap(),
            vec![0]
        );

        let always_zero = DecisionTree { nodes: vec![TreeNode::Leaf { label: 0 }] };
        let forest = ModelArtifact {
            feature_names: names(),
            estimator: Estimator::RandomForest { trees: vec![stump(), always_zero] },
        };
        // one vote each way: tie goes to 1
        assert_eq!(forest.predict(&FeatureFrame::single(&high)).unwrap(), vec![1]);
    }

    #[test]
    fn cyclic_tree_fails_at_prediction() {
        let tree = DecisionTree {
            nodes: vec![TreeNode::Split { feature: 0, threshold: 0.0, left: 0, right: 0 }],
        };
        let artifact = ModelArtifact {
            feature_names: names(),
            estimator: Estimator::DecisionTree(tree),
        };
        let err = artifact
            .predict(&FeatureFrame::single(&PredictionInput::default()))
            .unwrap_err();
        assert!(err.to_string().contains("does not reach a leaf"));
    }
}
