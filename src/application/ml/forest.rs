use super::predictor::{DirectionClassifier, check_dimension, check_probabilities};
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::Prediction;
use serde::{Deserialize, Serialize};

/// One node of a flattened decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        /// [P(down), P(up)]
        proba: [f64; 2],
    },
}

/// A tree as a flat node array; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn validate(&self, n_features: usize) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::Invalid {
                reason: "tree has no nodes".to_string(),
            });
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                // children always point forward, so traversal terminates
                let in_range = |child: usize| child > idx && child < self.nodes.len();
                if !in_range(*left) || !in_range(*right) {
                    return Err(ModelError::Invalid {
                        reason: format!("node {} has invalid children ({}, {})", idx, left, right),
                    });
                }
                if *feature >= n_features {
                    return Err(ModelError::Invalid {
                        reason: format!(
                            "node {} splits on feature {} of {}",
                            idx, feature, n_features
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    fn leaf_proba(&self, features: &[f64]) -> Result<[f64; 2], PredictionError> {
        let mut idx = 0;
        loop {
            match self.nodes.get(idx) {
                Some(TreeNode::Leaf { proba }) => return Ok(*proba),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = features.get(*feature).copied().ok_or_else(|| {
                        PredictionError::InvalidOutput {
                            reason: format!("split on missing feature {}", feature),
                        }
                    })?;
                    idx = if value <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(PredictionError::InvalidOutput {
                        reason: format!("dangling node index {}", idx),
                    });
                }
            }
        }
    }
}

/// Random-forest style ensemble; probabilities are averaged over trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    pub n_features: usize,
    pub trees: Vec<DecisionTree>,
}

impl ForestModel {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::Invalid {
                reason: "forest has no trees".to_string(),
            });
        }
        for tree in &self.trees {
            tree.validate(self.n_features)?;
        }
        Ok(())
    }
}

impl DirectionClassifier for ForestModel {
    fn predict(&self, features: &[f64]) -> Result<Prediction, PredictionError> {
        check_dimension(self.n_features, features)?;

        let mut sum = [0.0_f64; 2];
        for tree in &self.trees {
            let proba = tree.leaf_proba(features)?;
            sum[0] += proba[0];
            sum[1] += proba[1];
        }
        let n = self.trees.len().max(1) as f64;
        let (p_down, p_up) = (sum[0] / n, sum[1] / n);
        check_probabilities(p_down, p_up)?;

        Ok(Prediction::from_probabilities(p_down, p_up))
    }

    fn n_features(&self) -> usize {
        self.n_features
    }

    fn name(&self) -> &str {
        "RandomForest"
    }
}
