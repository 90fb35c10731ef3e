//! Fitted regressors.
//!
//! A model artifact is tagged by `kind`:
//!
//! - `linear`: `intercept + coef · x`
//! - `forest`: mean of binary regression trees stored as flat node arrays

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, PredictError};

/// Marks a leaf in `children_left` / `children_right`.
pub const TREE_LEAF: i64 = -1;

/// A fitted model mapping a normalized feature vector to a price.
pub trait Regressor: Send + Sync {
    /// Width of the vector `predict` accepts.
    fn n_features(&self) -> usize;

    /// Column names recorded at fit time, if any.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    fn predict(&self, x: &[f64]) -> Result<f64, PredictError>;
}

fn check_width(expected: usize, x: &[f64]) -> Result<(), PredictError> {
    if x.len() == expected {
        return Ok(());
    }
    Err(PredictError::Shape {
        stage: "model",
        expected,
        actual: x.len(),
    })
}

fn finite(value: f64) -> Result<f64, PredictError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PredictError::Inference(format!("model produced {value}")))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Linear
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub coef: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.coef.is_empty() {
            return Err(ArtifactError::invalid("model", "linear model has no coefficients"));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.coef.len() {
                return Err(ArtifactError::invalid(
                    "model",
                    format!("{} feature names for {} coefficients", names.len(), self.coef.len()),
                ));
            }
        }
        Ok(())
    }
}

impl Regressor for LinearModel {
    fn n_features(&self) -> usize {
        self.coef.len()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict(&self, x: &[f64]) -> Result<f64, PredictError> {
        check_width(self.coef.len(), x)?;
        let dot: f64 = self.coef.iter().zip(x).map(|(c, v)| c * v).sum();
        finite(self.intercept + dot)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Forest
// ─────────────────────────────────────────────────────────────────────────────

/// One regression tree in flat array form; node 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    pub value: Vec<f64>,
}

impl RegressionTree {
    fn node_count(&self) -> usize {
        self.children_left.len()
    }

    /// Every split must point at a valid feature and at children stored after
    /// it, which rules out cycles during traversal.
    fn validate(&self, n_features: usize) -> Result<(), String> {
        let n = self.node_count();
        if n == 0 {
            return Err("tree has no nodes".into());
        }
        let lengths = [
            self.children_right.len(),
            self.feature.len(),
            self.threshold.len(),
            self.value.len(),
        ];
        if lengths.iter().any(|&len| len != n) {
            return Err("node arrays differ in length".into());
        }

        for node in 0..n {
            let (left, right) = (self.children_left[node], self.children_right[node]);
            if left == TREE_LEAF || right == TREE_LEAF {
                if left != right {
                    return Err(format!("node {node} has a single child"));
                }
                if !self.value[node].is_finite() {
                    return Err(format!("leaf {node} has a non-finite value"));
                }
                continue;
            }

            let in_range = |child: i64| child > node as i64 && (child as usize) < n;
            if !in_range(left) || !in_range(right) {
                return Err(format!("node {node} has an out-of-range child"));
            }
            let feature = self.feature[node];
            if feature < 0 || feature as usize >= n_features {
                return Err(format!("node {node} splits on feature {feature}"));
            }
        }
        Ok(())
    }

    fn predict(&self, x: &[f64]) -> f64 {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left == TREE_LEAF {
                return self.value[node];
            }
            // splits were fitted on float32 inputs
            let value = x[self.feature[node] as usize] as f32 as f64;
            node = if value <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestModel {
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub n_features: usize,
    pub trees: Vec<RegressionTree>,
}

impl ForestModel {
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.trees.is_empty() {
            return Err(ArtifactError::invalid("model", "forest has no trees"));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.n_features {
                return Err(ArtifactError::invalid(
                    "model",
                    format!("{} feature names for {} features", names.len(), self.n_features),
                ));
            }
        }
        for (i, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features)
                .map_err(|reason| ArtifactError::invalid("model", format!("tree {i}: {reason}")))?;
        }
        Ok(())
    }
}

impl Regressor for ForestModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict(&self, x: &[f64]) -> Result<f64, PredictError> {
        check_width(self.n_features, x)?;
        let total: f64 = self.trees.iter().map(|tree| tree.predict(x)).sum();
        finite(total / self.trees.len() as f64)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Artifact
// ─────────────────────────────────────────────────────────────────────────────

/// Any supported model artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Model {
    Linear(LinearModel),
    Forest(ForestModel),
}

impl Model {
    pub fn kind(&self) -> &'static str {
        match self {
            Model::Linear(_) => "linear",
            Model::Forest(_) => "forest",
        }
    }

    pub fn validate(&self) -> Result<(), ArtifactError> {
        match self {
            Model::Linear(m) => m.validate(),
            Model::Forest(m) => m.validate(),
        }
    }

    fn inner(&self) -> &dyn Regressor {
        match self {
            Model::Linear(m) => m,
            Model::Forest(m) => m,
        }
    }
}

impl Regressor for Model {
    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.inner().feature_names()
    }

    fn predict(&self, x: &[f64]) -> Result<f64, PredictError> {
        self.inner().predict(x)
    }
}
