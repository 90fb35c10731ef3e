//! Fitted standardization applied before inference.

use serde::{Deserialize, Serialize};

use crate::error::{ArtifactError, PredictError};
use crate::features::FeatureRow;

/// Per-column standardization: `z = (x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Column names the scaler was fitted on, when the exporter recorded them.
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
    #[serde(default = "default_true")]
    pub with_mean: bool,
    #[serde(default = "default_true")]
    pub with_std: bool,
}

fn default_true() -> bool {
    true
}

impl StandardScaler {
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Checks that the fitted parameters are consistent with each other.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.mean.is_empty() {
            return Err(ArtifactError::invalid("scaler", "no fitted columns"));
        }
        if self.scale.len() != self.mean.len() {
            return Err(ArtifactError::invalid(
                "scaler",
                format!("{} means but {} scales", self.mean.len(), self.scale.len()),
            ));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.mean.len() {
                return Err(ArtifactError::invalid(
                    "scaler",
                    format!("{} feature names for {} columns", names.len(), self.mean.len()),
                ));
            }
        }
        if self.mean.iter().chain(&self.scale).any(|v| !v.is_finite()) {
            return Err(ArtifactError::invalid("scaler", "non-finite parameter"));
        }
        Ok(())
    }

    pub fn transform(&self, row: &FeatureRow) -> Result<Vec<f64>, PredictError> {
        if row.len() != self.n_features() {
            return Err(PredictError::Shape {
                stage: "scaler",
                expected: self.n_features(),
                actual: row.len(),
            });
        }

        let scaled = row
            .as_slice()
            .iter()
            .zip(self.mean.iter().zip(&self.scale))
            .map(|(&x, (&mean, &scale))| {
                let centred = if self.with_mean { x - mean } else { x };
                match (self.with_std, scale) {
                    (false, _) => centred,
                    // constant column at fit time
                    (true, s) if s == 0.0 => centred,
                    (true, s) => centred / s,
                }
            })
            .collect();

        Ok(scaled)
    }
}
