//! Pinned column order shared with the training pipeline.

use crate::error::ArtifactError;

pub const TOTAL_ROOMS: &str = "total_rooms";
pub const TOTAL_BEDROOMS: &str = "total_bedrooms";
pub const HOUSEHOLDS: &str = "households";

pub const BEDROOM_RATIO: &str = "bedroom_ratio";
pub const HOUSEHOLD_ROOMS: &str = "household_rooms";

/// Columns in the order the scaler and model were fitted on: the raw
/// California housing features, the one-hot ocean proximity columns, then the
/// two derived features.
pub const TRAINING_COLUMNS: [&str; 15] = [
    "longitude",
    "latitude",
    "housing_median_age",
    TOTAL_ROOMS,
    TOTAL_BEDROOMS,
    "population",
    HOUSEHOLDS,
    "median_income",
    "<1H OCEAN",
    "INLAND",
    "ISLAND",
    "NEAR BAY",
    "NEAR OCEAN",
    BEDROOM_RATIO,
    HOUSEHOLD_ROOMS,
];

/// Ordered list of feature columns a fitted artifact consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: Vec<String>,
}

impl ColumnLayout {
    /// The layout the shipped scaler and model were trained with.
    pub fn training() -> Self {
        Self::new(TRAINING_COLUMNS.iter().map(|c| c.to_string()).collect())
    }

    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Rejects an artifact whose recorded column names differ from this layout
    /// in name or order.
    pub fn check_fitted(
        &self,
        artifact: &'static str,
        fitted: &[String],
    ) -> Result<(), ArtifactError> {
        if fitted == self.columns.as_slice() {
            return Ok(());
        }
        Err(ArtifactError::ColumnMismatch {
            artifact,
            expected: self.columns.clone(),
            found: fitted.to_vec(),
        })
    }

    /// Rejects an artifact fitted on a different number of features.
    pub fn check_width(&self, artifact: &'static str, width: usize) -> Result<(), ArtifactError> {
        if width == self.len() {
            return Ok(());
        }
        Err(ArtifactError::Shape {
            artifact,
            expected: self.len(),
            actual: width,
        })
    }
}
