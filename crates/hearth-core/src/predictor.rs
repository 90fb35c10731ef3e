//! The prediction pipeline: derive, assemble, scale, infer, round.

use serde::Serialize;
use tracing::debug;

use crate::artifacts::{ArtifactPaths, Artifacts};
use crate::error::{ArtifactError, PredictError};
use crate::features::{DerivedFeatures, FeatureRow};
use crate::layout::ColumnLayout;
use crate::model::{Model, Regressor};
use crate::record::HouseRecord;
use crate::scaler::StandardScaler;

/// Outcome of a single prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    /// Price rounded to two decimal places.
    pub price: f64,
    pub derived: DerivedFeatures,
}

/// Read-only scaler and model bound to the column layout they were fitted on.
#[derive(Debug, Clone)]
pub struct Predictor {
    layout: ColumnLayout,
    scaler: StandardScaler,
    model: Model,
}

impl Predictor {
    /// Binds artifacts to a layout, rejecting any whose columns or width
    /// disagree with it.
    pub fn new(layout: ColumnLayout, artifacts: Artifacts) -> Result<Self, ArtifactError> {
        let Artifacts { scaler, model } = artifacts;

        if let Some(names) = &scaler.feature_names {
            layout.check_fitted("scaler", names)?;
        }
        layout.check_width("scaler", scaler.n_features())?;

        if let Some(names) = model.feature_names() {
            layout.check_fitted("model", names)?;
        }
        layout.check_width("model", model.n_features())?;

        Ok(Self { layout, scaler, model })
    }

    /// Loads both artifacts and binds them to the training layout.
    pub fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
        Self::new(ColumnLayout::training(), Artifacts::load(paths)?)
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    pub fn model_kind(&self) -> &'static str {
        self.model.kind()
    }

    pub fn predict(&self, record: &HouseRecord) -> Result<Prediction, PredictError> {
        let derived = DerivedFeatures::from_rooms(&record.rooms()?)?;
        let row = FeatureRow::assemble(record, &derived, &self.layout)?;
        let scaled = self.scaler.transform(&row)?;
        let raw = self.model.predict(&scaled)?;
        debug!(raw, "Model output");

        let price = round_price(raw);
        if !price.is_finite() {
            return Err(PredictError::Inference(format!("{raw} cannot be rounded to cents")));
        }

        Ok(Prediction { price, derived })
    }
}

/// Rounds to two decimal places, ties to even.
pub fn round_price(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
