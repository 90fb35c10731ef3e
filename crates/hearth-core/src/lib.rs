//! Feature derivation, scaling and regression inference for hearth.
//!
//! This crate turns a caller-supplied house description into a price:
//!
//! - [`HouseRecord`] — JSON object of feature values, coerced to numbers
//! - [`DerivedFeatures`] — `bedroom_ratio` and `household_rooms`
//! - [`ColumnLayout`] — the column order the artifacts were fitted on
//! - [`StandardScaler`] and [`Model`] — fitted artifacts loaded from disk
//! - [`Predictor`] — binds the above and runs one prediction
//!
//! # Example
//!
//! ```rust,no_run
//! use hearth_core::{ArtifactPaths, HouseRecord, Predictor};
//!
//! let predictor = Predictor::load(&ArtifactPaths::default())?;
//! let record = HouseRecord::from_slice(br#"{"total_rooms": 2000, "total_bedrooms": 400}"#)?;
//! let prediction = predictor.predict(&record)?;
//! println!("{}", prediction.price);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod artifacts;
mod error;
mod features;
mod layout;
mod model;
mod predictor;
mod record;
mod scaler;

#[cfg(test)]
mod testing;

pub use artifacts::{ArtifactPaths, Artifacts, DEFAULT_MODELS_DIR, MODEL_FILE, SCALER_FILE};
pub use error::{ArtifactError, PredictError};
pub use features::{DerivedFeatures, FeatureRow};
pub use layout::{
    ColumnLayout, BEDROOM_RATIO, HOUSEHOLDS, HOUSEHOLD_ROOMS, TOTAL_BEDROOMS, TOTAL_ROOMS,
    TRAINING_COLUMNS,
};
pub use model::{ForestModel, LinearModel, Model, RegressionTree, Regressor, TREE_LEAF};
pub use predictor::{round_price, Prediction, Predictor};
pub use record::{HouseRecord, RoomCounts};
pub use scaler::StandardScaler;
