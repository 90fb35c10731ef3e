//! Derived features and row assembly.

use serde::Serialize;

use crate::error::PredictError;
use crate::layout::{ColumnLayout, BEDROOM_RATIO, HOUSEHOLDS, HOUSEHOLD_ROOMS, TOTAL_ROOMS};
use crate::record::{HouseRecord, RoomCounts};

/// Features computed at request time from the room counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedFeatures {
    /// `total_bedrooms / total_rooms`
    pub bedroom_ratio: f64,
    /// `total_rooms / households`
    pub household_rooms: f64,
}

impl DerivedFeatures {
    pub fn from_rooms(rooms: &RoomCounts) -> Result<Self, PredictError> {
        let bedroom_ratio =
            ratio(BEDROOM_RATIO, rooms.total_bedrooms, rooms.total_rooms, TOTAL_ROOMS)?;
        let household_rooms =
            ratio(HOUSEHOLD_ROOMS, rooms.total_rooms, rooms.households, HOUSEHOLDS)?;

        Ok(Self {
            bedroom_ratio,
            household_rooms,
        })
    }

    /// Looks up a derived feature by column name.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            BEDROOM_RATIO => Some(self.bedroom_ratio),
            HOUSEHOLD_ROOMS => Some(self.household_rooms),
            _ => None,
        }
    }
}

fn ratio(
    feature: &'static str,
    numerator: f64,
    denominator: f64,
    denominator_name: &'static str,
) -> Result<f64, PredictError> {
    if denominator == 0.0 {
        return Err(PredictError::DivisionByZero {
            feature,
            denominator: denominator_name,
        });
    }

    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(PredictError::Inference(format!("{feature} is not finite")));
    }
    Ok(value)
}

/// One feature vector in layout order, ready for scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    values: Vec<f64>,
}

impl FeatureRow {
    /// Places record values and derived features in the layout's column order.
    ///
    /// Derived columns always take the computed value, even when the caller
    /// sent a key of the same name.
    pub fn assemble(
        record: &HouseRecord,
        derived: &DerivedFeatures,
        layout: &ColumnLayout,
    ) -> Result<Self, PredictError> {
        if let Some(unknown) = record.names().find(|name| !layout.contains(name)) {
            return Err(PredictError::UnknownFeature(unknown.to_string()));
        }

        let values = layout
            .columns()
            .iter()
            .map(|column| match derived.get(column) {
                Some(value) => Ok(value),
                None => record.get(column),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { values })
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Vec<f64>> for FeatureRow {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}
