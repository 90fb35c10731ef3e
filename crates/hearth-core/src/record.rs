//! Single-row input record parsed from a request body.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::PredictError;
use crate::layout::{HOUSEHOLDS, TOTAL_BEDROOMS, TOTAL_ROOMS};

/// Feature name to numeric value, as sent by the caller.
///
/// Only the room counts are typed; every other feature is passed through
/// untouched and placed by the column layout later.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HouseRecord {
    values: BTreeMap<String, f64>,
}

/// The three raw fields the derived features are computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomCounts {
    pub total_rooms: f64,
    pub total_bedrooms: f64,
    pub households: f64,
}

impl HouseRecord {
    /// Parses a raw request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, PredictError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::from_json(&value)
    }

    /// Builds a record from a JSON object, coercing each value to a number.
    pub fn from_json(value: &Value) -> Result<Self, PredictError> {
        let Value::Object(map) = value else {
            return Err(PredictError::NotAnObject(json_type(value)));
        };

        let values = map
            .iter()
            .map(|(name, v)| Ok((name.clone(), coerce(name, v)?)))
            .collect::<Result<BTreeMap<_, _>, PredictError>>()?;

        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Result<f64, PredictError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| PredictError::MissingFeature(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn rooms(&self) -> Result<RoomCounts, PredictError> {
        Ok(RoomCounts {
            total_rooms: self.get(TOTAL_ROOMS)?,
            total_bedrooms: self.get(TOTAL_BEDROOMS)?,
            households: self.get(HOUSEHOLDS)?,
        })
    }
}

fn coerce(name: &str, value: &Value) -> Result<f64, PredictError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|x| x.is_finite())
        .ok_or_else(|| PredictError::NonNumeric {
            name: name.to_string(),
            value: value.to_string(),
        })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
