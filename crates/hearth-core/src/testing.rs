//! Shared fixtures for unit tests.

use serde_json::{json, Value};

use crate::layout::TRAINING_COLUMNS;

pub(crate) const MEAN: [f64; 15] = [
    -119.57, 35.63, 28.64, 2635.76, 537.87, 1425.48, 499.54, 3.87, 0.443, 0.317, 0.0002, 0.111,
    0.129, 0.213, 5.43,
];

pub(crate) const SCALE: [f64; 15] = [
    2.0, 2.14, 12.59, 2181.6, 421.4, 1132.4, 382.3, 1.9, 0.497, 0.465, 0.0156, 0.314, 0.335,
    0.058, 2.47,
];

pub(crate) const COEF: [f64; 15] = [
    -86210.4, -91544.7, 13872.1, -12010.9, 29751.3, -42660.2, 26154.8, 75120.6, 9012.4,
    -18533.7, 2410.9, 1320.5, 3007.3, 10452.8, 1210.2,
];

pub(crate) const INTERCEPT: f64 = 206855.82;

pub(crate) fn column_names() -> Vec<String> {
    TRAINING_COLUMNS.iter().map(|c| c.to_string()).collect()
}

pub(crate) fn scaler_json() -> Value {
    json!({
        "feature_names": column_names(),
        "mean": MEAN,
        "scale": SCALE,
    })
}

pub(crate) fn linear_model_json() -> Value {
    json!({
        "kind": "linear",
        "feature_names": column_names(),
        "coef": COEF,
        "intercept": INTERCEPT,
    })
}

/// Two sklearn-style trees; leaves carry `feature: -2` and `threshold: -2.0`.
///
/// For [`sample_body`] under [`scaler_json`] the first tree reaches 450000.0
/// through median_income and bedroom_ratio, the second 420000.5 through
/// longitude.
pub(crate) fn forest_model_json() -> Value {
    json!({
        "kind": "forest",
        "feature_names": column_names(),
        "n_features": 15,
        "trees": [
            {
                "children_left": [1, -1, 3, -1, -1],
                "children_right": [2, -1, 4, -1, -1],
                "feature": [7, -2, 13, -2, -2],
                "threshold": [1.0, -2.0, 0.0, -2.0, -2.0],
                "value": [310000.0, 150000.0, 415000.0, 450000.0, 380000.0],
            },
            {
                "children_left": [1, -1, -1],
                "children_right": [2, -1, -1],
                "feature": [0, -2, -2],
                "threshold": [0.0, -2.0, -2.0],
                "value": [255000.25, 420000.5, 90000.0],
            },
        ],
    })
}

/// A Bay Area block with the room counts used throughout the tests.
pub(crate) fn sample_body() -> Value {
    json!({
        "longitude": -122.23,
        "latitude": 37.88,
        "housing_median_age": 41,
        "total_rooms": 2000,
        "total_bedrooms": 400,
        "population": 322,
        "households": 500,
        "median_income": 8.3252,
        "<1H OCEAN": 0,
        "INLAND": 0,
        "ISLAND": 0,
        "NEAR BAY": 1,
        "NEAR OCEAN": 0,
    })
}
