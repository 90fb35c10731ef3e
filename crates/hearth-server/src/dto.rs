use serde::Serialize;

// === HTTP DTOs ===

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub predicted_price: f64,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
