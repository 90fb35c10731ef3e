//! Price prediction handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use hearth_core::HouseRecord;
use tracing::{info, warn};

use crate::dto::PredictResponse;
use crate::error::AppError;
use crate::state::ServerState;

/// POST /predict - Predicts a price for one house.
///
/// The body is parsed here rather than through the `Json` extractor, and body
/// rejections (such as exceeding the size limit) are taken as values, so every
/// failure is reported as 400.
pub async fn predict(
    State(state): State<Arc<ServerState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<PredictResponse>, AppError> {
    let body = body.map_err(|e| {
        warn!(kind = "body", status = %e.status(), "Prediction rejected: {}", e.body_text());
        e
    })?;

    let prediction = HouseRecord::from_slice(&body)
        .and_then(|record| state.predictor.predict(&record))
        .map_err(|e| {
            warn!(kind = e.kind(), "Prediction rejected: {}", e);
            e
        })?;

    info!(
        bedroom_ratio = prediction.derived.bedroom_ratio,
        household_rooms = prediction.derived.household_rooms,
        "Predicted price {:.2}",
        prediction.price
    );
    Ok(Json(PredictResponse {
        predicted_price: prediction.price,
    }))
}
