//! Prediction endpoint

use std::time::Instant;

use axum::{extract::State, Json};
use tracing::{debug, error, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, PositionalForm};
use crate::domain::RawListing;
use crate::infrastructure::observability::{
    record_prediction, record_unknown_category, PredictionOutcome,
};

/// POST /predict
///
/// Reads the listing from form values by position and returns `[price]`.
pub async fn predict(
    State(state): State<AppState>,
    form: PositionalForm,
) -> Result<Json<Vec<f64>>, ApiError> {
    let start = Instant::now();
    let values = form.values();

    let result =
        RawListing::from_form_values(&values).and_then(|listing| state.predictor.predict(&listing));

    match result {
        Ok(prediction) => {
            for group in &prediction.unmatched {
                record_unknown_category(*group);
            }

            if !prediction.unmatched.is_empty() {
                warn!(
                    unmatched = ?prediction.unmatched,
                    "Prediction made without indicators for unknown categories"
                );
            }

            record_prediction(PredictionOutcome::Success, start.elapsed());
            debug!(
                price = prediction.price,
                log_price = prediction.log_price,
                duration_us = start.elapsed().as_micros() as u64,
                "Price predicted"
            );

            Ok(Json(vec![prediction.price]))
        }
        Err(e) if e.is_client_error() => {
            record_prediction(PredictionOutcome::Rejected, start.elapsed());
            warn!(error = %e, fields = ?form.names(), "Prediction request rejected");
            Err(ApiError::from(e))
        }
        Err(e) => {
            record_prediction(PredictionOutcome::Failed, start.elapsed());
            error!(error = %e, "Prediction failed");
            Err(ApiError::from(e))
        }
    }
}
