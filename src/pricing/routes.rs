//! Pricing route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::requests::QuoteRequest;
use super::responses::QuoteResponse;

/// Routes mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new().route("/quote", post(quote))
}

/// Price a rental for the booking form's live calculator
async fn quote(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>> {
    let Json(request) = payload?;

    let quote = state.engine.quote_dates(
        &request.vehicle_type_id,
        request.pickup_date,
        request.return_date,
        request.table_variant,
    )?;

    Ok(Json(QuoteResponse::from(&quote)))
}
