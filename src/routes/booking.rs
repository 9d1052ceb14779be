//! Booking route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::booking::{confirm_booking, BookingConfirmation, BookingReference, BookingRequest};
use crate::error::Result;
use crate::pricing::responses::QuoteResponse;
use crate::AppState;

/// Response for an accepted booking
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub reference: BookingReference,
    pub vehicle_name: &'static str,
    pub pickup_location: &'static str,
    pub return_location: &'static str,
    pub pickup_date: NaiveDate,
    pub pickup_time: String,
    pub return_date: NaiveDate,
    pub return_time: String,
    pub quote: QuoteResponse,
    pub availability: String,
    pub summary: String,
}

impl From<BookingConfirmation> for BookingResponse {
    fn from(confirmation: BookingConfirmation) -> Self {
        Self {
            vehicle_name: confirmation.quote.vehicle_name,
            pickup_location: confirmation.location.display_name(),
            return_location: confirmation.return_location().display_name(),
            pickup_date: confirmation.pickup_date,
            pickup_time: confirmation.pickup_time.format("%H:%M").to_string(),
            return_date: confirmation.return_date,
            return_time: confirmation.return_time.format("%H:%M").to_string(),
            quote: QuoteResponse::from(&confirmation.quote),
            reference: confirmation.reference,
            availability: confirmation.availability,
            summary: confirmation.summary,
        }
    }
}

/// Confirm a self-drive booking
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingResponse>)> {
    let Json(request) = payload?;

    let confirmation = confirm_booking(&request, &state.engine, Utc::now())?;

    Ok((StatusCode::CREATED, Json(BookingResponse::from(confirmation))))
}
