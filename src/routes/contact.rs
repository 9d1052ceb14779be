//! Contact route handlers

use axum::{extract::rejection::JsonRejection, Json};

use crate::contact::{submit_enquiry, EnquiryAcknowledgement, EnquiryRequest};
use crate::error::Result;

/// Accept a contact enquiry
pub async fn create(
    payload: std::result::Result<Json<EnquiryRequest>, JsonRejection>,
) -> Result<Json<EnquiryAcknowledgement>> {
    let Json(request) = payload?;
    Ok(Json(submit_enquiry(&request)?))
}
