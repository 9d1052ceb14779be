//! Request DTOs for pricing API endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::TableVariant;

/// Request to price a rental
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub vehicle_type_id: String,
    pub pickup_date: NaiveDate,
    pub return_date: NaiveDate,
    #[serde(default)]
    pub table_variant: TableVariant,
}

/// Query string for the vehicle listing
#[derive(Debug, Deserialize)]
pub struct VehicleListQuery {
    #[serde(default)]
    pub table: TableVariant,
}
