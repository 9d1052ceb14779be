//! Vehicle and location listings

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::error::Result;
use crate::models::{Location, TableVariant};
use crate::pricing::requests::VehicleListQuery;
use crate::pricing::responses::{LocationResponse, VehicleListResponse, VehicleResponse};
use crate::AppState;

/// Vehicles of one rate table, in catalogue order
pub async fn vehicles(
    State(state): State<AppState>,
    query: std::result::Result<Query<VehicleListQuery>, QueryRejection>,
) -> Result<Json<VehicleListResponse>> {
    let Query(query) = query?;

    let vehicles: Vec<VehicleResponse> = match query.table {
        TableVariant::PerModel => state
            .engine
            .per_model()
            .iter()
            .map(|(key, rate)| VehicleResponse::new(key, rate))
            .collect(),
        TableVariant::PerCategory => state
            .engine
            .per_category()
            .iter()
            .map(|(key, rate)| VehicleResponse::new(key, rate))
            .collect(),
    };

    Ok(Json(VehicleListResponse {
        table_variant: query.table,
        vehicles,
    }))
}

/// Pickup locations
pub async fn locations() -> Json<Vec<LocationResponse>> {
    Json(Location::ALL.iter().copied().map(LocationResponse::from).collect())
}
