//! HTTP routes

pub mod booking;
pub mod catalogue;
pub mod contact;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::{Config, ConfigError};
use crate::pricing;
use crate::AppState;

/// Application routes, without middleware
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/vehicles", get(catalogue::vehicles))
        .route("/api/locations", get(catalogue::locations))
        .route("/api/bookings", post(booking::create))
        .route("/api/contact", post(contact::create))
        .nest("/api/pricing", pricing::router())
        .with_state(state)
}

/// Application routes wrapped in tracing, compression and CORS
pub fn app(state: AppState, config: &Config) -> Result<Router, ConfigError> {
    let cors = match &config.cors_allow_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "CORS_ALLOW_ORIGIN",
                    value: origin.clone(),
                })?;
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any)
        }
        None => CorsLayer::permissive(),
    };

    Ok(router(state)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
