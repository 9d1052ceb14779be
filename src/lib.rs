//! Elite Brothers self-drive rentals web backend.
//!
//! JSON API behind the marketing site: vehicle catalogue, rental quotes,
//! booking confirmations and contact enquiries.

pub mod booking;
pub mod config;
pub mod contact;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use pricing::QuoteEngine;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<QuoteEngine>,
}

impl AppState {
    pub fn new(engine: QuoteEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
