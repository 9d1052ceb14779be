//! Pricing engine module.
//!
//! Rate tables, rental-period resolution and quote calculation for the
//! self-drive fleet, plus the JSON endpoint the site's price calculator
//! calls.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_money, BillingMode, DiscountTier, RentalPeriod};
pub use models::{RateTable, RateTableError, VehicleRate};
pub use routes::router;
pub use services::{PricingError, Quote, QuoteEngine};
