//! Self-drive booking flow.
//!
//! Validates the booking form, prices it against the per-model table and
//! issues a confirmation. Nothing is stored; the team follows up by phone.

pub mod reference;

use askama::Template;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use tracing::info;

use crate::models::{Location, TableVariant};
use crate::pricing::{PricingError, Quote, QuoteEngine, RentalPeriod};

pub use reference::BookingReference;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Booking form as submitted by the site
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BookingRequest {
    pub pickup_location: Option<String>,
    pub pickup_date: Option<String>,
    pub return_date: Option<String>,
    pub pickup_time: Option<String>,
    pub return_time: Option<String>,
    pub vehicle_type: Option<String>,
}

/// Booking errors
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Unknown pickup location '{0}'")]
    UnknownLocation(String),

    #[error("Invalid {field} '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid {field} '{value}', expected HH:MM")]
    InvalidTime { field: &'static str, value: String },

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error("Failed to render booking summary: {0}")]
    Render(#[from] askama::Error),
}

/// Accepted booking
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub reference: BookingReference,
    pub location: Location,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub return_date: NaiveDate,
    pub return_time: NaiveTime,
    pub quote: Quote,
    /// Short availability notice
    pub availability: String,
    /// Full plain-text confirmation
    pub summary: String,
}

impl BookingConfirmation {
    /// Vehicles always come back to where they were picked up
    pub fn return_location(&self) -> Location {
        self.location
    }
}

#[derive(Template)]
#[template(path = "booking/confirmation.txt")]
struct ConfirmationTemplate<'a> {
    reference: &'a str,
    vehicle_name: &'a str,
    location_name: &'a str,
    pickup_date: NaiveDate,
    pickup_time: String,
    return_date: NaiveDate,
    return_time: String,
    duration_days: u32,
    pricing_line: String,
    running_limit_line: String,
    overage_line: String,
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str, BookingError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(BookingError::MissingField(field))
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| BookingError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

fn parse_time(value: &str, field: &'static str) -> Result<NaiveTime, BookingError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| BookingError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

/// Validate and price a booking request.
///
/// # Arguments
/// * `request` - Booking form
/// * `engine` - Quote engine; bookings are always priced per model
/// * `now` - Issue time, used for the booking reference
pub fn confirm_booking(
    request: &BookingRequest,
    engine: &QuoteEngine,
    now: DateTime<Utc>,
) -> Result<BookingConfirmation, BookingError> {
    let location_key = required(&request.pickup_location, "pickupLocation")?;
    let pickup_date = required(&request.pickup_date, "pickupDate")?;
    let return_date = required(&request.return_date, "returnDate")?;
    let pickup_time = required(&request.pickup_time, "pickupTime")?;
    let vehicle_type = required(&request.vehicle_type, "vehicleType")?;

    let pickup_date = parse_date(pickup_date, "pickupDate")?;
    let return_date = parse_date(return_date, "returnDate")?;

    let pickup_time = parse_time(pickup_time, "pickupTime")?;
    let return_time = match request.return_time.as_deref().filter(|v| !v.is_empty()) {
        Some(value) => parse_time(value, "returnTime")?,
        None => pickup_time,
    };

    let location: Location = location_key
        .parse()
        .map_err(|_| BookingError::UnknownLocation(location_key.to_string()))?;

    let period = RentalPeriod::resolve(pickup_date, return_date)?;
    let quote = engine.quote(vehicle_type, &period, TableVariant::PerModel)?;
    let reference = BookingReference::issue(now);

    let availability = format!(
        "Great! {} available for {} day(s) at {}. {}. Same-location return required.",
        quote.vehicle_name,
        quote.duration_days,
        location.display_name(),
        quote.running_limit_line()
    );

    let summary = ConfirmationTemplate {
        reference: reference.as_str(),
        vehicle_name: quote.vehicle_name,
        location_name: location.display_name(),
        pickup_date,
        pickup_time: pickup_time.format(TIME_FORMAT).to_string(),
        return_date,
        return_time: return_time.format(TIME_FORMAT).to_string(),
        duration_days: quote.duration_days,
        pricing_line: quote.pricing_line(),
        running_limit_line: quote.running_limit_line(),
        overage_line: quote.overage_line(),
    }
    .render()?;

    info!(
        reference = %reference,
        vehicle = quote.vehicle_type_id,
        location = location.key(),
        days = quote.duration_days,
        "Booking confirmed"
    );

    Ok(BookingConfirmation {
        reference,
        location,
        pickup_date,
        pickup_time,
        return_date,
        return_time,
        quote,
        availability,
        summary,
    })
}
