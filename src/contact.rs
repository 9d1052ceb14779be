//! Contact enquiries from the "Send Us a Message" form

use serde::{Deserialize, Serialize};
use tracing::info;

pub const ACKNOWLEDGEMENT: &str = "Thank you for your self-drive inquiry! We will contact you \
within 2 hours with availability, pricing, and running limit details.";

const PHONE_DIGITS: usize = 10;

/// Enquiry form as submitted by the site
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnquiryRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    /// Optional; accepted but not used, the team replies by phone
    pub email: Option<String>,
    pub service_type: Option<String>,
    /// Free text, optional; only its presence is logged
    pub message: Option<String>,
}

/// Enquiry errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnquiryError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone(String),
}

/// Accepted enquiry
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryAcknowledgement {
    pub name: String,
    pub phone: String,
    pub service_type: String,
    pub message: &'static str,
}

/// Normalize an Indian mobile number.
///
/// Spaces, dashes and plus signs are dropped and the last ten characters
/// kept, so `+91 98290-12345` becomes `9829012345`. Returns `None` unless
/// the result is ten digits starting with 6-9.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let cleaned: Vec<char> = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '+')
        .collect();
    let start = cleaned.len().saturating_sub(PHONE_DIGITS);
    let number: String = cleaned[start..].iter().collect();

    let mut digits = number.chars();
    let valid = number.chars().count() == PHONE_DIGITS
        && matches!(digits.next(), Some('6'..='9'))
        && digits.all(|c| c.is_ascii_digit());

    valid.then_some(number)
}

fn required(value: &Option<String>, field: &'static str) -> Result<String, EnquiryError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(EnquiryError::MissingField(field))
}

/// Validate an enquiry and acknowledge it
pub fn submit_enquiry(request: &EnquiryRequest) -> Result<EnquiryAcknowledgement, EnquiryError> {
    let name = required(&request.name, "name")?;
    let raw_phone = required(&request.phone, "phone")?;
    let service_type = required(&request.service_type, "serviceType")?;

    let phone = normalize_phone(&raw_phone).ok_or(EnquiryError::InvalidPhone(raw_phone))?;

    info!(
        service_type = %service_type,
        has_email = request.email.as_deref().is_some_and(|e| !e.is_empty()),
        has_message = request.message.as_deref().is_some_and(|m| !m.is_empty()),
        "Contact enquiry received"
    );

    Ok(EnquiryAcknowledgement {
        name,
        phone,
        service_type,
        message: ACKNOWLEDGEMENT,
    })
}
