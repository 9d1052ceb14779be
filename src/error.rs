//! Error handling for the application

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

use crate::booking::BookingError;
use crate::contact::EnquiryError;
use crate::pricing::PricingError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error(transparent)]
    Enquiry(#[from] EnquiryError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

fn pricing_details(err: &PricingError) -> (StatusCode, &'static str, serde_json::Value) {
    match err {
        PricingError::UnknownVehicleType {
            vehicle_type_id,
            table,
        } => (
            StatusCode::NOT_FOUND,
            "UnknownVehicleType",
            json!({ "vehicleTypeId": vehicle_type_id, "tableVariant": table }),
        ),
        PricingError::InvalidRange {
            pickup_date,
            return_date,
        } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "InvalidRange",
            json!({ "pickupDate": pickup_date, "returnDate": return_date }),
        ),
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, Option<serde_json::Value>) {
        match self {
            AppError::Pricing(err) | AppError::Booking(BookingError::Pricing(err)) => {
                let (status, error_type, details) = pricing_details(err);
                (status, error_type, Some(details))
            }
            AppError::Booking(BookingError::MissingField(field))
            | AppError::Enquiry(EnquiryError::MissingField(field)) => (
                StatusCode::BAD_REQUEST,
                "MissingField",
                Some(json!({ "field": field })),
            ),
            AppError::Booking(BookingError::UnknownLocation(location)) => (
                StatusCode::NOT_FOUND,
                "UnknownLocation",
                Some(json!({ "pickupLocation": location })),
            ),
            AppError::Booking(BookingError::InvalidDate { field, value }) => (
                StatusCode::BAD_REQUEST,
                "InvalidDate",
                Some(json!({ "field": field, "value": value })),
            ),
            AppError::Booking(BookingError::InvalidTime { field, value }) => (
                StatusCode::BAD_REQUEST,
                "InvalidTime",
                Some(json!({ "field": field, "value": value })),
            ),
            AppError::Enquiry(EnquiryError::InvalidPhone(phone)) => (
                StatusCode::BAD_REQUEST,
                "InvalidPhone",
                Some(json!({ "phone": phone })),
            ),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BadRequest", None),
            AppError::Booking(BookingError::Render(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal", None)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_type, details) = self.parts();

        let message = if status.is_server_error() {
            tracing::error!("Internal error: {}", self);
            "Internal error".to_string()
        } else {
            tracing::warn!(error_type, "Rejected request: {}", self);
            self.to_string()
        };

        let body = ErrorResponse {
            error_type,
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::models::TableVariant;

    #[test]
    fn test_status_mapping() {
        let unknown = AppError::from(PricingError::UnknownVehicleType {
            vehicle_type_id: "hovercraft".to_string(),
            table: TableVariant::PerModel,
        });
        assert_eq!(unknown.parts().0, StatusCode::NOT_FOUND);
        assert_eq!(unknown.parts().1, "UnknownVehicleType");

        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let range = AppError::from(BookingError::from(PricingError::InvalidRange {
            pickup_date: date,
            return_date: date,
        }));
        assert_eq!(range.parts().0, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            range.parts().2,
            Some(json!({ "pickupDate": "2026-10-16", "returnDate": "2026-10-16" }))
        );

        let date = AppError::from(BookingError::InvalidDate {
            field: "pickupDate",
            value: "tomorrow".to_string(),
        });
        assert_eq!(date.parts().0, StatusCode::BAD_REQUEST);
        assert_eq!(date.parts().1, "InvalidDate");

        let phone = AppError::from(EnquiryError::InvalidPhone("123".to_string()));
        assert_eq!(phone.parts().0, StatusCode::BAD_REQUEST);

        let internal = AppError::from(BookingError::Render(askama::Error::Fmt(std::fmt::Error)));
        assert_eq!(internal.parts().0, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_internal_errors_hide_detail() {
        let err = AppError::from(BookingError::Render(askama::Error::Fmt(std::fmt::Error)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
