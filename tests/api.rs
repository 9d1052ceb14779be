//! Router tests: requests are driven in-process through the Axum router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use elitebrothers_web::pricing::QuoteEngine;
use elitebrothers_web::{routes, AppState};

fn app() -> Router {
    routes::router(AppState::new(QuoteEngine::with_builtin_rates()))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_quote_per_model_weekly() {
    let (status, body) = post(
        "/api/pricing/quote",
        json!({
            "vehicleTypeId": "thar",
            "pickupDate": "2026-10-20",
            "returnDate": "2026-10-30",
            "tableVariant": "per-model"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["durationDays"], 10);
    assert_eq!(body["basePrice"], json!({ "amount": "48500", "currency": "INR" }));
    assert_eq!(body["finalPrice"]["amount"], "48500");
    assert_eq!(body["discountRate"].as_f64(), Some(0.0));
    assert!(body.get("discountMessage").is_none());
    assert_eq!(body["kmAllowance"], json!({ "mode": "weekly", "description": "1500km" }));
    assert_eq!(body["breakdown"]["basis"], "weekly");
    assert_eq!(body["breakdown"]["weeks"], 1);
    assert_eq!(body["breakdown"]["extraDays"], 3);
    assert_eq!(
        body["pricingDetails"],
        "Weekly Rate: ₹32,000 × 1 week(s) + ₹5,500 × 3 day(s)"
    );
    assert!(body["overageRatePerKm"]["daily"].is_number());
    assert_eq!(body["overageRatePerKm"]["daily"].as_f64(), Some(8.0));
    assert_eq!(body["overageRatePerKm"]["weekly"].as_f64(), Some(6.0));
}

#[tokio::test]
async fn test_quote_defaults_to_per_model() {
    let (status, body) = post(
        "/api/pricing/quote",
        json!({
            "vehicleTypeId": "swift-new",
            "pickupDate": "2026-10-20",
            "returnDate": "2026-10-23"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tableVariant"], "per-model");
    assert_eq!(body["basePrice"]["amount"], "8400");
    assert_eq!(body["kmAllowance"]["mode"], "daily");
    assert_eq!(body["kmAllowance"]["description"], "300km");
}

#[tokio::test]
async fn test_quote_per_category_monthly_discount() {
    let (status, body) = post(
        "/api/pricing/quote",
        json!({
            "vehicleTypeId": "suv",
            "pickupDate": "2026-11-01",
            "returnDate": "2026-12-01",
            "tableVariant": "per-category"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["durationDays"], 30);
    assert_eq!(body["basePrice"]["amount"], "66000");
    assert_eq!(body["discount"], "monthly");
    assert!(body["discountRate"].is_number());
    assert_eq!(body["discountRate"].as_f64(), Some(0.25));
    assert_eq!(body["finalPrice"]["amount"], "49500");
    assert_eq!(body["savings"]["amount"], "16500");
    assert_eq!(body["discountMessage"], "25% Monthly Discount Applied!");
    assert_eq!(body["breakdown"]["basis"], "perDay");
    assert_eq!(body["pricingDetails"], "₹2,200 per day × 30 days");
}

#[tokio::test]
async fn test_quote_per_category_single_day() {
    let (status, body) = post(
        "/api/pricing/quote",
        json!({
            "vehicleTypeId": "car",
            "pickupDate": "2026-10-20",
            "returnDate": "2026-10-21",
            "tableVariant": "per-category"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["breakdown"]["basis"], "singleDay");
    assert_eq!(body["breakdown"]["rate12h"], "1200");
    assert_eq!(body["breakdown"]["rate24h"], "1200");
    assert_eq!(body["finalPrice"]["amount"], "1200");
}

#[tokio::test]
async fn test_quote_unknown_vehicle() {
    for table in ["per-model", "per-category"] {
        let (status, body) = post(
            "/api/pricing/quote",
            json!({
                "vehicleTypeId": "hovercraft",
                "pickupDate": "2026-10-20",
                "returnDate": "2026-10-22",
                "tableVariant": table
            }),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errorType"], "UnknownVehicleType");
        assert_eq!(body["details"]["vehicleTypeId"], "hovercraft");
        assert_eq!(body["details"]["tableVariant"], table);
    }
}

#[tokio::test]
async fn test_quote_invalid_range() {
    let (status, body) = post(
        "/api/pricing/quote",
        json!({
            "vehicleTypeId": "thar",
            "pickupDate": "2026-10-20",
            "returnDate": "2026-10-20"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorType"], "InvalidRange");
    assert_eq!(body["details"]["pickupDate"], "2026-10-20");
}

#[tokio::test]
async fn test_quote_malformed_body() {
    let (status, body) = post("/api/pricing/quote", json!({ "vehicleTypeId": "thar" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorType"], "BadRequest");
}

#[tokio::test]
async fn test_vehicle_listing() {
    let (status, body) = get("/api/vehicles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tableVariant"], "per-model");
    let vehicles = body["vehicles"].as_array().unwrap();
    assert_eq!(vehicles.len(), 6);
    assert_eq!(vehicles[0]["id"], "swift-new");
    assert_eq!(vehicles[0]["name"], "New Swift");
    assert_eq!(vehicles[0]["weeklyRate"]["amount"], "18000");

    let (status, body) = get("/api/vehicles?table=per-category").await;
    assert_eq!(status, StatusCode::OK);
    let vehicles = body["vehicles"].as_array().unwrap();
    assert_eq!(vehicles.len(), 4);
    assert_eq!(vehicles[2]["id"], "suv");
    assert_eq!(vehicles[2]["rate24h"]["amount"], "2200");

    let (status, _) = get("/api/vehicles?table=by-colour").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_locations() {
    let (status, body) = get("/api/locations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);
    assert_eq!(body[3], json!({ "id": "jaipur", "name": "Sindhi Camp Jaipur" }));
}

#[tokio::test]
async fn test_booking_confirmed() {
    let (status, body) = post(
        "/api/bookings",
        json!({
            "pickupLocation": "sikar",
            "pickupDate": "2026-10-20",
            "returnDate": "2026-10-23",
            "pickupTime": "10:00",
            "vehicleType": "swift-new"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let reference = body["reference"].as_str().unwrap();
    assert!(reference.starts_with("EB"));
    assert_eq!(reference.len(), 8);
    assert_eq!(body["pickupLocation"], "Sawali Circle Sikar");
    assert_eq!(body["returnLocation"], "Sawali Circle Sikar");
    assert_eq!(body["returnTime"], "10:00");
    assert_eq!(body["quote"]["finalPrice"]["amount"], "8400");
    assert!(body["summary"]
        .as_str()
        .unwrap()
        .contains("Daily Rate: ₹2,800 × 3 day(s)"));
}

#[tokio::test]
async fn test_booking_missing_field() {
    let (status, body) = post(
        "/api/bookings",
        json!({
            "pickupLocation": "sikar",
            "pickupDate": "2026-10-20",
            "returnDate": "2026-10-23",
            "vehicleType": "swift-new"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorType"], "MissingField");
    assert_eq!(body["details"]["field"], "pickupTime");
}

#[tokio::test]
async fn test_booking_unknown_location() {
    let (status, body) = post(
        "/api/bookings",
        json!({
            "pickupLocation": "delhi",
            "pickupDate": "2026-10-20",
            "returnDate": "2026-10-23",
            "pickupTime": "10:00",
            "vehicleType": "swift-new"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorType"], "UnknownLocation");
}

#[tokio::test]
async fn test_booking_blank_date_is_missing() {
    let (status, body) = post(
        "/api/bookings",
        json!({
            "pickupLocation": "sikar",
            "pickupDate": "",
            "returnDate": "2026-10-23",
            "pickupTime": "10:00",
            "vehicleType": "swift-new"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorType"], "MissingField");
    assert_eq!(body["details"]["field"], "pickupDate");
}

#[tokio::test]
async fn test_booking_malformed_date() {
    let (status, body) = post(
        "/api/bookings",
        json!({
            "pickupLocation": "sikar",
            "pickupDate": "2026-10-20",
            "returnDate": "23/10/2026",
            "pickupTime": "10:00",
            "vehicleType": "swift-new"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorType"], "InvalidDate");
    assert_eq!(body["details"]["field"], "returnDate");
    assert_eq!(body["details"]["value"], "23/10/2026");
}

#[tokio::test]
async fn test_contact_enquiry() {
    let (status, body) = post(
        "/api/contact",
        json!({
            "name": "Ravi",
            "phone": "+91 98290 12345",
            "serviceType": "self-drive"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phone"], "9829012345");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("within 2 hours"));

    let (status, body) = post(
        "/api/contact",
        json!({ "name": "Ravi", "phone": "12345", "serviceType": "self-drive" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errorType"], "InvalidPhone");
}
