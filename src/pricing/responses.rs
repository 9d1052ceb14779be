//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Location, TableVariant, VehicleKey};

use super::calculators::DiscountTier;
use super::models::{KmLimit, VehicleRate};
use super::services::{KmAllowance, OverageRates, PriceBreakdown, Quote};

pub const CURRENCY: &str = "INR";

/// Money value for JSON responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn inr(amount: Decimal) -> Self {
        Self {
            amount: amount.normalize(),
            currency: CURRENCY.to_string(),
        }
    }
}

/// Response for a quote calculation
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub vehicle_type_id: String,
    pub vehicle_name: String,
    pub table_variant: TableVariant,
    pub duration_days: u32,
    pub base_price: MoneyResponse,
    pub discount: DiscountTier,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_rate: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_message: Option<String>,
    pub final_price: MoneyResponse,
    pub savings: MoneyResponse,
    pub breakdown: PriceBreakdown,
    pub pricing_details: String,
    pub km_allowance: KmAllowance,
    pub overage_rate_per_km: OverageRates,
}

impl From<&Quote> for QuoteResponse {
    fn from(quote: &Quote) -> Self {
        // savings are only advertised when something was actually saved
        let discount_message = if quote.savings > Decimal::ZERO {
            quote.discount.message()
        } else {
            None
        };

        Self {
            vehicle_type_id: quote.vehicle_type_id.to_string(),
            vehicle_name: quote.vehicle_name.to_string(),
            table_variant: quote.table_variant,
            duration_days: quote.duration_days,
            base_price: MoneyResponse::inr(quote.base_price),
            discount: quote.discount,
            discount_rate: quote.discount.rate(),
            discount_message,
            final_price: MoneyResponse::inr(quote.final_price),
            savings: MoneyResponse::inr(quote.savings),
            breakdown: quote.breakdown.clone(),
            pricing_details: quote.pricing_line(),
            km_allowance: quote.km_allowance.clone(),
            overage_rate_per_km: quote.overage_rate_per_km,
        }
    }
}

/// One entry of the vehicle listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: &'static str,
    pub name: &'static str,
    pub rate_12h: MoneyResponse,
    pub rate_24h: MoneyResponse,
    pub weekly_rate: MoneyResponse,
    pub km_limit: KmLimit,
    pub overage_rate_per_km: OverageRates,
}

impl VehicleResponse {
    pub fn new<K: VehicleKey>(key: K, rate: &VehicleRate) -> Self {
        Self {
            id: key.key(),
            name: key.display_name(),
            rate_12h: MoneyResponse::inr(rate.rate_12h),
            rate_24h: MoneyResponse::inr(rate.rate_24h),
            weekly_rate: MoneyResponse::inr(rate.weekly_rate),
            km_limit: rate.km_limit.clone(),
            overage_rate_per_km: OverageRates::default(),
        }
    }
}

/// Vehicle listing for one table
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListResponse {
    pub table_variant: TableVariant,
    pub vehicles: Vec<VehicleResponse>,
}

/// One pickup location
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub id: &'static str,
    pub name: &'static str,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.key(),
            name: location.display_name(),
        }
    }
}
