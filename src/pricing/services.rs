//! Quote engine.
//!
//! Turns a vehicle type and a rental period into a priced quote against one
//! of the two rate tables. The engine owns its tables; nothing is read from
//! ambient state and nothing is cached between calls.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::models::{TableVariant, VehicleCategory, VehicleKey, VehicleModel};

use super::calculators::{
    apply_discount, format_rupees, weekly_split, BillingMode, DiscountTier, RentalPeriod,
    DAILY_OVERAGE_PER_KM, DAYS_PER_WEEK, WEEKLY_OVERAGE_PER_KM,
};
use super::models::{
    per_category_rates, per_model_rates, RateTable, RateTableError, RateTableFile, VehicleRate,
};

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Unknown {table} vehicle type '{vehicle_type_id}'")]
    UnknownVehicleType {
        vehicle_type_id: String,
        table: TableVariant,
    },

    #[error("Return date {return_date} must be after pickup date {pickup_date}")]
    InvalidRange {
        pickup_date: NaiveDate,
        return_date: NaiveDate,
    },
}

/// How the base price was built up
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "basis", rename_all = "camelCase")]
pub enum PriceBreakdown {
    /// Whole weeks at the weekly rate plus remainder days at the 24h rate
    #[serde(rename_all = "camelCase")]
    Weekly {
        weeks: u32,
        extra_days: u32,
        weekly_rate: Decimal,
        daily_rate: Decimal,
    },
    /// Every day at the 24h rate
    #[serde(rename_all = "camelCase")]
    Daily { days: u32, daily_rate: Decimal },
    /// Multi-day category rental at the flat day price, before discount
    #[serde(rename_all = "camelCase")]
    PerDay { days: u32, daily_rate: Decimal },
    /// Single-day category rental; both half and full day are offered
    #[serde(rename_all = "camelCase")]
    SingleDay { rate_12h: Decimal, rate_24h: Decimal },
}

/// Running limit that applies to a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KmAllowance {
    pub mode: BillingMode,
    pub description: String,
}

/// Fixed per-km overage charges, serialized as plain numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverageRates {
    #[serde(with = "rust_decimal::serde::float")]
    pub daily: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub weekly: Decimal,
}

impl Default for OverageRates {
    fn default() -> Self {
        Self {
            daily: DAILY_OVERAGE_PER_KM,
            weekly: WEEKLY_OVERAGE_PER_KM,
        }
    }
}

/// Result of a quote calculation
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub vehicle_type_id: &'static str,
    pub vehicle_name: &'static str,
    pub table_variant: TableVariant,
    pub duration_days: u32,
    pub base_price: Decimal,
    pub discount: DiscountTier,
    pub final_price: Decimal,
    pub savings: Decimal,
    pub breakdown: PriceBreakdown,
    pub km_allowance: KmAllowance,
    pub overage_rate_per_km: OverageRates,
}

impl Quote {
    fn priced<K: VehicleKey>(
        key: K,
        duration_days: u32,
        base_price: Decimal,
        discount: DiscountTier,
        breakdown: PriceBreakdown,
        rate: &VehicleRate,
    ) -> Self {
        let (final_price, savings) = apply_discount(base_price, discount);

        let mode = BillingMode::for_duration(duration_days);
        let description = match mode {
            BillingMode::Daily => rate.km_limit.daily.clone(),
            BillingMode::Weekly => rate.km_limit.weekly.clone(),
        };

        Quote {
            vehicle_type_id: key.key(),
            vehicle_name: key.display_name(),
            table_variant: K::TABLE,
            duration_days,
            base_price,
            discount,
            final_price,
            savings,
            breakdown,
            km_allowance: KmAllowance { mode, description },
            overage_rate_per_km: OverageRates::default(),
        }
    }

    /// "Weekly Rate: ₹32,000 × 1 week(s) + ₹5,500 × 3 day(s)" for the model
    /// table, "₹1,200 per day × 3 days" for the category table
    pub fn pricing_line(&self) -> String {
        match &self.breakdown {
            PriceBreakdown::Weekly {
                weeks,
                extra_days,
                weekly_rate,
                daily_rate,
            } => {
                let mut line = format!(
                    "Weekly Rate: {} × {} week(s)",
                    format_rupees(*weekly_rate),
                    weeks
                );
                if *extra_days > 0 {
                    line.push_str(&format!(
                        " + {} × {} day(s)",
                        format_rupees(*daily_rate),
                        extra_days
                    ));
                }
                line
            }
            PriceBreakdown::Daily { days, daily_rate } => {
                format!("Daily Rate: {} × {} day(s)", format_rupees(*daily_rate), days)
            }
            PriceBreakdown::PerDay { days, daily_rate } => {
                format!("{} per day × {} days", format_rupees(*daily_rate), days)
            }
            PriceBreakdown::SingleDay { rate_12h, rate_24h } => format!(
                "12hrs: {} | 24hrs: {}",
                format_rupees(*rate_12h),
                format_rupees(*rate_24h)
            ),
        }
    }

    /// "Running Limit: 1500km per week"
    pub fn running_limit_line(&self) -> String {
        format!(
            "Running Limit: {} per {}",
            self.km_allowance.description,
            self.km_allowance.mode.period_noun()
        )
    }

    /// "Extra KM: ₹8 per km (daily) / ₹6 per km (weekly)"
    pub fn overage_line(&self) -> String {
        format!(
            "Extra KM: ₹{} per km (daily) / ₹{} per km (weekly)",
            self.overage_rate_per_km.daily, self.overage_rate_per_km.weekly
        )
    }
}

/// Per-model pricing: weekly blocks plus remainder days, never discounted.
///
/// Seven days or more always discloses the weekly running limit, even when
/// remainder days are billed at the 24h rate.
fn quote_per_model(key: VehicleModel, rate: &VehicleRate, duration_days: u32) -> Quote {
    let (base_price, breakdown) = if duration_days >= DAYS_PER_WEEK {
        let (weeks, extra_days) = weekly_split(duration_days);
        (
            rate.weekly_rate * Decimal::from(weeks) + rate.rate_24h * Decimal::from(extra_days),
            PriceBreakdown::Weekly {
                weeks,
                extra_days,
                weekly_rate: rate.weekly_rate,
                daily_rate: rate.rate_24h,
            },
        )
    } else {
        (
            rate.rate_24h * Decimal::from(duration_days),
            PriceBreakdown::Daily {
                days: duration_days,
                daily_rate: rate.rate_24h,
            },
        )
    };

    Quote::priced(key, duration_days, base_price, DiscountTier::None, breakdown, rate)
}

/// Per-category pricing: 24h rate per day with the long-rental discount
fn quote_per_category(key: VehicleCategory, rate: &VehicleRate, duration_days: u32) -> Quote {
    let (base_price, breakdown) = if duration_days == 1 {
        (
            rate.rate_24h,
            PriceBreakdown::SingleDay {
                rate_12h: rate.rate_12h,
                rate_24h: rate.rate_24h,
            },
        )
    } else {
        (
            rate.rate_24h * Decimal::from(duration_days),
            PriceBreakdown::PerDay {
                days: duration_days,
                daily_rate: rate.rate_24h,
            },
        )
    };

    let discount = DiscountTier::for_duration(duration_days);
    Quote::priced(key, duration_days, base_price, discount, breakdown, rate)
}

/// Quote engine holding both rate tables
#[derive(Debug, Clone)]
pub struct QuoteEngine {
    per_model: RateTable<VehicleModel>,
    per_category: RateTable<VehicleCategory>,
}

impl QuoteEngine {
    pub fn new(
        per_model: RateTable<VehicleModel>,
        per_category: RateTable<VehicleCategory>,
    ) -> Self {
        Self {
            per_model,
            per_category,
        }
    }

    /// Engine priced with the tables shipped in the build
    pub fn with_builtin_rates() -> Self {
        Self::new(per_model_rates(), per_category_rates())
    }

    /// Engine priced with tables from a JSON document
    pub fn from_json(json: &str) -> Result<Self, RateTableError> {
        let file: RateTableFile = serde_json::from_str(json)?;
        Ok(Self::new(
            RateTable::from_raw(file.per_model)?,
            RateTable::from_raw(file.per_category)?,
        ))
    }

    /// Engine priced with tables from a JSON file on disk
    pub fn load(path: &Path) -> Result<Self, RateTableError> {
        let json = std::fs::read_to_string(path).map_err(|source| RateTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn per_model(&self) -> &RateTable<VehicleModel> {
        &self.per_model
    }

    pub fn per_category(&self) -> &RateTable<VehicleCategory> {
        &self.per_category
    }

    /// Price a rental period against the chosen table
    pub fn quote(
        &self,
        vehicle_type_id: &str,
        period: &RentalPeriod,
        table: TableVariant,
    ) -> Result<Quote, PricingError> {
        let unknown = || PricingError::UnknownVehicleType {
            vehicle_type_id: vehicle_type_id.to_string(),
            table,
        };
        let duration_days = period.duration_days();

        let quote = match table {
            TableVariant::PerModel => {
                let (key, rate) = self.per_model.lookup(vehicle_type_id).ok_or_else(unknown)?;
                quote_per_model(key, rate, duration_days)
            }
            TableVariant::PerCategory => {
                let (key, rate) = self
                    .per_category
                    .lookup(vehicle_type_id)
                    .ok_or_else(unknown)?;
                quote_per_category(key, rate, duration_days)
            }
        };

        debug!(
            vehicle = quote.vehicle_type_id,
            %table,
            days = duration_days,
            total = %quote.final_price,
            "Quote calculated"
        );

        Ok(quote)
    }

    /// Resolve the rental period, then price it
    pub fn quote_dates(
        &self,
        vehicle_type_id: &str,
        pickup_date: NaiveDate,
        return_date: NaiveDate,
        table: TableVariant,
    ) -> Result<Quote, PricingError> {
        let period = RentalPeriod::resolve(pickup_date, return_date)?;
        self.quote(vehicle_type_id, &period, table)
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::with_builtin_rates()
    }
}
