//! Core pricing calculation functions.
//!
//! Pure functions for rental math - no tables, no clock.

use chrono::NaiveDate;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::pricing::services::PricingError;

pub const DAYS_PER_WEEK: u32 = 7;
pub const DAYS_PER_MONTH: u32 = 30;

/// Charge per km beyond the daily allowance
pub const DAILY_OVERAGE_PER_KM: Decimal = dec!(8);
/// Charge per km beyond the weekly allowance
pub const WEEKLY_OVERAGE_PER_KM: Decimal = dec!(6);

/// Round to specified decimal places, halves away from zero.
///
/// Quotes are shown in whole rupees and a half rupee always rounds up.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use elitebrothers_web::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(3));
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Validated pickup/return pair with its billable day count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    pickup_date: NaiveDate,
    return_date: NaiveDate,
    duration_days: u32,
}

impl RentalPeriod {
    /// Resolve whole rental days between two calendar dates.
    ///
    /// Dates are midnight-anchored, so the difference is already a whole
    /// number of days. A return on the pickup date, or before it, is an
    /// [`PricingError::InvalidRange`] rather than a free rental.
    pub fn resolve(pickup_date: NaiveDate, return_date: NaiveDate) -> Result<Self, PricingError> {
        let invalid = || PricingError::InvalidRange {
            pickup_date,
            return_date,
        };

        let days = (return_date - pickup_date).num_days();
        if days < 1 {
            return Err(invalid());
        }
        let duration_days = u32::try_from(days).map_err(|_| invalid())?;

        Ok(Self {
            pickup_date,
            return_date,
            duration_days,
        })
    }

    pub fn pickup_date(&self) -> NaiveDate {
        self.pickup_date
    }

    pub fn return_date(&self) -> NaiveDate {
        self.return_date
    }

    /// Always at least one
    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }
}

/// Split a duration into whole weeks and remaining days
pub fn weekly_split(duration_days: u32) -> (u32, u32) {
    (duration_days / DAYS_PER_WEEK, duration_days % DAYS_PER_WEEK)
}

/// Which running limit a rental is disclosed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingMode {
    Daily,
    Weekly,
}

impl BillingMode {
    /// Seven days or more is weekly, remainder days included
    pub fn for_duration(duration_days: u32) -> Self {
        if duration_days >= DAYS_PER_WEEK {
            BillingMode::Weekly
        } else {
            BillingMode::Daily
        }
    }

    pub fn overage_per_km(&self) -> Decimal {
        match self {
            BillingMode::Daily => DAILY_OVERAGE_PER_KM,
            BillingMode::Weekly => WEEKLY_OVERAGE_PER_KM,
        }
    }

    /// Unit the allowance is quoted per ("300km per day")
    pub fn period_noun(&self) -> &'static str {
        match self {
            BillingMode::Daily => "day",
            BillingMode::Weekly => "week",
        }
    }
}

/// Long-rental discount tier. Tiers never stack; the highest match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountTier {
    None,
    Weekly,
    Monthly,
}

impl DiscountTier {
    pub fn for_duration(duration_days: u32) -> Self {
        if duration_days >= DAYS_PER_MONTH {
            DiscountTier::Monthly
        } else if duration_days >= DAYS_PER_WEEK {
            DiscountTier::Weekly
        } else {
            DiscountTier::None
        }
    }

    pub fn rate(&self) -> Decimal {
        match self {
            DiscountTier::None => Decimal::ZERO,
            DiscountTier::Weekly => dec!(0.15),
            DiscountTier::Monthly => dec!(0.25),
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            DiscountTier::None => None,
            DiscountTier::Weekly => Some("Weekly"),
            DiscountTier::Monthly => Some("Monthly"),
        }
    }

    /// Banner text shown alongside a discounted price
    pub fn message(&self) -> Option<String> {
        let label = self.label()?;
        let percent = (self.rate() * Decimal::ONE_HUNDRED).normalize();
        Some(format!("{}% {} Discount Applied!", percent, label))
    }
}

/// Apply a discount tier to a base price.
///
/// # Returns
/// Tuple of (final_price, savings), final price rounded to whole rupees
pub fn apply_discount(base_price: Decimal, tier: DiscountTier) -> (Decimal, Decimal) {
    let final_price = round_money(base_price * (Decimal::ONE - tier.rate()), 0);
    (final_price, base_price - final_price)
}

/// Format whole rupees with Indian digit grouping, e.g. `₹1,00,000`
pub fn format_rupees(amount: Decimal) -> String {
    let rounded = round_money(amount, 0);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    if digits.len() <= 3 {
        return format!("{sign}₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{sign}₹{},{tail}", groups.join(","))
}
