//! Rate tables.
//!
//! Two independent catalogues are shipped with the build: one keyed by
//! [`VehicleModel`] and one keyed by [`VehicleCategory`]. Tables are
//! read-only after construction and may also be loaded from JSON.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{TableVariant, VehicleCategory, VehicleKey, VehicleModel};

/// Distance included before per-km overage applies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KmLimit {
    pub daily: String,
    pub weekly: String,
}

impl Default for KmLimit {
    fn default() -> Self {
        Self {
            daily: "300km".to_string(),
            weekly: "1500km".to_string(),
        }
    }
}

/// Rate structure for one vehicle type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRate {
    pub rate_12h: Decimal,
    pub rate_24h: Decimal,
    pub weekly_rate: Decimal,
    #[serde(default)]
    pub km_limit: KmLimit,
}

impl VehicleRate {
    fn new(rate_12h: Decimal, rate_24h: Decimal, weekly_rate: Decimal) -> Self {
        Self {
            rate_12h,
            rate_24h,
            weekly_rate,
            km_limit: KmLimit::default(),
        }
    }

    /// Category records only carry one day price; 12h and 24h are the same
    /// and the weekly figure is seven days at that price.
    fn flat(daily: Decimal) -> Self {
        Self::new(daily, daily, daily * Decimal::from(7))
    }

    /// Check `rate_24h >= rate_12h > 0`, `weekly_rate > 0` and that every
    /// amount is whole rupees
    pub fn validate(&self, key: &str) -> Result<(), RateTableError> {
        let invalid = |reason: &str| RateTableError::InvalidRate {
            key: key.to_string(),
            reason: reason.to_string(),
        };

        let amounts = [
            ("rate_12h", self.rate_12h),
            ("rate_24h", self.rate_24h),
            ("weekly_rate", self.weekly_rate),
        ];
        if let Some((name, _)) = amounts.iter().find(|(_, amount)| !amount.fract().is_zero()) {
            return Err(invalid(&format!("{} must be a whole rupee amount", name)));
        }

        if self.rate_12h <= Decimal::ZERO {
            return Err(invalid("rate_12h must be positive"));
        }
        if self.rate_24h < self.rate_12h {
            return Err(invalid("rate_24h must not be below rate_12h"));
        }
        if self.weekly_rate <= Decimal::ZERO {
            return Err(invalid("weekly_rate must be positive"));
        }
        Ok(())
    }
}

/// Rate table loading errors
#[derive(Debug, thiserror::Error)]
pub enum RateTableError {
    #[error("unknown {table} vehicle type '{key}' in rate table")]
    UnknownKey { table: TableVariant, key: String },

    #[error("invalid rates for '{key}': {reason}")]
    InvalidRate { key: String, reason: String },

    #[error("rate table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read rate table {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable catalogue of rates keyed by `K`
#[derive(Debug, Clone)]
pub struct RateTable<K: VehicleKey> {
    rates: BTreeMap<K, VehicleRate>,
}

impl<K: VehicleKey> RateTable<K> {
    /// Build a table, validating every record
    pub fn new(rates: BTreeMap<K, VehicleRate>) -> Result<Self, RateTableError> {
        for (key, rate) in &rates {
            rate.validate(key.key())?;
        }
        Ok(Self { rates })
    }

    /// Build a table from string-keyed records, as found in a JSON file
    pub fn from_raw(raw: BTreeMap<String, VehicleRate>) -> Result<Self, RateTableError> {
        let rates = raw
            .into_iter()
            .map(|(key, rate)| {
                key.parse::<K>()
                    .map(|k| (k, rate))
                    .map_err(|_| RateTableError::UnknownKey { table: K::TABLE, key })
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Self::new(rates)
    }

    /// Exact, case-sensitive lookup of a raw vehicle type identifier
    pub fn lookup(&self, vehicle_type_id: &str) -> Option<(K, &VehicleRate)> {
        let key = vehicle_type_id.parse::<K>().ok()?;
        self.rates.get(&key).map(|rate| (key, rate))
    }

    pub fn get(&self, key: K) -> Option<&VehicleRate> {
        self.rates.get(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, &VehicleRate)> + '_ {
        self.rates.iter().map(|(key, rate)| (*key, rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

/// Per-model rates shipped with the site
pub fn per_model_rates() -> RateTable<VehicleModel> {
    let rates = BTreeMap::from([
        (VehicleModel::SwiftNew, VehicleRate::new(dec!(1800), dec!(2800), dec!(18000))),
        (VehicleModel::SwiftOld, VehicleRate::new(dec!(1700), dec!(2700), dec!(17000))),
        (VehicleModel::SwiftDzire, VehicleRate::new(dec!(1900), dec!(2900), dec!(19000))),
        (VehicleModel::Thar, VehicleRate::new(dec!(3500), dec!(5500), dec!(32000))),
        (VehicleModel::Scorpio, VehicleRate::new(dec!(3500), dec!(5500), dec!(30000))),
        (VehicleModel::Venue, VehicleRate::new(dec!(2000), dec!(3000), dec!(20000))),
    ]);
    RateTable { rates }
}

/// Per-category base prices shipped with the site
pub fn per_category_rates() -> RateTable<VehicleCategory> {
    let rates = BTreeMap::from([
        (VehicleCategory::Scooter, VehicleRate::flat(dec!(300))),
        (VehicleCategory::Car, VehicleRate::flat(dec!(1200))),
        (VehicleCategory::Suv, VehicleRate::flat(dec!(2200))),
        (VehicleCategory::Tempo, VehicleRate::flat(dec!(3500))),
    ]);
    RateTable { rates }
}

/// On-disk layout of a rate table override
#[derive(Debug, Deserialize)]
pub struct RateTableFile {
    pub per_model: BTreeMap<String, VehicleRate>,
    pub per_category: BTreeMap<String, VehicleRate>,
}
