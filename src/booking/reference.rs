//! Booking references

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Reference quoted to the customer, e.g. `EB483920`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BookingReference(String);

impl BookingReference {
    pub const PREFIX: &'static str = "EB";

    /// Issue a reference from the last six digits of the Unix time in
    /// milliseconds
    pub fn issue(now: DateTime<Utc>) -> Self {
        let tail = now.timestamp_millis().rem_euclid(1_000_000);
        Self(format!("{}{:06}", Self::PREFIX, tail))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
