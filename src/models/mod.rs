//! Closed identifier types for the rental catalogue

pub mod location;
pub mod vehicle;

pub use location::Location;
pub use vehicle::{TableVariant, VehicleCategory, VehicleKey, VehicleModel};

/// Raw identifier that does not name any known vehicle or location
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown identifier '{0}'")]
pub struct UnknownIdentifier(pub String);
