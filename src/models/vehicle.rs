//! Vehicle identifiers for the two rate catalogues.
//!
//! The site sells rentals at two granularities: a specific model (a Thar, a
//! New Swift) and a coarse vehicle class (any SUV). Each granularity has its
//! own closed identifier type and its own rate table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use super::UnknownIdentifier;

/// Which rate catalogue a request is priced against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableVariant {
    #[default]
    PerModel,
    PerCategory,
}

impl fmt::Display for TableVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableVariant::PerModel => f.write_str("per-model"),
            TableVariant::PerCategory => f.write_str("per-category"),
        }
    }
}

/// Key of a rate table entry.
///
/// Parsing is exact and case-sensitive; anything else is an
/// [`UnknownIdentifier`].
pub trait VehicleKey:
    Copy + Eq + Ord + Hash + fmt::Debug + FromStr<Err = UnknownIdentifier> + Send + Sync + 'static
{
    /// Catalogue this key belongs to
    const TABLE: TableVariant;

    /// Every key, in catalogue order
    const ALL: &'static [Self];

    /// Form value used by the site
    fn key(&self) -> &'static str;

    fn display_name(&self) -> &'static str;
}

fn parse_key<K: VehicleKey>(s: &str) -> Result<K, UnknownIdentifier> {
    K::ALL
        .iter()
        .copied()
        .find(|k| k.key() == s)
        .ok_or_else(|| UnknownIdentifier(s.to_string()))
}

/// Specific vehicle model in the self-drive fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleModel {
    SwiftNew,
    SwiftOld,
    SwiftDzire,
    Thar,
    Scorpio,
    Venue,
}

impl VehicleKey for VehicleModel {
    const TABLE: TableVariant = TableVariant::PerModel;

    const ALL: &'static [Self] = &[
        VehicleModel::SwiftNew,
        VehicleModel::SwiftOld,
        VehicleModel::SwiftDzire,
        VehicleModel::Thar,
        VehicleModel::Scorpio,
        VehicleModel::Venue,
    ];

    fn key(&self) -> &'static str {
        match self {
            VehicleModel::SwiftNew => "swift-new",
            VehicleModel::SwiftOld => "swift-old",
            VehicleModel::SwiftDzire => "swift-dzire",
            VehicleModel::Thar => "thar",
            VehicleModel::Scorpio => "scorpio",
            VehicleModel::Venue => "venue",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            VehicleModel::SwiftNew => "New Swift",
            VehicleModel::SwiftOld => "Old Swift",
            VehicleModel::SwiftDzire => "Swift Dzire",
            VehicleModel::Thar => "Mahindra Thar",
            VehicleModel::Scorpio => "Mahindra Scorpio",
            VehicleModel::Venue => "Hyundai Venue",
        }
    }
}

impl FromStr for VehicleModel {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s)
    }
}

/// Coarse vehicle class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VehicleCategory {
    Scooter,
    Car,
    Suv,
    Tempo,
}

impl VehicleKey for VehicleCategory {
    const TABLE: TableVariant = TableVariant::PerCategory;

    const ALL: &'static [Self] = &[
        VehicleCategory::Scooter,
        VehicleCategory::Car,
        VehicleCategory::Suv,
        VehicleCategory::Tempo,
    ];

    fn key(&self) -> &'static str {
        match self {
            VehicleCategory::Scooter => "scooter",
            VehicleCategory::Car => "car",
            VehicleCategory::Suv => "suv",
            VehicleCategory::Tempo => "tempo",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            VehicleCategory::Scooter => "Scooters & Bikes",
            VehicleCategory::Car => "Cars & Sedans",
            VehicleCategory::Suv => "SUVs & MUVs",
            VehicleCategory::Tempo => "Tempo Travellers",
        }
    }
}

impl FromStr for VehicleCategory {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_keys_round_trip_through_parse() {
        for model in VehicleModel::ALL {
            assert_eq!(model.key().parse::<VehicleModel>(), Ok(*model));
        }
    }

    #[test]
    fn test_category_keys_round_trip_through_parse() {
        for category in VehicleCategory::ALL {
            assert_eq!(category.key().parse::<VehicleCategory>(), Ok(*category));
        }
    }

    #[test]
    fn test_parse_rejects_near_misses() {
        assert!("Thar".parse::<VehicleModel>().is_err());
        assert!("thar ".parse::<VehicleModel>().is_err());
        // "dzire" is only a display alias on the site, not a priced model
        assert!("dzire".parse::<VehicleModel>().is_err());
        assert!("SUV".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn test_keys_do_not_cross_tables() {
        assert!("suv".parse::<VehicleModel>().is_err());
        assert!("thar".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn test_serde_keys_match_form_values() {
        let json = serde_json::to_string(&VehicleModel::SwiftDzire).unwrap();
        assert_eq!(json, "\"swift-dzire\"");

        let json = serde_json::to_string(&TableVariant::PerCategory).unwrap();
        assert_eq!(json, "\"per-category\"");

        let variant: TableVariant = serde_json::from_str("\"per-model\"").unwrap();
        assert_eq!(variant, TableVariant::PerModel);
    }

    #[test]
    fn test_default_table_is_per_model() {
        assert_eq!(TableVariant::default(), TableVariant::PerModel);
        assert_eq!(TableVariant::PerModel.to_string(), "per-model");
    }
}
