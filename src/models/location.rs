//! Pickup locations

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use super::UnknownIdentifier;

/// Branch where a self-drive vehicle is picked up and must be returned.
///
/// One-way rentals do not exist, so the pickup location is always the
/// return location as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Location {
    Khatushyamji,
    Sikar,
    Reengus,
    Jaipur,
}

impl Location {
    pub const ALL: &'static [Location] = &[
        Location::Khatushyamji,
        Location::Sikar,
        Location::Reengus,
        Location::Jaipur,
    ];

    /// Form value used by the site
    pub fn key(&self) -> &'static str {
        match self {
            Location::Khatushyamji => "khatushyamji",
            Location::Sikar => "sikar",
            Location::Reengus => "reengus",
            Location::Jaipur => "jaipur",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Khatushyamji => "Toran Dawar Khatushyamji",
            Location::Sikar => "Sawali Circle Sikar",
            Location::Reengus => "Bheru Ji Mode Reengus",
            Location::Jaipur => "Sindhi Camp Jaipur",
        }
    }
}

impl FromStr for Location {
    type Err = UnknownIdentifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .iter()
            .copied()
            .find(|location| location.key() == s)
            .ok_or_else(|| UnknownIdentifier(s.to_string()))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_keys() {
        for location in Location::ALL {
            assert_eq!(location.key().parse::<Location>(), Ok(*location));
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Jaipur".parse::<Location>().is_err());
        assert!(" jaipur".parse::<Location>().is_err());
        assert_eq!(
            "delhi".parse::<Location>(),
            Err(UnknownIdentifier("delhi".to_string()))
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Location::Jaipur.to_string(), "Sindhi Camp Jaipur");
        assert_eq!(Location::Khatushyamji.display_name(), "Toran Dawar Khatushyamji");
    }
}
