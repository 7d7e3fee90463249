use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visa requirement category for a destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaCategory {
    VisaFree,
    VisaOnArrival,
    EVisa,
    VisaRequired,
}

impl VisaCategory {
    /// All categories in legend order
    pub const ALL: [VisaCategory; 4] = [
        VisaCategory::VisaFree,
        VisaCategory::VisaOnArrival,
        VisaCategory::EVisa,
        VisaCategory::VisaRequired,
    ];

    /// Categories backed by a curated list (everything except the default)
    pub const SPECIAL: [VisaCategory; 3] = [
        VisaCategory::VisaFree,
        VisaCategory::VisaOnArrival,
        VisaCategory::EVisa,
    ];

    /// Stable key used in the cache artifact and exports
    pub fn key(self) -> &'static str {
        match self {
            VisaCategory::VisaFree => "visa_free",
            VisaCategory::VisaOnArrival => "visa_on_arrival",
            VisaCategory::EVisa => "e_visa",
            VisaCategory::VisaRequired => "visa_required",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VisaCategory::VisaFree => "Visa Free",
            VisaCategory::VisaOnArrival => "Visa on Arrival",
            VisaCategory::EVisa => "e-Visa",
            VisaCategory::VisaRequired => "Visa Required",
        }
    }

    /// Map fill color as a hex string
    pub fn color(self) -> &'static str {
        match self {
            VisaCategory::VisaFree => "#00CC96",
            VisaCategory::VisaOnArrival => "#FFA15A",
            VisaCategory::EVisa => "#636EFA",
            VisaCategory::VisaRequired => "#EF553B",
        }
    }

    /// Same palette as RGB triple, for the terminal view
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            VisaCategory::VisaFree => (0x00, 0xCC, 0x96),
            VisaCategory::VisaOnArrival => (0xFF, 0xA1, 0x5A),
            VisaCategory::EVisa => (0x63, 0x6E, 0xFA),
            VisaCategory::VisaRequired => (0xEF, 0x55, 0x3B),
        }
    }
}

impl fmt::Display for VisaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for VisaCategory {
    type Err = String;

    /// Accepts keys (`e_visa`), kebab-case (`e-visa`) and labels (`e-Visa`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match norm.as_str() {
            "visa_free" => Ok(VisaCategory::VisaFree),
            "visa_on_arrival" => Ok(VisaCategory::VisaOnArrival),
            "e_visa" | "evisa" => Ok(VisaCategory::EVisa),
            "visa_required" => Ok(VisaCategory::VisaRequired),
            _ => Err(format!("unknown visa category: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!("visa-free".parse::<VisaCategory>(), Ok(VisaCategory::VisaFree));
        assert_eq!("e_visa".parse::<VisaCategory>(), Ok(VisaCategory::EVisa));
        assert_eq!("e-Visa".parse::<VisaCategory>(), Ok(VisaCategory::EVisa));
        assert_eq!(
            "Visa on Arrival".parse::<VisaCategory>(),
            Ok(VisaCategory::VisaOnArrival)
        );
        assert!("visa".parse::<VisaCategory>().is_err());
    }

    #[test]
    fn test_palette_matches_hex() {
        for category in VisaCategory::ALL {
            let (r, g, b) = category.rgb();
            assert_eq!(category.color(), format!("#{:02X}{:02X}{:02X}", r, g, b));
        }
    }

    #[test]
    fn test_serde_key() {
        let json = serde_json::to_string(&VisaCategory::VisaOnArrival).unwrap();
        assert_eq!(json, "\"visa_on_arrival\"");
    }
}
