use serde::{Deserialize, Serialize};

use crate::classify::VisaCategory;

/// Passport the embedded lists were curated for
pub const PASSPORT: &str = "Sri Lanka";

/// Demonym used in page headings
pub const PASSPORT_DEMONYM: &str = "Sri Lankans";

/// Where and when the embedded lists were taken from
pub const SOURCE_NOTE: &str =
    "visaindex.com, Sri Lanka passport visa-free countries list, 1 April 2025";

// Entries are kept exactly as published, typos included.

pub const VISA_FREE: &[&str] = &[
    "Bahamas", "Barbados", "British Virgin Islands", "Cook Islands", "Dominica",
    "Gambia", "Grenada", "Haiti", "Kiribati", "Lesotho", "Malawi",
    "Micronesia", "Montserrat", "Rwanda", "Singapore", "St. Kitts and Nevis",
    "St. Vincent and the Grenadines", "Tajikistan", "Thailand", "Vanuatu", "Sri Lanka",
];

pub const VISA_ON_ARRIVAL: &[&str] = &[
    "Bolivia", "Burundi", "Camnodia", "Cape Verde", "Comoros",
    "Djibouti", "Guinea-Bissau", "Laos", "Madagascar", "Maldives", "Mauritius",
    "Nepal", "Niue", "Palau", "Samoa", "Seychelles", "Sierra Leone",
    "Tanzania", "Timor-Leste", "Tuvalu",
];

pub const E_VISA: &[&str] = &[
    "Kenya", "Pakistan", "Albania", "Antigua and Barbuda", "Australia",
    "Azerbaijan", "Bahrain", "Benin", "Bhutan", "Botswana", "Burkina Faso",
    "Cameroon", "Colombia", "Congo, Democratic Republic of the",
    "Côte d'Ivoire", "Ecuador", "El Salvador", "Equatorial Guinea",
    "Ethiopia", "Fiji", "Gabon", "Guinea", "Hong Kong", "India", "Indonesia",
    "Iran", "Iraq", "Kazakhstan", "Kyrgyzstan", "Libya",
    "Malaysia", "Mauritania", "Moldova", "Mozambique",
    "Myanmar", "Namibia", "Nigeria", "Oman",
    "Qatar", "Sao Tome and Principe", "South Sudan", "St. Helena", "Suriname",
    "Syria", "Togo", "Uganda", "United Arab Emirates", "Uzbekistan",
    "Vietnam", "Zambia", "Zimbabwe",
];

/// The three curated category lists. This is also the on-disk cache format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisaLists {
    pub visa_free: Vec<String>,
    pub visa_on_arrival: Vec<String>,
    pub e_visa: Vec<String>,
}

impl VisaLists {
    /// Lists compiled into the binary
    pub fn embedded() -> Self {
        let own = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            visa_free: own(VISA_FREE),
            visa_on_arrival: own(VISA_ON_ARRIVAL),
            e_visa: own(E_VISA),
        }
    }

    /// Entries for a category; the fallback category has none
    pub fn entries(&self, category: VisaCategory) -> &[String] {
        match category {
            VisaCategory::VisaFree => &self.visa_free,
            VisaCategory::VisaOnArrival => &self.visa_on_arrival,
            VisaCategory::EVisa => &self.e_visa,
            VisaCategory::VisaRequired => &[],
        }
    }

    /// Entries sorted alphabetically, as shown in the country lists
    pub fn sorted(&self, category: VisaCategory) -> Vec<String> {
        let mut entries = self.entries(category).to_vec();
        entries.sort();
        entries
    }

    pub fn is_empty(&self) -> bool {
        self.visa_free.is_empty() && self.visa_on_arrival.is_empty() && self.e_visa.is_empty()
    }

    pub fn total(&self) -> usize {
        self.visa_free.len() + self.visa_on_arrival.len() + self.e_visa.len()
    }
}
